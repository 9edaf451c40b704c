// Domain layer: facility records, filter/render values and the ports the core talks to.

pub mod model;
pub mod ports;
