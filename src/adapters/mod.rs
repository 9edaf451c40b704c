// Adapters layer: concrete implementations of the domain ports (http source, terminal view).

pub mod http;
pub mod terminal;
