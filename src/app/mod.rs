pub mod session;

pub use session::{parse_command, run_session, Command, Toggle};
