//! CLI command handlers. Each command is in its own file.

mod completions;
mod load;
mod number;
mod protocols;
mod range;
mod request;

pub use completions::{run_completions, run_man};
pub use load::run_load;
pub use number::{run_number, NumberKind};
pub use protocols::run_protocols;
pub use range::run_range;
pub use request::run_request;
