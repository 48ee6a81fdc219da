pub mod history;
pub mod moves;
pub mod snapshot;

mod macros;
