pub mod calendar;
pub mod history;
pub mod snapshot;
