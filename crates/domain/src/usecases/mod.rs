//! Application use cases / business logic

pub mod publish_run;
pub mod select;

pub use publish_run::{PublishRun, RunConfig, RunError};
pub use select::select_for_date;
