//! post-courier domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Domain entities and value objects
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: Application use cases / business logic

pub mod model;
pub mod ports;
pub mod usecases;

pub use model::*;
pub use ports::*;

use time::OffsetDateTime;
use time::macros::format_description;

/// Format a timestamp as the ISO calendar date string used by queue entries
pub fn iso_date(ts: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    ts.date().format(&format).expect("Static date format")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn iso_date_matches_queue_entry_format() {
        assert_eq!(iso_date(datetime!(2024-01-09 23:59 UTC)), "2024-01-09");
    }
}
