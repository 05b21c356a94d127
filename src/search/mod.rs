//! Search and filter pipeline for the staff directory
//!
//! [`controller::DirectoryController`] ties the pieces together:
//! [`query`] normalizes and gates raw input, [`filter`] partitions
//! container entries, [`sections`] reorders the page's sections,
//! [`summary`] builds the results panel, and [`debounce`] spaces out
//! live keystrokes.

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod query;
pub mod sections;
pub mod summary;

pub use controller::{DirectoryController, InputKey, SearchOptions};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use filter::{FilterOutcome, partition_entries};
pub use query::{MIN_QUERY_CHARS, QueryState, normalize};
pub use summary::{build_panel, escape_markup};
