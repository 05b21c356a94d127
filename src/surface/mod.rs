//! Render surface abstraction
//!
//! The controller's only window onto the page: a trait for structure
//! queries and batched mutations, shared id/mode types, and a mock
//! implementation for tests.

pub mod mock;
pub mod traits;
pub mod types;

pub use mock::{MockSurface, SurfaceOp};
pub use traits::RenderSurface;
pub use types::{ContainerId, EntryId, SectionId, SummaryCard, SummaryPanel, ViewMode};
