//! Core business logic
//!
//! Pure, read-only lookup structures built once at startup.

pub mod index;
pub mod reference;

pub use index::EquivalencyIndex;
pub use reference::ReferenceData;
