//! Application state
//!
//! Immutable reference data and its derived index, built once at startup
//! and shared read-only across handler tasks.

use crate::core::{EquivalencyIndex, ReferenceData};

#[derive(Debug)]
pub struct AppState {
    pub reference: ReferenceData,
    pub index: EquivalencyIndex,
    /// Relaxes the CORS layer for local frontend development.
    pub debug: bool,
}

impl AppState {
    pub fn new(reference: ReferenceData, debug: bool) -> Self {
        let index = EquivalencyIndex::build(reference.equivalencies());
        Self { reference, index, debug }
    }
}
