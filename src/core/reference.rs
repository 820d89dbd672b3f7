//! Reference data store
//!
//! Loads the five static datasets from the configured data directory at
//! process start and derives two secondary indexes: the set of valid state
//! abbreviations and the course-key -> course-metadata map. Everything here
//! is immutable after load; a missing or malformed file is fatal so the
//! process never serves traffic with partial data.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::types::{CourseMeta, DegreeInfo, EquivalencyRecord, Institution, StateRecord};

#[derive(Debug)]
pub struct ReferenceData {
    states: Vec<StateRecord>,
    institutions: Vec<Institution>,
    equivalencies: Vec<EquivalencyRecord>,
    degrees: HashMap<String, DegreeInfo>,
    state_abbreviations: HashSet<String>,
    course_meta: HashMap<String, CourseMeta>,
}

impl ReferenceData {
    /// Load all datasets from `dir`, failing fast on the first problem.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let states = load_dataset(dir, "states.json")?;
        let institutions = load_dataset(dir, "institutions.json")?;
        let equivalencies = load_dataset(dir, "equivalencies.json")?;
        let degrees = load_dataset(dir, "degrees.json")?;
        let osu_courses = load_dataset(dir, "osucourses.json")?;
        Ok(Self::from_parts(states, institutions, equivalencies, degrees, osu_courses))
    }

    /// Assemble the store from already-parsed datasets.
    ///
    /// Used by tests to swap datasets without touching the filesystem.
    pub fn from_parts(
        states: Vec<StateRecord>,
        institutions: Vec<Institution>,
        equivalencies: Vec<EquivalencyRecord>,
        degrees: HashMap<String, DegreeInfo>,
        osu_courses: Vec<CourseMeta>,
    ) -> Self {
        let state_abbreviations = states.iter().map(|s| s.abbr.to_uppercase()).collect();
        let course_meta = osu_courses.into_iter().map(|c| (c.key(), c)).collect();

        Self {
            states,
            institutions,
            equivalencies,
            degrees,
            state_abbreviations,
            course_meta,
        }
    }

    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn equivalencies(&self) -> &[EquivalencyRecord] {
        &self.equivalencies
    }

    /// Whether `abbr` (already uppercased by the caller) is a known state.
    pub fn is_valid_state(&self, abbr: &str) -> bool {
        self.state_abbreviations.contains(abbr)
    }

    /// Resolve a degree id to its display name; unknown ids pass through.
    pub fn degree_name(&self, id: &str) -> String {
        self.degrees
            .get(id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn course_meta(&self, key: &str) -> Option<&CourseMeta> {
        self.course_meta.get(key)
    }
}

fn load_dataset<T: DeserializeOwned>(dir: &Path, name: &str) -> AppResult<T> {
    let path = dir.join(name);
    let raw = fs::read_to_string(&path).map_err(|e| AppError::DataLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| AppError::DataLoad {
        path,
        message: e.to_string(),
    })
}
