//! Domain and wire types shared across the service
//!
//! The reference datasets ship as loosely structured JSON; the fields the
//! service actually reads are typed here and everything else is carried
//! through untouched via `#[serde(flatten)]`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A US state as shipped in `states.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRecord {
    pub name: String,
    pub abbr: String,
}

/// A transferring institution as shipped in `institutions.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    #[serde(default)]
    pub state: String,
}

/// One articulation record from `equivalencies.json`.
///
/// Immutable after load. Keyed in the index by the normalized
/// (institution, course_code) pair; `osu_equivalent` lists course keys in
/// the `"{subject_code} {course_number}"` format of [`CourseMeta::key`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquivalencyRecord {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub course_code: String,
    #[serde(default)]
    pub osu_equivalent: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display metadata for a degree id from `degrees.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeInfo {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One OSU course from `osucourses.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMeta {
    pub subject_code: String,
    pub course_number: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CourseMeta {
    /// Lookup key used by equivalency records, e.g. `"CHEM 1210"`.
    pub fn key(&self) -> String {
        format!("{} {}", self.subject_code, self.course_number)
    }
}

/// A queued manual-review request, appended to the pending-reviews file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub institution: String,
    pub state: String,
    pub course_code: String,
    pub degree: String,
    /// ISO-8601 UTC submission time.
    pub submitted_at: String,
    pub ip: String,
}

/// Request body for `POST /api/evaluate`.
///
/// All fields optional at the wire level so validation can report every
/// missing field at once instead of failing on deserialization.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Request body for `POST /api/request-review`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
}

/// Outcome of a rate-limiter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after_secs: u64 },
}
