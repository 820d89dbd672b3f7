//! Reference dataset fixtures for integration tests

use serde_json::{Value, json};

/// The standard test datasets: two states, a handful of institutions, one
/// articulated course and its OSU metadata.
pub fn default_datasets() -> Vec<(&'static str, Value)> {
    vec![
        (
            "states.json",
            json!([
                { "name": "New York", "abbr": "NY" },
                { "name": "Ohio", "abbr": "OH" },
            ]),
        ),
        (
            "institutions.json",
            json!([
                { "name": "Binghamton University (SUNY)", "state": "NY" },
                { "name": "University at Buffalo (SUNY)", "state": "NY" },
                { "name": "Columbus State Community College", "state": "OH" },
            ]),
        ),
        (
            "equivalencies.json",
            json!([
                {
                    "institution": "Binghamton University (SUNY)",
                    "course_code": "CHEM 107",
                    "osu_equivalent": ["CHEM 1210", "FAKE 999"],
                    "notes": "lab component required"
                }
            ]),
        ),
        (
            "degrees.json",
            json!({
                "BA_Chem": { "name": "B.A. Chemistry" },
                "BS_Chem": { "name": "B.S. Chemistry" },
            }),
        ),
        (
            "osucourses.json",
            json!([
                {
                    "subject_code": "CHEM",
                    "course_number": "1210",
                    "title": "General Chemistry I",
                    "credits": 5
                }
            ]),
        ),
    ]
}

/// Datasets with `count` institutions in New York, for the result cap test.
pub fn datasets_with_many_ny_institutions(count: usize) -> Vec<(&'static str, Value)> {
    let mut datasets = default_datasets();
    let institutions: Vec<Value> = (0..count)
        .map(|i| json!({ "name": format!("New York College {i}"), "state": "NY" }))
        .collect();
    for entry in &mut datasets {
        if entry.0 == "institutions.json" {
            entry.1 = Value::Array(institutions);
            break;
        }
    }
    datasets
}

/// A valid evaluate payload matching the default equivalency fixture.
pub fn valid_evaluate_payload() -> Value {
    json!({
        "institution": "Binghamton University (SUNY)",
        "course_code": "CHEM 107",
        "degree": "BA_Chem",
        "state": "NY"
    })
}

/// A valid review payload for a course with no equivalency.
pub fn valid_review_payload() -> Value {
    json!({
        "institution": "University at Buffalo (SUNY)",
        "state": "NY",
        "course_code": "CHEM 201",
        "degree": "BS_Chem"
    })
}
