//! Tests for the durable review queue

use std::sync::Arc;

use serde_json::Value;
use tempfile::TempDir;

use super::fixtures::create_test_review_entry;
use crate::services::RealReviewQueue;
use crate::traits::ReviewQueue;
use crate::types::ReviewEntry;

fn queue_in(dir: &TempDir) -> RealReviewQueue {
    RealReviewQueue::new(dir.path().join("pending_reviews.json"))
}

async fn read_entries(dir: &TempDir) -> Vec<ReviewEntry> {
    let raw = tokio::fs::read_to_string(dir.path().join("pending_reviews.json"))
        .await
        .expect("queue file should exist after submit");
    serde_json::from_str(&raw).expect("queue file should be a JSON array of entries")
}

#[tokio::test]
async fn test_submit_creates_file_with_one_entry() {
    let dir = tempfile::tempdir().unwrap();
    let queue = queue_in(&dir);

    queue.submit(create_test_review_entry("Binghamton University (SUNY)")).await.unwrap();

    let entries = read_entries(&dir).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].institution, "Binghamton University (SUNY)");
}

#[tokio::test]
async fn test_submissions_append_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let queue = queue_in(&dir);

    queue.submit(create_test_review_entry("First College")).await.unwrap();
    queue.submit(create_test_review_entry("Second College")).await.unwrap();

    let entries = read_entries(&dir).await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].institution, "First College");
    assert_eq!(entries[1].institution, "Second College");
}

#[tokio::test]
async fn test_corrupted_file_is_reset_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pending_reviews.json");
    tokio::fs::write(&path, "{ this is not json").await.unwrap();

    let queue = queue_in(&dir);
    queue.submit(create_test_review_entry("Some College")).await.unwrap();

    let entries = read_entries(&dir).await;
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_non_array_content_is_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pending_reviews.json");
    tokio::fs::write(&path, r#"{"not": "an array"}"#).await.unwrap();

    let queue = queue_in(&dir);
    queue.submit(create_test_review_entry("Some College")).await.unwrap();

    let entries = read_entries(&dir).await;
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn test_foreign_entries_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pending_reviews.json");
    // An entry written by other tooling, with a shape we do not control.
    tokio::fs::write(&path, r#"[{"legacy": true}]"#).await.unwrap();

    let queue = queue_in(&dir);
    queue.submit(create_test_review_entry("Some College")).await.unwrap();

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let values: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["legacy"], Value::Bool(true));
    assert_eq!(values[1]["institution"], "Some College");
}

#[tokio::test]
async fn test_concurrent_submissions_lose_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let queue = Arc::new(queue_in(&dir));

    let mut handles = Vec::new();
    for i in 0..10 {
        let queue = queue.clone();
        handles.push(tokio::spawn(async move {
            queue.submit(create_test_review_entry(&format!("College {i}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let entries = read_entries(&dir).await;
    assert_eq!(entries.len(), 10);
}

#[tokio::test]
async fn test_submit_fails_when_directory_missing() {
    let dir = tempfile::tempdir().unwrap();
    let queue = RealReviewQueue::new(dir.path().join("missing").join("pending_reviews.json"));

    let result = queue.submit(create_test_review_entry("Some College")).await;
    assert!(result.is_err());
}
