//! Durable review queue
//!
//! Persists queued review requests as one JSON array file. The on-disk
//! format matches what external tooling already reads, so appends are a
//! read-modify-write of the whole array. All file access goes through this
//! service and the sequence is serialized behind a single async lock, which
//! closes the lost-update race between concurrent submissions.
//!
//! A missing file is an empty queue; a file whose content is not a JSON
//! array is treated the same way and silently reset on the next append.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::AppResult;
use crate::traits::ReviewQueue;
use crate::types::ReviewEntry;

#[derive(Debug)]
pub struct RealReviewQueue {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RealReviewQueue {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the current queue, tolerating corruption by reset.
    ///
    /// Entries written by earlier versions or other tools are kept as raw
    /// JSON values rather than forced through [`ReviewEntry`].
    async fn read_queue(&self) -> Vec<Value> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            _ => {
                warn!(path = %self.path.display(), "review queue file is not a JSON array, resetting");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl ReviewQueue for RealReviewQueue {
    async fn submit(&self, entry: ReviewEntry) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut queue = self.read_queue().await;
        queue.push(serde_json::to_value(&entry)?);

        let raw = serde_json::to_string_pretty(&Value::Array(queue))?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}
