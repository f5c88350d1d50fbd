use serde::Serialize;
use sqlx::FromRow;

/// The only feed_type this tooling ever writes.
pub const FEED_TYPE_POST: &str = "post";

// Database entity models
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ColdstartEntry {
    pub feed_id: String,
    pub feed_type: String,
    pub position: i32,
}
