use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's durable record for one activity. Upsert key is
/// (user_id, activity_id); `time_spent` only ever accumulates.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProgressRecord {
    pub id: String,
    pub user_id: String,
    pub activity_id: String,
    pub course_id: String,
    pub completed: bool,
    pub score: i32,
    pub answers: String,
    pub time_spent: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
