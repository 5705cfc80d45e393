use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived per-(user, course) summary row. Never authored directly:
/// recomputed from progress records whenever one of them changes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseEnrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub progress: i32,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
