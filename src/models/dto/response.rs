use serde::Serialize;

use crate::models::domain::{CourseEnrollment, ProgressRecord};
use crate::services::evaluation_service::ItemResult;

/// Result of a learner submission: the evaluated score, per-item
/// correctness, and the stored record after the upsert.
#[derive(Debug, Serialize)]
pub struct SaveProgressResponse {
    pub success: bool,
    pub score: i32,
    pub items: Vec<ItemResult>,
    pub record: ProgressRecord,
}

#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Per-activity slice of a learner's course summary.
#[derive(Debug, Serialize)]
pub struct ActivityProgressDto {
    pub activity_id: String,
    pub title: String,
    pub order_index: i32,
    pub kind: String,
    pub completed: bool,
    pub score: i32,
    pub time_spent: i64,
}

/// The data behind the learner analytics view: the rollup row (when one
/// exists) plus each published activity with any recorded progress.
#[derive(Debug, Serialize)]
pub struct CourseProgressSummary {
    pub user_id: String,
    pub course_id: String,
    pub enrollment: Option<CourseEnrollment>,
    pub activities: Vec<ActivityProgressDto>,
}
