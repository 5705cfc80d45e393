use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::activity::{ActivityContent, ActivityStatus};
use crate::models::domain::course::CourseStatus;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 20))]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(length(max = 20))]
    pub level: Option<String>,

    pub status: Option<CourseStatus>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[validate(length(min = 1))]
    pub course_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub order_index: i32,

    pub status: Option<ActivityStatus>,

    pub content: ActivityContent,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateActivityRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub order_index: Option<i32>,

    pub status: Option<ActivityStatus>,

    pub content: Option<ActivityContent>,
}

/// Admin drag-to-reorder: the full ordered list of a course's activity ids.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReorderActivitiesRequest {
    #[validate(length(min = 1))]
    pub activity_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVocabularyRequest {
    pub course_id: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub term: String,

    #[validate(length(min = 1, max = 1000))]
    pub definition: String,

    #[validate(length(max = 1000))]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVocabularyRequest {
    #[validate(length(min = 1, max = 100))]
    pub term: Option<String>,

    #[validate(length(min = 1, max = 1000))]
    pub definition: Option<String>,

    #[validate(length(max = 1000))]
    pub example: Option<String>,
}

/// One learner submission for one activity.
///
/// `time_spent` is the delta in minutes since the previous save for this
/// activity, not a running total; the recorder always adds it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveProgressRequest {
    #[validate(length(min = 1))]
    pub user_id: String,

    #[validate(length(min = 1))]
    pub activity_id: String,

    pub completed: bool,

    #[validate(range(min = 0))]
    pub time_spent: i64,

    pub answers: ActivitySubmission,
}

/// Submitted answers, shaped per activity family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivitySubmission {
    /// Choice-based activities: selected option text keyed by question index.
    Choices { selected: HashMap<usize, String> },
    /// Fill-in-the-blank: blank values keyed by sentence index, one entry
    /// per blank in sentence order.
    Blanks { filled: HashMap<usize, Vec<String>> },
    /// Pairing activities: assigned match pair-id keyed by term pair-id.
    Pairs { assigned: HashMap<String, String> },
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ActivityListParams {
    /// When true, only published activities are returned.
    pub published: Option<bool>,
}
