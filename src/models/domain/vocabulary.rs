use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VocabularyTerm {
    pub id: String,
    pub course_id: Option<String>,
    pub term: String,
    pub definition: String,
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl VocabularyTerm {
    pub fn new(
        course_id: Option<String>,
        term: &str,
        definition: &str,
        example: Option<String>,
    ) -> Self {
        VocabularyTerm {
            id: Uuid::new_v4().to_string(),
            course_id,
            term: term.to_string(),
            definition: definition.to_string(),
            example,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}
