use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::VocabularyTerm,
    models::dto::request::{CreateVocabularyRequest, UpdateVocabularyRequest},
    repositories::VocabularyRepository,
};

pub struct VocabularyService {
    repository: Arc<dyn VocabularyRepository>,
}

impl VocabularyService {
    pub fn new(repository: Arc<dyn VocabularyRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_term(&self, request: CreateVocabularyRequest) -> AppResult<VocabularyTerm> {
        request.validate()?;

        let term = VocabularyTerm::new(
            request.course_id,
            &request.term,
            &request.definition,
            request.example,
        );
        self.repository.create(term).await
    }

    pub async fn get_term(&self, id: &str) -> AppResult<VocabularyTerm> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vocabulary term with id '{}' not found", id)))
    }

    pub async fn list_terms(
        &self,
        course_id: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<VocabularyTerm>, i64)> {
        self.repository.list(course_id, offset, limit).await
    }

    pub async fn update_term(
        &self,
        id: &str,
        request: UpdateVocabularyRequest,
    ) -> AppResult<VocabularyTerm> {
        request.validate()?;

        let mut term = self.get_term(id).await?;

        if let Some(value) = request.term {
            term.term = value;
        }
        if let Some(definition) = request.definition {
            term.definition = definition;
        }
        if let Some(example) = request.example {
            term.example = Some(example);
        }
        term.modified_at = Some(Utc::now());

        self.repository.update(term).await
    }

    pub async fn delete_term(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
