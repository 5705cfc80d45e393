use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::VocabularyTerm,
};

#[async_trait]
pub trait VocabularyRepository: Send + Sync {
    async fn create(&self, term: VocabularyTerm) -> AppResult<VocabularyTerm>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<VocabularyTerm>>;
    async fn list(
        &self,
        course_id: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<VocabularyTerm>, i64)>;
    async fn update(&self, term: VocabularyTerm) -> AppResult<VocabularyTerm>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoVocabularyRepository {
    collection: Collection<VocabularyTerm>,
}

impl MongoVocabularyRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("vocabulary");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for vocabulary collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let course_index = IndexModel::builder()
            .keys(doc! { "course_id": 1 })
            .options(IndexOptions::builder().name("course_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(course_index).await?;

        log::info!("Successfully created indexes for vocabulary collection");
        Ok(())
    }
}

#[async_trait]
impl VocabularyRepository for MongoVocabularyRepository {
    async fn create(&self, term: VocabularyTerm) -> AppResult<VocabularyTerm> {
        self.collection.insert_one(&term).await?;
        Ok(term)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<VocabularyTerm>> {
        let term = self.collection.find_one(doc! { "id": id }).await?;
        Ok(term)
    }

    async fn list(
        &self,
        course_id: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<VocabularyTerm>, i64)> {
        use futures::TryStreamExt;

        let mut filter = doc! {};
        if let Some(cid) = course_id {
            filter.insert("course_id", cid);
        }

        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let cursor = self
            .collection
            .find(filter)
            .skip(offset as u64)
            .limit(limit)
            .sort(doc! { "term": 1 })
            .await?;
        let items: Vec<VocabularyTerm> = cursor.try_collect().await?;

        Ok((items, total))
    }

    async fn update(&self, term: VocabularyTerm) -> AppResult<VocabularyTerm> {
        let result = self
            .collection
            .replace_one(doc! { "id": &term.id }, &term)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Vocabulary term with id '{}' not found",
                term.id
            )));
        }

        Ok(term)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Vocabulary term with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
