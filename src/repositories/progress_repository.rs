use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::ProgressRecord,
};

/// Fields written by one submission. Grading fields overwrite the stored
/// record; `time_spent` is a delta that is always added.
#[derive(Debug, Clone)]
pub struct ProgressUpsert {
    pub user_id: String,
    pub activity_id: String,
    pub course_id: String,
    pub completed: bool,
    pub score: i32,
    pub answers: String,
    pub time_spent: i64,
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Insert-or-update the single record for (user_id, activity_id) in one
    /// atomic store operation, and return the record as stored afterwards.
    async fn upsert(&self, submission: ProgressUpsert) -> AppResult<ProgressRecord>;
    async fn find_by_user_and_activity(
        &self,
        user_id: &str,
        activity_id: &str,
    ) -> AppResult<Option<ProgressRecord>>;
    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<ProgressRecord>>;
    async fn find_completed_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<ProgressRecord>>;
}

pub struct MongoProgressRepository {
    collection: Collection<ProgressRecord>,
}

impl MongoProgressRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_progress");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_progress collection");

        let user_activity_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "activity_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_activity_unique".to_string())
                    .build(),
            )
            .build();

        let user_course_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_course".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_activity_index).await?;
        self.collection.create_index(user_course_index).await?;

        log::info!("Successfully created indexes for user_progress collection");
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for MongoProgressRepository {
    async fn upsert(&self, submission: ProgressUpsert) -> AppResult<ProgressRecord> {
        let now = Utc::now().to_rfc3339();

        // $inc keeps time accumulation atomic under concurrent submissions
        // for the same (user, activity); the unique index guarantees a
        // single record per key.
        let update = doc! {
            "$set": {
                "course_id": &submission.course_id,
                "completed": submission.completed,
                "score": submission.score,
                "answers": &submission.answers,
                "updated_at": &now,
            },
            "$inc": { "time_spent": submission.time_spent },
            "$setOnInsert": {
                "id": Uuid::new_v4().to_string(),
                "user_id": &submission.user_id,
                "activity_id": &submission.activity_id,
                "created_at": &now,
            },
        };

        let record = self
            .collection
            .find_one_and_update(
                doc! {
                    "user_id": &submission.user_id,
                    "activity_id": &submission.activity_id,
                },
                update,
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError("Progress upsert returned no document".to_string())
            })?;

        Ok(record)
    }

    async fn find_by_user_and_activity(
        &self,
        user_id: &str,
        activity_id: &str,
    ) -> AppResult<Option<ProgressRecord>> {
        let record = self
            .collection
            .find_one(doc! { "user_id": user_id, "activity_id": activity_id })
            .await?;
        Ok(record)
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<ProgressRecord>> {
        use futures::TryStreamExt;

        let records = self
            .collection
            .find(doc! { "user_id": user_id, "course_id": course_id })
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }

    async fn find_completed_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<ProgressRecord>> {
        use futures::TryStreamExt;

        let records = self
            .collection
            .find(doc! {
                "user_id": user_id,
                "course_id": course_id,
                "completed": true,
            })
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }
}
