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
    models::domain::CourseEnrollment,
};

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Insert-or-update the single summary row for (user_id, course_id)
    /// with freshly computed aggregates, stamping `updated_at`.
    async fn upsert(
        &self,
        user_id: &str,
        course_id: &str,
        progress: i32,
        score: i32,
    ) -> AppResult<CourseEnrollment>;
    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<CourseEnrollment>>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<CourseEnrollment>>;
}

pub struct MongoEnrollmentRepository {
    collection: Collection<CourseEnrollment>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_courses");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_courses collection");

        let user_course_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_course_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_course_index).await?;

        log::info!("Successfully created indexes for user_courses collection");
        Ok(())
    }
}

#[async_trait]
impl EnrollmentRepository for MongoEnrollmentRepository {
    async fn upsert(
        &self,
        user_id: &str,
        course_id: &str,
        progress: i32,
        score: i32,
    ) -> AppResult<CourseEnrollment> {
        let now = Utc::now().to_rfc3339();

        let update = doc! {
            "$set": {
                "progress": progress,
                "score": score,
                "updated_at": &now,
            },
            "$setOnInsert": {
                "id": Uuid::new_v4().to_string(),
                "user_id": user_id,
                "course_id": course_id,
                "created_at": &now,
            },
        };

        let enrollment = self
            .collection
            .find_one_and_update(doc! { "user_id": user_id, "course_id": course_id }, update)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError("Enrollment upsert returned no document".to_string())
            })?;

        Ok(enrollment)
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<CourseEnrollment>> {
        let enrollment = self
            .collection
            .find_one(doc! { "user_id": user_id, "course_id": course_id })
            .await?;
        Ok(enrollment)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<CourseEnrollment>> {
        use futures::TryStreamExt;

        let enrollments = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "updated_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(enrollments)
    }
}
