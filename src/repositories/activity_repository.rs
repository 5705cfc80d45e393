use async_trait::async_trait;
use chrono::Utc;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Activity, ActivityStatus},
};

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn create(&self, activity: Activity) -> AppResult<Activity>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Activity>>;
    /// All activities of a course, ordered by `order_index`.
    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Activity>>;
    /// Published activities of a course, ordered by `order_index`. This is
    /// the set every progress aggregate is computed over.
    async fn find_published_by_course(&self, course_id: &str) -> AppResult<Vec<Activity>>;
    async fn update(&self, activity: Activity) -> AppResult<Activity>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn set_order_index(&self, id: &str, order_index: i32) -> AppResult<()>;
}

pub struct MongoActivityRepository {
    collection: Collection<Activity>,
}

impl MongoActivityRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("activities");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for activities collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let course_order_index = IndexModel::builder()
            .keys(doc! { "course_id": 1, "order_index": 1 })
            .options(
                IndexOptions::builder()
                    .name("course_order".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(course_order_index).await?;

        log::info!("Successfully created indexes for activities collection");
        Ok(())
    }
}

#[async_trait]
impl ActivityRepository for MongoActivityRepository {
    async fn create(&self, activity: Activity) -> AppResult<Activity> {
        self.collection.insert_one(&activity).await?;
        Ok(activity)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Activity>> {
        let activity = self.collection.find_one(doc! { "id": id }).await?;
        Ok(activity)
    }

    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Activity>> {
        use futures::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! { "course_id": course_id })
            .sort(doc! { "order_index": 1 })
            .await?;
        let items: Vec<Activity> = cursor.try_collect().await?;

        Ok(items)
    }

    async fn find_published_by_course(&self, course_id: &str) -> AppResult<Vec<Activity>> {
        use futures::TryStreamExt;

        let filter = doc! {
            "course_id": course_id,
            "status": ActivityStatus::Published.as_str(),
        };

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "order_index": 1 })
            .await?;
        let items: Vec<Activity> = cursor.try_collect().await?;

        Ok(items)
    }

    async fn update(&self, activity: Activity) -> AppResult<Activity> {
        let result = self
            .collection
            .replace_one(doc! { "id": &activity.id }, &activity)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Activity with id '{}' not found",
                activity.id
            )));
        }

        Ok(activity)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Activity with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn set_order_index(&self, id: &str, order_index: i32) -> AppResult<()> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": {
                    "order_index": order_index,
                    "modified_at": Utc::now().to_rfc3339(),
                } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Activity with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
