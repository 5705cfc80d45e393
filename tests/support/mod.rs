use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use lingua_server::{
    errors::{AppError, AppResult},
    models::domain::{Activity, CourseEnrollment, ProgressRecord},
    repositories::{
        ActivityRepository, EnrollmentRepository, ProgressRepository, ProgressUpsert,
    },
};

#[derive(Default)]
pub struct InMemoryActivityRepository {
    activities: Arc<RwLock<HashMap<String, Activity>>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, activities: Vec<Activity>) {
        let mut store = self.activities.write().await;
        for activity in activities {
            store.insert(activity.id.clone(), activity);
        }
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn create(&self, activity: Activity) -> AppResult<Activity> {
        let mut activities = self.activities.write().await;
        if activities.contains_key(&activity.id) {
            return Err(AppError::AlreadyExists(format!(
                "Activity with id '{}' already exists",
                activity.id
            )));
        }
        activities.insert(activity.id.clone(), activity.clone());
        Ok(activity)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Activity>> {
        let activities = self.activities.read().await;
        Ok(activities.get(id).cloned())
    }

    async fn find_by_course(&self, course_id: &str) -> AppResult<Vec<Activity>> {
        let activities = self.activities.read().await;
        let mut items: Vec<_> = activities
            .values()
            .filter(|a| a.course_id == course_id)
            .cloned()
            .collect();
        items.sort_by_key(|a| a.order_index);
        Ok(items)
    }

    async fn find_published_by_course(&self, course_id: &str) -> AppResult<Vec<Activity>> {
        let items = self.find_by_course(course_id).await?;
        Ok(items.into_iter().filter(|a| a.is_published()).collect())
    }

    async fn update(&self, activity: Activity) -> AppResult<Activity> {
        let mut activities = self.activities.write().await;
        if !activities.contains_key(&activity.id) {
            return Err(AppError::NotFound(format!(
                "Activity with id '{}' not found",
                activity.id
            )));
        }
        activities.insert(activity.id.clone(), activity.clone());
        Ok(activity)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut activities = self.activities.write().await;
        if activities.remove(id).is_none() {
            return Err(AppError::NotFound(format!(
                "Activity with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    async fn set_order_index(&self, id: &str, order_index: i32) -> AppResult<()> {
        let mut activities = self.activities.write().await;
        let activity = activities.get_mut(id).ok_or_else(|| {
            AppError::NotFound(format!("Activity with id '{}' not found", id))
        })?;
        activity.order_index = order_index;
        activity.modified_at = Some(Utc::now());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProgressRepository {
    records: Arc<RwLock<HashMap<(String, String), ProgressRecord>>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressRepository {
    async fn upsert(&self, submission: ProgressUpsert) -> AppResult<ProgressRecord> {
        let mut records = self.records.write().await;
        let key = (submission.user_id.clone(), submission.activity_id.clone());

        let record = match records.get(&key) {
            Some(existing) => ProgressRecord {
                id: existing.id.clone(),
                user_id: submission.user_id,
                activity_id: submission.activity_id,
                course_id: submission.course_id,
                completed: submission.completed,
                score: submission.score,
                answers: submission.answers,
                time_spent: existing.time_spent + submission.time_spent,
                created_at: existing.created_at,
                updated_at: Some(Utc::now()),
            },
            None => ProgressRecord {
                id: Uuid::new_v4().to_string(),
                user_id: submission.user_id,
                activity_id: submission.activity_id,
                course_id: submission.course_id,
                completed: submission.completed,
                score: submission.score,
                answers: submission.answers,
                time_spent: submission.time_spent,
                created_at: Some(Utc::now()),
                updated_at: Some(Utc::now()),
            },
        };

        records.insert(key, record.clone());
        Ok(record)
    }

    async fn find_by_user_and_activity(
        &self,
        user_id: &str,
        activity_id: &str,
    ) -> AppResult<Option<ProgressRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&(user_id.to_string(), activity_id.to_string()))
            .cloned())
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<ProgressRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_id == user_id && r.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn find_completed_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<ProgressRecord>> {
        let records = self.find_by_user_and_course(user_id, course_id).await?;
        Ok(records.into_iter().filter(|r| r.completed).collect())
    }
}

#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    rows: Arc<RwLock<HashMap<(String, String), CourseEnrollment>>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn upsert(
        &self,
        user_id: &str,
        course_id: &str,
        progress: i32,
        score: i32,
    ) -> AppResult<CourseEnrollment> {
        let mut rows = self.rows.write().await;
        let key = (user_id.to_string(), course_id.to_string());

        let enrollment = match rows.get(&key) {
            Some(existing) => CourseEnrollment {
                id: existing.id.clone(),
                user_id: user_id.to_string(),
                course_id: course_id.to_string(),
                progress,
                score,
                created_at: existing.created_at,
                updated_at: Some(Utc::now()),
            },
            None => CourseEnrollment {
                id: Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                course_id: course_id.to_string(),
                progress,
                score,
                created_at: Some(Utc::now()),
                updated_at: Some(Utc::now()),
            },
        };

        rows.insert(key, enrollment.clone());
        Ok(enrollment)
    }

    async fn find_by_user_and_course(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<CourseEnrollment>> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&(user_id.to_string(), course_id.to_string()))
            .cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<CourseEnrollment>> {
        let rows = self.rows.read().await;
        let mut items: Vec<_> = rows
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        Ok(items)
    }
}
