use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Activity, ActivityStatus},
    models::dto::request::{
        CreateActivityRequest, ReorderActivitiesRequest, UpdateActivityRequest,
    },
    repositories::ActivityRepository,
};

pub struct ActivityService {
    repository: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_activity(&self, request: CreateActivityRequest) -> AppResult<Activity> {
        request.validate()?;

        let activity = Activity::new(
            &request.course_id,
            &request.title,
            request.order_index,
            request.status.unwrap_or(ActivityStatus::Draft),
            request.content,
        );
        self.repository.create(activity).await
    }

    pub async fn get_activity(&self, id: &str) -> AppResult<Activity> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity with id '{}' not found", id)))
    }

    /// A course's activities in lesson order. With `published_only` this is
    /// the learner-facing list; without, the admin one.
    pub async fn list_by_course(
        &self,
        course_id: &str,
        published_only: bool,
    ) -> AppResult<Vec<Activity>> {
        if published_only {
            self.repository.find_published_by_course(course_id).await
        } else {
            self.repository.find_by_course(course_id).await
        }
    }

    pub async fn update_activity(
        &self,
        id: &str,
        request: UpdateActivityRequest,
    ) -> AppResult<Activity> {
        request.validate()?;

        let mut activity = self.get_activity(id).await?;

        if let Some(title) = request.title {
            activity.title = title;
        }
        if let Some(order_index) = request.order_index {
            activity.order_index = order_index;
        }
        if let Some(status) = request.status {
            activity.status = status;
        }
        if let Some(content) = request.content {
            activity.content = content;
        }
        activity.modified_at = Some(Utc::now());

        self.repository.update(activity).await
    }

    pub async fn delete_activity(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    /// Rewrite `order_index` for a course so it matches the submitted id
    /// order. Every id must belong to the course; a stray id aborts the
    /// whole reorder before any index is written.
    pub async fn reorder_activities(
        &self,
        course_id: &str,
        request: ReorderActivitiesRequest,
    ) -> AppResult<()> {
        request.validate()?;

        let existing = self.repository.find_by_course(course_id).await?;
        let known: HashSet<&str> = existing.iter().map(|a| a.id.as_str()).collect();

        for id in &request.activity_ids {
            if !known.contains(id.as_str()) {
                return Err(AppError::ValidationError(format!(
                    "Activity '{}' does not belong to course '{}'",
                    id, course_id
                )));
            }
        }

        for (position, id) in request.activity_ids.iter().enumerate() {
            self.repository
                .set_order_index(id, position as i32)
                .await?;
        }

        Ok(())
    }
}
