use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Course,
    models::dto::request::{CreateCourseRequest, UpdateCourseRequest},
    repositories::CourseRepository,
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_course(&self, request: CreateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        let course = Course::new(&request.title, request.description, request.level);
        self.repository.create(course).await
    }

    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    pub async fn list_courses(&self, offset: i64, limit: i64) -> AppResult<(Vec<Course>, i64)> {
        self.repository.list(offset, limit).await
    }

    pub async fn update_course(&self, id: &str, request: UpdateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        let mut course = self.get_course(id).await?;

        if let Some(title) = request.title {
            course.title = title;
        }
        if let Some(description) = request.description {
            course.description = Some(description);
        }
        if let Some(level) = request.level {
            course.level = Some(level);
        }
        if let Some(status) = request.status {
            course.status = status;
        }
        course.modified_at = Some(Utc::now());

        self.repository.update(course).await
    }

    pub async fn delete_course(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
