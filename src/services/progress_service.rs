use std::collections::HashMap;
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{CourseEnrollment, ProgressRecord},
        dto::request::SaveProgressRequest,
        dto::response::{ActivityProgressDto, CourseProgressSummary, SaveProgressResponse},
    },
    repositories::{ActivityRepository, EnrollmentRepository, ProgressRepository, ProgressUpsert},
    services::evaluation_service::EvaluationService,
};

pub struct ProgressService {
    activities: Arc<dyn ActivityRepository>,
    progress: Arc<dyn ProgressRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl ProgressService {
    pub fn new(
        activities: Arc<dyn ActivityRepository>,
        progress: Arc<dyn ProgressRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            activities,
            progress,
            enrollments,
        }
    }

    /// Entry point for learner submissions: evaluate the answers, upsert
    /// the progress record, then refresh the course rollup.
    ///
    /// The progress write is the source of truth. The rollup recompute is
    /// derived state: its failure is logged and leaves the summary stale
    /// until the next successful submission, but never fails the call.
    pub async fn save_activity_progress(
        &self,
        request: SaveProgressRequest,
    ) -> AppResult<SaveProgressResponse> {
        // Missing identifiers are rejected before any storage access.
        request.validate()?;

        let activity = self
            .activities
            .find_by_id(&request.activity_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Activity with id '{}' not found",
                    request.activity_id
                ))
            })?;

        let evaluation = EvaluationService::evaluate(&activity.content, &request.answers);
        let answers = serde_json::to_string(&request.answers)?;

        let record = self
            .progress
            .upsert(ProgressUpsert {
                user_id: request.user_id.clone(),
                activity_id: request.activity_id.clone(),
                course_id: activity.course_id.clone(),
                completed: request.completed,
                score: evaluation.score,
                answers,
                time_spent: request.time_spent,
            })
            .await?;

        if let Err(err) = self
            .recompute_course_rollup(&request.user_id, &activity.course_id)
            .await
        {
            log::warn!(
                "Rollup recompute failed for user '{}' course '{}': {}",
                request.user_id,
                activity.course_id,
                err
            );
        }

        Ok(SaveProgressResponse {
            success: true,
            score: evaluation.score,
            items: evaluation.items,
            record,
        })
    }

    /// Recompute completion % and mean score for one (user, course) from
    /// scratch over the currently published activities, then upsert the
    /// enrollment row. A course with zero published activities has
    /// undefined progress and no row is written.
    pub async fn recompute_course_rollup(&self, user_id: &str, course_id: &str) -> AppResult<()> {
        let published = self.activities.find_published_by_course(course_id).await?;
        if published.is_empty() {
            log::debug!(
                "Skipping rollup for course '{}': no published activities",
                course_id
            );
            return Ok(());
        }

        let completed = self
            .progress
            .find_completed_by_user_and_course(user_id, course_id)
            .await?;

        let progress = completion_percent(completed.len(), published.len());
        let score = mean_score(&completed);

        self.enrollments
            .upsert(user_id, course_id, progress, score)
            .await?;

        Ok(())
    }

    /// The data behind the learner's course analytics view: the enrollment
    /// rollup plus each published activity joined with any recorded
    /// progress.
    pub async fn get_course_summary(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<CourseProgressSummary> {
        let activities = self.activities.find_published_by_course(course_id).await?;
        let records = self
            .progress
            .find_by_user_and_course(user_id, course_id)
            .await?;
        let enrollment = self
            .enrollments
            .find_by_user_and_course(user_id, course_id)
            .await?;

        let by_activity: HashMap<&str, &ProgressRecord> = records
            .iter()
            .map(|record| (record.activity_id.as_str(), record))
            .collect();

        let activities = activities
            .iter()
            .map(|activity| {
                let record = by_activity.get(activity.id.as_str());
                ActivityProgressDto {
                    activity_id: activity.id.clone(),
                    title: activity.title.clone(),
                    order_index: activity.order_index,
                    kind: activity.content.kind().to_string(),
                    completed: record.map(|r| r.completed).unwrap_or(false),
                    score: record.map(|r| r.score).unwrap_or(0),
                    time_spent: record.map(|r| r.time_spent).unwrap_or(0),
                }
            })
            .collect();

        Ok(CourseProgressSummary {
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            enrollment,
            activities,
        })
    }

    pub async fn get_enrollments(&self, user_id: &str) -> AppResult<Vec<CourseEnrollment>> {
        self.enrollments.find_by_user(user_id).await
    }
}

fn completion_percent(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as i32
}

fn mean_score(records: &[ProgressRecord]) -> i32 {
    if records.is_empty() {
        return 0;
    }
    let sum: i64 = records.iter().map(|record| record.score as i64).sum();
    (sum as f64 / records.len() as f64).round() as i32
}
