#[cfg(test)]
pub mod fixtures {
    use std::collections::HashMap;

    use chrono::Utc;

    use crate::models::domain::activity::ChoiceQuestion;
    use crate::models::domain::{
        Activity, ActivityContent, ActivityStatus, Course, CourseEnrollment, ProgressRecord,
    };
    use crate::models::dto::request::ActivitySubmission;
    use crate::repositories::ProgressUpsert;

    /// A draft course ready to be published in tests.
    pub fn test_course(title: &str) -> Course {
        Course::new(title, Some("test course".to_string()), Some("A1".to_string()))
    }

    /// A published single-question quiz whose correct answer is "a".
    pub fn published_quiz(id: &str, course_id: &str) -> Activity {
        let mut activity = Activity::new(
            course_id,
            &format!("Quiz {}", id),
            0,
            ActivityStatus::Published,
            ActivityContent::Quiz {
                questions: vec![ChoiceQuestion {
                    prompt: "Pick a".to_string(),
                    options: vec!["a".to_string(), "b".to_string()],
                    correct_answer: "a".to_string(),
                }],
            },
        );
        activity.id = id.to_string();
        activity
    }

    /// Same answer key as `published_quiz`, but still in draft.
    pub fn draft_quiz(id: &str, course_id: &str) -> Activity {
        let mut activity = published_quiz(id, course_id);
        activity.status = ActivityStatus::Draft;
        activity
    }

    /// The submission that scores 100 against `published_quiz`.
    pub fn full_quiz_submission() -> ActivitySubmission {
        ActivitySubmission::Choices {
            selected: HashMap::from([(0, "a".to_string())]),
        }
    }

    pub fn completed_record(
        user_id: &str,
        activity_id: &str,
        course_id: &str,
        score: i32,
    ) -> ProgressRecord {
        ProgressRecord {
            id: format!("rec-{}-{}", user_id, activity_id),
            user_id: user_id.to_string(),
            activity_id: activity_id.to_string(),
            course_id: course_id.to_string(),
            completed: true,
            score,
            answers: "{}".to_string(),
            time_spent: 5,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    /// The record a first-time upsert of `submission` would store.
    pub fn record_from_upsert(submission: &ProgressUpsert) -> ProgressRecord {
        ProgressRecord {
            id: format!("rec-{}-{}", submission.user_id, submission.activity_id),
            user_id: submission.user_id.clone(),
            activity_id: submission.activity_id.clone(),
            course_id: submission.course_id.clone(),
            completed: submission.completed,
            score: submission.score,
            answers: submission.answers.clone(),
            time_spent: submission.time_spent,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    pub fn enrollment(
        user_id: &str,
        course_id: &str,
        progress: i32,
        score: i32,
    ) -> CourseEnrollment {
        CourseEnrollment {
            id: format!("enr-{}-{}", user_id, course_id),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            progress,
            score,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::ActivityStatus;
    use crate::services::evaluation_service::EvaluationService;

    #[test]
    fn test_fixture_quiz_is_published() {
        let activity = published_quiz("a1", "c1");
        assert_eq!(activity.status, ActivityStatus::Published);
        assert_eq!(activity.course_id, "c1");
    }

    #[test]
    fn test_fixture_submission_scores_full_marks() {
        let activity = published_quiz("a1", "c1");
        let evaluation = EvaluationService::evaluate(&activity.content, &full_quiz_submission());
        assert_eq!(evaluation.score, 100);
    }
}
