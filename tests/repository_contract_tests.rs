mod support;

use lingua_server::{
    errors::AppError,
    models::domain::{
        activity::ChoiceQuestion, Activity, ActivityContent, ActivityStatus,
    },
    repositories::{ActivityRepository, EnrollmentRepository, ProgressRepository, ProgressUpsert},
};

use support::{InMemoryActivityRepository, InMemoryEnrollmentRepository, InMemoryProgressRepository};

fn make_activity(id: &str, course_id: &str, order_index: i32, status: ActivityStatus) -> Activity {
    let mut activity = Activity::new(
        course_id,
        &format!("Activity {}", id),
        order_index,
        status,
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

fn make_upsert(user_id: &str, activity_id: &str, course_id: &str, score: i32, time_spent: i64) -> ProgressUpsert {
    ProgressUpsert {
        user_id: user_id.to_string(),
        activity_id: activity_id.to_string(),
        course_id: course_id.to_string(),
        completed: true,
        score,
        answers: "{\"type\":\"choices\",\"selected\":{\"0\":\"a\"}}".to_string(),
        time_spent,
    }
}

#[tokio::test]
async fn activity_repository_orders_filters_and_error_paths() {
    let repo = InMemoryActivityRepository::new();

    repo.create(make_activity("a2", "course-1", 1, ActivityStatus::Published))
        .await
        .expect("create a2");
    repo.create(make_activity("a1", "course-1", 0, ActivityStatus::Published))
        .await
        .expect("create a1");
    repo.create(make_activity("a3", "course-1", 2, ActivityStatus::Draft))
        .await
        .expect("create a3");
    repo.create(make_activity("b1", "course-2", 0, ActivityStatus::Published))
        .await
        .expect("create b1");

    let duplicate = repo
        .create(make_activity("a1", "course-1", 0, ActivityStatus::Published))
        .await;
    assert!(matches!(duplicate, Err(AppError::AlreadyExists(_))));

    let all = repo.find_by_course("course-1").await.expect("find by course");
    let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);

    let published = repo
        .find_published_by_course("course-1")
        .await
        .expect("published filter");
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|a| a.is_published()));

    repo.set_order_index("a1", 5).await.expect("set order");
    let moved = repo
        .find_by_id("a1")
        .await
        .expect("find a1")
        .expect("a1 exists");
    assert_eq!(moved.order_index, 5);

    let missing_update = repo
        .update(make_activity("ghost", "course-1", 0, ActivityStatus::Draft))
        .await;
    assert!(matches!(missing_update, Err(AppError::NotFound(_))));

    let missing_delete = repo.delete("ghost").await;
    assert!(matches!(missing_delete, Err(AppError::NotFound(_))));

    repo.delete("a3").await.expect("delete a3");
    assert!(repo.find_by_id("a3").await.expect("find a3").is_none());
}

#[tokio::test]
async fn progress_upsert_keeps_one_record_and_accumulates_time() {
    let repo = InMemoryProgressRepository::new();

    let first = repo
        .upsert(make_upsert("user-1", "act-1", "course-1", 80, 5))
        .await
        .expect("first upsert");
    assert_eq!(first.time_spent, 5);
    assert_eq!(first.score, 80);

    let second = repo
        .upsert(make_upsert("user-1", "act-1", "course-1", 100, 3))
        .await
        .expect("second upsert");

    // one record per (user, activity): time accumulates, the rest overwrites
    assert_eq!(repo.count().await, 1);
    assert_eq!(second.time_spent, 8);
    assert_eq!(second.score, 100);
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);

    let found = repo
        .find_by_user_and_activity("user-1", "act-1")
        .await
        .expect("lookup should work")
        .expect("record exists");
    assert_eq!(found.time_spent, 8);

    // a different activity gets its own record
    repo.upsert(make_upsert("user-1", "act-2", "course-1", 60, 2))
        .await
        .expect("other activity upsert");
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn progress_queries_filter_by_course_and_completion() {
    let repo = InMemoryProgressRepository::new();

    repo.upsert(make_upsert("user-1", "act-1", "course-1", 80, 5))
        .await
        .expect("upsert act-1");
    repo.upsert(make_upsert("user-1", "act-2", "course-2", 90, 5))
        .await
        .expect("upsert act-2");

    let mut incomplete = make_upsert("user-1", "act-3", "course-1", 0, 1);
    incomplete.completed = false;
    repo.upsert(incomplete).await.expect("upsert act-3");

    let in_course = repo
        .find_by_user_and_course("user-1", "course-1")
        .await
        .expect("course query");
    assert_eq!(in_course.len(), 2);

    let completed = repo
        .find_completed_by_user_and_course("user-1", "course-1")
        .await
        .expect("completed query");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].activity_id, "act-1");
}

#[tokio::test]
async fn enrollment_upsert_keeps_one_row_per_user_course() {
    let repo = InMemoryEnrollmentRepository::new();

    let first = repo
        .upsert("user-1", "course-1", 25, 80)
        .await
        .expect("first upsert");
    let second = repo
        .upsert("user-1", "course-1", 50, 90)
        .await
        .expect("second upsert");

    assert_eq!(repo.count().await, 1);
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.progress, 50);
    assert_eq!(second.score, 90);

    repo.upsert("user-1", "course-2", 100, 95)
        .await
        .expect("other course upsert");

    let enrollments = repo.find_by_user("user-1").await.expect("list by user");
    assert_eq!(enrollments.len(), 2);
    assert_eq!(enrollments[0].course_id, "course-1");
    assert_eq!(enrollments[1].course_id, "course-2");
}
