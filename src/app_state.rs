use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoActivityRepository, MongoCourseRepository, MongoEnrollmentRepository,
        MongoProgressRepository, MongoVocabularyRepository,
    },
    services::{
        activity_service::ActivityService, course_service::CourseService,
        progress_service::ProgressService, vocabulary_service::VocabularyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
    pub activity_service: Arc<ActivityService>,
    pub progress_service: Arc<ProgressService>,
    pub vocabulary_service: Arc<VocabularyService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let course_repository = Arc::new(MongoCourseRepository::new(&db));
        course_repository.ensure_indexes().await?;

        let activity_repository = Arc::new(MongoActivityRepository::new(&db));
        activity_repository.ensure_indexes().await?;

        let progress_repository = Arc::new(MongoProgressRepository::new(&db));
        progress_repository.ensure_indexes().await?;

        let enrollment_repository = Arc::new(MongoEnrollmentRepository::new(&db));
        enrollment_repository.ensure_indexes().await?;

        let vocabulary_repository = Arc::new(MongoVocabularyRepository::new(&db));
        vocabulary_repository.ensure_indexes().await?;

        let course_service = Arc::new(CourseService::new(course_repository));
        let activity_service = Arc::new(ActivityService::new(activity_repository.clone()));
        let progress_service = Arc::new(ProgressService::new(
            activity_repository,
            progress_repository,
            enrollment_repository,
        ));
        let vocabulary_service = Arc::new(VocabularyService::new(vocabulary_repository));

        Ok(Self {
            course_service,
            activity_service,
            progress_service,
            vocabulary_service,
            db,
            config: Arc::new(config),
        })
    }
}
