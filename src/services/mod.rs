pub mod activity_service;
pub mod course_service;
pub mod evaluation_service;
pub mod progress_service;
pub mod vocabulary_service;

pub use activity_service::ActivityService;
pub use course_service::CourseService;
pub use evaluation_service::EvaluationService;
pub use progress_service::ProgressService;
pub use vocabulary_service::VocabularyService;
