pub mod activity_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod progress_repository;
pub mod vocabulary_repository;

pub use activity_repository::{ActivityRepository, MongoActivityRepository};
pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use enrollment_repository::{EnrollmentRepository, MongoEnrollmentRepository};
pub use progress_repository::{MongoProgressRepository, ProgressRepository, ProgressUpsert};
pub use vocabulary_repository::{MongoVocabularyRepository, VocabularyRepository};
