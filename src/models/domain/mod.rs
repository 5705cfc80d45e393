pub mod activity;
pub mod course;
pub mod enrollment;
pub mod progress_record;
pub mod vocabulary;

pub use activity::{Activity, ActivityContent, ActivityStatus};
pub use course::{Course, CourseStatus};
pub use enrollment::CourseEnrollment;
pub use progress_record::ProgressRecord;
pub use vocabulary::VocabularyTerm;
