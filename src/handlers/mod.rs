pub mod activity_handler;
pub mod course_handler;
pub mod health_handler;
pub mod progress_handler;
pub mod vocabulary_handler;

pub use activity_handler::{
    create_activity, delete_activity, get_activity, list_course_activities, reorder_activities,
    update_activity,
};
pub use course_handler::{create_course, delete_course, get_course, list_courses, update_course};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use progress_handler::{get_course_progress, get_enrollments, save_progress};
pub use vocabulary_handler::{create_term, delete_term, get_term, list_terms, update_term};
