use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::SaveProgressRequest,
};

/// Learner submission entry point: evaluate, record, refresh the rollup.
#[post("/api/progress")]
async fn save_progress(
    state: web::Data<AppState>,
    request: web::Json<SaveProgressRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .progress_service
        .save_activity_progress(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/users/{user_id}/courses/{course_id}/progress")]
async fn get_course_progress(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, course_id) = path.into_inner();
    let summary = state
        .progress_service
        .get_course_summary(&user_id, &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(summary))
}

#[get("/api/users/{user_id}/enrollments")]
async fn get_enrollments(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let enrollments = state.progress_service.get_enrollments(&user_id).await?;
    Ok(HttpResponse::Ok().json(enrollments))
}
