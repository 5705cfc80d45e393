use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        ActivityListParams, CreateActivityRequest, ReorderActivitiesRequest,
        UpdateActivityRequest,
    },
    models::dto::response::DeleteResponse,
};

#[post("/api/activities")]
async fn create_activity(
    state: web::Data<AppState>,
    request: web::Json<CreateActivityRequest>,
) -> Result<HttpResponse, AppError> {
    let activity = state
        .activity_service
        .create_activity(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(activity))
}

#[get("/api/activities/{id}")]
async fn get_activity(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let activity = state.activity_service.get_activity(&id).await?;
    Ok(HttpResponse::Ok().json(activity))
}

#[get("/api/courses/{course_id}/activities")]
async fn list_course_activities(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    query: web::Query<ActivityListParams>,
) -> Result<HttpResponse, AppError> {
    let published_only = query.published.unwrap_or(false);
    let activities = state
        .activity_service
        .list_by_course(&course_id, published_only)
        .await?;
    Ok(HttpResponse::Ok().json(activities))
}

#[put("/api/activities/{id}")]
async fn update_activity(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateActivityRequest>,
) -> Result<HttpResponse, AppError> {
    let activity = state
        .activity_service
        .update_activity(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(activity))
}

#[delete("/api/activities/{id}")]
async fn delete_activity(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.activity_service.delete_activity(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Activity '{}' deleted", id),
    }))
}

/// Admin drag-to-reorder of a course's activity list.
#[put("/api/courses/{course_id}/activities/order")]
async fn reorder_activities(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<ReorderActivitiesRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .activity_service
        .reorder_activities(&course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Activities for course '{}' reordered", course_id),
    }))
}
