use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateCourseRequest, PaginationParams, UpdateCourseRequest},
    models::dto::response::{DeleteResponse, PageResponse},
};

#[post("/api/courses")]
async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_course(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/api/courses/{id}")]
async fn get_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[get("/api/courses")]
async fn list_courses(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let (items, total) = state
        .course_service
        .list_courses(pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(PageResponse { items, total }))
}

#[put("/api/courses/{id}")]
async fn update_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_course(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/api/courses/{id}")]
async fn delete_course(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete_course(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Course '{}' deleted", id),
    }))
}
