use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Deserialize;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateVocabularyRequest, UpdateVocabularyRequest},
    models::dto::response::{DeleteResponse, PageResponse},
};

#[derive(Debug, Deserialize)]
struct VocabularyListParams {
    course_id: Option<String>,
    offset: Option<i64>,
    limit: Option<i64>,
}

#[post("/api/vocabulary")]
async fn create_term(
    state: web::Data<AppState>,
    request: web::Json<CreateVocabularyRequest>,
) -> Result<HttpResponse, AppError> {
    let term = state
        .vocabulary_service
        .create_term(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(term))
}

#[get("/api/vocabulary/{id}")]
async fn get_term(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let term = state.vocabulary_service.get_term(&id).await?;
    Ok(HttpResponse::Ok().json(term))
}

#[get("/api/vocabulary")]
async fn list_terms(
    state: web::Data<AppState>,
    query: web::Query<VocabularyListParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let (items, total) = state
        .vocabulary_service
        .list_terms(
            params.course_id.as_deref(),
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20).min(100),
        )
        .await?;
    Ok(HttpResponse::Ok().json(PageResponse { items, total }))
}

#[put("/api/vocabulary/{id}")]
async fn update_term(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateVocabularyRequest>,
) -> Result<HttpResponse, AppError> {
    let term = state
        .vocabulary_service
        .update_term(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(term))
}

#[delete("/api/vocabulary/{id}")]
async fn delete_term(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.vocabulary_service.delete_term(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Vocabulary term '{}' deleted", id),
    }))
}
