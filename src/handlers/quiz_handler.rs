use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::dto::request::StartQuizRequest};

#[post("/api/quiz/sessions")]
pub async fn start_quiz_session(
    state: web::Data<AppState>,
    request: web::Json<StartQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let request = request.into_inner();
    let session = state
        .quiz_session_service
        .start_session(request.mode, request.selection)
        .await?;
    Ok(HttpResponse::Created().json(session))
}

#[get("/api/quiz/sessions/{id}")]
pub async fn get_quiz_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_session_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/quiz/sessions/{id}/correct")]
pub async fn mark_correct(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_session_service.mark_correct(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/quiz/sessions/{id}/incorrect")]
pub async fn mark_incorrect(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_session_service.mark_incorrect(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/quiz/sessions/{id}/skip")]
pub async fn skip_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_session_service.skip(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[delete("/api/quiz/sessions/{id}")]
pub async fn end_quiz_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_session_service.end_session(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}
