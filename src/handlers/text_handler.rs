use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::domain::AyahLocation};

#[get("/api/text/stats")]
pub async fn text_stats(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = state.text_service.stats().await;
    Ok(HttpResponse::Ok().json(stats))
}

/// Drops the cached text and loads it again through every tier.
#[post("/api/text/reload")]
pub async fn reload_text(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.text_service.reset();
    let stats = state.text_service.init().await;
    log::info!(
        "Quran text reloaded from {} ({} ayahs)",
        stats.source,
        stats.total_ayahs
    );
    Ok(HttpResponse::Ok().json(stats))
}

/// Missing ayahs come back with `available: false` and placeholder text.
#[get("/api/text/{surah}/{ayah}")]
pub async fn get_ayah_text(
    state: web::Data<AppState>,
    path: web::Path<(u16, u16)>,
) -> Result<HttpResponse, AppError> {
    let (surah, ayah) = path.into_inner();
    let text = state
        .quiz_sampler
        .lookup(AyahLocation::new(surah, ayah))
        .await?;
    Ok(HttpResponse::Ok().json(text))
}
