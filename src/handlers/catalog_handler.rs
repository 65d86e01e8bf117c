use actix_web::{get, HttpResponse};

use crate::constants::{juz::JUZ, surahs::SURAHS};

#[get("/api/catalog/surahs")]
pub async fn list_surahs() -> HttpResponse {
    HttpResponse::Ok().json(&SURAHS[..])
}

#[get("/api/catalog/juz")]
pub async fn list_juz() -> HttpResponse {
    HttpResponse::Ok().json(&JUZ[..])
}
