use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::domain::AyahLocation};

#[get("/api/audio/{surah}/{ayah}")]
pub async fn get_ayah_audio(
    state: web::Data<AppState>,
    path: web::Path<(u16, u16)>,
) -> Result<HttpResponse, AppError> {
    let (surah, ayah) = path.into_inner();
    let audio = state
        .audio_service
        .resolve_ayah_audio(AyahLocation::new(surah, ayah))
        .await?;
    Ok(HttpResponse::Ok().json(audio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::{
        config::Config,
        repositories::audio_probe::MockAudioProbe,
        services::AudioService,
        test_utils::{
            fakes::{app_state_with, text_service_with},
            fixtures::fatiha_text,
        },
    };
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn resolves_first_mirror() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state_with(fatiha_text())))
                .service(get_ayah_audio),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/audio/1/1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["url"],
            "https://www.everyayah.com/data/Husary_128kbps/001001.mp3"
        );
        assert_eq!(body["ayah_key"], "1:1");
        assert_eq!(body["format"], "mp3");
    }

    #[actix_web::test]
    async fn exhausted_mirrors_are_a_bad_gateway() {
        let mut probe = MockAudioProbe::new();
        probe
            .expect_probe()
            .returning(|_| Err(AppError::ExternalServiceError("unreachable".to_string())));
        let state = AppState::with_services(
            text_service_with(fatiha_text()),
            Arc::new(AudioService::new(Arc::new(probe))),
            Config::test_config(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_ayah_audio),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/audio/2/255").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error_code"], "AUDIO_UNAVAILABLE");
        assert_eq!(body["attempted"].as_array().map(Vec::len), Some(4));
    }
}
