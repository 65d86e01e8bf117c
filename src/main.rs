use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use hifz_tracker_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if let Err(e) = config.validate_for_production() {
        log::error!("Invalid configuration: {}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }

    let state = AppState::new(config.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let text_service = state.text_service.clone();
    tokio::spawn(async move {
        let stats = text_service.init().await;
        if stats.loaded {
            log::info!(
                "Quran text ready from {} source: {} surahs, {} ayahs",
                stats.source,
                stats.total_surahs,
                stats.total_ayahs
            );
        } else {
            log::error!(
                "No Quran text source is available: {}",
                stats.last_error.unwrap_or_default()
            );
        }
    });

    log::info!(
        "Starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    let allowed_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
