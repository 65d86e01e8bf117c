pub mod audio_handler;
pub mod catalog_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod range_handler;
pub mod text_handler;

use actix_web::web;

pub use audio_handler::get_ayah_audio;
pub use catalog_handler::{list_juz, list_surahs};
pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{
    end_quiz_session, get_quiz_session, mark_correct, mark_incorrect, skip_question,
    start_quiz_session,
};
pub use range_handler::{format_range_text, parse_range_text};
pub use text_handler::{get_ayah_text, reload_text, text_stats};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_ready)
        .service(parse_range_text)
        .service(format_range_text)
        .service(list_surahs)
        .service(list_juz)
        .service(text_stats)
        .service(reload_text)
        .service(get_ayah_text)
        .service(start_quiz_session)
        .service(get_quiz_session)
        .service(mark_correct)
        .service(mark_incorrect)
        .service(skip_question)
        .service(end_quiz_session)
        .service(get_ayah_audio);
}
