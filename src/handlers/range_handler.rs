use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    errors::AppError,
    models::{
        domain::AyahRange,
        dto::{
            request::ParseRangeRequest,
            response::{FormatRangeResponse, ParseRangeResponse},
        },
    },
    services::range_codec::{display_range, format_range, parse_range},
};

/// Unparseable text is not an error here: the response carries `range: null`.
#[post("/api/ranges/parse")]
pub async fn parse_range_text(
    request: web::Json<ParseRangeRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let range = parse_range(&request.text);
    let canonical = range
        .as_ref()
        .filter(|range| range.is_complete())
        .map(format_range);

    Ok(HttpResponse::Ok().json(ParseRangeResponse {
        range,
        canonical,
        display: display_range(&request.text),
    }))
}

#[post("/api/ranges/format")]
pub async fn format_range_text(request: web::Json<AyahRange>) -> Result<HttpResponse, AppError> {
    let range = request.into_inner();
    range.validate()?;

    Ok(HttpResponse::Ok().json(FormatRangeResponse {
        text: format_range(&range),
    }))
}
