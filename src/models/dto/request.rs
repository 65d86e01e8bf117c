use serde::Deserialize;
use validator::Validate;

use crate::models::domain::TestMode;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ParseRangeRequest {
    #[validate(length(max = 200))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartQuizRequest {
    pub mode: TestMode,

    #[validate(length(min = 1, message = "Select at least one surah or juz"))]
    pub selection: Vec<u16>,
}
