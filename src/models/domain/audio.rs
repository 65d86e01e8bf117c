use serde::Serialize;

/// A reachable recitation for one ayah, plus every mirror that was on the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AyahAudio {
    pub url: String,
    pub fallback_urls: Vec<String>,
    pub ayah_key: String,
    pub reciter_id: u16,
    pub format: String,
}
