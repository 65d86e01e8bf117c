use serde::Deserialize;

use crate::models::domain::QuranText;

/// Envelope returned by `GET /quran/{edition}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuranApiResponse {
    pub code: u16,
    pub status: String,
    pub data: Option<QuranApiEdition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuranApiEdition {
    pub surahs: Vec<QuranApiSurah>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuranApiSurah {
    pub number: u16,
    pub ayahs: Vec<QuranApiAyah>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuranApiAyah {
    pub number_in_surah: u16,
    pub text: String,
}

impl From<QuranApiEdition> for QuranText {
    fn from(edition: QuranApiEdition) -> Self {
        edition
            .surahs
            .into_iter()
            .flat_map(|surah| {
                let number = surah.number;
                surah
                    .ayahs
                    .into_iter()
                    .map(move |ayah| (number, ayah.number_in_surah, ayah.text))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::AyahLocation;

    #[test]
    fn api_payload_converts_to_surah_ayah_map() {
        let json = r#"{
            "code": 200,
            "status": "OK",
            "data": {
                "surahs": [
                    {
                        "number": 1,
                        "name": "سُورَةُ ٱلْفَاتِحَةِ",
                        "englishName": "Al-Faatiha",
                        "ayahs": [
                            { "number": 1, "numberInSurah": 1, "text": "first", "juz": 1 },
                            { "number": 2, "numberInSurah": 2, "text": "second", "juz": 1 }
                        ]
                    },
                    {
                        "number": 114,
                        "ayahs": [ { "numberInSurah": 6, "text": "last" } ]
                    }
                ]
            }
        }"#;

        let response: QuranApiResponse = serde_json::from_str(json).expect("payload should parse");
        assert_eq!(response.status, "OK");

        let text = QuranText::from(response.data.expect("data present"));
        assert_eq!(text.total_surahs(), 2);
        assert_eq!(text.total_ayahs(), 3);
        assert_eq!(text.text_at(AyahLocation::new(1, 2)), Some("second"));
        assert_eq!(text.text_at(AyahLocation::new(114, 6)), Some("last"));
    }
}
