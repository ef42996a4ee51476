use serde::Deserialize;

/// Body of `GET /analyze`.
///
/// `bunsetsu_breakdown` is `None` when the server could not produce an
/// analysis and answered with an empty object.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub bunsetsu_breakdown: Option<Vec<Bunsetsu>>,
    #[serde(default)]
    pub create_datetime: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Bunsetsu {
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub japanese_phrase: String,
    #[serde(default)]
    pub english_translation: String,
    #[serde(default)]
    pub morphological_analysis: Vec<Morpheme>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Morpheme {
    #[serde(default)]
    pub token_id: Option<u32>,
    #[serde(default)]
    pub surface_form: String,
    #[serde(default)]
    pub base_form: String,
    #[serde(rename = "POS", default)]
    pub pos: String,
    #[serde(default)]
    pub romaji: String,
    #[serde(default)]
    pub english_explanation: String,
}

#[cfg(test)]
impl Morpheme {
    pub fn with_surface(surface: &str) -> Self {
        Self {
            surface_form: surface.to_string(),
            ..Self::default()
        }
    }
}

impl AnalysisResult {
    pub fn from_json(body: &str) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "create_datetime": "2025-01-05T10:00:00",
        "bunsetsu_breakdown": [{
            "index": 0,
            "japanese_phrase": "東京に",
            "english_translation": "to Tokyo",
            "morphological_analysis": [
                {"token_id": 0, "surface_form": "東京", "base_form": "東京", "POS": "noun",
                 "romaji": "toukyou", "english_explanation": "Tokyo"},
                {"token_id": 1, "surface_form": "に", "base_form": "に", "POS": "particle",
                 "romaji": "ni", "english_explanation": "to, toward"}
            ]
        }]
    }"#;

    #[test]
    fn decodes_full_payload() {
        let result = AnalysisResult::from_json(SAMPLE).unwrap().unwrap();
        let rows = result.bunsetsu_breakdown.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].english_translation, "to Tokyo");
        let second = &rows[0].morphological_analysis[1];
        assert_eq!(second.pos, "particle");
        assert_eq!(second.romaji, "ni");
        assert_eq!(second.token_id, Some(1));
    }

    #[test]
    fn empty_object_has_no_breakdown() {
        let result = AnalysisResult::from_json("{}").unwrap().unwrap();
        assert!(result.bunsetsu_breakdown.is_none());
    }

    #[test]
    fn null_body_is_absent() {
        assert_eq!(AnalysisResult::from_json("null").unwrap(), None);
    }

    #[test]
    fn missing_morpheme_fields_default_to_empty() {
        let body = r#"{"bunsetsu_breakdown":[{"japanese_phrase":"犬","morphological_analysis":[{"surface_form":"犬"}]}]}"#;
        let result = AnalysisResult::from_json(body).unwrap().unwrap();
        let rows = result.bunsetsu_breakdown.unwrap();
        assert_eq!(rows[0].morphological_analysis[0], Morpheme::with_surface("犬"));
        assert_eq!(rows[0].english_translation, "");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(AnalysisResult::from_json("<html>").is_err());
    }
}
