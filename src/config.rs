// Page wiring shared by the input page and the analysis page.

pub const ANALYZE_ENDPOINT: &str = "/analyze";
pub const MIN_JAPANESE_RATIO: f64 = 0.3;
pub const DEBUG_MODE: &str = "debug";
pub const HIGHLIGHT_CLASS: &str = "bg-warning";

pub const NOT_JAPANESE_MSG: &str = "Input is not Japanese. Please enter Japanese text only.";
pub const ANALYSIS_FAILED_MSG: &str = "Something went wrong. Unable to do morthological analysis.";

/// Element ids emitted by the server templates.
#[derive(Debug, Clone, PartialEq)]
pub struct PageIds {
    pub file_input: &'static str,
    pub text_input: &'static str,
    pub error_message: &'static str,
    pub input_form: &'static str,
    pub input_container: &'static str,
    pub upload_animation: &'static str,
    pub translation_animation: &'static str,
    pub bunsetsu_container: &'static str,
    pub bunsetsu_phrases: &'static str,
    pub ma_error: &'static str,
    pub mode: &'static str,
    pub ma_time: &'static str,
    pub key: &'static str,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            file_input: "id_image_file",
            text_input: "id_jp_text",
            error_message: "error_message",
            input_form: "input_form",
            input_container: "input_container",
            upload_animation: "upload_animation",
            translation_animation: "translation_animation",
            bunsetsu_container: "bunsetsu_container",
            bunsetsu_phrases: "bunsetsu_phrases",
            ma_error: "ma_error",
            mode: "mode",
            ma_time: "ma_time",
            key: "key",
        }
    }
}

/// Runtime values the analysis page hands to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub key: String,
    pub debug: bool,
    pub ids: PageIds,
}

impl PanelConfig {
    pub fn new(key: impl Into<String>, mode: &str, ids: PageIds) -> Self {
        Self {
            key: key.into(),
            debug: is_debug_mode(mode),
            ids,
        }
    }
}

pub fn is_debug_mode(mode: &str) -> bool {
    mode.to_lowercase() == DEBUG_MODE
}
