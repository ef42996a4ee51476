// Input page: keeps non-Japanese text from being submitted.

use gloo::console::{log, warn};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement, HtmlInputElement};

use crate::classify::is_japanese;
use crate::config::{PageIds, NOT_JAPANESE_MSG};
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Reject(&'static str),
}

impl Verdict {
    /// Text that belongs in the error slot after this verdict.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Allow => "",
            Verdict::Reject(msg) => msg,
        }
    }
}

pub fn check_submission(text: &str) -> Verdict {
    if is_japanese(text) {
        Verdict::Allow
    } else {
        Verdict::Reject(NOT_JAPANESE_MSG)
    }
}

/// Binds the submit guard and the upload shortcut to the input form.
///
/// Listeners live for the lifetime of the page.
pub fn install(ids: &PageIds) -> Result<(), String> {
    let form = dom::element_by_id(ids.input_form)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        .ok_or_else(|| format!("#{} is not a form", ids.input_form))?;

    dom::hide(ids.upload_animation);

    let submit_ids = ids.clone();
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let text = dom::control_value(submit_ids.text_input).unwrap_or_default();
            let verdict = check_submission(&text);
            dom::set_text(submit_ids.error_message, verdict.message());
            if let Verdict::Reject(_) = verdict {
                log!("submission blocked: input is not Japanese");
                event.prevent_default();
            }
        },
    )
    .forget();

    match dom::element_by_id(ids.file_input) {
        Some(input) => {
            let upload_ids = ids.clone();
            let upload_form = form.clone();
            EventListener::new(&input, "change", move |event: &Event| {
                let has_file = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0))
                    .is_some();
                if !has_file {
                    return;
                }
                // requestSubmit fires "submit", so the text check above still runs.
                if upload_form.request_submit().is_err() {
                    warn!("could not submit the upload form");
                }
                dom::hide(upload_ids.input_container);
                dom::show(upload_ids.upload_animation);
            })
            .forget();
        }
        None => log!(format!("no #{} on this page, upload shortcut skipped", ids.file_input)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_text_is_allowed_and_clears_message() {
        let verdict = check_submission("今日はいい天気ですね");
        assert_eq!(verdict, Verdict::Allow);
        assert_eq!(verdict.message(), "");
    }

    #[test]
    fn non_japanese_text_is_rejected_with_fixed_message() {
        for text in ["", "   ", "Hello world", "12345"] {
            let verdict = check_submission(text);
            assert_eq!(verdict, Verdict::Reject(NOT_JAPANESE_MSG), "input: {text:?}");
            assert_eq!(verdict.message(), NOT_JAPANESE_MSG);
        }
    }
}
