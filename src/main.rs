// src/main.rs: Bunsetsu Lens (Rust + Yew + WASM)
// Front-end for the Japanese breakdown pages:
// - input page: blocks non-Japanese text before the form is posted
// - analysis page: fetches the morpheme breakdown and renders hoverable rows

mod align;
mod classify;
mod config;
mod dom;
mod fetch;
mod guard;
mod model;
mod popover;
mod view;

use gloo::console::{error, log};

use crate::config::{PageIds, PanelConfig};
use crate::view::{AnalysisPanel, AnalysisPanelProps};

fn mount_analysis(ids: PageIds) {
    dom::hide(ids.bunsetsu_container);

    let Some(root) = dom::element_by_id(ids.bunsetsu_phrases) else {
        error!(format!("#{} missing, cannot render analysis", ids.bunsetsu_phrases));
        return;
    };

    let key = dom::control_value(ids.key).unwrap_or_default();
    let mode = dom::control_value(ids.mode).unwrap_or_default();
    let config = PanelConfig::new(key, &mode, ids);

    yew::Renderer::<AnalysisPanel>::with_root_and_props(root, AnalysisPanelProps { config })
        .render();
}

fn main() {
    let ids = PageIds::default();

    if dom::exists(ids.input_form) {
        if let Err(e) = guard::install(&ids) {
            error!(e);
        }
    }

    if dom::exists(ids.bunsetsu_container) {
        mount_analysis(ids);
    } else {
        log!("no analysis container on this page");
    }
}
