// Analysis page: fetches the breakdown once and renders one row per bunsetsu.

use gloo::console::{error, log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, EventTarget, Node};
use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag, VText};

use crate::align::{align, Segment};
use crate::config::{PanelConfig, ANALYSIS_FAILED_MSG, HIGHLIGHT_CLASS};
use crate::dom;
use crate::fetch::{elapsed_text, fetch_analysis};
use crate::model::{AnalysisResult, Bunsetsu, Morpheme};
use crate::popover::{morpheme_attrs, Anchor, MorphemeTip, Popover, ATTR_TOKEN, MORPHEME_SELECTOR};

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rows(Vec<Bunsetsu>),
    Malformed,
}

/// Decides between rendering rows and the generic failure message.
pub fn plan(result: Option<AnalysisResult>) -> Outcome {
    match result.and_then(|r| r.bunsetsu_breakdown) {
        Some(rows) => Outcome::Rows(rows),
        None => Outcome::Malformed,
    }
}

pub fn token_key(row: usize, token: usize) -> String {
    format!("{row}-{token}")
}

fn log_alignment_notes(rows: &[Bunsetsu]) {
    for bunsetsu in rows {
        for note in align(bunsetsu).notes {
            log!(note.to_string());
        }
    }
}

#[derive(Clone, PartialEq)]
struct Hover {
    key: String,
    tip: MorphemeTip,
    anchor: Anchor,
}

fn morpheme_span(target: Option<EventTarget>) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(MORPHEME_SELECTOR)
        .ok()
        .flatten()
}

#[derive(Properties, PartialEq)]
pub struct AnalysisPanelProps {
    pub config: PanelConfig,
}

#[function_component(AnalysisPanel)]
pub fn analysis_panel(props: &AnalysisPanelProps) -> Html {
    let rows = use_state(|| None::<Vec<Bunsetsu>>);
    let hovered = use_state(|| None::<Hover>);

    // Fetch once on mount; a late response simply replaces the rows.
    {
        let rows = rows.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let started = dom::now_ms();
                match fetch_analysis(&config.key).await {
                    Ok(result) => {
                        if config.debug {
                            dom::set_text(config.ids.ma_time, &elapsed_text(dom::now_ms() - started));
                        }
                        dom::hide(config.ids.translation_animation);
                        dom::show(config.ids.bunsetsu_container);
                        match plan(result) {
                            Outcome::Rows(breakdown) => {
                                log_alignment_notes(&breakdown);
                                rows.set(Some(breakdown));
                            }
                            Outcome::Malformed => {
                                warn!("analysis result has no bunsetsu breakdown");
                                dom::set_text(config.ids.ma_error, ANALYSIS_FAILED_MSG);
                            }
                        }
                    }
                    Err(e) => error!(format!("There was a problem with the fetch operation: {e}")),
                }
            });
            || ()
        });
    }

    // Delegated hover: one listener pair on the panel root for every span.
    let onmouseover = {
        let hovered = hovered.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(span) = morpheme_span(e.target()) else {
                return;
            };
            let key = span.get_attribute(ATTR_TOKEN).unwrap_or_default();
            if (*hovered).as_ref().is_some_and(|h| h.key == key) {
                return;
            }
            hovered.set(Some(Hover {
                key,
                tip: MorphemeTip::from_element(&span),
                anchor: Anchor::below(&span),
            }));
        })
    };

    let onmouseout = {
        let hovered = hovered.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(span) = morpheme_span(e.target()) else {
                return;
            };
            let still_inside = e
                .related_target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .is_some_and(|n| span.contains(Some(&n)));
            if !still_inside {
                hovered.set(None);
            }
        })
    };

    let hot_key = (*hovered).as_ref().map(|h| h.key.clone());
    let body = match &*rows {
        Some(breakdown) => html! {
            <>{ for breakdown.iter().enumerate().map(|(row, b)| bunsetsu_row(row, b, hot_key.as_deref())) }</>
        },
        None => html! {},
    };

    let popover = match &*hovered {
        Some(h) => html! { <Popover tip={h.tip.clone()} anchor={h.anchor} /> },
        None => html! {},
    };

    html! {
        <div class="bunsetsu-phrases" {onmouseover} {onmouseout}>
            { body }
            { popover }
        </div>
    }
}

fn bunsetsu_row(row: usize, bunsetsu: &Bunsetsu, hot_key: Option<&str>) -> Html {
    html! {
        <div key={row.to_string()} class="row border-bottom pb-2 mb-2">
            <div class="col-4">
                { for phrase_nodes(row, bunsetsu, hot_key) }
            </div>
            <div class="col">{ bunsetsu.english_translation.clone() }</div>
        </div>
    }
}

/// Gap text and morpheme spans of one phrase, in phrase order.
fn phrase_nodes(row: usize, bunsetsu: &Bunsetsu, hot_key: Option<&str>) -> Vec<Html> {
    align(bunsetsu)
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Gap(text) => VNode::VText(VText::new(text.to_string())),
            Segment::Token { token, morpheme } => {
                let key = token_key(row, *token);
                let hot = hot_key == Some(key.as_str());
                morpheme_span_view(key, morpheme, hot)
            }
        })
        .collect()
}

fn morpheme_span_view(key: String, m: &Morpheme, hot: bool) -> Html {
    let mut span = VTag::new("span");
    for (name, value) in morpheme_attrs(key, m) {
        span.add_attribute(name, value);
    }
    if hot {
        span.add_attribute("class", HIGHLIGHT_CLASS);
    }
    span.add_child(VNode::VText(VText::new(m.surface_form.clone())));
    span.into()
}
