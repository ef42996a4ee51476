use web_sys::Element;
use yew::prelude::*;

use crate::model::Morpheme;

pub const ATTR_TOKEN: &str = "data-token";
pub const ATTR_BASE_FORM: &str = "data-base-form";
pub const ATTR_ENGLISH: &str = "data-english";
pub const ATTR_POS: &str = "data-pos";
pub const ATTR_ROMAJI: &str = "data-romaji";

/// Selector for the spans the hover handler reacts to.
pub const MORPHEME_SELECTOR: &str = "span[data-romaji]";

/// Data attributes written on each morpheme span, read back by [`MorphemeTip`].
pub fn morpheme_attrs(key: String, m: &Morpheme) -> [(&'static str, String); 5] {
    [
        (ATTR_TOKEN, key),
        (ATTR_BASE_FORM, m.base_form.clone()),
        (ATTR_ENGLISH, m.english_explanation.clone()),
        (ATTR_POS, m.pos.clone()),
        (ATTR_ROMAJI, m.romaji.clone()),
    ]
}

/// What the popover shows for one morpheme span.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphemeTip {
    pub title: String,
    pub base_form: String,
    pub pos: String,
    pub english: String,
}

impl MorphemeTip {
    /// Builds the tip from the span's data attributes; missing ones read as empty.
    pub fn from_attrs(get: impl Fn(&str) -> Option<String>) -> Self {
        let attr = |name: &str| get(name).unwrap_or_default();
        Self {
            title: attr(ATTR_ROMAJI),
            base_form: attr(ATTR_BASE_FORM),
            pos: attr(ATTR_POS),
            english: attr(ATTR_ENGLISH),
        }
    }

    pub fn from_element(el: &Element) -> Self {
        Self::from_attrs(|name| el.get_attribute(name))
    }

    /// First line of the body: base form, a non-breaking space, then the tag.
    pub fn headline(&self) -> String {
        format!("{}\u{a0}[{}]", self.base_form, self.pos)
    }
}

/// Page point the popover hangs from: bottom-centre of the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    /// Viewport rect plus scroll offset, so the popover stays put when the page scrolls.
    pub fn from_rect(left: f64, width: f64, bottom: f64, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            x: left + width / 2.0 + scroll_x,
            y: bottom + scroll_y,
        }
    }

    pub fn below(el: &Element) -> Self {
        let rect = el.get_bounding_client_rect();
        let (scroll_x, scroll_y) = web_sys::window()
            .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
            .unwrap_or((0.0, 0.0));
        Self::from_rect(rect.left(), rect.width(), rect.bottom(), scroll_x, scroll_y)
    }

    fn style(&self) -> String {
        format!(
            "position: absolute; left: {:.1}px; top: {:.1}px; transform: translateX(-50%); margin-top: 8px;",
            self.x, self.y
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct PopoverProps {
    pub tip: MorphemeTip,
    pub anchor: Anchor,
}

#[function_component(Popover)]
pub fn popover(props: &PopoverProps) -> Html {
    let tip = &props.tip;
    html! {
        <div class="popover bs-popover-bottom show" role="tooltip" style={props.anchor.style()}>
            <div class="popover-arrow"></div>
            <h3 class="popover-header">{ tip.title.clone() }</h3>
            <div class="popover-body">
                { tip.headline() }
                <hr />
                { tip.english.clone() }
            </div>
        </div>
    }
}
