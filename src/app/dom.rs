//! Browser side of the scroll stack: measurement, timers and style writes.

use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::stack::{
    PanelLayout, PresentationSink, Scheduler, StackLayout, Transform, Transition, Viewport,
};

pub const CARD_CLASS: &str = "scroll-stack-card";
pub const END_CLASS: &str = "scroll-stack-end";

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if el.style().set_property(property, value).is_err() {
        log::warn!("couldn't set {property} on scroll stack card");
    }
}

/// Document offset ignoring transforms, so applied transforms never feed
/// back into the measurement.
pub fn document_offset(el: &HtmlElement) -> f64 {
    let mut offset = el.offset_top() as f64;
    let mut parent = el.offset_parent();
    while let Some(p) = parent {
        let Ok(p) = p.dyn_into::<HtmlElement>() else {
            break;
        };
        offset += p.offset_top() as f64;
        parent = p.offset_parent();
    }
    offset
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn cards(root: &HtmlElement) -> Vec<HtmlElement> {
    query_all(root, &format!(".{CARD_CLASS}"))
}

/// Styles every card needs before the first transform lands.
pub fn prepare_cards(cards: &[HtmlElement], item_distance: f64) {
    let last = cards.len().saturating_sub(1);
    for (i, card) in cards.iter().enumerate() {
        if i < last {
            set_style(card, "margin-bottom", &format!("{item_distance}px"));
        }
        set_style(card, "will-change", "transform, filter");
        set_style(card, "transform-origin", "top center");
        set_style(card, "backface-visibility", "hidden");
        set_style(card, "transform", "translateZ(0)");
        set_style(card, "perspective", "1000px");
        set_style(card, "transform-style", "preserve-3d");
    }
}

pub fn measure(root: &HtmlElement, cards: &[HtmlElement], window_scroll: bool) -> StackLayout {
    let offset = |el: &HtmlElement| {
        if window_scroll {
            document_offset(el)
        } else {
            el.offset_top() as f64
        }
    };
    let panels = cards
        .iter()
        .map(|card| PanelLayout {
            document_offset: offset(card),
            height: card.offset_height() as f64,
        })
        .collect();
    let end_offset = query_all(root, &format!(".{END_CLASS}"))
        .first()
        .map(|el| offset(el));
    StackLayout::new(panels, end_offset)
}

pub fn coarse_pointer() -> bool {
    window()
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .is_some_and(|mql| mql.matches())
}

pub struct WindowViewport;

/// Scroll write that bypasses `scroll-behavior: smooth`.
fn instant_scroll(offset: f64) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_top(offset);
    options.set_behavior(ScrollBehavior::Instant);
    options
}

impl Viewport for WindowViewport {
    fn scroll_offset(&self) -> Option<f64> {
        window().scroll_y().ok()
    }

    fn extent(&self) -> Option<f64> {
        window().inner_height().ok().and_then(|h| h.as_f64())
    }

    fn max_offset(&self) -> Option<f64> {
        let height = document().document_element()?.scroll_height() as f64;
        Some(height - self.extent()?)
    }

    fn scroll_to(&self, offset: f64) {
        window().scroll_to_with_scroll_to_options(&instant_scroll(offset));
    }
}

/// The stack's own scroll container. `None` when it wasn't mounted.
pub struct ContainerViewport(pub Option<HtmlElement>);

impl Viewport for ContainerViewport {
    fn scroll_offset(&self) -> Option<f64> {
        self.0.as_ref().map(|el| el.scroll_top() as f64)
    }

    fn extent(&self) -> Option<f64> {
        self.0.as_ref().map(|el| el.client_height() as f64)
    }

    fn max_offset(&self) -> Option<f64> {
        self.0
            .as_ref()
            .map(|el| (el.scroll_height() - el.client_height()) as f64)
    }

    fn scroll_to(&self, offset: f64) {
        if let Some(el) = &self.0 {
            el.scroll_to_with_scroll_to_options(&instant_scroll(offset));
        }
    }
}

/// Frame loop and idle timer backed by leptos-use hooks.
pub struct BrowserScheduler {
    pub start_frames: Box<dyn Fn()>,
    pub stop_frames: Box<dyn Fn()>,
    pub arm_idle: Box<dyn Fn(f64)>,
    pub cancel_idle: Box<dyn Fn()>,
}

impl Scheduler for BrowserScheduler {
    fn start_frames(&mut self) {
        (self.start_frames)();
    }

    fn stop_frames(&mut self) {
        (self.stop_frames)();
    }

    fn arm_idle(&mut self, delay_ms: f64) {
        (self.arm_idle)(delay_ms);
    }

    fn cancel_idle(&mut self) {
        (self.cancel_idle)();
    }
}

/// Writes transforms straight into the cards' inline styles.
pub struct StyleSink {
    cards: Vec<HtmlElement>,
}

impl StyleSink {
    pub fn new(cards: Vec<HtmlElement>) -> Self {
        Self { cards }
    }
}

impl PresentationSink for StyleSink {
    fn apply(&mut self, index: usize, transform: &Transform, transition: Transition) {
        let Some(card) = self.cards.get(index) else {
            return;
        };
        set_style(card, "transition", transition.css());
        set_style(card, "transform", &transform.css_transform());
        set_style(card, "filter", &transform.css_filter());
    }
}
