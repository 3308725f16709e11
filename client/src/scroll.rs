use std::cell::RefCell;
use std::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

/// Height of the fixed header the target is scrolled clear of.
pub const SCROLL_OFFSET_PX: f64 = 80.0;
pub const IN_PAGE_ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollError {
    NotFound(String),
    InvalidSelector(String),
}

impl fmt::Display for ScrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(selector) => write!(f, "scroll target {selector} not found"),
            Self::InvalidSelector(selector) => write!(f, "invalid scroll target {selector}"),
        }
    }
}

/// Window scroll position that puts an element at `offset_top` just below the header.
pub fn scroll_target_top(offset_top: f64) -> f64 {
    offset_top - SCROLL_OFFSET_PX
}

/// Validate an in-page href. A bare `#` names no element.
pub fn fragment_selector(href: &str) -> Result<&str, ScrollError> {
    let href = href.trim();
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Ok(href),
        _ => Err(ScrollError::NotFound(href.to_string())),
    }
}

pub fn resolve_target(document: &Document, href: &str) -> Result<HtmlElement, ScrollError> {
    let selector = fragment_selector(href)?;
    document
        .query_selector(selector)
        .map_err(|_| ScrollError::InvalidSelector(selector.to_string()))?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ScrollError::NotFound(selector.to_string()))
}

pub fn scroll_to_fragment(document: &Document, href: &str) -> Result<(), ScrollError> {
    let target = resolve_target(document, href)?;
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let options = ScrollToOptions::new();
    options.set_top(scroll_target_top(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

struct AnchorBinding {
    anchors: Vec<Element>,
    handler: Closure<dyn Fn(MouseEvent)>,
}

thread_local! {
    static ANCHOR_BINDING: RefCell<Option<AnchorBinding>> = const { RefCell::new(None) };
}

/// Route clicks on in-page anchors through offset smooth scrolling.
/// Returns the number of anchors wired.
pub fn install_anchor_scrolling(document: &Document) -> usize {
    ANCHOR_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            for anchor in &old.anchors {
                let _ = anchor.remove_event_listener_with_callback(
                    "click",
                    old.handler.as_ref().unchecked_ref(),
                );
            }
        }
    });

    let doc = document.clone();
    let handler = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
        e.prevent_default();
        let Some(anchor) = e
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if let Err(err) = scroll_to_fragment(&doc, &href) {
            web_sys::console::warn_1(&err.to_string().into());
        }
    });

    let anchors = crate::dom::query_all(document, IN_PAGE_ANCHOR_SELECTOR);
    for anchor in &anchors {
        let _ = anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    }

    let wired = anchors.len();
    ANCHOR_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(AnchorBinding { anchors, handler });
    });
    wired
}
