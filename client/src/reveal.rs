use std::cell::RefCell;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

pub const CARD_SELECTOR: &str = ".area-card, .resource-card, .news-card";
pub const ANIMATED_CLASS: &str = "animated";
/// Fraction of a card that must be visible before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Cards animate in once and stay animated.
pub fn should_reveal(is_intersecting: bool, already_animated: bool) -> bool {
    is_intersecting && !already_animated
}

struct RevealBinding {
    observer: IntersectionObserver,
    _callback: Closure<dyn Fn(Array, IntersectionObserver)>,
}

thread_local! {
    static REVEAL_BINDING: RefCell<Option<RevealBinding>> = const { RefCell::new(None) };
}

/// Watch every card and add `animated` the first time it is at least
/// 10% visible. Returns the number of cards observed.
pub fn observe_cards(document: &Document) -> Result<usize, String> {
    REVEAL_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            old.observer.disconnect();
        }
    });

    let callback = Closure::<dyn Fn(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let animated = target.class_list().contains(ANIMATED_CLASS);
                if should_reveal(entry.is_intersecting(), animated) {
                    dom::add_class(&target, ANIMATED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| format!("IntersectionObserver unavailable: {e:?}"))?;

    let cards = dom::query_all(document, CARD_SELECTOR);
    for card in &cards {
        observer.observe(card);
    }

    REVEAL_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(RevealBinding {
            observer,
            _callback: callback,
        });
    });
    Ok(cards.len())
}

#[cfg(test)]
mod tests {
    use super::should_reveal;

    #[test]
    fn reveals_on_first_intersection() {
        assert!(should_reveal(true, false));
    }

    #[test]
    fn never_reveals_twice_or_while_hidden() {
        assert!(!should_reveal(true, true));
        assert!(!should_reveal(false, false));
        assert!(!should_reveal(false, true));
    }
}
