use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// All elements matching `selector`; an invalid selector matches nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}
