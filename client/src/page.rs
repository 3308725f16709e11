use web_sys::Document;

use flood_watch_shared::DistrictRecord;

use crate::{dom, live_streams, map, reveal, scroll};

pub const BODY_LOADED_CLASS: &str = "loaded";

/// One-shot page setup, run once the app is mounted. Each part fails on its
/// own; nothing here is torn down.
pub fn initialize(document: &Document, records: &'static [DistrictRecord]) {
    if let Some(body) = document.body() {
        dom::add_class(&body, BODY_LOADED_CLASS);
    }

    match map::init_flood_map(records) {
        Ok(summary) => {
            for (name, err) in &summary.failures {
                web_sys::console::warn_1(&format!("{name}: {err}").into());
            }
            web_sys::console::log_1(
                &format!("Flood map ready with {} district markers", summary.placed).into(),
            );
        }
        Err(e) => web_sys::console::error_1(&e.to_string().into()),
    }

    let anchors = scroll::install_anchor_scrolling(document);

    let cards = reveal::observe_cards(document).unwrap_or_else(|e| {
        web_sys::console::warn_1(&e.into());
        0
    });

    let streams = live_streams::init_live_streams(document);

    web_sys::console::log_1(&wiring_summary(anchors, cards, streams).into());
}

fn wiring_summary(anchors: usize, cards: usize, streams: usize) -> String {
    format!(
        "Page wired: {anchors} anchor links, {cards} cards observed, {streams} live stream panels"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiring_summary_reports_each_count() {
        assert_eq!(
            wiring_summary(5, 22, 3),
            "Page wired: 5 anchor links, 22 cards observed, 3 live stream panels"
        );
        assert_eq!(
            wiring_summary(0, 0, 0),
            "Page wired: 0 anchor links, 0 cards observed, 0 live stream panels"
        );
    }
}
