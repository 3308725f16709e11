use leptos::prelude::*;
use web_sys::Document;

use flood_watch_shared::channels::{channel_display_name, channel_url};

use crate::dom;

pub const VIDEO_CONTAINER_SELECTOR: &str = ".video-container";
pub const LOADING_CLASS: &str = "loading";
/// Channel slugs in card order.
pub const STREAM_CHANNELS: [&str; 3] = ["sirasa", "derana", "hiru"];

/// Embedding broadcaster streams is unreliable, so each card links out to the
/// channel's own site. Clearing `loading` reveals those links.
pub fn init_live_streams(document: &Document) -> usize {
    let containers = dom::query_all(document, VIDEO_CONTAINER_SELECTOR);
    for container in &containers {
        dom::remove_class(container, LOADING_CLASS);
    }
    web_sys::console::log_1(
        &"Live streams initialized with direct links to official websites".into(),
    );
    containers.len()
}

#[component]
pub fn LiveStreams() -> impl IntoView {
    view! {
        <section id="live" class="live-streams">
            <h2>"Live Coverage"</h2>
            <div class="stream-grid">
                {STREAM_CHANNELS
                    .into_iter()
                    .map(|slug| view! { <StreamCard slug=slug /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StreamCard(slug: &'static str) -> impl IntoView {
    let name = channel_display_name(slug);
    view! {
        <div class="stream-card" data-channel=slug>
            <div class="video-container loading">
                <div class="stream-placeholder">
                    <i class="fas fa-tv"></i>
                    <p>{format!("Watch {name} live coverage")}</p>
                    <a href=channel_url(slug) target="_blank" rel="noopener noreferrer" class="stream-link">
                        {format!("Visit {name}")}
                    </a>
                </div>
            </div>
            <h3>{name}</h3>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use flood_watch_shared::LiveChannel;

    use super::*;

    #[test]
    fn every_card_slug_names_a_known_broadcaster() {
        for slug in STREAM_CHANNELS {
            assert!(LiveChannel::from_slug(slug).is_some(), "{slug}");
            assert!(channel_url(slug).starts_with("https://"), "{slug}");
        }
        let names: Vec<_> = STREAM_CHANNELS.into_iter().map(channel_display_name).collect();
        assert_eq!(names, ["Sirasa", "Derana", "HiruNews"]);
    }
}
