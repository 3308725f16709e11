use std::cell::RefCell;
use std::fmt::{self, Write as _};

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use flood_watch_shared::popup::escape_html;
use flood_watch_shared::{NewsEntry, NewsItem, news_items};

/// Delay before the placeholder is swapped for the feed.
pub const POPULATE_DELAY_MS: u32 = 500;
pub const REFRESH_INTERVAL_MS: u32 = 60_000;
pub const NEWS_CONTAINER_ID: &str = "dynamic-updates";
pub const NEWS_ERROR_MESSAGE: &str = "Failed to load updates. Please try again later.";
const LOADING_MARKUP: &str =
    r#"<div class="loading-updates"><i class="fas fa-spinner fa-spin"></i> Loading latest updates...</div>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    Unavailable(String),
}

impl fmt::Display for NewsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "news unavailable: {reason}"),
        }
    }
}

/// Where feed items come from.
pub trait NewsSource {
    fn fetch(&self) -> Result<Vec<NewsItem>, NewsError>;
}

/// Fixed bulletin list bundled with the page.
pub struct SimulatedNewsSource;

impl NewsSource for SimulatedNewsSource {
    fn fetch(&self) -> Result<Vec<NewsItem>, NewsError> {
        Ok(news_items().to_vec())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewsFeed {
    Loading,
    Loaded {
        items: Vec<NewsItem>,
        loaded_at_ms: f64,
        elapsed_minutes: u32,
    },
    Failed,
}

impl NewsFeed {
    pub fn populate(source: &impl NewsSource, now_ms: f64) -> Result<Self, NewsError> {
        let items = source.fetch()?;
        Ok(Self::Loaded {
            items,
            loaded_at_ms: now_ms,
            elapsed_minutes: 0,
        })
    }

    /// Re-derive item ages from the wall clock. Only a loaded feed ages.
    pub fn refresh(&mut self, now_ms: f64) {
        if let Self::Loaded {
            loaded_at_ms,
            elapsed_minutes,
            ..
        } = self
        {
            let minutes = ((now_ms - *loaded_at_ms) / 60_000.0).floor();
            *elapsed_minutes = minutes.clamp(0.0, f64::from(u32::MAX)) as u32;
        }
    }

    pub fn entries(&self) -> Vec<NewsEntry> {
        match self {
            Self::Loaded {
                items,
                elapsed_minutes,
                ..
            } => items.iter().map(|item| item.entry(*elapsed_minutes)).collect(),
            Self::Loading | Self::Failed => Vec::new(),
        }
    }
}

thread_local! {
    static REFRESH_INTERVAL: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

/// Contents of `#dynamic-updates` for a feed state.
pub fn feed_markup(feed: &NewsFeed) -> String {
    match feed {
        NewsFeed::Loading => LOADING_MARKUP.to_owned(),
        NewsFeed::Failed => format!(r#"<div class="error-message">{NEWS_ERROR_MESSAGE}</div>"#),
        NewsFeed::Loaded { .. } => {
            let entries = feed.entries();
            let mut out = String::with_capacity(entries.len() * 160);
            for entry in &entries {
                let _ = write!(
                    out,
                    r#"<div class="update-item"><span class="update-time">{}</span><p>{}</p></div>"#,
                    escape_html(&entry.time),
                    escape_html(entry.content),
                );
            }
            out
        }
    }
}

/// Feed to show after a population attempt, plus the console line for a failure.
fn settle(result: Result<NewsFeed, NewsError>) -> (NewsFeed, Option<String>) {
    match result {
        Ok(feed) => (feed, None),
        Err(e) => (NewsFeed::Failed, Some(format!("Error fetching news: {e}"))),
    }
}

fn start_feed(feed: RwSignal<NewsFeed>, source: impl NewsSource + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(POPULATE_DELAY_MS).await;

        let (settled, failure) = settle(NewsFeed::populate(&source, js_sys::Date::now()));
        feed.set(settled);
        if let Some(message) = failure {
            web_sys::console::error_1(&message.into());
            return;
        }

        let interval = Interval::new(REFRESH_INTERVAL_MS, move || {
            feed.update(|f| f.refresh(js_sys::Date::now()));
        });
        REFRESH_INTERVAL.with(|slot| {
            // Dropping the previous interval cancels it.
            *slot.borrow_mut() = Some(interval);
        });
    });
}

#[component]
pub fn NewsTicker() -> impl IntoView {
    let feed = RwSignal::new(NewsFeed::Loading);

    Effect::new(move || {
        start_feed(feed, SimulatedNewsSource);
    });

    view! {
        <div
            id=NEWS_CONTAINER_ID
            class="updates-container"
            inner_html=move || feed.with(feed_markup)
        ></div>
    }
}
