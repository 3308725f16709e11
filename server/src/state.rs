use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use chrono::Utc;
use flood_watch_shared::etag::content_etag;
use flood_watch_shared::{NewsEntry, districts, news_items};

/// JSON payload serialized once at startup, with its ETag.
#[derive(Debug, Clone)]
pub struct CachedPayload {
    pub json: Arc<Bytes>,
    pub etag: String,
}

impl CachedPayload {
    fn new(prefix: &str, json: Vec<u8>) -> Self {
        let etag = content_etag(prefix, &json);
        Self {
            json: Arc::new(Bytes::from(json)),
            etag,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub districts: CachedPayload,
    pub news: CachedPayload,
    pub district_count: usize,
    pub news_count: usize,
    pub static_dir: String,
    pub started_at: String,
    pub observability: Arc<ObservabilityCounters>,
}

#[derive(Debug, Default)]
pub struct ObservabilityCounters {
    districts_requests_total: AtomicU64,
    news_requests_total: AtomicU64,
    not_modified_responses_total: AtomicU64,
}

#[derive(Debug, Clone, Copy)]
pub struct ObservabilitySnapshot {
    pub districts_requests_total: u64,
    pub news_requests_total: u64,
    pub not_modified_responses_total: u64,
}

impl ObservabilityCounters {
    pub fn snapshot(&self) -> ObservabilitySnapshot {
        ObservabilitySnapshot {
            districts_requests_total: self.districts_requests_total.load(Ordering::Relaxed),
            news_requests_total: self.news_requests_total.load(Ordering::Relaxed),
            not_modified_responses_total: self
                .not_modified_responses_total
                .load(Ordering::Relaxed),
        }
    }

    pub fn record_districts_request(&self) {
        self.districts_requests_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_news_request(&self) {
        self.news_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_not_modified(&self) {
        self.not_modified_responses_total
            .fetch_add(1, Ordering::Relaxed);
    }
}

impl AppState {
    pub fn new(static_dir: String) -> Result<Self, serde_json::Error> {
        let districts_json = serde_json::to_vec(districts())?;
        let entries: Vec<NewsEntry> = news_items().iter().map(|item| item.entry(0)).collect();
        let news_json = serde_json::to_vec(&entries)?;

        Ok(Self {
            districts: CachedPayload::new("districts", districts_json),
            news: CachedPayload::new("news", news_json),
            district_count: districts().len(),
            news_count: entries.len(),
            static_dir,
            started_at: Utc::now().to_rfc3339(),
            observability: Arc::new(ObservabilityCounters::default()),
        })
    }
}
