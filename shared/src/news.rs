use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    /// Age of the item when the page loaded.
    pub minutes_ago: u32,
    pub text: &'static str,
}

impl NewsItem {
    /// Relative label once `elapsed_minutes` have passed since load.
    pub fn time_label(&self, elapsed_minutes: u32) -> String {
        relative_time_label(self.minutes_ago.saturating_add(elapsed_minutes))
    }

    pub fn entry(&self, elapsed_minutes: u32) -> NewsEntry {
        NewsEntry {
            time: self.time_label(elapsed_minutes),
            content: self.text,
        }
    }
}

/// A rendered feed row: relative time label plus text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsEntry {
    pub time: String,
    pub content: &'static str,
}

pub static NEWS_ITEMS: [NewsItem; 6] = [
    NewsItem {
        minutes_ago: 0,
        text: "Flash flood warning issued for Kelani River basin. Residents advised to evacuate immediately.",
    },
    NewsItem {
        minutes_ago: 5,
        text: "Water levels rising rapidly in Colombo suburbs. Avoid low-lying areas near Beira Lake.",
    },
    NewsItem {
        minutes_ago: 12,
        text: "Emergency services responding to multiple distress calls in Hanwella and Kesbewa areas.",
    },
    NewsItem {
        minutes_ago: 25,
        text: "Weather department issues red alert for Western and Sabaragamuwa provinces until further notice.",
    },
    NewsItem {
        minutes_ago: 42,
        text: "Power supply disrupted in parts of Gampaha and Kalutara due to flooding. Restoration work underway.",
    },
    NewsItem {
        minutes_ago: 60,
        text: "Public transportation severely affected. Bus services suspended on several routes.",
    },
];

pub fn news_items() -> &'static [NewsItem] {
    &NEWS_ITEMS
}

pub fn relative_time_label(minutes: u32) -> String {
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return ago(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return ago(hours, "hour");
    }
    ago(hours / 24, "day")
}

fn ago(count: u32, unit: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}
