use leptos::prelude::*;

use flood_watch_shared::icons::status_color;
use flood_watch_shared::map_view::MAP_ELEMENT_ID;
use flood_watch_shared::{DistrictRecord, FloodStatus, districts, status_counts};

use crate::live_streams::LiveStreams;
use crate::news::NewsTicker;

/// In-page navigation: (fragment, label).
pub(crate) const NAV_LINKS: [(&str, &str); 5] = [
    ("#map", "Flood Map"),
    ("#areas", "Affected Areas"),
    ("#updates", "Live Updates"),
    ("#resources", "Resources"),
    ("#live", "Live Coverage"),
];

pub(crate) struct EmergencyResource {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
}

pub(crate) static RESOURCES: [EmergencyResource; 4] = [
    EmergencyResource {
        icon: "fas fa-phone-alt",
        title: "Disaster Management Centre",
        detail: "Hotline 117",
        href: "tel:117",
    },
    EmergencyResource {
        icon: "fas fa-ambulance",
        title: "Ambulance (Suwa Seriya)",
        detail: "Call 1990",
        href: "tel:1990",
    },
    EmergencyResource {
        icon: "fas fa-shield-alt",
        title: "Police Emergency",
        detail: "Call 119",
        href: "tel:119",
    },
    EmergencyResource {
        icon: "fas fa-cloud-rain",
        title: "Department of Meteorology",
        detail: "Weather warnings and forecasts",
        href: "https://www.meteo.gov.lk",
    },
];

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Header />
        <main>
            <MapSection />
            <AreasSection records=districts() />
            <UpdatesSection />
            <ResourcesSection />
            <LiveStreams />
        </main>
        <footer class="site-footer">
            <p>"Information is indicative only. Follow official instructions from the Disaster Management Centre."</p>
        </footer>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="logo">
                <i class="fas fa-water"></i>
                <span>"Sri Lanka Flood Watch"</span>
            </div>
            <nav>
                <ul>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
fn MapSection() -> impl IntoView {
    view! {
        <section id="map" class="map-section">
            <h2>"Flood Status Map"</h2>
            <div id=MAP_ELEMENT_ID class="flood-map"></div>
            <StatusLegend />
        </section>
    }
}

#[component]
fn StatusLegend() -> impl IntoView {
    let counts = status_counts(districts());
    view! {
        <ul class="map-legend">
            {counts
                .into_iter()
                .map(|(status, count)| {
                    let swatch = format!("background: {};", status_color(status));
                    view! {
                        <li class=format!("legend-item {}", status.as_str())>
                            <span class="legend-swatch" style=swatch></span>
                            {format!("{} ({count})", status.label())}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn AreasSection(records: &'static [DistrictRecord]) -> impl IntoView {
    view! {
        <section id="areas" class="areas-section">
            <h2>"Affected Areas"</h2>
            <div class="areas-grid">
                {records
                    .iter()
                    .map(|record| view! { <AreaCard record=*record /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AreaCard(record: DistrictRecord) -> impl IntoView {
    let icon = match record.status {
        FloodStatus::Critical => "fas fa-exclamation-triangle",
        FloodStatus::Warning => "fas fa-exclamation-circle",
        FloodStatus::Alert => "fas fa-info-circle",
    };
    view! {
        <div class="area-card" id=record.slug() data-status=record.status.as_str()>
            <h3>{record.name}</h3>
            <p class=format!("status {}", record.status.as_str())>
                <i class=icon></i>
                " "
                {record.status.label()}
            </p>
            <p>{record.description}</p>
        </div>
    }
}

#[component]
fn UpdatesSection() -> impl IntoView {
    view! {
        <section id="updates" class="updates-section">
            <h2>"Live Updates"</h2>
            <div class="news-card">
                <NewsTicker />
            </div>
        </section>
    }
}

#[component]
fn ResourcesSection() -> impl IntoView {
    view! {
        <section id="resources" class="resources-section">
            <h2>"Emergency Resources"</h2>
            <div class="resources-grid">
                {RESOURCES
                    .iter()
                    .map(|resource| view! {
                        <div class="resource-card">
                            <i class=resource.icon></i>
                            <h3>{resource.title}</h3>
                            <a href=resource.href>{resource.detail}</a>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_in_page_fragments() {
        for (href, _) in NAV_LINKS {
            assert!(crate::scroll::fragment_selector(href).is_ok(), "{href}");
        }
    }

    #[test]
    fn resources_link_somewhere() {
        for resource in &RESOURCES {
            assert!(resource.href.starts_with("tel:") || resource.href.starts_with("https://"));
        }
    }
}
