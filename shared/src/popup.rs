use std::fmt::Write;

use crate::district::DistrictRecord;

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup markup bound to a district marker.
pub fn popup_html(record: &DistrictRecord) -> String {
    let mut out = String::with_capacity(160 + record.description.len());
    let _ = write!(
        out,
        r#"<div class="popup-content"><h3>{}</h3><p class="status {}">{}</p><p>{}</p></div>"#,
        escape_html(record.name),
        record.status.as_str(),
        record.status.label(),
        escape_html(record.description),
    );
    out
}
