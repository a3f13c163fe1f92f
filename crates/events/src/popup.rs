//! Marker popup markup.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// User-facing strings used inside popups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupLabels {
    pub date: String,
    pub source: String,
    pub source_link: String,
}

impl Default for PopupLabels {
    fn default() -> Self {
        Self {
            date: "Date: ".to_string(),
            source: "Source: ".to_string(),
            source_link: "View details".to_string(),
        }
    }
}

/// Renders the popup body for `event`.
///
/// One image renders inline; several render as a gallery strip in their
/// stored order.
pub fn popup_html(event: &Event, labels: &PopupLabels) -> String {
    let name = escape(&event.name);
    let mut out = String::with_capacity(256);
    out.push_str("<div class=\"event-popup\">");
    out.push_str(&format!("<h3>{name}</h3>"));

    match event.images.as_slice() {
        [] => {}
        [single] => {
            out.push_str(&img_tag(single, &name, None));
        }
        many => {
            out.push_str(&format!(
                "<div class=\"event-images\" data-count=\"{}\">",
                many.len()
            ));
            for (i, src) in many.iter().enumerate() {
                out.push_str(&img_tag(src, &name, Some(i)));
            }
            out.push_str("</div>");
        }
    }

    out.push_str(&format!("<p>{}</p>", escape(&event.description)));
    out.push_str(&format!(
        "<p class=\"event-date\">{}{}</p>",
        escape(&labels.date),
        event.date.format("%Y-%m-%d")
    ));
    if let Some(src) = &event.source {
        out.push_str(&format!(
            "<p class=\"event-source\">{}<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></p>",
            escape(&labels.source),
            escape(src),
            escape(&labels.source_link)
        ));
    }
    out.push_str("</div>");
    out
}

/// Tooltip text for a timeline point.
pub fn tooltip_html(event: &Event) -> String {
    format!(
        "<strong>{}</strong><br>{}",
        escape(&event.name),
        event.date.format("%Y-%m-%d")
    )
}

fn img_tag(src: &str, alt_escaped: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => format!(
            "<img src=\"{}\" alt=\"{alt_escaped}\" class=\"event-image\" data-index=\"{i}\">",
            escape(src)
        ),
        None => format!(
            "<img src=\"{}\" alt=\"{alt_escaped}\" class=\"event-image\">",
            escape(src)
        ),
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::{PopupLabels, escape, popup_html, tooltip_html};
    use crate::store::tests::ev;

    #[test]
    fn escapes_markup_in_text_and_attributes() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        let mut e = ev("<b>Bold</b>", "2020-01-01");
        e.source = Some("https://example.org/?a=1&b=2".to_string());
        let html = popup_html(&e, &PopupLabels::default());
        assert!(html.contains("<h3>&lt;b&gt;Bold&lt;/b&gt;</h3>"));
        assert!(html.contains("href=\"https://example.org/?a=1&amp;b=2\""));
        assert!(html.contains("2020-01-01"));
    }

    #[test]
    fn single_image_is_inline_and_many_form_a_gallery() {
        let mut e = ev("A", "2020-01-01");
        e.images = vec!["one.jpg".to_string()];
        let html = popup_html(&e, &PopupLabels::default());
        assert!(html.contains("<img src=\"one.jpg\""));
        assert!(!html.contains("event-images"));

        e.images = vec!["one.jpg".to_string(), "two.jpg".to_string()];
        let html = popup_html(&e, &PopupLabels::default());
        assert!(html.contains("data-count=\"2\""));
        let first = html.find("one.jpg").unwrap();
        let second = html.find("two.jpg").unwrap();
        assert!(first < second);
        assert!(html.contains("data-index=\"1\""));
    }

    #[test]
    fn no_source_means_no_link() {
        let e = ev("A", "2020-01-01");
        let html = popup_html(&e, &PopupLabels::default());
        assert!(!html.contains("event-source"));
        assert_eq!(tooltip_html(&e), "<strong>A</strong><br>2020-01-01");
    }
}
