//! Webview bridge.
//!
//! Layout metrics and window-level events only exist inside the webview,
//! so they are reached through small scripts run with `document::eval`.
//! Every helper here returns `StorefrontResult`; callers log failures and
//! carry on, since a missing element just means there is nothing to do.

use dioxus::prelude::*;
use kulaar_core::{SectionBounds, StorefrontError, StorefrontResult};
use serde::Deserialize;

/// Event forwarded from the page-level listener script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageEvent {
    /// Window scrolled to `y`
    Scroll { y: f64 },
    /// Window resized to `width` (not debounced)
    Resize { width: f64 },
    /// Key pressed anywhere on the page
    Key { key: String },
    /// A reveal section crossed the intersection threshold
    Reveal { id: String, ratio: f64 },
}

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn bridge_err(context: &str, err: impl std::fmt::Debug) -> StorefrontError {
    StorefrontError::Bridge(format!("{}: {:?}", context, err))
}

/// Install window listeners and return the channel they report through.
///
/// The intersection observer is only installed when `reveal_threshold` is
/// given, so a page never runs two reveal mechanisms at once.
pub fn listen_page_events(reveal_threshold: Option<f64>) -> document::Eval {
    let observer = match reveal_threshold {
        Some(threshold) => format!(
            r#"
            const observer = new IntersectionObserver((entries) => {{
                entries.forEach((entry) => {{
                    if (entry.isIntersecting) {{
                        dioxus.send({{ kind: "reveal", id: entry.target.id, ratio: entry.intersectionRatio }});
                    }}
                }});
            }}, {{ threshold: {threshold} }});
            document.querySelectorAll("section.reveal").forEach((el) => observer.observe(el));
            "#
        ),
        None => String::new(),
    };

    document::eval(&format!(
        r#"
        window.addEventListener("scroll", () => {{
            dioxus.send({{ kind: "scroll", y: window.scrollY }});
        }}, {{ passive: true }});
        window.addEventListener("resize", () => {{
            dioxus.send({{ kind: "resize", width: window.innerWidth }});
        }});
        document.addEventListener("keydown", (e) => {{
            dioxus.send({{ kind: "key", key: e.key }});
        }});
        {observer}
        await new Promise(() => {{}});
        "#
    ))
}

pub async fn viewport_width() -> StorefrontResult<f64> {
    document::eval("return window.innerWidth;")
        .join::<f64>()
        .await
        .map_err(|e| bridge_err("viewport width", e))
}

pub async fn scroll_y() -> StorefrontResult<f64> {
    document::eval("return window.scrollY;")
        .join::<f64>()
        .await
        .map_err(|e| bridge_err("scroll position", e))
}

/// Page-coordinate extents of the given sections. Ids with no element are
/// left out.
pub async fn measure_sections(ids: &[String]) -> StorefrontResult<Vec<SectionBounds>> {
    let ids_json =
        serde_json::to_string(ids).map_err(|e| bridge_err("encode section ids", e))?;
    document::eval(&format!(
        r#"
        const ids = {ids_json};
        return ids
            .map((id) => document.getElementById(id))
            .filter((el) => el !== null)
            .map((el) => ({{ id: el.id, top: el.offsetTop, height: el.offsetHeight }}));
        "#
    ))
    .join::<Vec<SectionBounds>>()
    .await
    .map_err(|e| bridge_err("measure sections", e))
}

/// Smoothly scroll so the element's top aligns with the viewport top.
pub async fn smooth_scroll_to(id: &str) -> StorefrontResult<()> {
    document::eval(&format!(
        r#"
        const el = document.getElementById({id});
        if (el) el.scrollIntoView({{ behavior: "smooth", block: "start" }});
        return null;
        "#,
        id = js_string(id)
    ))
    .join::<serde_json::Value>()
    .await
    .map(|_| ())
    .map_err(|e| bridge_err("smooth scroll", e))
}

/// Apply the body `overflow` style; an empty value clears it.
pub async fn set_body_overflow(value: &str) -> StorefrontResult<()> {
    document::eval(&format!(
        "document.body.style.overflow = {}; return null;",
        js_string(value)
    ))
    .join::<serde_json::Value>()
    .await
    .map(|_| ())
    .map_err(|e| bridge_err("body overflow", e))
}

pub async fn rail_scroll_left(rail_id: &str) -> StorefrontResult<f64> {
    document::eval(&format!(
        r#"
        const el = document.getElementById({id});
        return el ? el.scrollLeft : 0;
        "#,
        id = js_string(rail_id)
    ))
    .join::<f64>()
    .await
    .map_err(|e| bridge_err("rail offset", e))
}

/// Move a rail to `left`, instantly or with smooth scrolling.
pub async fn set_rail_scroll_left(rail_id: &str, left: f64, smooth: bool) -> StorefrontResult<()> {
    let behavior = if smooth { "smooth" } else { "auto" };
    document::eval(&format!(
        r#"
        const el = document.getElementById({id});
        if (el) el.scrollTo({{ left: {left}, behavior: "{behavior}" }});
        return null;
        "#,
        id = js_string(rail_id)
    ))
    .join::<serde_json::Value>()
    .await
    .map(|_| ())
    .map_err(|e| bridge_err("rail scroll", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_events_decode_from_tagged_json() {
        let scroll: PageEvent = serde_json::from_str(r#"{"kind":"scroll","y":420.5}"#).unwrap();
        assert_eq!(scroll, PageEvent::Scroll { y: 420.5 });

        let key: PageEvent = serde_json::from_str(r#"{"kind":"key","key":"Escape"}"#).unwrap();
        assert_eq!(key, PageEvent::Key { key: "Escape".to_string() });

        let reveal: PageEvent =
            serde_json::from_str(r#"{"kind":"reveal","id":"menu","ratio":0.25}"#).unwrap();
        assert_eq!(
            reveal,
            PageEvent::Reveal { id: "menu".to_string(), ratio: 0.25 }
        );
    }

    #[test]
    fn js_strings_are_escaped() {
        assert_eq!(js_string("menu"), "\"menu\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
    }
}
