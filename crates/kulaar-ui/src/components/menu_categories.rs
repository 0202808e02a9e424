//! Menu Categories Component
//!
//! Horizontal navigation of anchor links to the menu sections. The link
//! matching the scroll-spy's active section carries the `active` class.
//! Clicks are intercepted so the page can smooth-scroll instead of jumping.

use dioxus::prelude::*;
use kulaar_core::MenuSection;

/// A single navigation link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryLink {
    /// Anchor href, `#<section id>`
    pub href: String,
    pub label: String,
}

impl CategoryLink {
    pub fn for_section(section: &MenuSection) -> Self {
        Self {
            href: section.href(),
            label: section.title.clone(),
        }
    }
}

/// Build navigation links for every section, in page order
pub fn category_links(sections: &[MenuSection]) -> Vec<CategoryLink> {
    sections.iter().map(CategoryLink::for_section).collect()
}

/// CSS class for a link given the active section id
pub fn link_class(href: &str, active: Option<&str>) -> &'static str {
    match (href.strip_prefix('#'), active) {
        (Some(id), Some(active)) if id == active => "active",
        _ => "",
    }
}

/// Properties for the MenuCategories component
#[derive(Clone, PartialEq, Props)]
pub struct MenuCategoriesProps {
    pub links: Vec<CategoryLink>,
    /// Id of the section currently in view
    pub active: Option<String>,
    /// Called with the clicked link's href; default navigation is cancelled
    pub on_select: EventHandler<String>,
}

/// Category navigation bar
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MenuCategories {
///         links: category_links(&catalog.sections),
///         active: active_section(),
///         on_select: move |href| scroll_to_anchor(href),
///     }
/// }
/// ```
#[component]
pub fn MenuCategories(props: MenuCategoriesProps) -> Element {
    let active = props.active.clone();

    rsx! {
        nav { class: "menu-categories", "aria-label": "Разделы меню",
            for link in props.links.iter() {
                {
                    let href = link.href.clone();
                    let class = link_class(&link.href, active.as_deref());
                    let on_select = props.on_select;
                    rsx! {
                        a {
                            key: "{link.href}",
                            href: "{link.href}",
                            class: "{class}",
                            "aria-current": if class == "active" { "true" } else { "false" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_select.call(href.clone());
                            },
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kulaar_core::Catalog;

    #[test]
    fn links_follow_section_order() {
        let catalog = Catalog::default_menu();
        let links = category_links(&catalog.sections);
        assert_eq!(links.len(), catalog.sections.len());
        assert_eq!(links[0].href, "#menu");
        assert_eq!(links[0].label, catalog.sections[0].title);
    }

    #[test]
    fn only_active_href_gets_class() {
        assert_eq!(link_class("#menu", Some("menu")), "active");
        assert_eq!(link_class("#salads", Some("menu")), "");
        assert_eq!(link_class("#menu", None), "");
        assert_eq!(link_class("menu", Some("menu")), "");
    }
}
