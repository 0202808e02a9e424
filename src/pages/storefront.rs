//! Storefront page - the whole catering menu on one scrolling page.
//!
//! Wires window-level events to the storefront state:
//! - scroll: scroll-spy highlighting of the category navigation
//! - resize: debounced re-measure of sections and drag enablement
//! - keydown: Escape closes the cart
//! - load: one reveal mechanism, stagger or intersection

use dioxus::prelude::*;
use kulaar_core::{stagger_schedule, Debouncer, RevealMode, Storefront};
use kulaar_ui::{category_links, CartButton, MenuCategories, ToastStack};

use crate::actions;
use crate::bridge::{self, PageEvent};
use crate::components::{CartModal, MenuBlock};
use crate::context::use_storefront;

/// Re-measure sections and the viewport, then update the scroll-spy.
async fn refresh_layout(mut store: Signal<Storefront>) {
    let ids = store.read().catalog().section_ids();

    match bridge::viewport_width().await {
        Ok(width) => {
            store.write().set_viewport_width(width);
        }
        Err(e) => tracing::warn!("Could not read viewport width: {}", e),
    }

    match bridge::measure_sections(&ids).await {
        Ok(bounds) => store.write().spy.set_sections(bounds),
        Err(e) => tracing::warn!("Could not measure sections: {}", e),
    }

    if let Ok(y) = bridge::scroll_y().await {
        observe_scroll(store, y);
    }
}

/// Feed a scroll position to the scroll-spy, writing state only when the
/// active section actually changes.
fn observe_scroll(mut store: Signal<Storefront>, y: f64) {
    let changes = {
        let current = store.read();
        current
            .spy
            .section_at(y)
            .is_some_and(|section| current.spy.active() != Some(section.id.as_str()))
    };
    if changes {
        store.write().spy.observe(y);
    }
}

fn reveal(mut store: Signal<Storefront>, id: &str, ratio: f64) {
    let (threshold, visible) = {
        let current = store.read();
        (current.config().reveal_threshold, current.reveal.is_visible(id))
    };
    if !visible {
        store.write().reveal.on_intersection(id, ratio, threshold);
    }
}

fn start_stagger_reveal(mut store: Signal<Storefront>) {
    let (ids, step) = {
        let current = store.read();
        (current.catalog().section_ids(), current.config().reveal_stagger())
    };
    let delays = stagger_schedule(ids.len(), step);

    for (id, delay) in ids.into_iter().zip(delays) {
        spawn(async move {
            tokio::time::sleep(delay).await;
            store.write().reveal.mark_visible(&id);
        });
    }
}

#[component]
pub fn StorefrontPage() -> Element {
    let mut store = use_storefront();
    let debouncer = use_hook(|| Debouncer::new(store.read().config().resize_debounce()));

    // Page events: installed once the page is in the webview
    let on_mounted = move |_: MountedEvent| {
        let debouncer = debouncer.clone();
        let (mode, threshold) = {
            let current = store.read();
            (current.config().reveal_mode, current.config().reveal_threshold)
        };

        spawn(async move {
            refresh_layout(store).await;

            let reveal_threshold = match mode {
                RevealMode::Intersection => Some(threshold),
                RevealMode::Stagger => {
                    start_stagger_reveal(store);
                    None
                }
            };

            store.read().log_ready();

            let mut events = bridge::listen_page_events(reveal_threshold);
            loop {
                let event = match events.recv::<PageEvent>().await {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!("Page event channel closed: {:?}", e);
                        break;
                    }
                };

                match event {
                    PageEvent::Scroll { y } => observe_scroll(store, y),
                    PageEvent::Resize { width } => {
                        tracing::trace!(width, "Window resized");
                        let ticket = debouncer.trigger();
                        let debouncer = debouncer.clone();
                        spawn(async move {
                            if debouncer.settle(ticket).await {
                                refresh_layout(store).await;
                            }
                        });
                    }
                    PageEvent::Key { key } => {
                        let open = store.read().modal.is_open();
                        if open && store.write().modal.dismiss_on_key(&key) {
                            tracing::debug!("Cart modal closed with {}", key);
                        }
                    }
                    PageEvent::Reveal { id, ratio } => reveal(store, &id, ratio),
                }
            }
        });
    };

    // Body scroll lock follows the modal, and only the modal
    let overflow = use_memo(move || store.read().modal.body_overflow());
    use_effect(move || actions::sync_scroll_lock(overflow()));

    let current = store.read();
    let brand = current.config().brand_name.clone();
    let sections = current.catalog().sections.clone();
    let links = category_links(&sections);
    let active = current.spy.active().map(str::to_string);
    let badge = current.cart.badge();
    let toasts: Vec<_> = current.toasts.iter().cloned().collect();
    drop(current);

    rsx! {
        div { class: "storefront", onmounted: on_mounted,
            header { class: "site-header",
                h1 { class: "brand", "{brand}" }
                CartButton {
                    badge: badge,
                    on_open: move |_| store.write().open_cart(),
                }
            }

            MenuCategories {
                links: links,
                active: active,
                on_select: move |href: String| actions::scroll_to_anchor(href),
            }

            main { class: "menu",
                for section in sections.into_iter() {
                    MenuBlock { key: "{section.id}", section: section.clone() }
                }
            }

            CartModal {}
            ToastStack { toasts: toasts }
        }
    }
}
