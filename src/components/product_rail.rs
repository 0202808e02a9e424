//! Product Rail Component
//!
//! Horizontally scrolling row of product cards. On narrow viewports the
//! rail can be dragged with the mouse or a finger; arrow buttons scroll it
//! one step at a time at any width.

use dioxus::prelude::*;
use kulaar_core::{rail_scroll_target, DragScroll, MenuSection, RailDirection, Storefront};
use kulaar_ui::{IconButton, ProductCard};

use crate::actions;
use crate::bridge;
use crate::context::use_storefront;

#[derive(Props, Clone, PartialEq)]
pub struct ProductRailProps {
    pub section: MenuSection,
}

/// Begin a drag session at pointer `x`, reading the rail's current offset.
/// The session is dropped if the pointer comes up before the offset arrives.
fn start_drag(mut drag: Signal<DragScroll>, rail_id: String, x: f64) {
    let token = drag.write().arm();
    spawn(async move {
        match bridge::rail_scroll_left(&rail_id).await {
            Ok(left) => {
                if !drag.write().press_armed(token, x, left) {
                    tracing::trace!("Drag on {} released before it started", rail_id);
                }
            }
            Err(e) => tracing::warn!("Drag start on {} failed: {}", rail_id, e),
        }
    });
}

/// Follow the pointer while a session is active.
fn follow_drag(drag: Signal<DragScroll>, rail_id: String, x: f64) -> bool {
    let Some(left) = drag.read().move_to(x) else {
        return false;
    };
    spawn(async move {
        if let Err(e) = bridge::set_rail_scroll_left(&rail_id, left, false).await {
            tracing::warn!("Drag scroll on {} failed: {}", rail_id, e);
        }
    });
    true
}

fn step_rail(store: Signal<Storefront>, rail_id: String, direction: RailDirection) {
    let step = store.read().config().rail_step_px;
    spawn(async move {
        let result = async {
            let current = bridge::rail_scroll_left(&rail_id).await?;
            let target = rail_scroll_target(current, step, direction);
            bridge::set_rail_scroll_left(&rail_id, target, true).await
        }
        .await;
        if let Err(e) = result {
            tracing::warn!("Rail step on {} failed: {}", rail_id, e);
        }
    });
}

#[component]
pub fn ProductRail(props: ProductRailProps) -> Element {
    let store = use_storefront();
    let multiplier = store.read().config().drag_speed_multiplier;
    let mut drag = use_signal(|| DragScroll::new(multiplier));

    let section_id = props.section.id.clone();
    let rail_id = format!("rail-{}", section_id);
    let drag_enabled = store.read().drag_enabled();

    let rail_class = if drag_enabled {
        "horizontal-scroll draggable"
    } else {
        "horizontal-scroll"
    };

    // Handlers stay attached but do nothing above the breakpoint.
    let press_rail = rail_id.clone();
    let move_rail = rail_id.clone();
    let touch_press_rail = rail_id.clone();
    let touch_move_rail = rail_id.clone();
    let back_rail = rail_id.clone();
    let forward_rail = rail_id.clone();

    rsx! {
        div { class: "rail-wrapper",
            IconButton {
                class: "rail-arrow back".to_string(),
                aria_label: "Назад".to_string(),
                onclick: move |_| step_rail(store, back_rail.clone(), RailDirection::Back),
                "‹"
            }

            div {
                id: "{rail_id}",
                class: "{rail_class}",

                onmousedown: move |evt: MouseEvent| {
                    if drag_enabled {
                        start_drag(drag, press_rail.clone(), evt.page_coordinates().x);
                    }
                },
                onmousemove: move |evt: MouseEvent| {
                    if follow_drag(drag, move_rail.clone(), evt.page_coordinates().x) {
                        evt.prevent_default();
                    }
                },
                onmouseup: move |_| drag.write().release(),
                onmouseleave: move |_| drag.write().release(),

                ontouchstart: move |evt: TouchEvent| {
                    if !drag_enabled {
                        return;
                    }
                    if let Some(touch) = evt.touches().first() {
                        start_drag(drag, touch_press_rail.clone(), touch.page_coordinates().x);
                    }
                },
                ontouchmove: move |evt: TouchEvent| {
                    if let Some(touch) = evt.touches().first() {
                        if follow_drag(drag, touch_move_rail.clone(), touch.page_coordinates().x) {
                            evt.prevent_default();
                        }
                    }
                },
                ontouchend: move |_| drag.write().release(),

                for (index, product) in props.section.products.iter().enumerate() {
                    {
                        let section_id = section_id.clone();
                        rsx! {
                            ProductCard {
                                key: "{section_id}-{index}",
                                product: product.clone(),
                                on_add: move |_| actions::add_to_cart(store, &section_id, index),
                            }
                        }
                    }
                }
            }

            IconButton {
                class: "rail-arrow forward".to_string(),
                aria_label: "Вперёд".to_string(),
                onclick: move |_| step_rail(store, forward_rail.clone(), RailDirection::Forward),
                "›"
            }
        }
    }
}
