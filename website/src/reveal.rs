//! Scroll-triggered entrance animations
//!
//! Sections reveal once, the first time they scroll into view. Items inside
//! a section get inline transition styles built from the shared
//! choreography in [`folio_core::reveal`], so the browser runs the easing.

use folio_core::{in_view, Reveal, RevealItem, DEFAULT_VIEW_MARGIN};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::dom;

/// Signal that turns true once `node` has entered the viewport
pub fn use_reveal(node: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    let check = move || {
        if revealed.get_untracked() {
            return;
        }
        let Some(element) = node.get_untracked() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let scroll_y = dom::scroll_y();
        let top = (rect.top() + f64::from(scroll_y)).max(0.0) as u32;
        let bottom = (rect.bottom() + f64::from(scroll_y)).max(0.0) as u32;
        if in_view(top, bottom, scroll_y, dom::viewport_height(), DEFAULT_VIEW_MARGIN) {
            log::debug!("Revealing {}", element.id());
            set_revealed.set(true);
        }
    };

    // Sections already on screen at load
    Effect::new(move |_| {
        if node.get().is_some() {
            check();
        }
    });

    let handle = window_event_listener(ev::scroll, move |_| check());
    on_cleanup(move || handle.remove());

    revealed
}

/// Signal that turns true once the component's first frame is painted.
///
/// For entrances that play on mount rather than on scroll.
pub fn use_entrance() -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    // Two frames so the start pose is painted before the transition
    request_animation_frame(move || {
        request_animation_frame(move || set_entered.set(true));
    });
    entered
}

/// Inline style for `item`: start pose until `revealed`, then the
/// transition to its resting place.
pub fn reveal_style(item: RevealItem, revealed: bool) -> String {
    let timing = Reveal::for_item(item);
    let transition = format!(
        "transition: opacity {ms}ms {ease} {delay}ms, transform {ms}ms {ease} {delay}ms;",
        ms = timing.duration.as_millis(),
        ease = timing.easing.css(),
        delay = timing.delay.as_millis(),
    );

    if revealed {
        return format!("{} opacity: 1; transform: none;", transition);
    }

    let (dx, dy) = item.initial_offset();
    format!(
        "{} opacity: {}; transform: translate({}px, {}px) scale({});",
        transition,
        item.initial_opacity(),
        dx,
        dy,
        item.initial_scale()
    )
}
