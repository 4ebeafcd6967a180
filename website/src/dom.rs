//! Browser page geometry and timers

use std::time::Duration;

use folio_core::{LayoutProvider, Section, SectionId};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Section offsets read from the rendered page.
///
/// Each section element carries its [`SectionId::as_str`] as DOM id. A
/// section that is not mounted yet reports offset 0.
pub struct DomLayout;

impl LayoutProvider for DomLayout {
    fn section_offsets(&self) -> Vec<Section> {
        let document = web_sys::window().and_then(|w| w.document());
        SectionId::ALL
            .into_iter()
            .map(|id| {
                let top = document
                    .as_ref()
                    .and_then(|d| d.get_element_by_id(id.as_str()))
                    .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                    .map(|el| el.offset_top().max(0) as u32)
                    .unwrap_or(0);
                Section::new(id, top)
            })
            .collect()
    }
}

/// Current vertical scroll offset in CSS pixels
pub fn scroll_y() -> u32 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .map(|y| y.max(0.0) as u32)
        .unwrap_or(0)
}

/// Height of the viewport in CSS pixels
pub fn viewport_height() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .map(|h| h.max(0.0) as u32)
        .unwrap_or(0)
}

/// Smooth-scroll the section into view
pub fn scroll_to_section(id: SectionId) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id.as_str()));
    match element {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No element for section {}", id),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Resolve after `delay` on the browser's timer queue.
///
/// Fails when there is no window or the timer cannot be scheduled.
pub async fn sleep(delay: Duration) -> Result<(), JsValue> {
    let millis = delay.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let scheduled = match web_sys::window() {
            Some(window) => window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .map(|_| ()),
            None => Err(JsValue::from_str("no window to schedule a timer on")),
        };
        if let Err(err) = scheduled {
            if let Err(e) = reject.call1(&JsValue::NULL, &err) {
                log::error!("Failed to reject timer promise: {:?}", e);
            }
        }
    });
    JsFuture::from(promise).await.map(|_| ())
}
