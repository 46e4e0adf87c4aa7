use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::{NAV_HEADER_OFFSET_PX, NAV_REVEAL_MARGIN_PX, NAV_SCROLL_DELAY_MS};

/// The sticky bar shows once the hero is almost scrolled past.
pub fn nav_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height - NAV_REVEAL_MARGIN_PX
}

/// Element id for an in-page link, `None` for anything else.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll position that puts an element right under the fixed header.
pub fn scroll_destination(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y + NAV_HEADER_OFFSET_PX
}

fn smooth_scroll(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls to the element named by `href` after a short delay, so a closing
/// mobile menu does not shift the layout under the measurement.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target_id(href) else {
        return;
    };
    let id = id.to_string();
    Timeout::new(NAV_SCROLL_DELAY_MS, move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let target = window
            .document()
            .and_then(|document| document.get_element_by_id(&id));
        match target {
            Some(element) => {
                let top = element.get_bounding_client_rect().top();
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                debug!("scrolling to #{}", id);
                smooth_scroll(scroll_destination(top, scroll_y));
            }
            None => warn!("no element with id `{}` to scroll to", id),
        }
    })
    .forget();
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn smooth_scroll_to_top() {
    smooth_scroll(0.0);
}

/// Click handler for a link: in-page anchors get the delayed smooth scroll,
/// any other href keeps the browser default. `before` runs first either way.
pub fn link_onclick(href: &str, before: Callback<()>) -> Callback<MouseEvent> {
    let href = href.to_string();
    Callback::from(move |e: MouseEvent| {
        before.emit(());
        if anchor_target_id(&href).is_some() {
            e.prevent_default();
            scroll_to_anchor(&href);
        }
    })
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Runs `handler` on every `event` fired at the window, and once right away.
/// The listener is removed when the component unmounts.
#[hook]
pub fn use_window_event<F>(event: &'static str, handler: F)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                handler();
                let callback = Closure::<dyn Fn()>::new(handler);
                match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
                    Ok(()) => Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }),
                    Err(_) => {
                        warn!("could not listen to `{}` events", event);
                        Box::new(|| ())
                    }
                }
            } else {
                Box::new(|| ())
            };
            move || {
                destructor();
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(0.0, 900.0, false)]
    #[case(800.0, 900.0, false)]
    #[case(800.5, 900.0, true)]
    #[case(2000.0, 900.0, true)]
    fn test_nav_visible(#[case] scroll_y: f64, #[case] viewport: f64, #[case] expected: bool) {
        assert_eq!(nav_visible(scroll_y, viewport), expected);
    }

    #[rstest]
    #[case("#about", Some("about"))]
    #[case("#", None)]
    #[case("", None)]
    #[case("https://wa.me/55", None)]
    #[case("/privacy", None)]
    fn test_anchor_target_id(#[case] href: &str, #[case] expected: Option<&str>) {
        assert_eq!(anchor_target_id(href), expected);
    }

    #[test]
    fn test_destination_leaves_room_for_header() {
        assert_eq!(scroll_destination(400.0, 1200.0), 1510.0);
        assert_eq!(scroll_destination(-300.0, 1200.0), 810.0);
    }
}
