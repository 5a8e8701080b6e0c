//! Viewport visibility for page sections.
//!
//! Browsers with `IntersectionObserver` get a thin wrapper around it; older
//! ones fall back to a scroll listener measuring the element against the
//! same inset viewport. Either way callers only see [`VisibilityEntry`]
//! values and hold a [`Subscription`] that stops the observation on drop.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

/// Browsers report the crossing ratio with some float noise around the threshold.
const RATIO_EPSILON: f64 = 0.001;

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub target_id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// What the observer should do after a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Continue,
    Stop,
}

/// Visibility threshold plus how far the viewport's bottom edge is pulled up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRule {
    pub threshold: f64,
    pub bottom_inset_px: f64,
}

impl ViewportRule {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_inset_px)
    }

    /// Share of the element's height that sits inside the inset viewport.
    pub fn visible_ratio(&self, top: f64, bottom: f64, viewport_height: f64) -> f64 {
        let height = bottom - top;
        if height <= 0.0 {
            return 0.0;
        }
        let view_bottom = (viewport_height - self.bottom_inset_px).max(0.0);
        let visible = bottom.min(view_bottom) - top.max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }

    pub fn qualifies(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio + RATIO_EPSILON >= self.threshold
    }

    pub fn measure(&self, target_id: &str, top: f64, bottom: f64, viewport_height: f64) -> VisibilityEntry {
        let ratio = self.visible_ratio(top, bottom, viewport_height);
        VisibilityEntry {
            target_id: target_id.to_string(),
            is_intersecting: self.qualifies(ratio > 0.0, ratio),
            ratio,
        }
    }
}

/// Handle for a running observation. Dropping it (or calling
/// [`Subscription::unsubscribe`]) stops watching.
#[must_use = "dropping a Subscription stops the observation"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stop();
    }
}

pub type VisibilityCallback = Box<dyn FnMut(&[VisibilityEntry]) -> Observation>;

pub trait VisibilityObserver {
    /// Starts watching the element with the given id. Returns `None` when the
    /// element is not in the document or the browser refuses the observer.
    fn observe(&self, target_id: &str, rule: ViewportRule, on_change: VisibilityCallback) -> Option<Subscription>;
}

/// Picks the best observer the current browser supports.
pub fn browser_observer() -> Option<Box<dyn VisibilityObserver>> {
    let window = window()?;
    let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if supported {
        Some(Box::new(IntersectionWatcher { window }))
    } else {
        debug!("IntersectionObserver missing, falling back to scroll measurements");
        Some(Box::new(ScrollWatcher { window }))
    }
}

pub struct IntersectionWatcher {
    window: Window,
}

impl VisibilityObserver for IntersectionWatcher {
    fn observe(&self, target_id: &str, rule: ViewportRule, mut on_change: VisibilityCallback) -> Option<Subscription> {
        let target = self.window.document()?.get_element_by_id(target_id)?;

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let observed: Vec<(Element, VisibilityEntry)> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    let element = entry.target();
                    let ratio = entry.intersection_ratio();
                    let visibility = VisibilityEntry {
                        target_id: element.id(),
                        is_intersecting: rule.qualifies(entry.is_intersecting(), ratio),
                        ratio,
                    };
                    (element, visibility)
                })
                .collect();

            let snapshot: Vec<VisibilityEntry> = observed.iter().map(|(_, entry)| entry.clone()).collect();
            if on_change(&snapshot) == Observation::Stop {
                for (element, _) in &observed {
                    observer.unobserve(element);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.root_margin(&rule.root_margin());
        options.threshold(&JsValue::from_f64(rule.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(&target);

        Some(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

pub struct ScrollWatcher {
    window: Window,
}

impl VisibilityObserver for ScrollWatcher {
    fn observe(&self, target_id: &str, rule: ViewportRule, mut on_change: VisibilityCallback) -> Option<Subscription> {
        let document = self.window.document()?;
        document.get_element_by_id(target_id)?;

        let id = target_id.to_string();
        let measuring_window = self.window.clone();
        let mut stopped = false;

        let listener = Closure::wrap(Box::new(move || {
            if stopped {
                return;
            }
            let Some(element) = document.get_element_by_id(&id) else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let viewport_height = measuring_window
                .inner_height()
                .ok()
                .and_then(|height| height.as_f64())
                .unwrap_or(0.0);
            let entry = rule.measure(&id, rect.top(), rect.bottom(), viewport_height);
            if on_change(&[entry]) == Observation::Stop {
                stopped = true;
            }
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .ok()?;

        // IntersectionObserver reports the initial state right away; match that.
        let _ = listener.as_ref().unchecked_ref::<Function>().call0(&JsValue::NULL);

        let window = self.window.clone();
        Some(Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const RULE: ViewportRule = ViewportRule {
        threshold: 0.3,
        bottom_inset_px: 100.0,
    };

    #[test]
    fn root_margin_only_insets_the_bottom_edge() {
        assert_eq!(RULE.root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn element_below_the_inset_is_not_visible() {
        // 800px viewport, inset leaves 700px; element starts at 720px.
        assert_eq!(RULE.visible_ratio(720.0, 1120.0, 800.0), 0.0);
    }

    #[test]
    fn touching_the_bottom_edge_does_not_qualify() {
        // 400px tall element with 40px above the inset line.
        let entry = RULE.measure("software-cards", 660.0, 1060.0, 800.0);
        assert!((entry.ratio - 0.1).abs() < 1e-9);
        assert!(!entry.is_intersecting);
    }

    #[test]
    fn thirty_percent_inside_the_inset_viewport_qualifies() {
        let entry = RULE.measure("software-cards", 580.0, 980.0, 800.0);
        assert!((entry.ratio - 0.3).abs() < 1e-9);
        assert!(entry.is_intersecting);
    }

    #[test]
    fn fully_visible_element_clamps_to_one() {
        assert_eq!(RULE.visible_ratio(100.0, 300.0, 800.0), 1.0);
        assert_eq!(RULE.visible_ratio(100.0, 100.0, 800.0), 0.0);
    }

    #[test]
    fn scrolled_past_element_is_not_visible() {
        assert_eq!(RULE.visible_ratio(-500.0, -100.0, 800.0), 0.0);
    }

    #[test]
    fn subscription_tears_down_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        subscription.unsubscribe();
        assert_eq!(calls.get(), 1);

        let counter = Rc::clone(&calls);
        drop(Subscription::new(move || counter.set(counter.get() + 1)));
        assert_eq!(calls.get(), 2);
    }
}
