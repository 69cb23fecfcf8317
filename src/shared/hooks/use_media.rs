//! Viewport observer backed by `window.matchMedia`.
//!
//! The subscription is an RAII guard: dropping it unregisters the `change`
//! listener, so replacing it (query changed) or dropping the owning scope
//! (unmount) always releases it.

use crate::shared::logging::log_media_subscription;
use dioxus::prelude::*;

/// Media query matching viewports at least `px` wide.
pub fn media_query_for_min_width(px: u32) -> String {
    format!("(min-width: {}px)", px)
}

/// Live `change` listener on a media query list.
pub struct MediaSubscription {
    #[cfg(target_arch = "wasm32")]
    list: web_sys::MediaQueryList,
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

impl MediaSubscription {
    /// Subscribe to `query`. Returns the current match and the guard, or
    /// `None` when `matchMedia` is unavailable.
    #[cfg(target_arch = "wasm32")]
    pub fn subscribe(query: &str, mut on_change: impl FnMut(bool) + 'static) -> Option<(bool, Self)> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let list = web_sys::window()?.match_media(query).ok().flatten()?;
        let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
        );
        list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .ok()?;
        Some((list.matches(), Self { list, callback }))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn subscribe(_query: &str, _on_change: impl FnMut(bool) + 'static) -> Option<(bool, Self)> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for MediaSubscription {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

/// One-shot evaluation of a media query, without subscribing.
pub fn matches_media(query: &str) -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .match_media(query)
            .ok()
            .flatten()
            .map(|list| list.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = query;
        None
    }
}

/// Reactive match state of `query`; `None` while no observer is available.
///
/// Subscribes on mount, re-subscribes when `query` changes and unsubscribes
/// on unmount.
pub fn use_media_query(query: String) -> Signal<Option<bool>> {
    let initial = query.clone();
    let mut matches = use_signal(move || matches_media(&initial));
    let mut subscription = use_signal(|| None::<MediaSubscription>);

    use_effect(use_reactive((&query,), move |(query,)| {
        let next = MediaSubscription::subscribe(&query, move |m| matches.set(Some(m)));
        log_media_subscription(&query, next.is_some());
        match next {
            Some((current, guard)) => {
                matches.set(Some(current));
                // drops the previous guard, if any
                subscription.set(Some(guard));
            }
            None => {
                matches.set(None);
                subscription.set(None);
            }
        }
    }));

    use_drop(move || {
        if let Ok(mut guard) = subscription.try_write() {
            guard.take();
        }
    });

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_width_query() {
        assert_eq!(media_query_for_min_width(992), "(min-width: 992px)");
    }

    #[test]
    fn test_no_observer_off_wasm() {
        assert!(MediaSubscription::subscribe("(min-width: 1px)", |_| {}).is_none());
        assert_eq!(matches_media("(min-width: 1px)"), None);
    }
}
