//! Viewport reveal for animated sections.
//!
//! Client-side (csr): [`DomIntersection`] registers targets with the
//! browser's `IntersectionObserver`, and [`use_visibility`] ties a
//! [`VisibilityWatcher`] to a section's lifetime.
//! Native builds: [`NoIntersection`] reports the primitive as unavailable, so
//! the watcher fails open and every section renders revealed.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use behavior::visibility::EntryCallback;
use behavior::{IntersectionPrimitive, ObserveOptions, PrimitiveUnavailable, Threshold, VisibilityWatcher};
use leptos::prelude::*;

/// Intersection primitive for environments without a viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIntersection;

impl IntersectionPrimitive for NoIntersection {
    type Target = ();
    type Root = ();
    type Handle = ();

    fn register(&self, _: &(), _: &ObserveOptions<()>, _: EntryCallback) -> Result<(), PrimitiveUnavailable> {
        Err(PrimitiveUnavailable)
    }

    fn unregister(&self, (): ()) {}
}

#[cfg(feature = "csr")]
pub use dom::{DomIntersection, DomRegistration};

#[cfg(feature = "csr")]
mod dom {
    use behavior::visibility::EntryCallback;
    use behavior::{IntersectionEntry, IntersectionPrimitive, ObserveOptions, PrimitiveUnavailable};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    /// `window.IntersectionObserver`, one observer per registration.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DomIntersection;

    /// A live observer and the closure it calls back into.
    pub struct DomRegistration {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    fn supported() -> bool {
        web_sys::window().is_some_and(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
    }

    impl IntersectionPrimitive for DomIntersection {
        type Target = Element;
        type Root = Element;
        type Handle = DomRegistration;

        fn register(
            &self,
            target: &Element,
            options: &ObserveOptions<Element>,
            mut on_entry: EntryCallback,
        ) -> Result<DomRegistration, PrimitiveUnavailable> {
            if !supported() {
                return Err(PrimitiveUnavailable);
            }

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        on_entry(IntersectionEntry {
                            ratio: entry.intersection_ratio(),
                            is_intersecting: entry.is_intersecting(),
                        });
                    }
                },
            );

            let steps = js_sys::Array::new();
            for step in options.threshold.steps() {
                steps.push(&JsValue::from_f64(*step));
            }
            let init = IntersectionObserverInit::new();
            init.set_threshold(&steps);
            init.set_root_margin(&options.root_margin.to_string());
            init.set_root(options.root.as_ref());

            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| {
                    log::debug!("visibility: observer construction failed: {err:?}");
                    PrimitiveUnavailable
                })?;
            observer.observe(target);
            Ok(DomRegistration { observer, _callback: callback })
        }

        fn unregister(&self, handle: DomRegistration) {
            handle.observer.disconnect();
        }
    }
}

/// Reveal state for a section, judged against the page viewport.
///
/// Returns a signal that flips to `true` once and never back. Observation
/// starts when `node` mounts and is cancelled when the calling component's
/// owner is cleaned up. Without a browser the section is revealed at once.
pub fn use_visibility(node: NodeRef<leptos::html::Section>, threshold: Threshold) -> ReadSignal<bool> {
    #[cfg(feature = "csr")]
    {
        let (visible, set_visible) = signal(false);
        let watcher = StoredValue::new_local(VisibilityWatcher::new(DomIntersection));

        Effect::new(move || {
            let Some(section) = node.get() else {
                return;
            };
            let target: web_sys::Element = section.into();
            let options = ObserveOptions::new().with_threshold(threshold.clone());
            if let Some(latch) = watcher.try_update_value(|w| w.observe(target, options)) {
                latch.subscribe(move || set_visible.set(true));
            }
        });

        on_cleanup(move || {
            watcher.try_update_value(VisibilityWatcher::unmount);
        });

        visible
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = node;
        signal(reveal_without_viewport(threshold)).0
    }
}

/// Run a watcher over [`NoIntersection`] and report the resulting state.
pub fn reveal_without_viewport(threshold: Threshold) -> bool {
    let mut watcher = VisibilityWatcher::new(NoIntersection);
    watcher.observe((), ObserveOptions::new().with_threshold(threshold)).is_visible()
}
