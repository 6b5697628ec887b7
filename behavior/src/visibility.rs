//! One-shot viewport visibility detection.
//!
//! DESIGN
//! ======
//! A [`VisibilityWatcher`] registers its target with an
//! [`IntersectionPrimitive`] and trips a [`VisibilityLatch`] the first time an
//! entry satisfies the threshold. Tripping unregisters the target, so a
//! section that scrolls out of view again never flickers back to hidden.
//!
//! All state is `Rc`-shared: the platform callback and the watcher run on the
//! same UI event loop and never cross threads.
//!
//! ERROR HANDLING
//! ==============
//! A platform without an intersection primitive fails open: the latch trips
//! immediately so content is never permanently hidden.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::options::{ObserveOptions, Threshold};

/// A single intersection notification for an observed target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Fraction of the target's area inside the (margin-adjusted) root.
    pub ratio: f64,
    /// Whether the target touches or overlaps the root at all.
    pub is_intersecting: bool,
}

/// Callback the primitive invokes for every entry delivered for a target.
pub type EntryCallback = Box<dyn FnMut(IntersectionEntry)>;

/// The platform cannot provide intersection notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("viewport intersection notifications are unavailable")]
pub struct PrimitiveUnavailable;

/// Viewport-intersection notification service (register target + options,
/// receive entries, unregister).
pub trait IntersectionPrimitive {
    /// Displayable region being observed. Borrowed from the caller.
    type Target: Clone + PartialEq;
    /// Containing viewport; `None` in options means the page viewport.
    type Root: Clone + PartialEq;
    /// Live registration, released by [`IntersectionPrimitive::unregister`].
    type Handle;

    /// Start delivering entries for `target` to `on_entry`.
    ///
    /// # Errors
    ///
    /// Returns [`PrimitiveUnavailable`] when the platform has no such service.
    fn register(
        &self,
        target: &Self::Target,
        options: &ObserveOptions<Self::Root>,
        on_entry: EntryCallback,
    ) -> Result<Self::Handle, PrimitiveUnavailable>;

    /// Stop delivering entries for a registration.
    fn unregister(&self, handle: Self::Handle);
}

/// One-shot boolean signal: false until tripped, then true forever.
#[derive(Clone, Default)]
pub struct VisibilityLatch {
    inner: Rc<LatchInner>,
}

#[derive(Default)]
struct LatchInner {
    visible: Cell<bool>,
    listeners: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl VisibilityLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.visible.get()
    }

    /// Run `listener` once when the latch trips, or right away if it already has.
    pub fn subscribe(&self, listener: impl FnOnce() + 'static) {
        if self.is_visible() {
            listener();
            return;
        }
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Trip the latch. Returns `true` only for the call that flipped it.
    fn trip(&self) -> bool {
        if self.inner.visible.replace(true) {
            return false;
        }
        let listeners = std::mem::take(&mut *self.inner.listeners.borrow_mut());
        for listener in listeners {
            listener();
        }
        true
    }
}

impl fmt::Debug for VisibilityLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityLatch").field("visible", &self.is_visible()).finish()
    }
}

/// Registration slot shared between the watcher and the platform callback.
struct Registration<H> {
    handle: RefCell<Option<H>>,
    cancelled: Cell<bool>,
}

impl<H> Registration<H> {
    fn new() -> Self {
        Self { handle: RefCell::new(None), cancelled: Cell::new(false) }
    }

    fn take_handle(&self) -> Option<H> {
        self.handle.borrow_mut().take()
    }
}

struct Observation<P: IntersectionPrimitive> {
    target: P::Target,
    options: ObserveOptions<P::Root>,
    latch: VisibilityLatch,
    registration: Rc<Registration<P::Handle>>,
}

/// Watches one target at a time and reports when it first becomes visible.
pub struct VisibilityWatcher<P: IntersectionPrimitive> {
    primitive: P,
    observation: Option<Observation<P>>,
}

impl<P> VisibilityWatcher<P>
where
    P: IntersectionPrimitive + Clone + 'static,
    P::Handle: 'static,
{
    #[must_use]
    pub fn new(primitive: P) -> Self {
        Self { primitive, observation: None }
    }

    /// Whether the current target has become visible. `false` when idle.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.observation.as_ref().is_some_and(|o| o.latch.is_visible())
    }

    /// Whether a registration with the primitive is still live.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observation
            .as_ref()
            .is_some_and(|o| o.registration.handle.borrow().is_some())
    }

    /// Observe `target` with `options` and return its latch.
    ///
    /// Re-observing the same target with the same options keeps the current
    /// observation. Anything else tears it down and starts over with a fresh
    /// latch.
    pub fn observe(&mut self, target: P::Target, options: ObserveOptions<P::Root>) -> VisibilityLatch {
        if let Some(current) = &self.observation {
            if current.target == target && current.options == options {
                return current.latch.clone();
            }
        }
        self.unmount();

        let latch = VisibilityLatch::new();
        let registration = Rc::new(Registration::new());
        let callback = visibility_callback(
            self.primitive.clone(),
            options.threshold.clone(),
            latch.clone(),
            Rc::clone(&registration),
        );

        match self.primitive.register(&target, &options, callback) {
            Ok(handle) => {
                if latch.is_visible() {
                    // Delivered synchronously during registration; already done.
                    self.primitive.unregister(handle);
                } else {
                    *registration.handle.borrow_mut() = Some(handle);
                }
            }
            Err(err) => {
                log::debug!("visibility: {err}; revealing target immediately");
                latch.trip();
            }
        }

        self.observation = Some(Observation { target, options, latch: latch.clone(), registration });
        latch
    }

    /// Cancel the current observation without signalling.
    pub fn unmount(&mut self) {
        self.release();
    }
}

impl<P: IntersectionPrimitive> VisibilityWatcher<P> {
    fn release(&mut self) {
        let Some(observation) = self.observation.take() else {
            return;
        };
        observation.registration.cancelled.set(true);
        if let Some(handle) = observation.registration.take_handle() {
            self.primitive.unregister(handle);
        }
    }
}

impl<P: IntersectionPrimitive> Drop for VisibilityWatcher<P> {
    fn drop(&mut self) {
        self.release();
    }
}

fn visibility_callback<P>(
    primitive: P,
    threshold: Threshold,
    latch: VisibilityLatch,
    registration: Rc<Registration<P::Handle>>,
) -> EntryCallback
where
    P: IntersectionPrimitive + 'static,
    P::Handle: 'static,
{
    Box::new(move |entry: IntersectionEntry| {
        if registration.cancelled.get() || latch.is_visible() {
            return;
        }
        if !threshold.is_met(&entry) {
            return;
        }
        latch.trip();
        if let Some(handle) = registration.take_handle() {
            primitive.unregister(handle);
        }
    })
}
