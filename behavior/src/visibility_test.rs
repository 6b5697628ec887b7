use std::collections::BTreeMap;

use super::*;
use crate::options::RootMargin;

// =============================================================
// Fake intersection primitive
// =============================================================

type SharedCallback = Rc<RefCell<EntryCallback>>;

#[derive(Default)]
struct FakeState {
    available: bool,
    deliver_on_register: Option<IntersectionEntry>,
    next_id: u64,
    live: BTreeMap<u64, (&'static str, SharedCallback)>,
    registered_total: usize,
}

#[derive(Clone)]
struct FakeIntersection {
    state: Rc<RefCell<FakeState>>,
}

impl FakeIntersection {
    fn new() -> Self {
        let state = FakeState { available: true, ..FakeState::default() };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    fn unavailable() -> Self {
        let fake = Self::new();
        fake.state.borrow_mut().available = false;
        fake
    }

    fn live_count(&self) -> usize {
        self.state.borrow().live.len()
    }

    fn registered_total(&self) -> usize {
        self.state.borrow().registered_total
    }

    /// Deliver an entry to every live registration for `target`.
    fn emit(&self, target: &'static str, ratio: f64) {
        let callbacks = self
            .state
            .borrow()
            .live
            .values()
            .filter(|(t, _)| *t == target)
            .map(|(_, cb)| Rc::clone(cb))
            .collect::<Vec<_>>();
        for cb in callbacks {
            (cb.borrow_mut().as_mut())(IntersectionEntry { ratio, is_intersecting: ratio > 0.0 });
        }
    }
}

impl IntersectionPrimitive for FakeIntersection {
    type Target = &'static str;
    type Root = &'static str;
    type Handle = u64;

    fn register(
        &self,
        target: &Self::Target,
        _options: &ObserveOptions<Self::Root>,
        mut on_entry: EntryCallback,
    ) -> Result<u64, PrimitiveUnavailable> {
        let (id, immediate) = {
            let mut state = self.state.borrow_mut();
            if !state.available {
                return Err(PrimitiveUnavailable);
            }
            state.next_id += 1;
            state.registered_total += 1;
            (state.next_id, state.deliver_on_register)
        };
        if let Some(entry) = immediate {
            on_entry(entry);
        }
        self.state
            .borrow_mut()
            .live
            .insert(id, (*target, Rc::new(RefCell::new(on_entry))));
        Ok(id)
    }

    fn unregister(&self, handle: u64) {
        self.state.borrow_mut().live.remove(&handle);
    }
}

fn opts(threshold: f64) -> ObserveOptions<&'static str> {
    ObserveOptions::new().with_threshold(Threshold::new(threshold).unwrap())
}

// =============================================================
// VisibilityLatch
// =============================================================

#[test]
fn latch_starts_hidden() {
    assert!(!VisibilityLatch::new().is_visible());
}

#[test]
fn latch_trips_once_and_notifies_once() {
    let latch = VisibilityLatch::new();
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    latch.subscribe(move || hits_cb.set(hits_cb.get() + 1));

    assert!(latch.trip());
    assert!(!latch.trip());
    assert!(latch.is_visible());
    assert_eq!(hits.get(), 1);
}

#[test]
fn latch_subscribe_after_trip_runs_immediately() {
    let latch = VisibilityLatch::new();
    latch.trip();
    let hit = Rc::new(Cell::new(false));
    let hit_cb = Rc::clone(&hit);
    latch.subscribe(move || hit_cb.set(true));
    assert!(hit.get());
}

// =============================================================
// VisibilityWatcher
// =============================================================

#[test]
fn watcher_registers_on_observe() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("about", opts(0.1));

    assert!(!latch.is_visible());
    assert!(watcher.is_observing());
    assert_eq!(fake.live_count(), 1);
}

#[test]
fn watcher_ignores_entries_below_threshold() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("about", opts(0.5));

    fake.emit("about", 0.2);
    assert!(!latch.is_visible());
    assert_eq!(fake.live_count(), 1);
}

#[test]
fn watcher_trips_and_stops_observing_at_threshold() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("about", opts(0.1));

    fake.emit("about", 0.1);
    assert!(latch.is_visible());
    assert!(watcher.is_visible());
    assert!(!watcher.is_observing());
    assert_eq!(fake.live_count(), 0);
}

#[test]
fn watcher_never_resets_after_scrolling_back_out() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("team", opts(0.1));

    fake.emit("team", 0.6);
    fake.emit("team", 0.0);
    assert!(latch.is_visible());
}

#[test]
fn watcher_notifies_subscriber_exactly_once() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("team", opts(0.1));
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    latch.subscribe(move || hits_cb.set(hits_cb.get() + 1));

    fake.emit("team", 0.3);
    fake.emit("team", 0.9);
    assert_eq!(hits.get(), 1);
}

#[test]
fn unmount_before_visible_leaves_latch_false_and_no_registration() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("contact", opts(0.1));

    watcher.unmount();
    fake.emit("contact", 1.0);

    assert!(!latch.is_visible());
    assert!(!watcher.is_visible());
    assert_eq!(fake.live_count(), 0);
}

#[test]
fn dropping_watcher_releases_registration() {
    let fake = FakeIntersection::new();
    {
        let mut watcher = VisibilityWatcher::new(fake.clone());
        let _latch = watcher.observe("contact", opts(0.1));
        assert_eq!(fake.live_count(), 1);
    }
    assert_eq!(fake.live_count(), 0);
}

#[test]
fn observe_same_target_and_options_is_noop() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let first = watcher.observe("about", opts(0.1));
    let second = watcher.observe("about", opts(0.1));

    assert_eq!(fake.registered_total(), 1);
    fake.emit("about", 0.5);
    assert!(first.is_visible());
    assert!(second.is_visible());
}

#[test]
fn observe_new_target_tears_down_and_starts_fresh() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let old = watcher.observe("about", opts(0.1));
    fake.emit("about", 0.5);
    assert!(old.is_visible());

    let fresh = watcher.observe("team", opts(0.1));
    assert!(!fresh.is_visible());
    assert!(!watcher.is_visible());
    assert_eq!(fake.live_count(), 1);

    fake.emit("about", 1.0);
    assert!(!fresh.is_visible());
    fake.emit("team", 0.2);
    assert!(fresh.is_visible());
}

#[test]
fn observe_with_changed_options_reregisters() {
    let fake = FakeIntersection::new();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let _first = watcher.observe("about", opts(0.1));
    let changed = opts(0.1).with_root_margin(RootMargin::parse("20px").unwrap());
    let _second = watcher.observe("about", changed);

    assert_eq!(fake.registered_total(), 2);
    assert_eq!(fake.live_count(), 1);
}

#[test]
fn unavailable_primitive_fails_open() {
    let fake = FakeIntersection::unavailable();
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("about", opts(0.1));

    assert!(latch.is_visible());
    assert!(!watcher.is_observing());
    assert_eq!(fake.live_count(), 0);
}

#[test]
fn synchronous_delivery_during_register_still_releases_registration() {
    let fake = FakeIntersection::new();
    fake.state.borrow_mut().deliver_on_register = Some(IntersectionEntry { ratio: 1.0, is_intersecting: true });
    let mut watcher = VisibilityWatcher::new(fake.clone());
    let latch = watcher.observe("hero", opts(0.1));

    assert!(latch.is_visible());
    assert_eq!(fake.live_count(), 0);
}

#[test]
fn multiple_watchers_coexist_independently() {
    let fake = FakeIntersection::new();
    let mut about = VisibilityWatcher::new(fake.clone());
    let mut team = VisibilityWatcher::new(fake.clone());
    let about_latch = about.observe("about", opts(0.1));
    let team_latch = team.observe("team", opts(0.1));

    fake.emit("about", 0.4);
    assert!(about_latch.is_visible());
    assert!(!team_latch.is_visible());
    assert_eq!(fake.live_count(), 1);
}
