//! Tracks which page sections have scrolled into view.
//!
//! A page owns one [`VisibilitySet`] for its lifetime. The set only ever
//! grows: once a section has been seen its reveal animation has played and
//! it stays revealed, even after it leaves the viewport again.
//!
//! The browser's `IntersectionObserver` sits behind [`IntersectionNotifier`]
//! so the tracker can be driven by a fake in tests.

use std::borrow::Cow;
use std::cell::Cell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::{current_document, SiteError, SiteResult};

/// Identifier of an anchorable section; matches the element's `id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(Cow<'static, str>);

impl SectionId {
    pub const ABOUT: SectionId = SectionId(Cow::Borrowed("about"));
    pub const PROJECTS: SectionId = SectionId(Cow::Borrowed("projects"));
    pub const SUBSIDIARIES: SectionId = SectionId(Cow::Borrowed("subsidiaries"));
    pub const CONTACT: SectionId = SectionId(Cow::Borrowed("contact"));

    /// Every section the home page observes.
    pub const HOME: &'static [SectionId] = &[
        SectionId::ABOUT,
        SectionId::PROJECTS,
        SectionId::SUBSIDIARIES,
        SectionId::CONTACT,
    ];

    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sections that have been on screen at least once during this page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    seen: HashSet<SectionId>,
}

impl VisibilitySet {
    /// Records `section` as seen. Returns `false` if it already was.
    pub fn insert(&mut self, section: SectionId) -> bool {
        self.seen.insert(section)
    }

    pub fn contains(&self, section: &SectionId) -> bool {
        self.seen.contains(section)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Reducible for VisibilitySet {
    type Action = SectionId;

    fn reduce(self: Rc<Self>, section: SectionId) -> Rc<Self> {
        // Same Rc back means no re-render.
        if self.contains(&section) {
            return self;
        }
        let mut next = (*self).clone();
        next.insert(section);
        Rc::new(next)
    }
}

/// One report from the platform: `section` is `ratio` visible.
///
/// Browsers also report targets that are off screen (ratio 0, not
/// intersecting), so `is_intersecting` is carried alongside the ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEvent {
    pub section: SectionId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

pub type IntersectionSink = Rc<dyn Fn(IntersectionEvent)>;

/// Source of viewport intersection events.
pub trait IntersectionNotifier {
    /// Starts reporting intersections for `sections` to `sink`.
    fn connect(
        &mut self,
        sections: &[SectionId],
        threshold: f64,
        sink: IntersectionSink,
    ) -> SiteResult<()>;

    /// Stops all reporting. Called at most once per successful `connect`.
    fn disconnect(&mut self);
}

/// Turns raw intersection events into "section became visible" calls.
///
/// Dropping the tracker disposes it, so the subscription is released on every
/// exit path of the owning component.
pub struct VisibilityTracker<N: IntersectionNotifier> {
    notifier: N,
    live: Rc<Cell<bool>>,
    connected: bool,
}

impl<N: IntersectionNotifier> VisibilityTracker<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            live: Rc::new(Cell::new(false)),
            connected: false,
        }
    }

    /// Begins watching `sections`. `on_visible` runs for every intersecting
    /// event at or above `threshold`; repeats are expected and left to the receiver.
    ///
    /// If the notifier cannot connect, nothing is ever reported.
    pub fn observe<F>(&mut self, sections: &[SectionId], threshold: f64, on_visible: F)
    where
        F: Fn(SectionId) + 'static,
    {
        self.dispose();

        let threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, 1.0) };
        let live = Rc::new(Cell::new(true));
        self.live = live.clone();

        let sink: IntersectionSink = Rc::new(move |event: IntersectionEvent| {
            if live.get() && event.is_intersecting && event.ratio >= threshold {
                on_visible(event.section);
            }
        });

        match self.notifier.connect(sections, threshold, sink) {
            Ok(()) => {
                self.connected = true;
                debug!("Observing {} sections at threshold {}", sections.len(), threshold);
            }
            Err(err) => {
                self.live.set(false);
                warn!("Section reveal disabled: {}", err);
            }
        }
    }

    /// Stops watching. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.live.set(false);
        if std::mem::take(&mut self.connected) {
            self.notifier.disconnect();
            debug!("Visibility tracker disposed");
        }
    }

    pub fn is_observing(&self) -> bool {
        self.connected
    }
}

impl<N: IntersectionNotifier> Drop for VisibilityTracker<N> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// [`IntersectionNotifier`] backed by the browser's `IntersectionObserver`.
#[derive(Default)]
pub struct DomIntersectionNotifier {
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(Array)>>,
}

impl IntersectionNotifier for DomIntersectionNotifier {
    fn connect(
        &mut self,
        sections: &[SectionId],
        threshold: f64,
        sink: IntersectionSink,
    ) -> SiteResult<()> {
        let document = current_document()?;

        let callback = Closure::wrap(Box::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    sink(IntersectionEvent {
                        section: SectionId::new(entry.target().id()),
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            }
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(SiteError::observer)?;

        for section in sections {
            match document.get_element_by_id(section.as_str()) {
                Some(element) => observer.observe(&element),
                None => debug!("Section #{} not in document, skipping", section),
            }
        }

        self.observer = Some(observer);
        self.callback = Some(callback);
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

/// Reveal state for `sections` of the calling page.
///
/// The observer is attached after the first render, once the section
/// elements exist, and released when the component unmounts.
#[hook]
pub fn use_visible_sections(sections: &'static [SectionId]) -> UseReducerHandle<VisibilitySet> {
    let visible = use_reducer(VisibilitySet::default);

    {
        let dispatcher = visible.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut tracker = VisibilityTracker::new(DomIntersectionNotifier::default());
                tracker.observe(sections, config::REVEAL_THRESHOLD, move |section| {
                    dispatcher.dispatch(section)
                });
                if !tracker.is_observing() {
                    debug!("Sections stay in their initial state on this page");
                }
                move || tracker.dispose()
            },
            (),
        );
    }

    if !visible.is_empty() {
        debug!("{} of {} sections revealed", visible.len(), sections.len());
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Hands events to whatever sink it was last connected with, including
    /// after `disconnect`, like a platform that delivers one stale batch.
    #[derive(Clone, Default)]
    struct FakeNotifier {
        sink: Rc<RefCell<Option<IntersectionSink>>>,
        observed: Rc<RefCell<Vec<SectionId>>>,
        disconnects: Rc<Cell<usize>>,
        unsupported: bool,
    }

    impl FakeNotifier {
        fn unsupported() -> Self {
            Self { unsupported: true, ..Self::default() }
        }

        fn fire(&self, id: &'static str, ratio: f64) {
            self.fire_entry(id, ratio, ratio > 0.0);
        }

        fn fire_entry(&self, id: &'static str, ratio: f64, is_intersecting: bool) {
            let sink = self.sink.borrow().clone();
            if let Some(sink) = sink {
                sink(IntersectionEvent { section: SectionId::new(id), ratio, is_intersecting });
            }
        }
    }

    impl IntersectionNotifier for FakeNotifier {
        fn connect(
            &mut self,
            sections: &[SectionId],
            _threshold: f64,
            sink: IntersectionSink,
        ) -> SiteResult<()> {
            if self.unsupported {
                return Err(SiteError::Observer("IntersectionObserver is not defined".into()));
            }
            self.observed.borrow_mut().extend_from_slice(sections);
            *self.sink.borrow_mut() = Some(sink);
            Ok(())
        }

        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    fn tracked(notifier: &FakeNotifier) -> (VisibilityTracker<FakeNotifier>, Rc<RefCell<VisibilitySet>>) {
        tracked_at(notifier, 0.1)
    }

    fn tracked_at(
        notifier: &FakeNotifier,
        threshold: f64,
    ) -> (VisibilityTracker<FakeNotifier>, Rc<RefCell<VisibilitySet>>) {
        let set = Rc::new(RefCell::new(VisibilitySet::default()));
        let mut tracker = VisibilityTracker::new(notifier.clone());
        let sink = set.clone();
        tracker.observe(SectionId::HOME, threshold, move |section| {
            sink.borrow_mut().insert(section);
        });
        (tracker, set)
    }

    #[test]
    fn observes_every_requested_section() {
        let notifier = FakeNotifier::default();
        let (tracker, _set) = tracked(&notifier);
        assert!(tracker.is_observing());
        assert_eq!(*notifier.observed.borrow(), SectionId::HOME);
    }

    #[test]
    fn reveals_sections_at_or_above_threshold() {
        let notifier = FakeNotifier::default();
        let (_tracker, set) = tracked(&notifier);

        notifier.fire("about", 0.05);
        assert!(set.borrow().is_empty());

        notifier.fire("about", 0.1);
        notifier.fire("projects", 0.8);
        let set = set.borrow();
        assert!(set.contains(&SectionId::ABOUT));
        assert!(set.contains(&SectionId::PROJECTS));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn off_screen_entries_never_reveal_at_zero_threshold() {
        let notifier = FakeNotifier::default();
        let (_tracker, set) = tracked_at(&notifier, 0.0);

        // Initial report for every target below the fold.
        notifier.fire_entry("contact", 0.0, false);
        notifier.fire_entry("projects", 0.0, false);
        assert!(set.borrow().is_empty());

        // Edge-adjacent targets intersect with a zero ratio.
        notifier.fire_entry("contact", 0.0, true);
        assert!(set.borrow().contains(&SectionId::CONTACT));
        assert_eq!(set.borrow().len(), 1);
    }

    #[test]
    fn non_intersecting_entries_are_ignored_whatever_the_ratio() {
        let notifier = FakeNotifier::default();
        let (_tracker, set) = tracked(&notifier);

        notifier.fire_entry("about", 0.5, false);
        assert!(set.borrow().is_empty());

        notifier.fire_entry("about", 0.5, true);
        assert!(set.borrow().contains(&SectionId::ABOUT));
    }

    #[test]
    fn repeated_events_are_idempotent() {
        let notifier = FakeNotifier::default();
        let (_tracker, set) = tracked(&notifier);

        notifier.fire("contact", 0.5);
        let before = set.borrow().clone();
        notifier.fire("contact", 0.5);
        notifier.fire("contact", 1.0);
        assert_eq!(*set.borrow(), before);
    }

    #[test]
    fn leaving_the_viewport_never_hides_a_section() {
        let notifier = FakeNotifier::default();
        let (_tracker, set) = tracked(&notifier);

        notifier.fire("subsidiaries", 0.4);
        notifier.fire("subsidiaries", 0.0);
        notifier.fire("about", 0.3);
        notifier.fire("about", 0.0);

        let set = set.borrow();
        assert!(set.contains(&SectionId::SUBSIDIARIES));
        assert!(set.contains(&SectionId::ABOUT));
    }

    #[test]
    fn event_order_does_not_matter() {
        let first = FakeNotifier::default();
        let (_a, forwards) = tracked(&first);
        for id in ["about", "projects", "contact"] {
            first.fire(id, 0.2);
        }

        let second = FakeNotifier::default();
        let (_b, backwards) = tracked(&second);
        for id in ["contact", "projects", "about"] {
            second.fire(id, 0.2);
        }

        assert_eq!(*forwards.borrow(), *backwards.borrow());
    }

    #[test]
    fn events_after_dispose_are_ignored() {
        let notifier = FakeNotifier::default();
        let (mut tracker, set) = tracked(&notifier);

        notifier.fire("about", 0.5);
        tracker.dispose();
        notifier.fire("projects", 0.5);

        assert_eq!(set.borrow().len(), 1);
        assert!(!tracker.is_observing());
        assert_eq!(notifier.disconnects.get(), 1);
    }

    #[test]
    fn dispose_disconnects_exactly_once() {
        let notifier = FakeNotifier::default();
        let (mut tracker, _set) = tracked(&notifier);

        tracker.dispose();
        tracker.dispose();
        drop(tracker);

        assert_eq!(notifier.disconnects.get(), 1);
    }

    #[test]
    fn dropping_the_tracker_releases_the_subscription() {
        let notifier = FakeNotifier::default();
        let (tracker, set) = tracked(&notifier);

        drop(tracker);
        notifier.fire("about", 1.0);

        assert_eq!(notifier.disconnects.get(), 1);
        assert!(set.borrow().is_empty());
    }

    #[test]
    fn unsupported_platform_never_reveals() {
        let notifier = FakeNotifier::unsupported();
        let (tracker, set) = tracked(&notifier);

        assert!(!tracker.is_observing());
        notifier.fire("about", 1.0);
        assert!(set.borrow().is_empty());

        drop(tracker);
        assert_eq!(notifier.disconnects.get(), 0);
    }

    #[test]
    fn reobserving_replaces_the_previous_subscription() {
        let notifier = FakeNotifier::default();
        let (mut tracker, set) = tracked(&notifier);

        let stale = notifier.sink.borrow().clone();
        let replacement = Rc::new(RefCell::new(VisibilitySet::default()));
        let sink = replacement.clone();
        tracker.observe(&[SectionId::PROJECTS], 0.1, move |section| {
            sink.borrow_mut().insert(section);
        });
        assert_eq!(notifier.disconnects.get(), 1);

        if let Some(stale) = stale {
            stale(IntersectionEvent {
                section: SectionId::ABOUT,
                ratio: 1.0,
                is_intersecting: true,
            });
        }
        notifier.fire("projects", 1.0);

        assert!(set.borrow().is_empty());
        assert!(replacement.borrow().contains(&SectionId::PROJECTS));
    }

    #[test]
    fn reducer_keeps_the_same_state_for_known_sections() {
        let state = Rc::new(VisibilitySet::default());
        let state = state.reduce(SectionId::ABOUT);
        assert!(state.contains(&SectionId::ABOUT));

        let again = state.clone().reduce(SectionId::ABOUT);
        assert!(Rc::ptr_eq(&state, &again));

        let grown = again.reduce(SectionId::new("contact"));
        assert_eq!(grown.len(), 2);
        assert!(grown.contains(&SectionId::CONTACT));
    }

    #[test]
    fn section_ids_compare_by_value() {
        assert_eq!(SectionId::new(String::from("about")), SectionId::ABOUT);
        assert_eq!(SectionId::CONTACT.to_string(), "contact");
    }
}
