// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use smallvec::SmallVec;

use petaview_view::{Axis, Direction, MapViewport, Speed, ViewTransform};

/// A discrete view control a key can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Pan the view left (content moves toward positive X).
    PanLeft,
    /// Pan the view right.
    PanRight,
    /// Pan the view up (content moves toward positive Y).
    PanUp,
    /// Pan the view down.
    PanDown,
    /// Zoom in one step.
    ZoomIn,
    /// Zoom out one step.
    ZoomOut,
    /// Return to the minimum scale and cancel any repeat session.
    Reset,
}

/// Delay before fast-repeat mode starts and the period between its ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// How long a key must stay held before fast repeat begins.
    pub delay: Duration,
    /// Interval between fast-repeat ticks once the mode is active.
    pub period: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(350),
            period: Duration::from_millis(40),
        }
    }
}

#[derive(Clone, Debug)]
struct Binding<K> {
    key: K,
    down: bool,
    control: Control,
}

/// Repeat session state. At most one deadline is pending at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Session {
    /// No bound key is driving a session.
    Idle,
    /// A key fired its one-shot control and the delay timer is running.
    Armed { deadline: Duration },
    /// Fast repeat is active; `next_tick` is the next firing time.
    Repeating { next_tick: Duration },
}

fn dispatch(control: Control, speed: Speed, view: &mut MapViewport) -> Option<ViewTransform> {
    match control {
        Control::PanLeft => view.pan(Axis::Horizontal, Direction::Positive, speed),
        Control::PanRight => view.pan(Axis::Horizontal, Direction::Negative, speed),
        Control::PanUp => view.pan(Axis::Vertical, Direction::Positive, speed),
        Control::PanDown => view.pan(Axis::Vertical, Direction::Negative, speed),
        Control::ZoomIn => view.zoom(Direction::Positive, speed),
        Control::ZoomOut => view.zoom(Direction::Negative, speed),
        Control::Reset => Some(view.reset()),
    }
}

/// Maps held keys to repeated invocations of [`MapViewport`] controls.
///
/// The adapter owns an ordered set of key bindings and the repeat session
/// state. It is driven by three host calls: [`Self::on_key_down`],
/// [`Self::on_key_up`], and [`Self::poll`] with the host's monotonic time.
/// Time only moves through those arguments; the adapter holds no timers of
/// its own, so cancelling a session is a plain state change and no stale
/// tick can fire after the last key is released.
#[derive(Clone, Debug)]
pub struct KeyRepeat<K> {
    bindings: SmallVec<[Binding<K>; 8]>,
    session: Session,
    timings: Timings,
}

impl<K: PartialEq> KeyRepeat<K> {
    /// Creates an adapter with no bindings.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            bindings: SmallVec::new(),
            session: Session::Idle,
            timings,
        }
    }

    /// Binds `key` to `control`, replacing any previous binding for the key.
    pub fn bind(&mut self, key: K, control: Control) {
        if let Some(binding) = self.bindings.iter_mut().find(|b| b.key == key) {
            binding.control = control;
        } else {
            self.bindings.push(Binding {
                key,
                down: false,
                control,
            });
        }
    }

    /// Returns the control currently bound to `key`, if any.
    #[must_use]
    pub fn control_of(&self, key: &K) -> Option<Control> {
        self.bindings
            .iter()
            .find(|b| b.key == *key)
            .map(|b| b.control)
    }

    /// Returns `true` if `key` is bound and currently held.
    #[must_use]
    pub fn is_down(&self, key: &K) -> bool {
        self.bindings.iter().any(|b| b.key == *key && b.down)
    }

    /// Returns `true` while fast-repeat mode is active.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        matches!(self.session, Session::Repeating { .. })
    }

    /// Returns the time of the next state change the host should poll at:
    /// the fast-mode entry deadline while armed, or the next tick while
    /// repeating.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match self.session {
            Session::Idle => None,
            Session::Armed { deadline } => Some(deadline),
            Session::Repeating { next_tick } => Some(next_tick),
        }
    }

    /// Handles a key-down event at monotonic time `now`.
    ///
    /// Unbound keys and auto-repeated events for a key already held are
    /// ignored. Otherwise the key is marked held and, unless fast repeat is
    /// already running, its control fires once at normal speed; the first
    /// non-reset press also arms the fast-mode delay. The reset control
    /// additionally cancels any pending session and never arms the delay.
    ///
    /// Returns the transform emitted by the fired control, if any.
    pub fn on_key_down(
        &mut self,
        key: &K,
        now: Duration,
        view: &mut MapViewport,
    ) -> Option<ViewTransform> {
        let binding = self.bindings.iter_mut().find(|b| b.key == *key)?;
        if binding.down {
            return None;
        }
        binding.down = true;
        let control = binding.control;

        if matches!(self.session, Session::Repeating { .. }) {
            // The key joins the held set; the next tick picks it up.
            return None;
        }
        if control == Control::Reset {
            self.session = Session::Idle;
            return Some(view.reset());
        }
        let emitted = dispatch(control, Speed::Normal, view);
        if self.session == Session::Idle {
            self.session = Session::Armed {
                deadline: now + self.timings.delay,
            };
        }
        emitted
    }

    /// Handles a key-up event.
    ///
    /// When the last held key is released the session is cancelled: a
    /// pending delay is dropped and fast repeat stops, so no tick fires
    /// afterward.
    pub fn on_key_up(&mut self, key: &K) {
        let Some(binding) = self.bindings.iter_mut().find(|b| b.key == *key) else {
            return;
        };
        binding.down = false;
        if !self.bindings.iter().any(|b| b.down) {
            self.session = Session::Idle;
        }
    }

    /// Advances the repeat state machine to monotonic time `now`.
    ///
    /// Entering fast mode happens at the armed deadline; the first tick
    /// fires one period later. Each elapsed tick fires the fast variant of
    /// every held key's control. Returns one re-emitted transform when at
    /// least one tick fired, or the reset emission when a held reset key
    /// ends the session from inside a tick.
    pub fn poll(&mut self, now: Duration, view: &mut MapViewport) -> Option<ViewTransform> {
        if let Session::Armed { deadline } = self.session {
            if now >= deadline {
                self.session = Session::Repeating {
                    next_tick: deadline + self.timings.period,
                };
            }
        }
        let Session::Repeating { mut next_tick } = self.session else {
            return None;
        };

        let mut ticked = false;
        while now >= next_tick {
            if self
                .bindings
                .iter()
                .any(|b| b.down && b.control == Control::Reset)
            {
                self.session = Session::Idle;
                return Some(view.reset());
            }
            for binding in &self.bindings {
                if binding.down {
                    dispatch(binding.control, Speed::Fast, view);
                }
            }
            ticked = true;
            next_tick += self.timings.period;
        }
        self.session = Session::Repeating { next_tick };
        ticked.then(|| view.transform())
    }

    /// Swaps the controls of the pan key pairs (left/right and up/down).
    ///
    /// Only the bound controls move; the held state of each key stays put,
    /// so inverting during a repeat session changes direction on the next
    /// tick.
    pub fn invert_pan(&mut self) {
        for binding in &mut self.bindings {
            binding.control = match binding.control {
                Control::PanLeft => Control::PanRight,
                Control::PanRight => Control::PanLeft,
                Control::PanUp => Control::PanDown,
                Control::PanDown => Control::PanUp,
                other => other,
            };
        }
    }

    /// Swaps the controls of the zoom key pair.
    pub fn invert_zoom(&mut self) {
        for binding in &mut self.bindings {
            binding.control = match binding.control {
                Control::ZoomIn => Control::ZoomOut,
                Control::ZoomOut => Control::ZoomIn,
                other => other,
            };
        }
    }
}

impl KeyRepeat<char> {
    /// Creates an adapter with the conventional map-viewer layout:
    /// `w`/`a`/`s`/`d` pan, `e`/`q` zoom, `f` resets.
    #[must_use]
    pub fn with_wasd_bindings(timings: Timings) -> Self {
        let mut keys = Self::new(timings);
        keys.bind('e', Control::ZoomIn);
        keys.bind('q', Control::ZoomOut);
        keys.bind('a', Control::PanLeft);
        keys.bind('d', Control::PanRight);
        keys.bind('w', Control::PanUp);
        keys.bind('s', Control::PanDown);
        keys.bind('f', Control::Reset);
        keys
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::Size;

    use petaview_view::MapViewport;

    use super::{Control, KeyRepeat, Timings};

    const DELAY: Duration = Duration::from_millis(350);
    const PERIOD: Duration = Duration::from_millis(40);

    fn fixture() -> (KeyRepeat<char>, MapViewport) {
        let keys = KeyRepeat::with_wasd_bindings(Timings::default());
        let view = MapViewport::new(Size::new(960.0, 600.0), Size::new(960.0, 600.0)).unwrap();
        (keys, view)
    }

    #[test]
    fn tap_fires_once_and_unbound_keys_are_ignored() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        assert!(keys.on_key_down(&'x', t0, &mut view).is_none());
        assert!(!keys.is_down(&'x'));

        let t = keys.on_key_down(&'e', t0, &mut view).unwrap();
        assert!((t.scale - 1.25).abs() < 1e-12);

        // Host auto-repeat of an already-held key is ignored.
        assert!(keys.on_key_down(&'e', t0 + PERIOD, &mut view).is_none());
        assert!((view.scale() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn release_before_delay_cancels_fast_mode() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'e', t0, &mut view);
        assert_eq!(keys.next_deadline(), Some(DELAY));
        keys.on_key_up(&'e');

        assert_eq!(keys.next_deadline(), None);
        assert!(keys.poll(t0 + DELAY + PERIOD, &mut view).is_none());
        assert!(!keys.is_repeating());
    }

    #[test]
    fn holding_past_delay_enters_fast_repeat() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'e', t0, &mut view);

        // At the deadline fast mode starts but the first tick is one period out.
        assert!(keys.poll(t0 + DELAY, &mut view).is_none());
        assert!(keys.is_repeating());
        assert_eq!(keys.next_deadline(), Some(DELAY + PERIOD));

        let scale_before = view.scale();
        let t = keys.poll(t0 + DELAY + PERIOD, &mut view).unwrap();
        assert!(t.scale > scale_before);
    }

    #[test]
    fn no_tick_fires_after_release() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'d', t0, &mut view);
        keys.poll(t0 + DELAY, &mut view);
        assert!(keys.is_repeating());

        keys.on_key_up(&'d');
        let before = view.transform();
        assert!(keys.poll(t0 + DELAY + PERIOD, &mut view).is_none());
        assert_eq!(view.transform(), before);
    }

    #[test]
    fn fast_tick_fires_every_held_key_and_emits_once() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        // Zoom in first so panning has room.
        keys.on_key_down(&'e', t0, &mut view);
        keys.on_key_down(&'a', t0 + Duration::from_millis(10), &mut view);
        keys.on_key_up(&'e');

        keys.poll(t0 + DELAY, &mut view);
        let t = keys.poll(t0 + DELAY + PERIOD, &mut view).unwrap();
        // The held pan key moved the view on the fast tick.
        assert!(t.translate.x > 0.0);
    }

    #[test]
    fn second_key_joins_running_session_without_rearming() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'e', t0, &mut view);
        // A later press joins the pending session; the deadline stays put.
        keys.on_key_down(&'w', t0 + Duration::from_millis(100), &mut view);
        assert_eq!(keys.next_deadline(), Some(DELAY));

        // A key pressed during fast repeat fires nothing immediately.
        keys.poll(t0 + DELAY, &mut view);
        let scale_before = view.scale();
        assert!(keys.on_key_down(&'q', t0 + DELAY + Duration::from_millis(1), &mut view).is_none());
        assert!((view.scale() - scale_before).abs() < 1e-12);
        assert!(keys.is_down(&'q'));
    }

    #[test]
    fn reset_fires_immediately_and_never_arms() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        view.zoom(petaview_view::Direction::Positive, petaview_view::Speed::Normal);
        let t = keys.on_key_down(&'f', t0, &mut view).unwrap();
        assert!((t.scale - 1.0).abs() < 1e-12);
        assert_eq!(keys.next_deadline(), None);
    }

    #[test]
    fn reset_cancels_a_pending_delay_from_another_key() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'e', t0, &mut view);
        keys.on_key_down(&'f', t0 + Duration::from_millis(50), &mut view);

        assert_eq!(keys.next_deadline(), None);
        assert!(keys.poll(t0 + DELAY + PERIOD, &mut view).is_none());
        assert!((view.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn held_reset_ends_fast_repeat_on_its_tick() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'e', t0, &mut view);
        keys.poll(t0 + DELAY, &mut view);
        assert!(keys.is_repeating());

        // Pressed during the session: only joins the held set.
        assert!(keys.on_key_down(&'f', t0 + DELAY + Duration::from_millis(1), &mut view).is_none());

        let t = keys.poll(t0 + DELAY + PERIOD, &mut view).unwrap();
        assert!((t.scale - 1.0).abs() < 1e-12);
        assert!(!keys.is_repeating());
        assert!(keys.poll(t0 + DELAY + 2 * PERIOD, &mut view).is_none());
    }

    #[test]
    fn missed_polls_catch_up_one_emission() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'e', t0, &mut view);
        let scale_after_press = view.scale();

        // Poll far past several tick deadlines: every elapsed tick fires,
        // but only one transform comes back.
        let t = keys.poll(t0 + DELAY + 3 * PERIOD, &mut view).unwrap();
        assert!(t.scale > scale_after_press);
        assert_eq!(keys.next_deadline(), Some(DELAY + 4 * PERIOD));
    }

    #[test]
    fn invert_pan_swaps_pairs_and_roundtrips() {
        let (mut keys, _view) = fixture();

        keys.invert_pan();
        assert_eq!(keys.control_of(&'a'), Some(Control::PanRight));
        assert_eq!(keys.control_of(&'d'), Some(Control::PanLeft));
        assert_eq!(keys.control_of(&'w'), Some(Control::PanDown));
        assert_eq!(keys.control_of(&'s'), Some(Control::PanUp));
        // Zoom and reset bindings are untouched.
        assert_eq!(keys.control_of(&'e'), Some(Control::ZoomIn));
        assert_eq!(keys.control_of(&'f'), Some(Control::Reset));

        keys.invert_pan();
        assert_eq!(keys.control_of(&'a'), Some(Control::PanLeft));
        assert_eq!(keys.control_of(&'d'), Some(Control::PanRight));
        assert_eq!(keys.control_of(&'w'), Some(Control::PanUp));
        assert_eq!(keys.control_of(&'s'), Some(Control::PanDown));
    }

    #[test]
    fn invert_zoom_keeps_held_state() {
        let (mut keys, mut view) = fixture();
        let t0 = Duration::ZERO;

        keys.on_key_down(&'e', t0, &mut view);
        keys.invert_zoom();

        assert_eq!(keys.control_of(&'e'), Some(Control::ZoomOut));
        assert_eq!(keys.control_of(&'q'), Some(Control::ZoomIn));
        assert!(keys.is_down(&'e'));
    }

    #[test]
    fn bind_replaces_existing_binding() {
        let (mut keys, _view) = fixture();
        keys.bind('e', Control::PanLeft);
        assert_eq!(keys.control_of(&'e'), Some(Control::PanLeft));
    }
}
