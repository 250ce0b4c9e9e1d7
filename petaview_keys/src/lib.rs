// Copyright 2025 the Petaview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Petaview Keys: a key-repeat input adapter for [`petaview_view`].
//!
//! This crate turns raw key-down/key-up events into discrete view controls
//! with a two-phase repeat behavior: a bound key fires its control once when
//! pressed, and after a short delay with the key still held the adapter
//! enters a fast-repeat mode that fires the reduced-rate variant of every
//! held key's control on a fixed period.
//!
//! The adapter never arms host timers. In the manner of a host-agnostic
//! timer queue, it keeps deadlines as monotonic [`core::time::Duration`]
//! timestamps supplied by the caller and is driven entirely by
//! [`KeyRepeat::poll`]; [`KeyRepeat::next_deadline`] tells the host when the
//! next call is due. This keeps the state machine deterministic and fully
//! testable without an event loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Size;
//! use petaview_keys::{KeyRepeat, Timings};
//! use petaview_view::MapViewport;
//!
//! let mut view = MapViewport::new(Size::new(800.0, 500.0), Size::new(960.0, 600.0)).unwrap();
//! let mut keys = KeyRepeat::with_wasd_bindings(Timings::default());
//!
//! // Tapping a zoom key fires its control once, immediately.
//! let t0 = Duration::ZERO;
//! let emitted = keys.on_key_down(&'e', t0, &mut view);
//! assert!(emitted.is_some());
//! keys.on_key_up(&'e');
//!
//! // Holding a pan key past the delay enters fast-repeat mode; each poll
//! // that crosses a tick fires the held controls and re-emits once.
//! keys.on_key_down(&'d', t0, &mut view);
//! let tick = keys.next_deadline().unwrap() + Timings::default().period;
//! assert!(keys.poll(tick, &mut view).is_some());
//! ```
//!
//! ## Design notes
//!
//! - Releasing every held key cancels the pending delay and stops the
//!   repeat; no tick fires after the release.
//! - The reset control fires immediately, cancels any session, and never
//!   arms the repeat delay.
//! - Pan and zoom key pairs can be inverted at runtime without touching the
//!   held state of the keys.
//!
//! This crate is `no_std`.

#![no_std]

mod repeat;

pub use repeat::{Control, KeyRepeat, Timings};
