//! Modern analog watch face - incremental refresh engine.
//!
//! This library contains everything that decides *what* changes on the round
//! 240x240 face and *where* it goes. The platform owns the refresh scheduler,
//! the touch controller and the data sources; it calls into
//! [`face::WatchFace`] once per display tick and once per gesture.
//!
//! # Layout
//!
//! - [`dirty`]: [`ChangeTracker`](dirty::ChangeTracker), the gate in front of every redraw
//! - [`geometry`]: fixed-point trig and display coordinate mapping
//! - [`clock`]: time samples, hand angles, the clock-hands updater
//! - [`widgets`]: the circular status widgets (battery, steps, date, heart rate)
//! - [`carousel`]: the three-slot widget carousel and its rotation animation
//! - [`face`]: the orchestrator tying it all together
//! - [`surface`] / [`scene`]: the retained drawing surface and an embedded-graphics backed implementation
//! - [`sources`] / [`assets`]: read-only inputs and the asset probe
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the watch build stays `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod log;

// Configuration
pub mod colors;
pub mod config;

// Pure logic
pub mod clock;
pub mod dirty;
pub mod geometry;

// Inputs
pub mod assets;
pub mod sources;

// Drawing surface
pub mod scene;
pub mod surface;

// Face
pub mod carousel;
pub mod face;
pub mod widgets;

// Re-export commonly used items
pub use dirty::ChangeTracker;
pub use face::{FaceOptions, TouchEvent, WatchFace};
pub use scene::Scene;
pub use sources::{DataSources, SourceSnapshot};
pub use surface::Surface;
