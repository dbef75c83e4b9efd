//! Polled quadrature rotary encoder tracker.
//!
//! This crate decodes a two-line quadrature rotary encoder (CLK + DT) by
//! periodic polling, accumulating a signed count of detent steps that the
//! caller drains at its own pace.
//!
//! # Architecture
//!
//! - **[`EncoderTracker`]** (public) — Owns the two input pins, detects
//!   rising edges on the clock line, and keeps the signed step accumulator.
//! - **[`TrackerError`]** (public) — Wraps a pin read failure, tagged with
//!   the line it came from.
//!
//! The tracker performs no timing of its own: the caller is responsible for
//! invoking [`EncoderTracker::update`] often enough to observe every clock
//! transition (e.g. from a 1 ms tick), and for draining the count with
//! [`EncoderTracker::take_delta`].
//!
//! # Quick start
//!
//! ```ignore
//! use encoder_tracker::EncoderTracker;
//!
//! // `clk` and `dt` are any `embedded-hal` input pins, already configured
//! // as inputs by the HAL.
//! let mut encoder = EncoderTracker::new(clk, dt);
//!
//! loop {
//!     // Call at the polling rate, e.g. from a periodic tick.
//!     encoder.update()?;
//!
//!     // Periodically consume the accumulated steps.
//!     let steps = encoder.take_delta();
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on the public
//!   types for embedded logging.

#![cfg_attr(not(test), no_std)]

pub use error::TrackerError;
pub use tracker::EncoderTracker;

mod error;
mod tracker;
