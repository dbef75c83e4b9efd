//! Quadrature decode and step accumulation.
//!
//! [`EncoderTracker`] recognises one detent per full pulse on the clock line
//! by reacting to the rising edge only; the falling edge is a pure state
//! update. Direction comes from the data line sampled at the moment of the
//! edge.

use embedded_hal::digital::InputPin;

use crate::error::TrackerError;

/// Polled decoder for a two-line quadrature rotary encoder.
///
/// Owns the CLK and DT input pins and a signed accumulator of net detent
/// steps. [`update`](Self::update) must be called fast enough to observe
/// every transition of the clock line; steps that occur entirely between two
/// polls are silently lost, which is inherent to polling.
///
/// All methods complete in constant bounded time, never block and never
/// allocate, so the tracker is suitable for a tight tick handler. It is
/// single-context by design: callers that sample and drain from different
/// execution contexts must supply their own mutual exclusion.
///
/// # Example
///
/// ```ignore
/// let mut encoder = EncoderTracker::new(clk_pin, dt_pin);
///
/// // In the periodic tick:
/// encoder.update()?;
///
/// // Wherever the motion is consumed:
/// let steps = encoder.take_delta(); // positive = counter-clockwise
/// ```
pub struct EncoderTracker<Clk, Dt> {
    clk: Clk,
    dt: Dt,
    /// Clock level seen by the previous `update()`. `None` until the first
    /// call, so the first sample only seeds the baseline and cannot count.
    last_clk: Option<bool>,
    delta: i16,
}

impl<Clk, Dt> EncoderTracker<Clk, Dt>
where
    Clk: InputPin,
    Dt: InputPin,
{
    /// Create a tracker from two already-configured input pins.
    ///
    /// The accumulator starts at zero and no pin is read here; the first
    /// call to [`update`](Self::update) establishes the clock baseline.
    ///
    /// # Arguments
    /// * `clk` — Input pin wired to the encoder's CLK output
    /// * `dt` — Input pin wired to the encoder's DT output
    pub fn new(clk: Clk, dt: Dt) -> Self {
        Self {
            clk,
            dt,
            last_clk: None,
            delta: 0,
        }
    }

    /// Sample both lines and accumulate at most one step.
    ///
    /// Reads the clock line and compares it with the level remembered from
    /// the previous call. Only a low→high transition counts, so one full
    /// low→high→low pulse per detent yields exactly one step. On a rising
    /// edge the data line decides the direction:
    ///
    /// - DT differs from CLK — counter-clockwise, accumulator `+1`
    /// - DT equals CLK — clockwise, accumulator `-1`
    ///
    /// This mapping is the encoder's wiring convention; swapping it inverts
    /// every reported rotation. The fresh clock level is stored whether or
    /// not an edge was recognised.
    ///
    /// # Errors
    /// * [`TrackerError::Clk`] / [`TrackerError::Dt`] if the underlying pin
    ///   read fails. On HALs with infallible pins this cannot occur.
    pub fn update(&mut self) -> Result<(), TrackerError<Clk::Error, Dt::Error>> {
        let clk = self.clk.is_high().map_err(TrackerError::Clk)?;

        let rising = match self.last_clk {
            Some(prev) => !prev && clk,
            // First sample seeds the baseline only.
            None => false,
        };

        if rising {
            let dt = self.dt.is_high().map_err(TrackerError::Dt)?;
            if dt != clk {
                self.delta = self.delta.wrapping_add(1);
            } else {
                self.delta = self.delta.wrapping_sub(1);
            }
        }

        self.last_clk = Some(clk);
        Ok(())
    }

    /// Consume the accumulated step count.
    ///
    /// Returns the net steps since the previous drain (positive =
    /// counter-clockwise) and zeroes the accumulator in the same call, so
    /// each step is reported to exactly one caller. Draining twice with no
    /// intervening [`update`](Self::update) yields the count, then zero.
    pub fn take_delta(&mut self) -> i16 {
        let delta = self.delta;
        self.delta = 0;
        delta
    }

    /// Discard any accumulated steps without reporting them.
    pub fn reset(&mut self) {
        self.delta = 0;
    }

    /// Peek at the pending step count without consuming it.
    pub fn delta(&self) -> i16 {
        self.delta
    }
}
