//! Polled encoder demo
//!
//! Demonstrates basic usage of the encoder-tracker crate on the Raspberry Pi
//! Pico 2. Polls the encoder from a 1 ms ticker, drains the accumulated
//! steps once per second, and logs them via defmt.
//!
//! # Wiring
//!
//! | Signal  | Pico 2 Pin | Notes                |
//! |---------|------------|----------------------|
//! | ENC CLK | GP14       | Pull-up enabled      |
//! | ENC DT  | GP15       | Pull-up enabled      |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use encoder_tracker::EncoderTracker;

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Poll period. Must stay well below the shortest time between two clock
/// transitions a human can produce on the knob.
const POLL_PERIOD: Duration = Duration::from_millis(1);

/// Drain and log once per this many polls.
const POLLS_PER_REPORT: u32 = 1000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder lines (GP14 = CLK, GP15 = DT, active with pull-ups) ---
    let clk = Input::new(p.PIN_14, Pull::Up);
    let dt = Input::new(p.PIN_15, Pull::Up);

    let mut encoder = EncoderTracker::new(clk, dt);

    info!("Encoder demo started — rotate the knob to see step counts");

    let mut ticker = Ticker::every(POLL_PERIOD);
    let mut polls = 0u32;

    loop {
        ticker.next().await;

        // GPIO reads on the RP2350 are infallible.
        encoder.update().unwrap();

        polls += 1;
        if polls == POLLS_PER_REPORT {
            polls = 0;
            let steps = encoder.take_delta();
            if steps != 0 {
                info!("Steps this second: {}", steps);
            }
        }
    }
}
