//! Error types for the encoder tracker.

use core::fmt;

/// Errors that can occur while sampling the encoder lines.
///
/// Each variant wraps the underlying pin error, tagged with the line the
/// failed read belonged to. For HALs whose pins have
/// `Error = core::convert::Infallible` this type is uninhabited and costs
/// nothing.
#[derive(Debug)]
pub enum TrackerError<C, D> {
    /// Reading the clock (CLK) line failed.
    Clk(C),

    /// Reading the data (DT) line failed.
    Dt(D),
}

impl<C: fmt::Debug, D: fmt::Debug> fmt::Display for TrackerError<C, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackerError::Clk(e) => write!(f, "CLK pin read error: {:?}", e),
            TrackerError::Dt(e) => write!(f, "DT pin read error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<C: defmt::Format, D: defmt::Format> defmt::Format for TrackerError<C, D> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            TrackerError::Clk(e) => defmt::write!(f, "CLK pin read error: {}", e),
            TrackerError::Dt(e) => defmt::write!(f, "DT pin read error: {}", e),
        }
    }
}
