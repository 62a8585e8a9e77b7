//! Time abstraction traits for platform-agnostic timing.
//!
//! Also provides [`Millis16`], a 16-bit wrapping millisecond clock matching the
//! truncated tick counters common on small microcontrollers.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping counter must use wrapping
    /// subtraction so the result stays correct across the overflow boundary.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Millisecond duration measured on a 16-bit clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis16Duration(pub u16);

impl TimeDuration for Millis16Duration {
    const ZERO: Self = Millis16Duration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    /// Values above `u16::MAX` saturate.
    fn from_millis(millis: u64) -> Self {
        Millis16Duration(millis.min(u16::MAX as u64) as u16)
    }
}

/// Instant on a free-running 16-bit millisecond counter that wraps after ~65.5 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis16(pub u16);

impl Millis16 {
    /// Truncates a wider millisecond counter to 16 bits.
    #[inline]
    pub fn from_ticks(ticks: u32) -> Self {
        Millis16(ticks as u16)
    }

    /// Returns the raw counter value.
    #[inline]
    pub fn as_millis(&self) -> u16 {
        self.0
    }
}

impl TimeInstant for Millis16 {
    type Duration = Millis16Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Millis16Duration(self.0.wrapping_sub(earlier.0))
    }
}
