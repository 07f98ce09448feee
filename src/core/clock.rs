//! Wall-clock abstraction.
//!
//! Release stamps depend on the current local date/time. The clock is a trait
//! so the stamping logic stays deterministic under test.

use chrono::NaiveDateTime;

/// Source of the current local date/time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock reading the system's local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock frozen at a single instant.
#[cfg(test)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl FixedClock {
    /// Freeze the clock at the given local instant.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let instant = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .expect("valid test instant");
        Self(instant)
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
