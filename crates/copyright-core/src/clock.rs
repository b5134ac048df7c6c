//! Wall-clock year sources
//!
//! The notice reads the current year on every call that needs it, so
//! `endYear: "auto"` tracks the calendar rather than the construction time.

use chrono::Datelike;

/// Source of the current calendar year
pub trait YearSource {
    fn current_year(&self) -> i32;
}

/// Local system clock, read fresh on every call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl YearSource for SystemClock {
    fn current_year(&self) -> i32 {
        current_year()
    }
}

/// A pinned year (tests, reproducible builds, `--now` on the CLI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedYear(pub i32);

impl YearSource for FixedYear {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<T: YearSource + ?Sized> YearSource for &T {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

/// Current year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
