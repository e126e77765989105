//! Wall-clock implementation of the core `Clock` port

use chrono::{Local, NaiveDate};
use solarquote_core::Clock;

/// Today's date in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
