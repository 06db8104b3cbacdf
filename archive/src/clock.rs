use chrono::{Local, NaiveDateTime};

use structures::format_timestamp;

pub trait Clock {
    fn now(&mut self) -> NaiveDateTime;
}

pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&mut self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<F: FnMut() -> NaiveDateTime> Clock for F {
    fn now(&mut self) -> NaiveDateTime {
        self()
    }
}

/// Hands out post timestamps that never go backwards, even if the wall clock does.
pub struct Timestamper {
    clock: Box<dyn Clock>,
    last: Option<NaiveDateTime>,
}

impl Timestamper {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: None,
        }
    }

    pub fn next(&mut self) -> String {
        let now = self.clock.now();
        let stamped = match self.last {
            Some(last) if last > now => {
                log::warn!("clock went backwards ({} < {}), reusing last timestamp", now, last);
                last
            }
            _ => now,
        };

        self.last = Some(stamped);
        format_timestamp(stamped)
    }
}

impl Default for Timestamper {
    fn default() -> Self {
        Self::new(LocalClock)
    }
}
