use crate::date::CalendarDate;
use chrono::Local;
use std::cell::Cell;

/// Source of the current date.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Host clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_datelike(&Local::now())
    }
}

/// Always reports the same date. Counts reads so callers can check how often
/// the clock was consulted.
#[derive(Debug)]
pub struct FixedClock {
    date: CalendarDate,
    reads: Cell<usize>,
}

impl FixedClock {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date,
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.reads.set(self.reads.get() + 1);
        self.date
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
