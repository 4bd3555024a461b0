use time::{Date, Duration, OffsetDateTime};

pub trait Clock {
    fn today(&self) -> Date;
}

/// Local calendar day, or UTC when the local offset cannot be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Day,
}

impl Period {
    fn step(self) -> Duration {
        match self {
            Period::Week => Duration::weeks(1),
            Period::Day => Duration::days(1),
        }
    }
}

/// Previous / next / today actions over a reference date, reported through
/// a setter.
pub struct Navigator<C, F> {
    period: Period,
    current: Date,
    clock: C,
    set: F,
}

impl<C: Clock, F: FnMut(Date)> Navigator<C, F> {
    pub fn new(period: Period, current: Date, clock: C, set: F) -> Self {
        Self {
            period,
            current,
            clock,
            set,
        }
    }

    pub fn week(current: Date, clock: C, set: F) -> Self {
        Self::new(Period::Week, current, clock, set)
    }

    pub fn day(current: Date, clock: C, set: F) -> Self {
        Self::new(Period::Day, current, clock, set)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn current(&self) -> Date {
        self.current
    }

    pub fn previous(&mut self) -> Date {
        let date = self.current.saturating_sub(self.period.step());
        self.go(date)
    }

    pub fn next(&mut self) -> Date {
        let date = self.current.saturating_add(self.period.step());
        self.go(date)
    }

    pub fn today(&mut self) -> Date {
        let date = self.clock.today();
        self.go(date)
    }

    fn go(&mut self, date: Date) -> Date {
        self.current = date;
        (self.set)(date);
        date
    }
}
