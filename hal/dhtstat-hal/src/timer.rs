//! Microsecond timer abstraction
//!
//! A free-running 32-bit microsecond counter. All arithmetic wraps, so a
//! counter rollover (every ~71 minutes) never produces a bogus timeout.

/// Free-running microsecond counter
pub trait MicrosecondTimer {
    /// Current counter value in microseconds
    fn now_us(&self) -> u32;

    /// Microseconds elapsed since `since_us`
    fn elapsed_us(&self, since_us: u32) -> u32 {
        self.now_us().wrapping_sub(since_us)
    }

    /// Check whether at least `us` microseconds passed since `since_us`
    fn has_elapsed(&self, since_us: u32, us: u32) -> bool {
        self.elapsed_us(since_us) >= us
    }

    /// Busy-wait for `us` microseconds
    fn delay_us(&self, us: u32) {
        let start = self.now_us();
        while !self.has_elapsed(start, us) {
            core::hint::spin_loop();
        }
    }

    /// Start a deadline `budget_us` microseconds from now
    fn deadline(&self, budget_us: u32) -> Deadline {
        Deadline::new(self.now_us(), budget_us)
    }
}

impl<T: MicrosecondTimer + ?Sized> MicrosecondTimer for &T {
    fn now_us(&self) -> u32 {
        T::now_us(self)
    }
}

/// Upper bound for a polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    start_us: u32,
    budget_us: u32,
}

impl Deadline {
    /// Create a deadline starting at `start_us`
    pub const fn new(start_us: u32, budget_us: u32) -> Self {
        Self {
            start_us,
            budget_us,
        }
    }

    /// Check whether the budget is used up
    pub fn expired<T: MicrosecondTimer + ?Sized>(&self, timer: &T) -> bool {
        timer.has_elapsed(self.start_us, self.budget_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Clock that advances by `step` on every read
    struct SteppingClock {
        now: Cell<u32>,
        step: u32,
    }

    impl MicrosecondTimer for SteppingClock {
        fn now_us(&self) -> u32 {
            let now = self.now.get();
            self.now.set(now.wrapping_add(self.step));
            now
        }
    }

    #[test]
    fn test_delay_us_waits_at_least_requested() {
        let clock = SteppingClock {
            now: Cell::new(0),
            step: 3,
        };

        clock.delay_us(40);
        assert!(clock.now.get() >= 40);
    }

    #[test]
    fn test_deadline_expires_across_rollover() {
        let clock = SteppingClock {
            now: Cell::new(u32::MAX - 100),
            step: 0,
        };

        let deadline = clock.deadline(2000);
        assert!(!deadline.expired(&clock));

        // Counter wraps past zero
        clock.now.set(1000);
        assert!(!deadline.expired(&clock));

        clock.now.set(1899);
        assert!(deadline.expired(&clock));
    }

    #[test]
    fn test_elapsed_wraps() {
        let clock = SteppingClock {
            now: Cell::new(5),
            step: 0,
        };
        assert_eq!(clock.elapsed_us(u32::MAX), 6);
    }
}
