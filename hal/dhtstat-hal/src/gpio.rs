//! GPIO pin abstractions
//!
//! Provides traits for the digital pins the firmware touches: a plain
//! input for buttons and a line that flips between push-pull output and
//! pulled-up input for single-wire sensors.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Bidirectional single-wire data line
///
/// The host drives the line as a push-pull output during the start
/// signal, then hands it over to the sensor by switching to an input
/// with the internal pull-up enabled. An idle released line reads high.
pub trait DataLine {
    /// Configure as push-pull output and drive low
    fn drive_low(&mut self);

    /// Configure as push-pull output and drive high
    fn drive_high(&mut self);

    /// Switch to input with pull-up, releasing the line to the sensor
    fn release(&mut self);

    /// Sample the current line level
    fn is_high(&self) -> bool;

    /// Sample the current line level
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Check whether the line currently reads `high`
    fn is_level(&self, high: bool) -> bool {
        self.is_high() == high
    }
}

// Mutable references forward, so drivers can borrow pins they don't own
impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&self) -> bool {
        T::is_high(self)
    }
}

impl<T: DataLine + ?Sized> DataLine for &mut T {
    fn drive_low(&mut self) {
        T::drive_low(self)
    }

    fn drive_high(&mut self) {
        T::drive_high(self)
    }

    fn release(&mut self) {
        T::release(self)
    }

    fn is_high(&self) -> bool {
        T::is_high(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockLine {
        driven: Option<bool>,
        external_low: bool,
    }

    impl DataLine for MockLine {
        fn drive_low(&mut self) {
            self.driven = Some(false);
        }

        fn drive_high(&mut self) {
            self.driven = Some(true);
        }

        fn release(&mut self) {
            self.driven = None;
        }

        fn is_high(&self) -> bool {
            match self.driven {
                Some(level) => level,
                // Pull-up wins unless someone pulls the line down
                None => !self.external_low,
            }
        }
    }

    #[test]
    fn test_released_line_follows_pull_up() {
        let mut line = MockLine {
            driven: None,
            external_low: false,
        };

        line.drive_low();
        assert!(line.is_low());

        line.release();
        assert!(line.is_high());
        assert!(line.is_level(true));

        line.external_low = true;
        assert!(line.is_level(false));
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn pulse_high<L: DataLine>(mut line: L) {
            line.drive_high();
        }

        let mut line = MockLine {
            driven: None,
            external_low: false,
        };

        pulse_high(&mut line);
        assert_eq!(line.driven, Some(true));
    }
}
