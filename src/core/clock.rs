/// Timezone clock for the detail view.
///
/// Seeded once from the time source, then advanced locally one second per
/// tick. `Unset` is the state before any timezone has resolved; ticks and
/// pause toggles are ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    Unset,
    Running {
        seconds: i64,
    },
    Paused {
        seconds: i64,
    },
}

impl Clock {
    /// Replace the clock with a fresh running value. A new seed always
    /// discards the prior state, including a paused one.
    pub fn seed(&mut self, epoch_seconds: i64) {
        *self = Clock::Running {
            seconds: epoch_seconds,
        };
    }

    /// Advance by one second. Only a running clock moves.
    pub fn tick(&mut self) {
        if let Clock::Running { seconds } = self {
            *seconds += 1;
        }
    }

    /// Flip between running and paused. Returns true if the flag changed.
    pub fn toggle_pause(&mut self) -> bool {
        match *self {
            Clock::Running { seconds } => {
                *self = Clock::Paused { seconds };
                true
            }
            Clock::Paused { seconds } => {
                *self = Clock::Running { seconds };
                true
            }
            Clock::Unset => false,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Clock::Paused { .. })
    }

    pub fn seconds(&self) -> Option<i64> {
        match *self {
            Clock::Unset => None,
            Clock::Running { seconds } | Clock::Paused { seconds } => Some(seconds),
        }
    }

    /// Zero-padded `HH:MM:SS`; an unseeded clock renders as `00:00:00`.
    pub fn display(&self) -> String {
        match self.seconds() {
            Some(seconds) => format_hms(seconds),
            None => "00:00:00".to_string(),
        }
    }
}

/// Format a seconds-since-epoch value on a 24-hour wheel. Hours wrap modulo
/// 24 with no date component.
pub fn format_hms(total_seconds: i64) -> String {
    let hours = total_seconds.div_euclid(3600).rem_euclid(24);
    let minutes = total_seconds.div_euclid(60).rem_euclid(60);
    let seconds = total_seconds.rem_euclid(60);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms_cases() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(86399), "23:59:59");
        assert_eq!(format_hms(86400), "00:00:00");
    }

    #[test]
    fn test_unset_displays_zeroes() {
        assert_eq!(Clock::Unset.display(), "00:00:00");
    }

    #[test]
    fn test_tick_advances_only_running() {
        let mut clock = Clock::Unset;
        clock.tick();
        assert_eq!(clock, Clock::Unset);

        clock.seed(100);
        clock.tick();
        assert_eq!(clock.seconds(), Some(101));

        assert!(clock.toggle_pause());
        clock.tick();
        assert_eq!(clock.seconds(), Some(101));
    }

    #[test]
    fn test_toggle_pause_round_trip() {
        let mut clock = Clock::Running { seconds: 5 };
        assert!(clock.toggle_pause());
        assert!(clock.is_paused());
        assert!(clock.toggle_pause());
        assert!(!clock.is_paused());
        clock.tick();
        assert_eq!(clock.seconds(), Some(6));
    }

    #[test]
    fn test_toggle_pause_on_unset_is_noop() {
        let mut clock = Clock::Unset;
        assert!(!clock.toggle_pause());
        assert_eq!(clock, Clock::Unset);
    }

    #[test]
    fn test_reseed_discards_prior_value() {
        let mut clock = Clock::Running { seconds: 500 };
        clock.seed(42);
        assert_eq!(clock, Clock::Running { seconds: 42 });

        let mut paused = Clock::Paused { seconds: 500 };
        paused.seed(42);
        assert_eq!(paused, Clock::Running { seconds: 42 });
    }
}
