//! Presentation countdown.
//!
//! Two states: idle (no deadline) and running. [`Countdown::tick`] takes the
//! current time as a parameter, so the machine is driven identically by a
//! real 1-second interval and by simulated time in tests. Expiry fires its
//! notification exactly once; the countdown never loops or restarts on its
//! own.

/// What one tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Remaining time as zero-padded `HH:MM:SS`, clamped at `00:00:00`.
    pub display: String,
    /// True on the single tick where the countdown reaches zero. A deadline
    /// already in the past fires this on the first tick.
    pub just_expired: bool,
    /// True from the expiry tick onward; the driver stops ticking.
    pub finished: bool,
}

/// A running countdown toward an absolute deadline (epoch milliseconds).
#[derive(Debug, Clone)]
pub struct Countdown {
    end_ms: i64,
    notified: bool,
}

impl Countdown {
    pub fn new(end_ms: i64) -> Self {
        Self {
            end_ms,
            notified: false,
        }
    }

    /// Resume from a persisted deadline; `None` means the timer is idle.
    pub fn resume(timer_end: Option<i64>) -> Option<Self> {
        timer_end.map(Self::new)
    }

    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    /// Advance to `now_ms` and report the remaining time.
    pub fn tick(&mut self, now_ms: i64) -> Tick {
        let remaining_secs = ((self.end_ms - now_ms).max(0) / 1000) as u64;
        let finished = remaining_secs == 0 && now_ms >= self.end_ms;
        let just_expired = finished && !self.notified;
        if finished {
            self.notified = true;
        }
        Tick {
            display: format_hms(remaining_secs),
            just_expired,
            finished,
        }
    }
}

/// Format whole seconds as zero-padded `HH:MM:SS`.
pub fn format_hms(total_secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(61), "00:01:01");
        assert_eq!(format_hms(3600 + 2 * 60 + 3), "01:02:03");
        assert_eq!(format_hms(25 * 3600), "25:00:00");
    }

    #[test]
    fn test_running_tick_counts_down() {
        let mut c = Countdown::new(90_000);
        let t = c.tick(0);
        assert_eq!(t.display, "00:01:30");
        assert!(!t.finished);
        assert!(!t.just_expired);

        let t = c.tick(30_000);
        assert_eq!(t.display, "00:01:00");
    }

    #[test]
    fn test_expiry_fires_exactly_once() {
        // 1-minute countdown, then advance past the deadline repeatedly.
        let mut c = Countdown::new(60_000);
        let t = c.tick(60_000);
        assert_eq!(t.display, "00:00:00");
        assert!(t.just_expired);
        assert!(t.finished);

        let t = c.tick(120_000);
        assert_eq!(t.display, "00:00:00");
        assert!(!t.just_expired);
        assert!(t.finished);
    }

    #[test]
    fn test_resumed_past_deadline_expires_on_first_tick() {
        let mut c = Countdown::resume(Some(1_000)).expect("deadline set");
        let t = c.tick(5_000);
        assert_eq!(t.display, "00:00:00");
        assert!(t.just_expired);
    }

    #[test]
    fn test_resume_idle() {
        assert!(Countdown::resume(None).is_none());
    }

    #[test]
    fn test_display_clamps_never_negative() {
        let mut c = Countdown::new(0);
        let t = c.tick(999_999);
        assert_eq!(t.display, "00:00:00");
    }
}
