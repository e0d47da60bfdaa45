//! Countdown shown while a question is open.
//!
//! The event loop calls [`Countdown::tick`] once a second. The countdown
//! only counts; running out does not close the question.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running(u32),
    Expired,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    duration: u32,
    state: CountdownState,
}

impl Countdown {
    /// A zero duration disables the countdown entirely.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            state: CountdownState::Idle,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running(_))
    }

    pub fn start(&mut self) {
        if self.duration > 0 {
            self.state = CountdownState::Running(self.duration);
        }
    }

    pub fn cancel(&mut self) {
        self.state = CountdownState::Idle;
    }

    /// Advance one second. Returns true on the tick that hits zero.
    pub fn tick(&mut self) -> bool {
        match self.state {
            CountdownState::Running(remaining) if remaining <= 1 => {
                self.state = CountdownState::Expired;
                true
            }
            CountdownState::Running(remaining) => {
                self.state = CountdownState::Running(remaining - 1);
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_and_expires_once() {
        let mut countdown = Countdown::new(3);
        countdown.start();
        assert_eq!(countdown.state(), CountdownState::Running(3));

        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert_eq!(countdown.state(), CountdownState::Running(1));
        assert!(countdown.tick());
        assert_eq!(countdown.state(), CountdownState::Expired);
        assert!(!countdown.tick());
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.tick();
        countdown.cancel();
        assert!(!countdown.tick());
        assert_eq!(countdown.state(), CountdownState::Idle);
    }

    #[test]
    fn test_zero_duration_never_runs() {
        let mut countdown = Countdown::new(0);
        countdown.start();
        assert!(!countdown.is_running());
    }
}
