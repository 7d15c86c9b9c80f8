//! # Countdown Timer
//!
//! Run clock that only advances while running and never drops below zero.

/// Countdown with start/pause/resume/stop and time adjustments.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    duration: f32,
    remaining: f32,
    running: bool,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    /// Starts counting from the full duration.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continues from where it was paused.
    pub fn resume(&mut self) {
        if self.remaining > 0.0 {
            self.running = true;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn add_time(&mut self, seconds: f32) {
        self.remaining += seconds;
    }

    pub fn subtract_time(&mut self, seconds: f32) {
        self.remaining = (self.remaining - seconds).max(0.0);
    }

    pub fn update(&mut self, dt: f32) {
        if self.running {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Remaining time as `MM:SS`, rounded up to whole seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use museum_escape::Countdown;
    ///
    /// let mut timer = Countdown::new(600.0);
    /// assert_eq!(timer.display(), "10:00");
    /// timer.subtract_time(59.5);
    /// assert_eq!(timer.display(), "09:01");
    /// ```
    pub fn display(&self) -> String {
        let total = self.remaining.ceil() as u32;
        format!("{:02}:{:02}", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_runs_when_started() {
        let mut timer = Countdown::new(10.0);
        timer.update(3.0);
        assert_eq!(timer.remaining(), 10.0);

        timer.start();
        timer.update(3.0);
        assert_eq!(timer.remaining(), 7.0);
    }

    #[test]
    fn test_pause_resume_keeps_elapsed_time() {
        let mut timer = Countdown::new(10.0);
        timer.start();
        timer.update(4.0);
        timer.pause();
        timer.update(4.0);
        assert_eq!(timer.remaining(), 6.0);
        timer.resume();
        timer.update(1.0);
        assert_eq!(timer.remaining(), 5.0);
    }

    #[test]
    fn test_adjustments_and_expiry() {
        let mut timer = Countdown::new(10.0);
        timer.start();
        timer.add_time(30.0);
        assert_eq!(timer.remaining(), 40.0);
        timer.subtract_time(100.0);
        assert_eq!(timer.remaining(), 0.0);
        assert!(timer.is_expired());
    }

    #[test]
    fn test_reaches_exactly_zero() {
        let mut timer = Countdown::new(1.0);
        timer.start();
        timer.update(1.0);
        assert_eq!(timer.remaining(), 0.0);
        assert!(timer.is_expired());
    }

    #[test]
    fn test_stop_freezes_remaining() {
        let mut timer = Countdown::new(5.0);
        timer.start();
        timer.update(2.0);
        timer.stop();
        assert!(!timer.is_running());
        timer.update(1.0);
        assert_eq!(timer.remaining(), 3.0);
    }
}
