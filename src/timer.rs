use std::{cmp::max, thread::sleep, time::{Duration, Instant}};

/// Paces the game loop at a fixed tick interval.
pub struct FrameTimer {
    interval: Duration,
    next_frame: Instant,
}

impl FrameTimer {
    pub fn new(interval: Duration) -> Self {
        FrameTimer { interval, next_frame: Instant::now() + interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    /// Schedules the following frame. A loop that fell behind starts counting
    /// from `now` rather than rushing through the missed frames.
    pub fn advance(&mut self, now: Instant) {
        self.next_frame = max(self.next_frame + self.interval, now + self.interval);
    }

    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if remaining > Duration::from_millis(0) {
            sleep(remaining);
        }
        self.advance(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(100);

    #[test]
    fn remaining_counts_down() {
        let timer = FrameTimer::new(FRAME);
        let start = timer.next_frame - FRAME;
        assert_eq!(timer.remaining(start), FRAME);
        assert_eq!(timer.remaining(start + Duration::from_millis(40)), Duration::from_millis(60));
        assert_eq!(timer.remaining(start + Duration::from_millis(250)), Duration::from_millis(0));
    }

    #[test]
    fn on_time_frames_keep_the_cadence() {
        let mut timer = FrameTimer::new(FRAME);
        let first = timer.next_frame;
        timer.advance(first);
        assert_eq!(timer.next_frame, first + FRAME);
    }

    #[test]
    fn late_frames_do_not_catch_up() {
        let mut timer = FrameTimer::new(FRAME);
        let late = timer.next_frame + Duration::from_millis(350);
        timer.advance(late);
        assert_eq!(timer.next_frame, late + FRAME);
        assert_eq!(timer.remaining(late), FRAME);
    }

    #[test]
    fn wait_sleeps_until_the_frame() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(Duration::from_millis(5));
        timer.wait();
        assert!(start.elapsed() >= Duration::from_millis(5));
        assert_eq!(timer.interval(), Duration::from_millis(5));
    }
}
