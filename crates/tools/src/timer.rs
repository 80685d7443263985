use std::time::Duration;

/// Ring buffer of recent frame step times.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    next: usize,
    filled: bool,
}

impl FrameTimer {
    /// `capacity` is clamped to at least one sample.
    pub fn new(capacity: usize) -> Self {
        Self {
            history: vec![Duration::ZERO; capacity.max(1)],
            next: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.next] = dt;
        self.next = (self.next + 1) % self.history.len();
        if self.next == 0 {
            self.filled = true;
        }
    }

    fn samples(&self) -> &[Duration] {
        if self.filled {
            &self.history
        } else {
            &self.history[..self.next]
        }
    }

    pub fn count(&self) -> usize {
        self.samples().len()
    }

    pub fn average(&self) -> Duration {
        let samples = self.samples();
        if samples.is_empty() {
            return Duration::ZERO;
        }
        samples.iter().sum::<Duration>() / samples.len() as u32
    }

    pub fn max(&self) -> Duration {
        self.samples().iter().copied().max().unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_timer_reports_zero() {
        let timer = FrameTimer::new(4);
        assert_eq!(timer.count(), 0);
        assert_eq!(timer.average(), Duration::ZERO);
        assert_eq!(timer.max(), Duration::ZERO);
    }

    #[test]
    fn wraps_and_keeps_latest() {
        let mut timer = FrameTimer::new(2);
        timer.record(Duration::from_micros(10));
        timer.record(Duration::from_micros(20));
        timer.record(Duration::from_micros(40));
        assert_eq!(timer.count(), 2);
        assert_eq!(timer.average(), Duration::from_micros(30));
        assert_eq!(timer.max(), Duration::from_micros(40));
    }

    #[test]
    fn zero_capacity_still_records() {
        let mut timer = FrameTimer::new(0);
        timer.record(Duration::from_micros(5));
        assert_eq!(timer.count(), 1);
    }
}
