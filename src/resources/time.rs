use std::time::{Duration, Instant};

/// Wall-clock source of per-frame delta time. Sampled once per tick.
#[derive(Debug, Clone)]
pub struct Clock {
    start_time: Instant,
    last_update: Instant,
    delta_time: Duration,
    elapsed_time: Duration,
    frame_count: u64,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta_time: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Sample the clock, returning seconds since the previous sample.
    pub fn update(&mut self) -> f64 {
        self.advance_to(Instant::now())
    }

    /// Sample the clock at a given instant. Instants earlier than the last
    /// sample yield a zero delta.
    pub fn advance_to(&mut self, now: Instant) -> f64 {
        self.delta_time = now.saturating_duration_since(self.last_update);
        self.elapsed_time = now.saturating_duration_since(self.start_time);
        self.last_update = self.last_update.max(now);
        self.frame_count += 1;
        self.delta_seconds()
    }

    pub fn delta_seconds(&self) -> f64 {
        self.delta_time.as_secs_f64()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_time.as_secs_f64()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f64 {
        if self.elapsed_time.as_secs_f64() > 0.0 {
            self.frame_count as f64 / self.elapsed_time.as_secs_f64()
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start_time = now;
        self.last_update = now;
        self.delta_time = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.frame_count = 0;
    }
}
