//! Deterministic doubles for the clock, random and render seams.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::runtime::{Clock, RandomSource};
use crate::terminal::{RenderAdapter, RenderError};

/// Clock that never really sleeps. It records every requested pause and
/// reports a fixed instant.
pub struct RecordingClock {
    now: DateTime<Utc>,
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now, sleeps: Mutex::new(Vec::new()) }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn total_slept(&self) -> Duration {
        self.sleeps().iter().sum()
    }
}

#[async_trait]
impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

/// Always draws the same value.
pub struct FixedRandom {
    value: f64,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f64 {
        self.value
    }
}

/// Render adapter that keeps everything in memory.
#[derive(Debug, Default)]
pub struct BufferRenderer {
    output: String,
    clears: usize,
}

impl BufferRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Return and reset the captured output.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl RenderAdapter for BufferRenderer {
    fn write(&mut self, text: &str) -> Result<(), RenderError> {
        self.output.push_str(text);
        Ok(())
    }

    fn clear_scrollback(&mut self) -> Result<(), RenderError> {
        self.clears += 1;
        Ok(())
    }
}
