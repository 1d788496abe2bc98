//! Fixed-interval clocks driving the run loop.
//!
//! The simulation tick and the render frame are two independent intervals so
//! the snake speed and the refresh rate can be tuned separately.

use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// Advance the simulation one step
    Tick,
    /// Draw a frame
    Frame,
}

pub struct Scheduler {
    tick: Interval,
    frame: Interval,
}

impl Scheduler {
    /// Must be called inside a tokio runtime
    pub fn new(tick_interval: Duration, frame_interval: Duration) -> Self {
        Self {
            tick: skipping(tick_interval),
            frame: skipping(frame_interval),
        }
    }

    /// Wait for whichever clock fires next; ties go to the tick so a frame
    /// never shows a state that is already one step stale.
    pub async fn next(&mut self) -> ClockEvent {
        tokio::select! {
            biased;
            _ = self.tick.tick() => ClockEvent::Tick,
            _ = self.frame.tick() => ClockEvent::Frame,
        }
    }

    /// Restart the tick phase, e.g. when play begins
    pub fn reset_tick(&mut self) {
        self.tick.reset();
    }
}

fn skipping(period: Duration) -> Interval {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
    timer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_frames_outnumber_ticks() {
        let mut scheduler = Scheduler::new(Duration::from_millis(150), Duration::from_millis(16));
        let mut ticks = 0;
        let mut frames = 0;
        let start = tokio::time::Instant::now();

        while start.elapsed() < Duration::from_millis(1500) {
            match scheduler.next().await {
                ClockEvent::Tick => ticks += 1,
                ClockEvent::Frame => frames += 1,
            }
        }

        // Both clocks fire immediately once, then at their own period
        assert!((10..=12).contains(&ticks), "ticks = {ticks}");
        assert!(frames > 5 * ticks, "frames = {frames}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_events_fire_immediately() {
        let mut scheduler = Scheduler::new(Duration::from_millis(150), Duration::from_millis(16));
        assert_eq!(scheduler.next().await, ClockEvent::Tick);
        assert_eq!(scheduler.next().await, ClockEvent::Frame);
    }
}
