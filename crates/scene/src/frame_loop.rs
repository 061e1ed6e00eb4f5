use std::time::Duration;

use crate::animation::{RenderError, render_frame};
use crate::camera::Projection;
use crate::canvas::Canvas;
use crate::clock::Clock;

pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    Quit,
    Resized { width: u32, height: u32 },
}

/// Turns a recorded canvas into pixels.
pub trait Presenter {
    type Error;

    fn present(&mut self, canvas: &Canvas) -> Result<(), Self::Error>;
}

pub trait EventSource {
    /// Returns every event that arrived since the last poll. Must not block.
    fn poll(&mut self) -> Vec<LoopEvent>;
}

impl<F> EventSource for F
where
    F: FnMut() -> Vec<LoopEvent>,
{
    fn poll(&mut self) -> Vec<LoopEvent> {
        self()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError<E> {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("present failed: {0}")]
    Present(E),
}

/// Fixed-interval frame pacing measured on the loop's own clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameSchedule {
    interval: Duration,
    next_frame: Duration,
}

impl FrameSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_frame(&self) -> Duration {
        self.next_frame
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.next_frame
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        self.next_frame.saturating_sub(now)
    }

    /// Schedules the next frame one interval after `now`.
    pub fn advance(&mut self, now: Duration) {
        self.next_frame = now + self.interval;
    }
}

pub struct FrameLoop<C> {
    clock: C,
    canvas: Canvas,
    schedule: FrameSchedule,
    state: LoopState,
    frames: u64,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(clock: C, projection: Projection, interval: Duration) -> Self {
        log::debug!(
            "frame loop: aspect {:.3}, interval {:?}",
            projection.aspect,
            interval
        );
        Self {
            clock,
            canvas: Canvas::new(projection),
            schedule: FrameSchedule::new(interval),
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn schedule(&self) -> &FrameSchedule {
        &self.schedule
    }

    pub fn handle_event(&mut self, event: LoopEvent) {
        match event {
            LoopEvent::Quit => self.stop(),
            LoopEvent::Resized { width, height } => {
                if width == 0 || height == 0 {
                    return;
                }
                log::debug!("resized to {width}x{height}");
                self.canvas.resize(width, height);
            }
        }
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("quit requested after {} frames", self.frames);
            self.state = LoopState::Stopped;
        }
    }

    pub fn is_frame_due(&self) -> bool {
        self.schedule.is_due(self.clock.elapsed())
    }

    pub fn time_until_next_frame(&self) -> Duration {
        self.schedule.remaining(self.clock.elapsed())
    }

    /// Handles polled events, then draws and presents one frame unless one
    /// of them stopped the loop.
    pub fn step<P: Presenter>(
        &mut self,
        events: impl IntoIterator<Item = LoopEvent>,
        presenter: &mut P,
    ) -> Result<LoopState, FrameError<P::Error>> {
        for event in events {
            self.handle_event(event);
        }
        if !self.is_running() {
            return Ok(self.state);
        }

        render_frame(&mut self.canvas, self.clock.elapsed())?;
        presenter
            .present(&self.canvas)
            .map_err(FrameError::Present)?;

        self.frames += 1;
        self.schedule.advance(self.clock.elapsed());
        Ok(self.state)
    }

    /// Polls, steps and sleeps until a quit event arrives. Returns the
    /// number of frames presented.
    pub fn run<S, P>(&mut self, source: &mut S, presenter: &mut P) -> Result<u64, FrameError<P::Error>>
    where
        S: EventSource + ?Sized,
        P: Presenter,
    {
        while self.is_running() {
            if self.step(source.poll(), presenter)? == LoopState::Stopped {
                break;
            }
            self.clock.sleep(self.time_until_next_frame());
        }
        Ok(self.frames)
    }
}
