use std::collections::VecDeque;
use std::time::{Duration, Instant};

const SAMPLE_COUNT: usize = 60;
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

pub struct FrameStats {
    frame_times: VecDeque<f32>,
    last_frame: Option<Instant>,
    last_report: Option<Instant>,
    fps: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(SAMPLE_COUNT),
            last_frame: None,
            last_report: None,
            fps: 0.0,
        }
    }

    pub fn record_frame(&mut self, now: Instant) {
        let Some(last) = self.last_frame.replace(now) else {
            self.last_report = Some(now);
            return;
        };

        let dt = now.duration_since(last).as_secs_f32();
        if dt <= 0.0 {
            return;
        }

        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(dt);

        let avg_dt: f32 = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        self.fps = 1.0 / avg_dt;

        if self
            .last_report
            .is_some_and(|at| now.duration_since(at) >= REPORT_INTERVAL)
        {
            log::debug!("{:.1} fps over {} frames", self.fps, self.frame_times.len());
            self.last_report = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_no_rate() {
        let mut stats = FrameStats::new();
        stats.record_frame(Instant::now());
        assert_eq!(stats.fps, 0.0);
    }

    #[test]
    fn steady_frames_average_out() {
        let mut stats = FrameStats::new();
        let start = Instant::now();

        for i in 0..=100 {
            stats.record_frame(start + Duration::from_millis(10 * i));
        }

        assert!((stats.fps - 100.0).abs() < 0.5);
        assert_eq!(stats.frame_times.len(), SAMPLE_COUNT);
    }
}
