use std::f64::consts::{PI, TAU};
use std::time::Duration;

use glam::Vec3;

use crate::canvas::Canvas;
use crate::geometry::{TRIANGLES, VERTICES};
use crate::transform::StackError;
use crate::wireframe::{WireframeError, draw_wireframe};

pub const BASE_SCALE: f64 = 1.0;
pub const SCALE_AMPLITUDE: f64 = 0.8;
pub const SCALE_PERIOD_MS: f64 = 3000.0;

pub const VERTICAL_AMPLITUDE: f64 = 0.5;
pub const VERTICAL_PERIOD_SECS: f64 = 2.0;

pub const ROTATION_DEGREES_PER_MS: f64 = 0.05;

pub const CUBE_SPACING: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("wireframe: {0}")]
    Wireframe(#[from] WireframeError),
    #[error("transform stack: {0}")]
    Stack(#[from] StackError),
}

/// Animation scalars derived from elapsed time. Nothing here carries over
/// between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub pulsating_scale: f32,
    pub vertical_offset: f32,
    pub rotation_degrees: f32,
}

impl AnimationState {
    pub fn at(elapsed: Duration) -> Self {
        let ms = elapsed.as_secs_f64() * 1000.0;

        let phase = ms.rem_euclid(SCALE_PERIOD_MS);
        let pulsating_scale = BASE_SCALE + SCALE_AMPLITUDE * (PI * phase / SCALE_PERIOD_MS).sin();

        let secs = ms / 1000.0;
        let vertical_offset = VERTICAL_AMPLITUDE * (TAU * secs / VERTICAL_PERIOD_SECS).sin();

        // Reduced in f64 so the angle stays precise after long sessions.
        let rotation_degrees = (ms * ROTATION_DEGREES_PER_MS).rem_euclid(360.0);

        Self {
            pulsating_scale: pulsating_scale as f32,
            vertical_offset: vertical_offset as f32,
            rotation_degrees: rotation_degrees as f32,
        }
    }

    pub fn left_pose(&self) -> CubePose {
        CubePose {
            translation: Vec3::new(-CUBE_SPACING, self.vertical_offset, 0.0),
            rotation_degrees: self.rotation_degrees,
            scale: Vec3::splat(self.pulsating_scale),
        }
    }

    /// Mirror image of the left cube: opposite spin and a negated X scale.
    pub fn right_pose(&self) -> CubePose {
        let s = self.pulsating_scale;
        CubePose {
            translation: Vec3::new(CUBE_SPACING, self.vertical_offset, 0.0),
            rotation_degrees: -self.rotation_degrees,
            scale: Vec3::new(-s, s, s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubePose {
    pub translation: Vec3,
    pub rotation_degrees: f32,
    pub scale: Vec3,
}

impl CubePose {
    fn draw(&self, canvas: &mut Canvas) -> Result<usize, RenderError> {
        let drawn = canvas.scoped(|canvas| {
            let modelview = canvas.modelview_mut();
            modelview.translate(self.translation);
            modelview.rotate_y_degrees(self.rotation_degrees);
            modelview.scale(self.scale);
            draw_wireframe(canvas, &VERTICES, &TRIANGLES)
        })??;
        Ok(drawn)
    }
}

/// Clears `canvas` and records both cubes for the given elapsed time.
pub fn render_frame(canvas: &mut Canvas, elapsed: Duration) -> Result<AnimationState, RenderError> {
    let state = AnimationState::at(elapsed);

    canvas.clear();
    state.left_pose().draw(canvas)?;
    state.right_pose().draw(canvas)?;

    Ok(state)
}
