use glam::{Mat4, Vec3};

use crate::camera::Projection;
use crate::transform::{StackError, TransformStack};
use crate::wireframe::LineSink;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: Vec3,
    pub to: Vec3,
}

/// Immediate-mode drawing context for a single frame.
///
/// Lines are transformed by the current modelview entry as they arrive and
/// stored in eye space; the presenter applies the projection.
#[derive(Debug, Clone)]
pub struct Canvas {
    projection: Projection,
    modelview: TransformStack,
    segments: Vec<LineSegment>,
}

impl Canvas {
    pub fn new(projection: Projection) -> Self {
        Self {
            modelview: TransformStack::new(projection.view()),
            projection,
            segments: Vec::new(),
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.set_size(width, height);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn modelview(&self) -> &TransformStack {
        &self.modelview
    }

    pub fn modelview_mut(&mut self) -> &mut TransformStack {
        &mut self.modelview
    }

    /// Runs `f` between a modelview push and its matching pop. Entries `f`
    /// leaves pushed are discarded too.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Result<T, StackError> {
        let depth = self.modelview.depth();
        self.modelview.push();
        let value = f(self);
        self.modelview.pop_to(depth)?;
        Ok(value)
    }

    /// Discards the previous frame. The modelview stack is reset to the
    /// camera transform.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.modelview.set_base(self.projection.view());
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl LineSink for Canvas {
    fn line(&mut self, from: Vec3, to: Vec3) {
        self.segments.push(LineSegment {
            from: self.modelview.transform_point(from),
            to: self.modelview.transform_point(to),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_recorded_in_eye_space() {
        let mut canvas = Canvas::new(Projection::new(1.0));
        canvas.modelview_mut().translate(Vec3::X);
        canvas.line(Vec3::ZERO, Vec3::Y);

        assert_eq!(
            canvas.segments(),
            &[LineSegment {
                from: Vec3::new(1.0, 0.0, -5.0),
                to: Vec3::new(1.0, 1.0, -5.0),
            }]
        );
    }

    #[test]
    fn clear_resets_segments_and_modelview() {
        let mut canvas = Canvas::new(Projection::new(1.0));
        canvas.modelview_mut().push();
        canvas.modelview_mut().scale(Vec3::splat(3.0));
        canvas.line(Vec3::ZERO, Vec3::X);

        canvas.clear();

        assert_eq!(canvas.segment_count(), 0);
        assert_eq!(canvas.modelview().depth(), 1);
        assert_eq!(canvas.modelview().current(), canvas.projection().view());
    }

    #[test]
    fn scoped_restores_modelview() {
        let mut canvas = Canvas::new(Projection::new(1.0));
        let before = canvas.modelview().current();

        let depth_inside = canvas
            .scoped(|c| {
                c.modelview_mut().translate(Vec3::Y);
                c.modelview_mut().push();
                c.line(Vec3::ZERO, Vec3::X);
                c.modelview().depth()
            })
            .unwrap();

        assert_eq!(depth_inside, 3);
        assert_eq!(canvas.modelview().depth(), 1);
        assert_eq!(canvas.modelview().current(), before);
        assert_eq!(canvas.segments()[0].from, Vec3::new(0.0, 1.0, -5.0));
    }

    #[test]
    fn scoped_reports_unbalanced_pop() {
        let mut canvas = Canvas::new(Projection::new(1.0));
        let result = canvas.scoped(|c| c.modelview_mut().pop().map(|_| ()));

        assert_eq!(result, Err(StackError::Underflow));
        assert_eq!(canvas.modelview().depth(), 1);
    }
}
