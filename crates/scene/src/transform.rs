use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("cannot pop the base transform")]
    Underflow,
}

/// Modelview matrix stack. Operations post-multiply the top entry, so the
/// last transform applied is the first one a vertex sees.
#[derive(Debug, Clone)]
pub struct TransformStack {
    entries: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl TransformStack {
    pub fn new(base: Mat4) -> Self {
        Self {
            entries: vec![base],
        }
    }

    pub fn current(&self) -> Mat4 {
        // The base entry is never popped.
        self.entries[self.entries.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self) {
        self.entries.push(self.current());
    }

    pub fn pop(&mut self) -> Result<Mat4, StackError> {
        if self.entries.len() == 1 {
            return Err(StackError::Underflow);
        }
        self.entries.pop().ok_or(StackError::Underflow)
    }

    /// Pops entries until `depth` remain. At least one entry must be popped.
    pub fn pop_to(&mut self, depth: usize) -> Result<(), StackError> {
        if depth == 0 || self.entries.len() <= depth {
            return Err(StackError::Underflow);
        }
        self.entries.truncate(depth);
        Ok(())
    }

    pub fn set_base(&mut self, base: Mat4) {
        self.entries.truncate(1);
        self.entries[0] = base;
    }

    pub fn multiply(&mut self, matrix: Mat4) {
        let top = self.entries.len() - 1;
        self.entries[top] *= matrix;
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.multiply(Mat4::from_translation(offset));
    }

    pub fn rotate_y_degrees(&mut self, degrees: f32) {
        self.multiply(Mat4::from_rotation_y(degrees.to_radians()));
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.multiply(Mat4::from_scale(factors));
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.current().transform_point3(point)
    }
}
