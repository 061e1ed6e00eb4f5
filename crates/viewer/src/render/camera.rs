use bytemuck::{Pod, Zeroable};
use glam::Mat4;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_projection(projection: Mat4) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_a_column_major_mat4() {
        let projection = twin::Projection::new(1.25).matrix();
        let uniform = CameraUniform::from_projection(projection);

        assert_eq!(uniform.as_bytes().len(), 64);
        assert_eq!(uniform.projection, projection.to_cols_array_2d());
    }
}
