use glam::{Mat4, Vec3};

/// Perspective projection plus the fixed camera placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub aspect: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub eye_offset: Vec3,
}

impl Projection {
    pub const FOV_DEGREES: f32 = 60.0;
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 100.0;
    pub const CAMERA_DISTANCE: f32 = 5.0;

    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            fov: Self::FOV_DEGREES.to_radians(),
            near: Self::NEAR,
            far: Self::FAR,
            eye_offset: Vec3::new(0.0, 0.0, -Self::CAMERA_DISTANCE),
        }
    }

    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(width as f32 / height.max(1) as f32)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Base modelview transform: the scene pushed away from the eye.
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(self.eye_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_follows_window_size() {
        let mut projection = Projection::from_size(1000, 800);
        assert!((projection.aspect - 1.25).abs() < 1e-6);

        projection.set_size(800, 800);
        assert!((projection.aspect - 1.0).abs() < 1e-6);

        projection.set_size(0, 600);
        assert!((projection.aspect - 1.0).abs() < 1e-6);
    }

    #[test]
    fn origin_lands_in_front_of_camera() {
        let projection = Projection::new(1.25);
        let eye = projection.view().transform_point3(Vec3::ZERO);
        assert_eq!(eye, Vec3::new(0.0, 0.0, -5.0));

        let clip = projection.matrix().project_point3(eye);
        assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }
}
