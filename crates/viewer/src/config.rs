use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub frame_interval: Duration,
    pub clear_color: wgpu::Color,
    pub line_color: [f32; 3],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Twin Cubes: Vertical Motion with Mirroring".to_string(),
            width: 1000,
            height: 800,
            frame_interval: twin::DEFAULT_FRAME_INTERVAL,
            clear_color: wgpu::Color::BLACK,
            line_color: [1.0, 1.0, 1.0],
        }
    }
}
