pub mod animation;
pub mod camera;
pub mod canvas;
pub mod clock;
pub mod frame_loop;
pub mod geometry;
pub mod transform;
pub mod wireframe;

pub use animation::{AnimationState, CubePose, RenderError, render_frame};
pub use camera::Projection;
pub use canvas::{Canvas, LineSegment};
pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_loop::{
    DEFAULT_FRAME_INTERVAL, EventSource, FrameError, FrameLoop, FrameSchedule, LoopEvent,
    LoopState, Presenter,
};
pub use geometry::{TRIANGLES, VERTICES};
pub use transform::{StackError, TransformStack};
pub use wireframe::{LineSink, WireframeError, draw_wireframe};
