use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use wgpu::{VertexAttribute, VertexBufferLayout, VertexStepMode};

/// Line endpoint in eye space with a flat colour.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl LineVertex {
    const ATTRIBS: [VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn new(position: Vec3, color: [f32; 3]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

pub fn line_vertices(segments: &[twin::LineSegment], color: [f32; 3]) -> Vec<LineVertex> {
    segments
        .iter()
        .flat_map(|s| [LineVertex::new(s.from, color), LineVertex::new(s.to, color)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
        assert_eq!(LineVertex::layout().array_stride, 24);
        assert_eq!(LineVertex::layout().attributes[1].offset, 12);
    }

    #[test]
    fn each_segment_becomes_two_vertices() {
        let segments = [twin::LineSegment {
            from: Vec3::ZERO,
            to: Vec3::new(1.0, 2.0, 3.0),
        }];

        let vertices = line_vertices(&segments, [1.0, 1.0, 1.0]);

        assert_eq!(
            vertices,
            vec![
                LineVertex::new(Vec3::ZERO, [1.0; 3]),
                LineVertex::new(Vec3::new(1.0, 2.0, 3.0), [1.0; 3]),
            ]
        );
        assert_eq!(bytemuck::cast_slice::<_, u8>(&vertices).len(), 48);
    }
}
