use glam::Vec3;

/// Anything that can accept line segments, in the coordinate space of its
/// own current transform.
pub trait LineSink {
    fn line(&mut self, from: Vec3, to: Vec3);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireframeError {
    #[error("index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: usize, vertex_count: usize },
}

/// Draws every edge of every triangle in `indices`.
///
/// The whole index list is validated before the first segment is issued,
/// so a failing call leaves the sink untouched. Returns the number of
/// segments drawn.
pub fn draw_wireframe<S: LineSink + ?Sized>(
    sink: &mut S,
    vertices: &[Vec3],
    indices: &[u16],
) -> Result<usize, WireframeError> {
    if indices.len() % 3 != 0 {
        return Err(WireframeError::IncompleteTriangle(indices.len()));
    }
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
        return Err(WireframeError::IndexOutOfRange {
            index: index as usize,
            vertex_count: vertices.len(),
        });
    }

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|i| vertices[triangle[i] as usize]);
        sink.line(a, b);
        sink.line(b, c);
        sink.line(c, a);
    }

    Ok(indices.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{TRIANGLES, VERTICES};

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Vec3, Vec3)>,
    }

    impl LineSink for Recorder {
        fn line(&mut self, from: Vec3, to: Vec3) {
            self.lines.push((from, to));
        }
    }

    #[test]
    fn triangle_edges_in_order() {
        let vertices = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let mut sink = Recorder::default();

        let drawn = draw_wireframe(&mut sink, &vertices, &[0, 1, 2]).unwrap();

        assert_eq!(drawn, 3);
        assert_eq!(
            sink.lines,
            vec![(Vec3::ZERO, Vec3::X), (Vec3::X, Vec3::Y), (Vec3::Y, Vec3::ZERO)]
        );
    }

    #[test]
    fn cube_draws_three_edges_per_triangle() {
        let mut sink = Recorder::default();
        let drawn = draw_wireframe(&mut sink, &VERTICES, &TRIANGLES).unwrap();

        assert_eq!(drawn, 36);
        assert_eq!(sink.lines.len(), 36);
        for (from, to) in &sink.lines {
            assert_ne!(from, to);
        }
    }

    #[test]
    fn incomplete_triangle_fails_before_drawing() {
        let mut sink = Recorder::default();
        let result = draw_wireframe(&mut sink, &VERTICES, &[0, 1, 2, 3]);

        assert_eq!(result, Err(WireframeError::IncompleteTriangle(4)));
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn out_of_range_index_fails_before_drawing() {
        let mut sink = Recorder::default();
        let result = draw_wireframe(&mut sink, &VERTICES, &[0, 1, 2, 3, 4, 24]);

        assert_eq!(
            result,
            Err(WireframeError::IndexOutOfRange {
                index: 24,
                vertex_count: 24
            })
        );
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn empty_index_list_draws_nothing() {
        let mut sink = Recorder::default();
        assert_eq!(draw_wireframe(&mut sink, &VERTICES, &[]), Ok(0));
        assert!(sink.lines.is_empty());
    }
}
