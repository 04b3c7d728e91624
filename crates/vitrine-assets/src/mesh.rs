use glam::Vec3;

/// A loaded mesh asset (renderer-agnostic). Raw triangle geometry decoded
/// from a scene file.
///
/// Immutable once published to the viewer's `Ready` state; a new selection
/// replaces it wholesale. The one exception is [`translate`](Self::translate),
/// applied exactly once before publication to re-center the mesh.
#[derive(Debug, Clone)]
pub struct MeshAsset {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub indices: Vec<[u32; 3]>,
}

impl MeshAsset {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Translate every vertex by the given offset.
    pub fn translate(&mut self, offset: Vec3) {
        for position in &mut self.positions {
            position[0] += offset.x;
            position[1] += offset.y;
            position[2] += offset.z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MeshAsset {
        MeshAsset {
            name: "tri".into(),
            positions: vec![[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
            normals: None,
            indices: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn counts() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn translate_moves_every_vertex() {
        let mut mesh = triangle();
        mesh.translate(Vec3::new(-1.0, 2.0, 0.5));
        assert_eq!(mesh.positions[0], [0.0, 2.0, 0.5]);
        assert_eq!(mesh.positions[1], [1.0, 2.0, 0.5]);
        assert_eq!(mesh.positions[2], [0.0, 3.0, 0.5]);
    }
}
