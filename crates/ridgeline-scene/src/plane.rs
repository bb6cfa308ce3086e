//! Subdivided plane mesh generation for terrain layers.

use bytemuck::{Pod, Zeroable};

/// Vertex format for terrain meshes: local position plus local normal.
///
/// Matches shader locations 0 (position, `vec3<f32>`) and 1 (normal,
/// `vec3<f32>`); the stride is 24 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// A subdivided plane in the local XY plane, centered at the origin, with
/// every normal pointing along +Z.
///
/// The vertex shader displaces each vertex along its normal, so the
/// subdivision count directly controls displacement smoothness; it must stay
/// high enough that the noise frequencies in use never show faceting.
pub struct PlaneMesh {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u32>,
    pub width: f32,
    pub height: f32,
    pub segments: u32,
}

impl PlaneMesh {
    /// Generate a `width` × `height` plane with `segments` × `segments`
    /// quads (two triangles each).
    pub fn subdivided(width: f32, height: f32, segments: u32) -> Self {
        let verts_per_side = segments + 1;
        let mut vertices = Vec::with_capacity((verts_per_side * verts_per_side) as usize);

        for row in 0..verts_per_side {
            for col in 0..verts_per_side {
                let u = col as f32 / segments as f32;
                let v = row as f32 / segments as f32;
                vertices.push(PlaneVertex {
                    position: [(u - 0.5) * width, (0.5 - v) * height, 0.0],
                    normal: [0.0, 0.0, 1.0],
                });
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for row in 0..segments {
            for col in 0..segments {
                let a = row * verts_per_side + col;
                let b = a + 1;
                let c = a + verts_per_side;
                let d = c + 1;
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        Self {
            vertices,
            indices,
            width,
            height,
            segments,
        }
    }

    /// Vertex data as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of indices.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_index_counts() {
        let mesh = PlaneMesh::subdivided(16.0, 12.0, 180);
        assert_eq!(mesh.vertices.len(), 181 * 181);
        assert_eq!(mesh.indices.len(), 180 * 180 * 6);
    }

    #[test]
    fn test_plane_is_centered() {
        let mesh = PlaneMesh::subdivided(10.0, 4.0, 2);
        let min_x = mesh.vertices.iter().map(|v| v.position[0]).fold(f32::INFINITY, f32::min);
        let max_x = mesh.vertices.iter().map(|v| v.position[0]).fold(f32::NEG_INFINITY, f32::max);
        assert!((min_x + 5.0).abs() < 1e-5);
        assert!((max_x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_all_normals_point_along_z() {
        let mesh = PlaneMesh::subdivided(16.0, 12.0, 4);
        for v in &mesh.vertices {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        let mesh = PlaneMesh::subdivided(8.0, 8.0, 7);
        let vertex_count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn test_vertex_stride_is_24_bytes() {
        assert_eq!(std::mem::size_of::<PlaneVertex>(), 24);
        let mesh = PlaneMesh::subdivided(1.0, 1.0, 1);
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertices.len() * 24);
    }
}
