//! Procedural star field: a fixed point cloud with a shared twinkle opacity.

use bytemuck::{Pod, Zeroable};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of stars drawn once at construction.
pub const STAR_COUNT: usize = 3000;

/// Star placement bounds: x and z within ±25, y within [5, 25].
pub const STAR_HORIZONTAL_EXTENT: f32 = 25.0;
pub const STAR_MIN_HEIGHT: f32 = 5.0;
pub const STAR_MAX_HEIGHT: f32 = 25.0;

/// One star vertex. Stars carry no per-point attributes beyond position; the
/// shared opacity uniform does the twinkling.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
}

/// A static point cloud above and around the terrain.
///
/// Positions are drawn once from a seeded RNG so a given seed always
/// produces the same sky. Only `opacity` mutates per frame.
pub struct StarField {
    pub vertices: Vec<StarVertex>,
    /// Shared opacity of every star, updated by the scheduler each tick.
    pub opacity: f32,
}

impl StarField {
    /// Generate the star cloud. Deterministic for a given seed.
    pub fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut vertices = Vec::with_capacity(STAR_COUNT);

        for _ in 0..STAR_COUNT {
            let x = (rng.random::<f32>() - 0.5) * (2.0 * STAR_HORIZONTAL_EXTENT);
            let y = rng.random::<f32>() * (STAR_MAX_HEIGHT - STAR_MIN_HEIGHT) + STAR_MIN_HEIGHT;
            let z = (rng.random::<f32>() - 0.5) * (2.0 * STAR_HORIZONTAL_EXTENT);
            vertices.push(StarVertex { position: [x, y, z] });
        }

        Self {
            vertices,
            opacity: 0.8,
        }
    }

    /// Vertex data as bytes for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Number of points to draw.
    pub fn len(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Returns `true` if the field holds no stars.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_count() {
        let field = StarField::generate(42);
        assert_eq!(field.len(), STAR_COUNT as u32);
        assert!(!field.is_empty());
    }

    #[test]
    fn test_stars_inside_bounding_volume() {
        let field = StarField::generate(42);
        for (i, star) in field.vertices.iter().enumerate() {
            let [x, y, z] = star.position;
            assert!(
                x.abs() <= STAR_HORIZONTAL_EXTENT,
                "star {i} x={x} outside ±{STAR_HORIZONTAL_EXTENT}"
            );
            assert!(
                (STAR_MIN_HEIGHT..=STAR_MAX_HEIGHT).contains(&y),
                "star {i} y={y} outside [{STAR_MIN_HEIGHT}, {STAR_MAX_HEIGHT}]"
            );
            assert!(
                z.abs() <= STAR_HORIZONTAL_EXTENT,
                "star {i} z={z} outside ±{STAR_HORIZONTAL_EXTENT}"
            );
        }
    }

    #[test]
    fn test_same_seed_produces_same_sky() {
        let a = StarField::generate(123);
        let b = StarField::generate(123);
        for (va, vb) in a.vertices.iter().zip(&b.vertices) {
            assert_eq!(va.position, vb.position);
        }
    }

    #[test]
    fn test_different_seed_produces_different_sky() {
        let a = StarField::generate(1);
        let b = StarField::generate(9999);
        let differing = a
            .vertices
            .iter()
            .zip(&b.vertices)
            .filter(|(va, vb)| va.position != vb.position)
            .count();
        assert!(
            differing > STAR_COUNT / 2,
            "only {differing}/{STAR_COUNT} stars differ between seeds"
        );
    }

    #[test]
    fn test_stars_spread_across_quadrants() {
        let field = StarField::generate(42);
        let mut quadrant_counts = [0u32; 4];
        for star in &field.vertices {
            let [x, _, z] = star.position;
            let q = ((x >= 0.0) as usize) | (((z >= 0.0) as usize) << 1);
            quadrant_counts[q] += 1;
        }
        for (q, &count) in quadrant_counts.iter().enumerate() {
            assert!(
                (500..=1000).contains(&count),
                "quadrant {q} holds {count} stars, expected roughly 750"
            );
        }
    }

    #[test]
    fn test_vertex_bytes_length() {
        let field = StarField::generate(7);
        assert_eq!(field.vertex_bytes().len(), STAR_COUNT * 12);
    }
}
