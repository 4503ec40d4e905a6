//! Ocean surface mesh: subdivided plane with static height jitter.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::SurfacePoint;
use crate::error::MeshConfigError;
use crate::params::SurfaceConfig;

/// Vertex data for ocean mesh (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Immutable ocean surface mesh
///
/// Built once from a [`SurfaceConfig`]. Heights carry a small seeded jitter
/// and normals are recomputed from the jittered positions. Nothing rewrites
/// the vertices afterwards: wave animation happens during shading.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    config: SurfaceConfig,
}

impl SurfaceMesh {
    /// Build the grid, apply height jitter, and compute vertex normals
    pub fn new(config: &SurfaceConfig) -> Result<Self, MeshConfigError> {
        config.validate()?;

        let ws = config.width_segments as usize;
        let hs = config.height_segments as usize;
        let origin = Vec3::from_array(config.origin);
        let half_width = config.width / 2.0;
        let half_height = config.height / 2.0;
        let jitter = config.height_jitter_range;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut positions = Vec::with_capacity(config.vertex_count());
        let mut uvs = Vec::with_capacity(config.vertex_count());

        // Generate XZ plane grid, row by row along Z
        for z in 0..=hs {
            for x in 0..=ws {
                let u = x as f32 / ws as f32;
                let v = z as f32 / hs as f32;
                let x_pos = u * config.width - half_width;
                let z_pos = v * config.height - half_height;
                let y_pos = rng.gen_range(-jitter..=jitter);

                positions.push(origin + Vec3::new(x_pos, y_pos, z_pos));
                uvs.push([u, v]);
            }
        }

        // Generate triangle indices (counter-clockwise seen from +Y)
        let mut indices = Vec::with_capacity(config.triangle_count() * 3);
        for z in 0..hs {
            for x in 0..ws {
                let top_left = (z * (ws + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (ws + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        let normals = compute_vertex_normals(&positions, &indices);

        let vertices = positions
            .iter()
            .zip(&normals)
            .zip(uvs)
            .map(|((position, normal), uv)| Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv,
            })
            .collect();

        log::info!(
            "Built ocean mesh: {}x{} segments, {} vertices, {} triangles (seed {})",
            ws,
            hs,
            config.vertex_count(),
            config.triangle_count(),
            config.seed
        );

        Ok(Self {
            vertices,
            indices,
            config: config.clone(),
        })
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Raw vertex buffer contents for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index buffer contents for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Height of the undisturbed plane (before jitter)
    pub fn base_height(&self) -> f32 {
        self.config.origin[1]
    }

    /// Reconstruct the surface point above world position (x, z)
    ///
    /// Interpolates position, normal and UV over the triangle containing the
    /// point, the same way a rasterizer interpolates vertex outputs.
    /// Returns `None` outside the plane's extent.
    pub fn surface_point_at(&self, world_x: f32, world_z: f32) -> Option<SurfacePoint> {
        let ws = self.config.width_segments as usize;
        let hs = self.config.height_segments as usize;

        let local_x = world_x - self.config.origin[0] + self.config.width / 2.0;
        let local_z = world_z - self.config.origin[2] + self.config.height / 2.0;
        let grid_x = local_x / self.config.width * ws as f32;
        let grid_z = local_z / self.config.height * hs as f32;

        if !(0.0..=ws as f32).contains(&grid_x) || !(0.0..=hs as f32).contains(&grid_z) {
            return None;
        }

        let cell_x = (grid_x.floor() as usize).min(ws - 1);
        let cell_z = (grid_z.floor() as usize).min(hs - 1);
        let fx = grid_x - cell_x as f32;
        let fz = grid_z - cell_z as f32;

        let top_left = cell_z * (ws + 1) + cell_x;
        let top_right = top_left + 1;
        let bottom_left = (cell_z + 1) * (ws + 1) + cell_x;
        let bottom_right = bottom_left + 1;

        // Cells are split along the bottom-left / top-right diagonal
        let weights = if fx + fz <= 1.0 {
            [
                (top_left, 1.0 - fx - fz),
                (top_right, fx),
                (bottom_left, fz),
            ]
        } else {
            [
                (bottom_right, fx + fz - 1.0),
                (top_right, 1.0 - fz),
                (bottom_left, 1.0 - fx),
            ]
        };

        let mut position = Vec3::ZERO;
        let mut normal = Vec3::ZERO;
        let mut uv = Vec2::ZERO;
        for (index, weight) in weights {
            let vertex = &self.vertices[index];
            position += Vec3::from_array(vertex.position) * weight;
            normal += Vec3::from_array(vertex.normal) * weight;
            uv += Vec2::from_array(vertex.uv) * weight;
        }

        Some(SurfacePoint {
            world_position: position,
            normal: normal.try_normalize().unwrap_or(Vec3::Y),
            uv,
        })
    }
}

/// Area-weighted vertex normals from triangle faces
///
/// Each face adds its unnormalized cross product to its three vertices;
/// vertices without a non-degenerate face fall back to +Y.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[i1] - positions[i0]).cross(positions[i2] - positions[i0]);
        normals[i0] += face;
        normals[i1] += face;
        normals[i2] += face;
    }

    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SurfaceConfig {
        SurfaceConfig::square(2.0, 4)
    }

    #[test]
    fn test_mesh_counts() {
        let config = SurfaceConfig {
            width_segments: 5,
            height_segments: 3,
            ..small_config()
        };
        let mesh = SurfaceMesh::new(&config).unwrap();

        // Check vertex count: (ws + 1) * (hs + 1)
        assert_eq!(mesh.vertices().len(), 6 * 4);

        // Check triangle count: ws * hs * 2
        assert_eq!(mesh.triangle_count(), 5 * 3 * 2);
        assert_eq!(mesh.indices().len(), 5 * 3 * 6);
        assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertices().len()));
    }

    #[test]
    fn test_regenerate_same_dimensions_same_counts() {
        let a = SurfaceMesh::new(&small_config()).unwrap();
        let b = SurfaceMesh::new(&small_config()).unwrap();
        assert_eq!(a.vertices().len(), 25);
        assert_eq!(a.vertices().len(), b.vertices().len());
        assert_eq!(a.triangle_count(), 32);
        assert_eq!(a.triangle_count(), b.triangle_count());
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let a = SurfaceMesh::new(&small_config()).unwrap();
        let b = SurfaceMesh::new(&small_config()).unwrap();
        assert_eq!(a.vertices(), b.vertices());

        let other_seed = SurfaceConfig {
            seed: 7,
            ..small_config()
        };
        let c = SurfaceMesh::new(&other_seed).unwrap();
        assert_ne!(a.vertices(), c.vertices());
    }

    #[test]
    fn test_jitter_within_range() {
        let config = SurfaceConfig {
            height_jitter_range: 0.05,
            origin: [0.0, -2.0, 0.0],
            ..SurfaceConfig::square(10.0, 32)
        };
        let mesh = SurfaceMesh::new(&config).unwrap();
        let mut any_nonzero = false;
        for v in mesh.vertices() {
            let offset = v.position[1] + 2.0;
            assert!(offset.abs() <= 0.05 + 1e-5, "jitter {} out of range", offset);
            any_nonzero |= offset.abs() > 1e-4;
        }
        assert!(any_nonzero);
    }

    #[test]
    fn test_zero_jitter_gives_flat_up_normals() {
        let config = SurfaceConfig {
            height_jitter_range: 0.0,
            ..small_config()
        };
        let mesh = SurfaceMesh::new(&config).unwrap();
        for v in mesh.vertices() {
            assert_eq!(v.position[1], 0.0);
            assert!((Vec3::from_array(v.normal) - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn test_normals_unit_and_facing_up() {
        let mesh = SurfaceMesh::new(&SurfaceConfig::square(50.0, 64)).unwrap();
        for v in mesh.vertices() {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
            // Jitter of ±0.05 over 0.78m cells only tilts normals slightly
            assert!(n.y > 0.9);
        }
    }

    #[test]
    fn test_plane_extent_and_uvs() {
        let mesh = SurfaceMesh::new(&small_config()).unwrap();
        let first = mesh.vertices()[0];
        let last = mesh.vertices()[mesh.vertices().len() - 1];
        assert_eq!([first.position[0], first.position[2]], [-1.0, -1.0]);
        assert_eq!([last.position[0], last.position[2]], [1.0, 1.0]);
        assert_eq!(first.uv, [0.0, 0.0]);
        assert_eq!(last.uv, [1.0, 1.0]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SurfaceConfig {
            width_segments: 0,
            ..small_config()
        };
        assert!(matches!(
            SurfaceMesh::new(&config),
            Err(MeshConfigError::ZeroSegments { axis: "width", .. })
        ));
    }

    #[test]
    fn test_oversized_jitter_rejected_before_sampling() {
        let config = SurfaceConfig {
            height_jitter_range: 3.0e38,
            ..small_config()
        };
        assert!(matches!(
            SurfaceMesh::new(&config),
            Err(MeshConfigError::JitterExceedsCell { .. })
        ));
    }

    #[test]
    fn test_buffer_bytes() {
        let mesh = SurfaceMesh::new(&small_config()).unwrap();
        assert_eq!(mesh.vertex_bytes().len(), 25 * std::mem::size_of::<Vertex>());
        assert_eq!(mesh.index_bytes().len(), 32 * 3 * 4);
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_surface_point_interpolates_vertices() {
        let mesh = SurfaceMesh::new(&small_config()).unwrap();

        // Exactly on a vertex: reproduces it
        let vertex = mesh.vertices()[6]; // x = 1, z = 1 -> world (-0.5, -0.5)
        let point = mesh.surface_point_at(-0.5, -0.5).unwrap();
        assert!((point.world_position - Vec3::from_array(vertex.position)).length() < 1e-5);
        assert!((point.normal - Vec3::from_array(vertex.normal)).length() < 1e-5);

        // Between vertices: stays inside the jitter band
        let point = mesh.surface_point_at(0.3, 0.71).unwrap();
        assert!((point.world_position.x - 0.3).abs() < 1e-5);
        assert!((point.world_position.z - 0.71).abs() < 1e-5);
        assert!(point.world_position.y.abs() <= 0.05 + 1e-5);
        assert!((point.normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_surface_point_outside_extent() {
        let mesh = SurfaceMesh::new(&small_config()).unwrap();
        assert!(mesh.surface_point_at(1.5, 0.0).is_none());
        assert!(mesh.surface_point_at(0.0, -1.01).is_none());
        assert!(mesh.surface_point_at(1.0, 1.0).is_some());
    }

    #[test]
    fn test_compute_vertex_normals_tilted_triangle() {
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        for n in normals {
            assert!((n - expected).length() < 1e-6);
        }
    }
}
