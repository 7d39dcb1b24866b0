use bevy::render::{
    mesh::{shape, Indices, Mesh, VertexAttributeValues},
    render_resource::PrimitiveTopology,
};

/// Segments used for every circle, enough to look round at 500 pixels
const NB_SEGMENTS: usize = 100;

/// Radius for circular meshes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radius(pub f32);

impl Radius {
    /// A filled disc centered on the origin
    pub fn disc_mesh(self) -> Mesh {
        shape::Circle {
            radius: self.0,
            vertices: NB_SEGMENTS,
        }
        .into()
    }

    /// An unfilled circle `width` pixels thick, centered on the origin.
    /// The stroke is centered on the radius.
    pub fn ring_mesh(self, width: f32) -> Mesh {
        let outer = self.0 + width / 2.0;
        let inner = (self.0 - width / 2.0).max(0.0);
        let mut positions: Vec<[f32; 3]> = Vec::with_capacity(NB_SEGMENTS * 2);
        let mut indices: Vec<u32> = Vec::with_capacity(NB_SEGMENTS * 6);
        for i in 0..NB_SEGMENTS {
            let angle = 2.0 * std::f32::consts::PI * (i as f32) / (NB_SEGMENTS as f32);
            let (sin, cos) = angle.sin_cos();
            positions.push([outer * cos, outer * sin, 0.0]);
            positions.push([inner * cos, inner * sin, 0.0]);

            // Two triangles bridging this segment to the next, wrapping at the end
            let this_outer = (2 * i) as u32;
            let this_inner = this_outer + 1;
            let next_outer = ((2 * (i + 1)) % (2 * NB_SEGMENTS)) as u32;
            let next_inner = next_outer + 1;
            indices.extend_from_slice(&[
                this_outer, this_inner, next_outer, //
                next_outer, this_inner, next_inner, //
            ]);
        }
        let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
        let uvs = vec![[0.0, 0.0]; positions.len()];

        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList);
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            VertexAttributeValues::Float32x3(positions),
        );
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_NORMAL,
            VertexAttributeValues::Float32x3(normals),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, VertexAttributeValues::Float32x2(uvs));
        mesh.set_indices(Some(Indices::U32(indices)));
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(positions)) => positions.clone(),
            _ => panic!("mesh has no positions"),
        }
    }

    #[test]
    fn test_ring_vertices_straddle_radius() {
        let mesh = Radius(170.0).ring_mesh(1.0);
        let positions = positions(&mesh);
        assert_eq!(positions.len(), NB_SEGMENTS * 2);
        for pair in positions.chunks(2) {
            let outer = (pair[0][0].powi(2) + pair[0][1].powi(2)).sqrt();
            let inner = (pair[1][0].powi(2) + pair[1][1].powi(2)).sqrt();
            assert!((outer - 170.5).abs() < 1e-3);
            assert!((inner - 169.5).abs() < 1e-3);
        }
    }

    #[test]
    fn test_ring_indices_are_in_range() {
        let mesh = Radius(23.0).ring_mesh(1.0);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("ring mesh should use u32 indices");
        };
        assert_eq!(indices.len(), NB_SEGMENTS * 6);
        let nb_vertices = (NB_SEGMENTS * 2) as u32;
        assert!(indices.iter().all(|&idx| idx < nb_vertices));
        // The last segment closes the loop onto the first vertices
        assert_eq!(indices[indices.len() - 4], 0);
    }

    #[test]
    fn test_thin_ring_inner_radius_never_negative() {
        let mesh = Radius(0.2).ring_mesh(1.0);
        for pair in positions(&mesh).chunks(2) {
            assert_eq!(pair[1], [0.0, 0.0, 0.0]);
        }
    }
}
