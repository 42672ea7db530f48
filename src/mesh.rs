use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::cell::{FaceDims, FACE_COUNT};
use crate::sync::{Color, BLACK};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub color: [f32; 4],
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            color: BLACK,
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Placement of one face in cube space, in cell units relative to a cube of
/// side 1 centered on the origin.
struct FaceBasis {
    origin: Vec3,
    u: Vec3,
    v: Vec3,
    normal: Vec3,
}

// Same face order as the topology: z = 0, y = 0, x = 0, then z = 1, y = 1,
// x = 1.
fn face_basis(face: usize) -> FaceBasis {
    let (origin, u, v, normal) = match face {
        0 => (Vec3::new(-0.5, -0.5, -0.5), Vec3::X, Vec3::Y, -Vec3::Z),
        1 => (Vec3::new(-0.5, -0.5, -0.5), Vec3::X, Vec3::Z, -Vec3::Y),
        2 => (Vec3::new(-0.5, -0.5, -0.5), Vec3::Y, Vec3::Z, -Vec3::X),
        3 => (Vec3::new(-0.5, -0.5, 0.5), Vec3::X, Vec3::Y, Vec3::Z),
        4 => (Vec3::new(-0.5, 0.5, -0.5), Vec3::X, Vec3::Z, Vec3::Y),
        5 => (Vec3::new(0.5, -0.5, -0.5), Vec3::Y, Vec3::Z, Vec3::X),
        _ => unreachable!("a cube has {} faces", FACE_COUNT),
    };
    FaceBasis {
        origin,
        u,
        v,
        normal,
    }
}

pub const VERTICES_PER_CELL: usize = 4;
pub const INDICES_PER_CELL: usize = 6;

/// Two triangles per cell, laid out in flat cell index order so that cell
/// `i` owns vertices `4i..4i+4`.
pub struct CubeMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl CubeMesh {
    pub fn new(dims: &FaceDims) -> Self {
        let mut vertices = Vec::with_capacity(dims.cell_count() * VERTICES_PER_CELL);
        let mut indices = Vec::with_capacity(dims.cell_count() * INDICES_PER_CELL);
        // TODO: scale each axis separately once faces may be rectangular.
        let side = dims.width as f32;

        for face in 0..FACE_COUNT {
            let basis = face_basis(face);
            let origin = basis.origin * side;
            for y in 0..dims.height {
                for x in 0..dims.width {
                    let corner = |du: usize, dv: usize| {
                        let position = origin
                            + basis.u * (x + du) as f32
                            + basis.v * (y + dv) as f32;
                        Vertex::new(position, basis.normal)
                    };

                    let first = vertices.len() as u32;
                    vertices.push(corner(0, 0));
                    vertices.push(corner(1, 0));
                    vertices.push(corner(0, 1));
                    vertices.push(corner(1, 1));
                    indices.extend_from_slice(&[
                        first,
                        first + 1,
                        first + 2,
                        first + 2,
                        first + 1,
                        first + 3,
                    ]);
                }
            }
        }

        Self { vertices, indices }
    }

    pub fn cell_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_CELL
    }

    /// Paints every cell's four vertices with its color from the table.
    pub fn apply_colors(&mut self, colors: &[Color]) {
        debug_assert_eq!(colors.len(), self.cell_count());
        for (quad, color) in self.vertices.chunks_exact_mut(VERTICES_PER_CELL).zip(colors) {
            for vertex in quad {
                vertex.color = *color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellCoord;

    #[test]
    fn two_triangles_per_cell() {
        let dims = FaceDims::new(3, 3).unwrap();
        let mesh = CubeMesh::new(&dims);
        assert_eq!(mesh.vertices.len(), 4 * 54);
        assert_eq!(mesh.indices.len(), 6 * 54);
        assert_eq!(mesh.cell_count(), dims.cell_count());
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn faces_sit_on_the_cube_surface() {
        let dims = FaceDims::new(4, 4).unwrap();
        let mesh = CubeMesh::new(&dims);
        let per_face = dims.cells_per_face() * VERTICES_PER_CELL;

        assert!(mesh.vertices[..per_face].iter().all(|v| v.position[2] == -2.));
        assert!(mesh.vertices[3 * per_face..4 * per_face]
            .iter()
            .all(|v| v.position[2] == 2.));
        assert!(mesh.vertices[5 * per_face..].iter().all(|v| v.position[0] == 2.));
        assert!(mesh
            .vertices
            .iter()
            .flat_map(|v| v.position)
            .all(|c| (-2.0..=2.0).contains(&c)));
    }

    #[test]
    fn shared_edges_line_up_with_the_topology() {
        // Cell (0, 3, 1) and its +x neighbor (5, 1, 0) share the x = 2 edge.
        let dims = FaceDims::new(4, 4).unwrap();
        let mesh = CubeMesh::new(&dims);
        let quad = |cell: CellCoord| {
            let first = dims.index(&cell) * VERTICES_PER_CELL;
            mesh.vertices[first..first + VERTICES_PER_CELL]
                .iter()
                .map(|v| v.position)
                .collect::<Vec<_>>()
        };
        let a = quad(CellCoord::new(0, 3, 1));
        let b = quad(CellCoord::new(5, 1, 0));
        let shared = a.iter().filter(|p| b.contains(p)).count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn colors_follow_cell_order() {
        let dims = FaceDims::new(2, 2).unwrap();
        let mut mesh = CubeMesh::new(&dims);
        let mut colors = vec![BLACK; dims.cell_count()];
        colors[7] = [1., 0., 0., 1.];
        mesh.apply_colors(&colors);
        assert!(mesh.vertices[28..32].iter().all(|v| v.color == [1., 0., 0., 1.]));
        assert!(mesh.vertices[..28].iter().all(|v| v.color == BLACK));
    }
}
