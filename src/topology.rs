use log::debug;

use crate::cell::{CellCoord, FaceDims, FACE_COUNT};

/// One of the two in-face axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The four edges of a face, in descriptor order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    PosX,
    PosY,
    NegX,
    NegY,
}

/// Where a coordinate leaving a face through one edge comes back in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideDescriptor {
    pub target_face: usize,
    /// The entering coordinate lands on the target's last column.
    pub wrap_x: bool,
    /// The entering coordinate lands on the target's last row.
    pub wrap_y: bool,
    /// Target axis receiving the coordinate that slides along the edge.
    pub delta_axis: Axis,
}

const fn side(target_face: usize, wrap_x: bool, wrap_y: bool, delta_axis: Axis) -> SideDescriptor {
    SideDescriptor {
        target_face,
        wrap_x,
        wrap_y,
        delta_axis,
    }
}

// Faces 0/3 are the z planes (x, y), 1/4 the y planes (x, z) and 2/5 the x
// planes (y, z); the first of each pair sits at the low end of its axis.
// Every face runs x and y along increasing lattice coordinates, so the
// sliding coordinate is copied across an edge without being reversed.
pub const FACE_SIDES: [[SideDescriptor; 4]; FACE_COUNT] = [
    [
        side(5, false, false, Axis::X),
        side(4, false, false, Axis::X),
        side(2, false, false, Axis::X),
        side(1, false, false, Axis::X),
    ],
    [
        side(5, false, false, Axis::Y),
        side(3, false, false, Axis::X),
        side(2, false, false, Axis::Y),
        side(0, false, false, Axis::X),
    ],
    [
        side(4, false, false, Axis::Y),
        side(3, false, false, Axis::Y),
        side(1, false, false, Axis::Y),
        side(0, false, false, Axis::Y),
    ],
    [
        side(5, false, true, Axis::X),
        side(4, false, true, Axis::X),
        side(2, false, true, Axis::X),
        side(1, false, true, Axis::X),
    ],
    [
        side(5, true, false, Axis::Y),
        side(3, false, true, Axis::X),
        side(2, true, false, Axis::Y),
        side(0, false, true, Axis::X),
    ],
    [
        side(4, true, false, Axis::Y),
        side(3, true, false, Axis::Y),
        side(1, true, false, Axis::Y),
        side(0, true, false, Axis::Y),
    ],
];

/// Moore offsets in the order E, NE, N, NW, W, SW, S, SE.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// bit0: x >= W, bit1: y >= H, bit2: x < 0, bit3: y < 0
fn overflow_code(x: isize, y: isize, width: isize, height: isize) -> u8 {
    (x >= width) as u8 | ((y >= height) as u8) << 1 | ((x < 0) as u8) << 2 | ((y < 0) as u8) << 3
}

/// Resolve a possibly off-face position to a cell. Positions crossing two
/// edges at once have no single target face and resolve to `None`.
pub fn wrap(dims: &FaceDims, face: usize, x: isize, y: isize) -> Option<CellCoord> {
    let width = dims.width as isize;
    let height = dims.height as isize;

    let (side, sliding) = match overflow_code(x, y, width, height) {
        0 => return Some(CellCoord::new(face, x as usize, y as usize)),
        0b0001 => (Side::PosX, y),
        0b0010 => (Side::PosY, x),
        0b0100 => (Side::NegX, y),
        0b1000 => (Side::NegY, x),
        _ => return None,
    };

    let descriptor = FACE_SIDES[face][side as usize];
    let fixed_x = if descriptor.wrap_x { width - 1 } else { 0 };
    let fixed_y = if descriptor.wrap_y { height - 1 } else { 0 };
    let (tx, ty) = match descriptor.delta_axis {
        Axis::X => (sliding, fixed_y),
        Axis::Y => (fixed_x, sliding),
    };

    // Only reachable with non-square faces.
    if tx >= width || ty >= height {
        return None;
    }
    Some(CellCoord::new(descriptor.target_face, tx as usize, ty as usize))
}

/// Precomputed neighbor lists for every cell of the cube.
#[derive(Clone, Debug)]
pub struct Topology {
    dims: FaceDims,
    offsets: Vec<usize>,
    neighbors: Vec<usize>,
}

impl Topology {
    pub fn build(dims: FaceDims) -> Self {
        let cells = dims.cell_count();
        let mut offsets = Vec::with_capacity(cells + 1);
        let mut neighbors = Vec::with_capacity(cells * MOORE_OFFSETS.len());
        offsets.push(0);

        for index in 0..cells {
            let cell = dims.coord(index);
            let start = neighbors.len();
            for (dx, dy) in MOORE_OFFSETS {
                let target = wrap(&dims, cell.face, cell.x as isize + dx, cell.y as isize + dy);
                if let Some(target) = target {
                    let target = dims.index(&target);
                    if !neighbors[start..].contains(&target) {
                        neighbors.push(target);
                    }
                }
            }
            offsets.push(neighbors.len());
        }

        debug!(
            "Built cube topology for {}x{} faces: {} cells, {} links",
            dims.width,
            dims.height,
            cells,
            neighbors.len()
        );

        Self {
            dims,
            offsets,
            neighbors,
        }
    }

    pub fn dims(&self) -> &FaceDims {
        &self.dims
    }

    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[self.offsets[index]..self.offsets[index + 1]]
    }

    pub fn get_adjacency(&self, cell: &CellCoord) -> &[usize] {
        self.neighbors(self.dims.index(cell))
    }
}
