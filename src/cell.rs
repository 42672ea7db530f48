use crate::error::CubeError;

pub const FACE_COUNT: usize = 6;

/// A cell on the cube surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub face: usize,
    pub x: usize,
    pub y: usize,
}

impl CellCoord {
    pub fn new(face: usize, x: usize, y: usize) -> Self {
        Self { face, x, y }
    }
}

/// Width and height of every face. Fixed for the lifetime of a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceDims {
    pub width: usize,
    pub height: usize,
}

impl FaceDims {
    pub fn new(width: usize, height: usize) -> Result<Self, CubeError> {
        if width == 0 || height == 0 {
            return Err(CubeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn cells_per_face(&self) -> usize {
        self.width * self.height
    }

    pub fn cell_count(&self) -> usize {
        FACE_COUNT * self.cells_per_face()
    }

    pub fn contains(&self, cell: &CellCoord) -> bool {
        cell.face < FACE_COUNT && cell.x < self.width && cell.y < self.height
    }

    /// The flat index shared by the state buffers, the topology table, the
    /// color table and the mesh: `(face * H + y) * W + x`.
    pub fn index(&self, cell: &CellCoord) -> usize {
        debug_assert!(self.contains(cell), "{:?} outside {:?}", cell, self);
        (cell.face * self.height + cell.y) * self.width + cell.x
    }

    pub fn coord(&self, index: usize) -> CellCoord {
        debug_assert!(index < self.cell_count());
        let x = index % self.width;
        let row = index / self.width;
        CellCoord::new(row / self.height, x, row % self.height)
    }

    pub fn checked_index(&self, cell: &CellCoord) -> Result<usize, CubeError> {
        if self.contains(cell) {
            Ok(self.index(cell))
        } else {
            Err(CubeError::SeedOutOfBounds {
                face: cell.face,
                x: cell.x,
                y: cell.y,
            })
        }
    }
}
