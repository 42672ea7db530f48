use crate::cell::{CellCoord, FaceDims, FACE_COUNT};
use crate::topology::Topology;

/// Linear RGBA.
pub type Color = [f32; 4];

pub const BLACK: Color = [0., 0., 0., 1.];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Light checkerboard squares of each face.
    pub faces: [Color; FACE_COUNT],
    /// Dark checkerboard squares.
    pub base: Color,
    pub active: Color,
    pub neighborhood: Color,
    pub alive: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            faces: [
                [1., 0., 0., 1.],
                [1., 1., 1., 1.],
                [1., 1., 0., 1.],
                [0., 0., 1., 1.],
                [1., 0., 1., 1.],
                [0., 1., 1., 1.],
            ],
            base: BLACK,
            active: [1., 0.5, 0., 1.],
            neighborhood: [0.5, 0.25, 0., 1.],
            alive: [0., 0.8, 0.2, 1.],
        }
    }
}

/// Turns automaton state and the cursor into one color per cell for the
/// renderer.
pub struct SyncBridge {
    palette: Palette,
    base: Vec<Color>,
    colors: Vec<Color>,
}

impl SyncBridge {
    pub fn new(dims: &FaceDims, palette: Palette) -> Self {
        let base: Vec<Color> = (0..dims.cell_count())
            .map(|index| {
                let cell = dims.coord(index);
                if (cell.x ^ cell.y) & 1 != 0 {
                    palette.faces[cell.face]
                } else {
                    palette.base
                }
            })
            .collect();
        Self {
            palette,
            colors: base.clone(),
            base,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The table written by the last `sync`.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Rewrites every cell: checkerboard, then cursor highlight, then live
    /// cells on top.
    pub fn sync(
        &mut self,
        topology: &Topology,
        state: &[bool],
        cursor: &CellCoord,
        highlight: bool,
    ) -> &[Color] {
        debug_assert_eq!(state.len(), self.colors.len());
        self.colors.copy_from_slice(&self.base);

        if highlight {
            for &n in topology.get_adjacency(cursor) {
                self.colors[n] = self.palette.neighborhood;
            }
            self.colors[topology.dims().index(cursor)] = self.palette.active;
        }

        for (color, &alive) in self.colors.iter_mut().zip(state) {
            if alive {
                *color = self.palette.alive;
            }
        }

        &self.colors
    }
}
