use crate::cell::{CellCoord, FaceDims, FACE_COUNT};

/// The single user controlled cell.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    dims: FaceDims,
    cell: CellCoord,
}

impl Cursor {
    pub fn new(dims: FaceDims) -> Self {
        Self {
            dims,
            cell: CellCoord::new(0, 0, 0),
        }
    }

    pub fn cell(&self) -> CellCoord {
        self.cell
    }

    /// Moves within the face, clamping at its edges. Faces only change through
    /// `dface`, which wraps around the six faces; the cursor never follows
    /// the topology across an edge.
    pub fn move_by(&mut self, dx: isize, dy: isize, dface: isize) {
        let clamp = |value: usize, delta: isize, len: usize| {
            (value as isize)
                .saturating_add(delta)
                .clamp(0, len as isize - 1) as usize
        };
        let faces = FACE_COUNT as isize;
        self.cell = CellCoord::new(
            (self.cell.face as isize + dface.rem_euclid(faces)).rem_euclid(faces) as usize,
            clamp(self.cell.x, dx, self.dims.width),
            clamp(self.cell.y, dy, self.dims.height),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> Cursor {
        Cursor::new(FaceDims::new(20, 10).unwrap())
    }

    #[test]
    fn negative_moves_stop_at_origin() {
        let mut cursor = cursor();
        cursor.move_by(-1, -1, 0);
        cursor.move_by(-50, -3, 0);
        assert_eq!(cursor.cell(), CellCoord::new(0, 0, 0));
    }

    #[test]
    fn moves_clamp_to_the_far_edge() {
        let mut cursor = cursor();
        cursor.move_by(100, 100, 0);
        assert_eq!(cursor.cell(), CellCoord::new(0, 19, 9));
        cursor.move_by(-3, -1, 0);
        assert_eq!(cursor.cell(), CellCoord::new(0, 16, 8));
    }

    #[test]
    fn face_changes_wrap_both_ways() {
        let mut cursor = cursor();
        cursor.move_by(0, 0, -1);
        assert_eq!(cursor.cell().face, 5);
        cursor.move_by(0, 0, 2);
        assert_eq!(cursor.cell().face, 1);
        cursor.move_by(0, 0, -13);
        assert_eq!(cursor.cell().face, 0);
    }

    #[test]
    fn extreme_deltas_clamp_and_wrap() {
        let mut cursor = cursor();
        cursor.move_by(1, 1, 1);
        cursor.move_by(isize::MAX, isize::MAX, isize::MAX);
        assert_eq!(cursor.cell().x, 19);
        assert_eq!(cursor.cell().y, 9);
        assert_eq!(
            cursor.cell().face,
            (1 + isize::MAX.rem_euclid(6)) as usize % FACE_COUNT
        );

        cursor.move_by(isize::MIN, isize::MIN, isize::MIN);
        assert_eq!((cursor.cell().x, cursor.cell().y), (0, 0));
        assert!(cursor.cell().face < FACE_COUNT);

        cursor.move_by(isize::MAX, 0, 0);
        cursor.move_by(isize::MAX, 0, 0);
        assert_eq!(cursor.cell().x, 19);
    }

    #[test]
    fn never_leaves_the_face() {
        let dims = FaceDims::new(3, 4).unwrap();
        let mut cursor = Cursor::new(dims);
        for (dx, dy) in [(1, 0), (5, 5), (-2, 1), (-9, -9), (2, 7), (0, -1)] {
            cursor.move_by(dx, dy, 1);
            assert!(dims.contains(&cursor.cell()));
        }
    }
}
