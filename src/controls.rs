use winit::event::VirtualKeyCode;

use crate::simulation::FrameInput;

/// Folds a key press into the input for the next frame. Returns false for
/// keys the simulation does not use.
pub fn apply_key(input: &mut FrameInput, code: VirtualKeyCode) -> bool {
    use VirtualKeyCode::*;
    match code {
        A => input.dx -= 1,
        D => input.dx += 1,
        W => input.dy += 1,
        S => input.dy -= 1,
        Q => input.dface -= 1,
        E => input.dface += 1,
        Space => input.toggle_pause = !input.toggle_pause,
        H => input.toggle_highlight = !input.toggle_highlight,
        Return => input.toggle_cell = !input.toggle_cell,
        R => input.randomize = true,
        C => input.clear = true,
        _ => return false,
    }
    true
}
