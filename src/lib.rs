mod automata;
pub mod automata_dsl;
mod camera;
mod cell;
mod clock;
mod config;
mod controls;
mod cube_renderer;
mod cursor;
mod error;
pub mod mesh;
mod render_state;
mod rule;
mod simulation;
mod sync;
pub mod topology;
pub mod util;

pub use automata::*;
pub use camera::*;
pub use cell::*;
pub use clock::*;
pub use config::*;
pub use controls::*;
pub use cube_renderer::*;
pub use cursor::*;
pub use error::*;
pub use render_state::*;
pub use rule::*;
pub use simulation::*;
pub use sync::*;
pub use topology::{Topology, FACE_SIDES};
