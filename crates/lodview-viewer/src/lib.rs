//! Headless LOD viewer: startup, orbit camera, frame loop and key input.
//!
//! The binary wires these together; they live in a library so the frame
//! loop can be driven from tests.

pub mod camera;
pub mod game_loop;
pub mod headless;
pub mod platform;
pub mod startup;
pub mod stats;
pub mod stdin_keys;
pub mod viewer;
