//! Interactive console front end for the inventory.
//!
//! The binary wires stdin/stdout and the file repository into [`MenuController`];
//! tests drive the same controller with scripted input.

pub mod menu;
pub mod render;

pub use menu::{MenuChoice, MenuController, SessionEnd};
