//! Cozy Acres library crate. Re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the actual game entry point.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can import game types, systems, and resources without needing a
//! window or GPU.

pub mod shared;
pub mod config;
pub mod input;
pub mod data;
pub mod world;
pub mod player;
pub mod farming;
pub mod animals;
pub mod calendar;
pub mod economy;
pub mod save;
pub mod audio;
