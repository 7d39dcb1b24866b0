//! A toy orrery: a fixed set of bodies riding circular rails around the window center.

pub mod config;
pub mod entities;
pub mod frame_pace;
pub mod gui;
pub mod physics;
