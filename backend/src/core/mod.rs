//! Core utilities: simulation time management

pub mod time;
