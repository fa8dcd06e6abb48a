//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
#[macro_use]
pub mod geometry;

pub mod app;
pub mod base;
pub mod error;
pub mod interaction;
pub mod material;
pub mod photon_map;
pub mod ray;
pub mod reflection;
pub mod rng;
pub mod sampling;
pub mod scene;
pub mod spectrum;
