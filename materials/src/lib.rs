//! Materials

#[macro_use]
extern crate log;

mod aniso;
mod antimatter;
mod common;
mod dielectric;
mod glass;
mod light;
mod mirror;
mod mist;
mod normal;
mod table;

// Re-export
pub use aniso::*;
pub use antimatter::*;
pub use common::*;
pub use dielectric::*;
pub use glass::*;
pub use light::*;
pub use mirror::*;
pub use mist::*;
pub use normal::*;
pub use table::*;
