//! Rays

mod ray_type;
mod record;

// Re-export
pub use ray_type::*;
pub use record::*;
