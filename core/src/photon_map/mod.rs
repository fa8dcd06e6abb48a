//! Photon map bookkeeping: mode flags, path classification, the scattering
//! taxonomy, photon ray spawning and sensor lookup.

mod classify;
mod config;
mod scatter_type;
mod sensor;
mod spawn;

// Re-export
pub use classify::*;
pub use config::*;
pub use scatter_type::*;
pub use sensor::*;
