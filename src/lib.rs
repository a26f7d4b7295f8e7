//! Direct operating cost estimation for commercial aircraft after the AEA 1989a/b method.
//!
//! The cost engine lives in the workspace crates and is re-exported here so the binaries
//! and integration tests share one entry point. `setup` resolves catalog files and method
//! overrides into the fully-typed inputs the engine expects.

pub use aea_aircraft as aircraft;
pub use aea_config as config;
pub use aea_core as common;
pub use aea_export as export;
pub use aea_maintenance as maintenance;
pub use aea_operating as operating;
pub use aea_pricing as pricing;
pub use aea_sensitivity as sensitivity;

pub mod setup;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
