//! Kailh Choc PG1350 (v1) / PG1353 (v2) switch footprint generator.
//!
//! Produces the KiCad module for one switch position: a hotswap socket
//! and/or direct solder holes, an optional stabilizer-leg pad, optional
//! keycap and corner-mark visual aids, and reversible (both-face)
//! placement. The host layout system supplies placement and net context;
//! this crate only decides which primitives exist, where, and on which
//! face.
//!
//! ```
//! use choc_footprint::{generate, Net, Options, Placement};
//!
//! let options = Options {
//!     reverse: Some(true),
//!     from: Some(Net::new(1, "COL1")),
//!     to: Some(Net::new(2, "ROW1")),
//!     ..Options::default()
//! };
//! let module = generate(options, &Placement::origin("S1")).unwrap();
//! assert!(module.starts_with("(module PG1350"));
//! ```

mod compose;
mod fragments;
mod offsets;
mod params;
mod primitives;

pub use compose::{compose, Placement};
pub use offsets::OffsetPlan;
pub use params::{Config, ConfigError, Net, Options, Side};
pub use primitives::{At, Drill, Footprint, Pad, PadKind, PadShape, Primitive};

/// Resolves `options` against the defaults and renders the footprint as
/// KiCad module text. Fails only when a mandatory net is missing; nothing
/// partial is emitted in that case.
pub fn generate(options: Options, placement: &Placement) -> Result<String, ConfigError> {
    let config = Config::resolve(options)?;
    Ok(compose(&config, placement).to_kicad())
}
