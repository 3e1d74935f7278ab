//! Composition engine.
//!
//! Walks the fragment categories in one fixed precedence order, evaluates
//! each category's inclusion predicate against the resolved configuration
//! and concatenates the included fragments. Single pass, no state carried
//! between invocations.

use crate::fragments;
use crate::offsets::OffsetPlan;
use crate::params::Config;
use crate::primitives::{At, Footprint};

/// Placement context supplied by the host layout: absolute anchor,
/// rotation and reference designator. Forwarded into the emitted module
/// without interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub reference: String,
    pub reference_hidden: bool,
}

impl Placement {
    /// Placement at the origin, mainly useful in tests.
    #[must_use]
    pub fn origin(reference: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            reference: reference.into(),
            reference_hidden: false,
        }
    }
}

/// Assembles the full ordered description for one footprint instance.
#[must_use]
pub fn compose(config: &Config, placement: &Placement) -> Footprint {
    let plan = OffsetPlan::resolve(config);
    tracing::debug!(
        reference = placement.reference.as_str(),
        hotswap = config.hotswap,
        solder = config.solder,
        reverse = config.reverse,
        "composing choc footprint"
    );

    let mut primitives =
        fragments::base(config, &placement.reference, placement.reference_hidden);

    if config.choc_v1_support {
        primitives.extend(fragments::choc_v1_stabilizers());
    }
    if config.show_corner_marks {
        for side in config.active_sides() {
            primitives.extend(fragments::corner_marks(side));
        }
    }
    if config.show_keycaps {
        primitives.extend(fragments::keycap_outline(config.keycaps_x, config.keycaps_y));
    }
    if config.include_stabilizer_pad {
        for side in config.active_sides() {
            primitives.push(fragments::stabilizer_pad(
                config,
                &plan,
                side,
                placement.rotation,
            ));
        }
    }
    if config.hotswap {
        primitives.push(fragments::hotswap_shared());
        for side in config.active_sides() {
            primitives.extend(fragments::hotswap_face(config, side, placement.rotation));
        }
    }
    if config.solder {
        primitives.push(fragments::solder_shared(config, &plan));
        for side in config.active_sides() {
            primitives.push(fragments::solder_face(config, &plan, side));
        }
    }

    Footprint {
        name: "PG1350",
        at: At::rotated(placement.x, placement.y, placement.rotation),
        primitives,
    }
}
