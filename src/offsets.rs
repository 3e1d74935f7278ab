//! Mount-coexistence offsets.
//!
//! The hotswap socket and the direct-solder holes occupy overlapping
//! regions at their default positions. When both mounts are enabled the
//! solder pads move to the opposite quadrant and the stabilizer pad swaps
//! horizontal sides so nothing lands on the socket. Switches rotated by
//! 90 degrees are unaffected as long as the sides swap consistently.

use crate::params::{Config, Side};

/// Sign factors applied to the solder-mount and stabilizer-pad positions.
/// Computed once per configuration and threaded into every fragment
/// builder that needs it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetPlan {
    pub solder_x_front: f64,
    pub solder_x_back: f64,
    pub solder_y: f64,
    pub stab_x_front: f64,
    pub stab_x_back: f64,
    pub stab_y: f64,
}

impl OffsetPlan {
    #[must_use]
    pub fn resolve(config: &Config) -> Self {
        if config.hotswap && config.solder {
            Self {
                solder_x_front: 1.0,
                solder_x_back: -1.0,
                solder_y: 1.0,
                stab_x_front: -1.0,
                stab_x_back: 1.0,
                stab_y: 1.0,
            }
        } else {
            Self {
                solder_x_front: -1.0,
                solder_x_back: 1.0,
                solder_y: -1.0,
                stab_x_front: 1.0,
                stab_x_back: -1.0,
                stab_y: 1.0,
            }
        }
    }

    #[must_use]
    pub fn solder_x(&self, side: Side) -> f64 {
        match side {
            Side::Front => self.solder_x_front,
            Side::Back => self.solder_x_back,
        }
    }

    #[must_use]
    pub fn stab_x(&self, side: Side) -> f64 {
        match side {
            Side::Front => self.stab_x_front,
            Side::Back => self.stab_x_back,
        }
    }
}
