//! Fragment catalog.
//!
//! One builder per fragment category, each a pure function of the resolved
//! configuration, the offset plan and the placement rotation. Coordinates
//! are local to the footprint origin, taken from the Choc PG1350/PG1353
//! datasheet.

use crate::offsets::OffsetPlan;
use crate::params::{Config, Side};
use crate::primitives::{At, Drill, Pad, PadKind, PadShape, Primitive};

const SILK_WIDTH: f64 = 0.15;

fn silk_layer(side: Side) -> &'static str {
    match side {
        Side::Front => "F.SilkS",
        Side::Back => "B.SilkS",
    }
}

fn smd_layers(side: Side) -> Vec<&'static str> {
    match side {
        Side::Front => vec!["F.Cu", "F.Paste", "F.Mask"],
        Side::Back => vec!["B.Cu", "B.Paste", "B.Mask"],
    }
}

/// Reference marker and central alignment hole; present in every
/// configuration.
pub fn base(config: &Config, reference: &str, reference_hidden: bool) -> Vec<Primitive> {
    vec![
        Primitive::Reference {
            text: reference.to_string(),
            at: [0.0, 0.0],
            layer: silk_layer(config.side),
            hidden: reference_hidden,
        },
        Primitive::Pad(Pad {
            number: None,
            kind: PadKind::NpThruHole,
            shape: PadShape::Circle,
            at: At::xy(0.0, 0.0),
            size: [5.0, 5.0],
            drill: Some(Drill::Round(5.0)),
            layers: vec!["*.Cu"],
            net: None,
            zone_connect: None,
        }),
    ]
}

/// Lateral stabilizer holes required by Choc v1 switches.
pub fn choc_v1_stabilizers() -> Vec<Primitive> {
    [5.5, -5.5]
        .into_iter()
        .map(|x| {
            Primitive::Pad(Pad {
                number: None,
                kind: PadKind::NpThruHole,
                shape: PadShape::Circle,
                at: At::xy(x, 0.0),
                size: [1.9, 1.9],
                drill: Some(Drill::Round(1.9)),
                layers: vec!["*.Cu"],
                net: None,
                zone_connect: None,
            })
        })
        .collect()
}

// L-brackets marking the 14x14 plate hole corners.
const CORNER_MARKS: [[f64; 4]; 8] = [
    [-7.0, -6.0, -7.0, -7.0],
    [-7.0, 7.0, -6.0, 7.0],
    [-6.0, -7.0, -7.0, -7.0],
    [-7.0, 7.0, -7.0, 6.0],
    [7.0, 6.0, 7.0, 7.0],
    [7.0, -7.0, 6.0, -7.0],
    [6.0, 7.0, 7.0, 7.0],
    [7.0, -7.0, 7.0, -6.0],
];

pub fn corner_marks(side: Side) -> Vec<Primitive> {
    CORNER_MARKS
        .iter()
        .map(|[sx, sy, ex, ey]| Primitive::Line {
            start: [*sx, *sy],
            end: [*ex, *ey],
            layer: silk_layer(side),
            width: SILK_WIDTH,
        })
        .collect()
}

/// Keycap outline on the user drawings layer; drawn once, never
/// face-specific.
pub fn keycap_outline(keycaps_x: f64, keycaps_y: f64) -> Vec<Primitive> {
    let xo = 0.5 * keycaps_x;
    let yo = 0.5 * keycaps_y;
    let corners = [
        [-xo, -yo, xo, -yo],
        [xo, -yo, xo, yo],
        [xo, yo, -xo, yo],
        [-xo, yo, -xo, -yo],
    ];
    corners
        .iter()
        .map(|[sx, sy, ex, ey]| Primitive::Line {
            start: [*sx, *sy],
            end: [*ex, *ey],
            layer: "Dwgs.User",
            width: SILK_WIDTH,
        })
        .collect()
}

/// Corner pad for the stabilizer leg present in some Choc switches. The
/// datasheet calls for the round variant.
pub fn stabilizer_pad(config: &Config, plan: &OffsetPlan, side: Side, rotation: f64) -> Primitive {
    if config.oval_stabilizer_pad {
        Primitive::Pad(Pad {
            number: None,
            kind: PadKind::ThruHole,
            shape: PadShape::Oval,
            at: At::rotated(5.55 * plan.stab_x(side), 5.0 * plan.stab_y, rotation),
            size: [2.2, 1.5],
            drill: Some(Drill::Oval(1.0, 0.3)),
            layers: vec!["*.Cu", "*.SilkS", "*.Mask"],
            net: None,
            zone_connect: None,
        })
    } else {
        Primitive::Pad(Pad {
            number: None,
            kind: PadKind::NpThruHole,
            shape: PadShape::Circle,
            at: At::rotated(5.15 * plan.stab_x(side), 5.0 * plan.stab_y, rotation),
            size: [1.6, 1.6],
            drill: Some(Drill::Round(1.6)),
            layers: vec!["*.Cu", "*.SilkS", "*.Mask"],
            net: None,
            zone_connect: None,
        })
    }
}

/// Central socket hole shared by both faces of the hotswap mount.
pub fn hotswap_shared() -> Primitive {
    Primitive::Pad(Pad {
        number: None,
        kind: PadKind::NpThruHole,
        shape: PadShape::Circle,
        at: At::xy(0.0, -5.95),
        size: [3.0, 3.0],
        drill: Some(Drill::Round(3.0)),
        layers: vec!["*.Cu", "*.Mask"],
        net: None,
        zone_connect: None,
    })
}

// Socket body outlines, one literal table per face. The faces are not
// exact mirrors of each other upstream, so both are kept verbatim.
const HOTSWAP_SILK_FRONT: [[f64; 4]; 11] = [
    [2.0, -4.2, 1.5, -3.7],
    [2.0, -7.7, 1.5, -8.2],
    [-7.0, -5.6, -7.0, -6.2],
    [1.5, -3.7, -1.0, -3.7],
    [-2.5, -2.2, -2.5, -1.5],
    [-1.5, -8.2, -2.0, -7.7],
    [1.5, -8.2, -1.5, -8.2],
    [-2.5, -1.5, -7.0, -1.5],
    [-2.0, -6.7, -2.0, -7.7],
    [-7.0, -1.5, -7.0, -2.0],
    [-7.0, -6.2, -2.5, -6.2],
];

const HOTSWAP_ARCS_FRONT: [[f64; 5]; 2] = [
    [-0.91, -2.11, -0.8, -3.7, -90.0],
    [-2.55, -6.75, -2.52, -6.2, -90.0],
];

const HOTSWAP_SILK_BACK: [[f64; 4]; 11] = [
    [1.5, -8.2, 2.0, -7.7],
    [7.0, -1.5, 7.0, -2.0],
    [-1.5, -8.2, 1.5, -8.2],
    [7.0, -6.2, 2.5, -6.2],
    [2.5, -2.2, 2.5, -1.5],
    [-2.0, -7.7, -1.5, -8.2],
    [-1.5, -3.7, 1.0, -3.7],
    [7.0, -5.6, 7.0, -6.2],
    [2.0, -6.7, 2.0, -7.7],
    [2.5, -1.5, 7.0, -1.5],
    [-2.0, -4.2, -1.5, -3.7],
];

const HOTSWAP_ARCS_BACK: [[f64; 5]; 2] = [
    [2.499999, -6.7, 2.0, -6.690001, -88.9],
    [0.97, -2.17, 2.5, -2.17, -90.0],
];

// Primary pad with one corner cut away, used on the chamfered face of a
// reversible footprint so the copper silhouette matches the opposite
// face's socket outline.
const CHAMFER_OUTLINE: [[f64; 2]; 5] = [
    [-1.3, -1.3],
    [-1.3, 1.3],
    [0.05, 1.3],
    [1.3, 0.25],
    [1.3, -1.3],
];

/// Per-face hotswap geometry: socket outline, the two connected pads and
/// the side socket hole.
pub fn hotswap_face(config: &Config, side: Side, rotation: f64) -> Vec<Primitive> {
    let (lines, arcs) = match side {
        Side::Front => (&HOTSWAP_SILK_FRONT, &HOTSWAP_ARCS_FRONT),
        Side::Back => (&HOTSWAP_SILK_BACK, &HOTSWAP_ARCS_BACK),
    };

    let mut out: Vec<Primitive> = lines
        .iter()
        .map(|[sx, sy, ex, ey]| Primitive::Line {
            start: [*sx, *sy],
            end: [*ex, *ey],
            layer: silk_layer(side),
            width: SILK_WIDTH,
        })
        .collect();
    out.extend(arcs.iter().map(|[sx, sy, ex, ey, angle]| Primitive::Arc {
        start: [*sx, *sy],
        end: [*ex, *ey],
        angle: *angle,
        layer: silk_layer(side),
        width: SILK_WIDTH,
    }));

    out.push(hotswap_primary_pad(config, side, rotation));
    out.push(hotswap_secondary_pad(config, side, rotation));

    // Side socket hole.
    let hole_x = match side {
        Side::Front => -5.0,
        Side::Back => 5.0,
    };
    out.push(Primitive::Pad(Pad {
        number: None,
        kind: PadKind::NpThruHole,
        shape: PadShape::Circle,
        at: At::rotated(hole_x, -3.75, 195.0),
        size: [3.0, 3.0],
        drill: Some(Drill::Round(3.0)),
        layers: vec!["*.Cu", "*.Mask"],
        net: None,
        zone_connect: None,
    }));
    out
}

fn hotswap_primary_pad(config: &Config, side: Side, rotation: f64) -> Primitive {
    let x = match side {
        Side::Front => 3.275,
        Side::Back => -3.275,
    };
    // On a reversible footprint exactly one face carries the chamfered
    // variant; the other keeps the full rectangle.
    if config.reverse && side == Side::Front {
        Primitive::Pad(Pad {
            number: Some(1),
            kind: PadKind::Connect,
            shape: PadShape::Custom {
                outline: CHAMFER_OUTLINE.to_vec(),
            },
            at: At::rotated(x, -5.95, rotation),
            size: [0.5, 0.5],
            drill: None,
            layers: vec!["F.Cu", "F.Mask"],
            net: Some(config.from.clone()),
            zone_connect: Some(0),
        })
    } else {
        Primitive::Pad(Pad {
            number: Some(1),
            kind: PadKind::Smd,
            shape: PadShape::Rect,
            at: At::rotated(x, -5.95, rotation),
            size: [2.6, 2.6],
            drill: None,
            layers: smd_layers(side),
            net: Some(config.from.clone()),
            zone_connect: None,
        })
    }
}

fn hotswap_secondary_pad(config: &Config, side: Side, rotation: f64) -> Primitive {
    let width = config.outer_pad_width(side);
    // Shrinking the pad keeps its outer edge fixed at 9.575 so the socket
    // leg stays covered.
    let x = match side {
        Side::Front => -8.275 + (2.6 - width) / 2.0,
        Side::Back => 8.275 - (2.6 - width) / 2.0,
    };
    Primitive::Pad(Pad {
        number: Some(2),
        kind: PadKind::Smd,
        shape: PadShape::Rect,
        at: At::rotated(x, -3.75, rotation),
        size: [width, 2.6],
        drill: None,
        layers: smd_layers(side),
        net: Some(config.to.clone()),
        zone_connect: None,
    })
}

/// Shared solder hole bound to the primary net; its vertical side is
/// chosen by the offset plan.
pub fn solder_shared(config: &Config, plan: &OffsetPlan) -> Primitive {
    Primitive::Pad(Pad {
        number: Some(2),
        kind: PadKind::ThruHole,
        shape: PadShape::Circle,
        at: At::rotated(0.0, 5.9 * plan.solder_y, 195.0),
        size: [2.032, 2.032],
        drill: Some(Drill::Round(1.27)),
        layers: vec!["*.Cu", "*.Mask"],
        net: Some(config.from.clone()),
        zone_connect: None,
    })
}

/// Per-face solder hole bound to the secondary net.
pub fn solder_face(config: &Config, plan: &OffsetPlan, side: Side) -> Primitive {
    Primitive::Pad(Pad {
        number: Some(1),
        kind: PadKind::ThruHole,
        shape: PadShape::Circle,
        at: At::rotated(5.0 * plan.solder_x(side), 3.8 * plan.solder_y, 195.0),
        size: [2.032, 2.032],
        drill: Some(Drill::Round(1.27)),
        layers: vec!["*.Cu", "*.Mask"],
        net: Some(config.to.clone()),
        zone_connect: None,
    })
}
