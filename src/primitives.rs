//! Typed footprint primitives and their KiCad s-expression rendering.
//!
//! Geometry decisions never happen here: the fragment builders produce
//! fully positioned records and serialization is a separate final pass, so
//! the composition output stays testable by structural equality.

use crate::params::Net;

/// Local position of a primitive, with an optional pad rotation angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct At {
    pub x: f64,
    pub y: f64,
    pub angle: Option<f64>,
}

impl At {
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, angle: None }
    }

    #[must_use]
    pub fn rotated(x: f64, y: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            angle: Some(angle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drill {
    Round(f64),
    Oval(f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKind {
    Smd,
    Connect,
    ThruHole,
    NpThruHole,
}

impl PadKind {
    fn keyword(self) -> &'static str {
        match self {
            PadKind::Smd => "smd",
            PadKind::Connect => "connect",
            PadKind::ThruHole => "thru_hole",
            PadKind::NpThruHole => "np_thru_hole",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PadShape {
    Circle,
    Rect,
    Oval,
    /// Custom polygon pad anchored on a rect; outline points are relative
    /// to the pad position.
    Custom { outline: Vec<[f64; 2]> },
}

impl PadShape {
    fn keyword(&self) -> &'static str {
        match self {
            PadShape::Circle => "circle",
            PadShape::Rect => "rect",
            PadShape::Oval => "oval",
            PadShape::Custom { .. } => "custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    /// Pad number; `None` renders as the anonymous `""` pad.
    pub number: Option<u8>,
    pub kind: PadKind,
    pub shape: PadShape,
    pub at: At,
    pub size: [f64; 2],
    pub drill: Option<Drill>,
    pub layers: Vec<&'static str>,
    pub net: Option<Net>,
    pub zone_connect: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Pad(Pad),
    Line {
        start: [f64; 2],
        end: [f64; 2],
        layer: &'static str,
        width: f64,
    },
    Arc {
        start: [f64; 2],
        end: [f64; 2],
        angle: f64,
        layer: &'static str,
        width: f64,
    },
    Reference {
        text: String,
        at: [f64; 2],
        layer: &'static str,
        hidden: bool,
    },
}

impl Primitive {
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Primitive::Pad(pad) => pad.to_sexpr(),
            Primitive::Line {
                start,
                end,
                layer,
                width,
            } => format!(
                "(fp_line (start {} {}) (end {} {}) (layer {}) (width {}))",
                fmt_num(start[0]),
                fmt_num(start[1]),
                fmt_num(end[0]),
                fmt_num(end[1]),
                layer,
                fmt_num(*width)
            ),
            Primitive::Arc {
                start,
                end,
                angle,
                layer,
                width,
            } => format!(
                "(fp_arc (start {} {}) (end {} {}) (angle {}) (layer {}) (width {}))",
                fmt_num(start[0]),
                fmt_num(start[1]),
                fmt_num(end[0]),
                fmt_num(end[1]),
                fmt_num(*angle),
                layer,
                fmt_num(*width)
            ),
            Primitive::Reference {
                text,
                at,
                layer,
                hidden,
            } => {
                let hide = if *hidden { " hide" } else { "" };
                format!(
                    "(fp_text reference \"{}\" (at {} {}) (layer {}){} (effects (font (size 1.27 1.27) (thickness 0.15))))",
                    escape_kicad_text(text),
                    fmt_num(at[0]),
                    fmt_num(at[1]),
                    layer,
                    hide
                )
            }
        }
    }
}

impl Pad {
    fn to_sexpr(&self) -> String {
        let number = match self.number {
            Some(n) => n.to_string(),
            None => "\"\"".to_string(),
        };
        let mut out = format!(
            "(pad {} {} {} {} (size {} {})",
            number,
            self.kind.keyword(),
            self.shape.keyword(),
            at_sexpr(&self.at),
            fmt_num(self.size[0]),
            fmt_num(self.size[1])
        );
        if let Some(drill) = self.drill {
            out.push(' ');
            out.push_str(&drill_sexpr(drill));
        }
        out.push_str(" (layers ");
        out.push_str(&self.layers.join(" "));
        out.push(')');
        if let Some(zc) = self.zone_connect {
            out.push_str(&format!(" (zone_connect {zc})"));
        }
        if let PadShape::Custom { outline } = &self.shape {
            let pts = outline
                .iter()
                .map(|p| format!("(xy {} {})", fmt_num(p[0]), fmt_num(p[1])))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!(
                " (options (clearance outline) (anchor rect)) (primitives (gr_poly (pts {pts}) (width 0)))"
            ));
        }
        if let Some(net) = &self.net {
            out.push_str(&format!(
                " (net {} \"{}\")",
                net.index,
                escape_kicad_text(&net.name)
            ));
        }
        out.push(')');
        out
    }
}

fn at_sexpr(at: &At) -> String {
    match at.angle {
        Some(angle) => format!(
            "(at {} {} {})",
            fmt_num(at.x),
            fmt_num(at.y),
            fmt_num(angle)
        ),
        None => format!("(at {} {})", fmt_num(at.x), fmt_num(at.y)),
    }
}

fn drill_sexpr(drill: Drill) -> String {
    match drill {
        Drill::Round(d) => format!("(drill {})", fmt_num(d)),
        Drill::Oval(w, h) => format!("(drill oval {} {})", fmt_num(w), fmt_num(h)),
    }
}

/// The complete ordered description of one footprint instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub name: &'static str,
    pub at: At,
    pub primitives: Vec<Primitive>,
}

impl Footprint {
    /// Renders the footprint as a KiCad module block.
    #[must_use]
    pub fn to_kicad(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "(module {} (layer F.Cu) (tedit 5DD50112)\n",
            self.name
        ));
        out.push_str(&format!(
            "  (at {} {} {})\n",
            fmt_num(self.at.x),
            fmt_num(self.at.y),
            fmt_num(self.at.angle.unwrap_or(0.0))
        ));
        out.push_str("  (attr virtual)\n");
        for primitive in &self.primitives {
            out.push_str("  ");
            out.push_str(&primitive.to_sexpr());
            out.push('\n');
        }
        out.push(')');
        out
    }
}

fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 1e-12 { 0.0 } else { v };
    format!("{}", v)
}

/// Makes host-supplied text safe to embed in a quoted s-expression token.
fn escape_kicad_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
