use serde::Deserialize;

/// One of the two physical faces of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Side {
    #[serde(rename = "F")]
    Front,
    #[serde(rename = "B")]
    Back,
}

impl Side {
    #[must_use]
    pub fn letter(self) -> &'static str {
        match self {
            Side::Front => "F",
            Side::Back => "B",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// Electrical connection identifier supplied by the host. Forwarded into
/// pads verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Net {
    pub index: usize,
    pub name: String,
}

impl Net {
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required net `{0}`")]
    MissingNet(&'static str),
}

/// Partial option record as supplied by the host. Every field except the
/// two nets is optional and falls back to its documented default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Options {
    pub side: Option<Side>,
    pub reverse: Option<bool>,
    pub hotswap: Option<bool>,
    pub solder: Option<bool>,
    pub outer_pad_width_front: Option<f64>,
    pub outer_pad_width_back: Option<f64>,
    pub show_keycaps: Option<bool>,
    pub show_corner_marks: Option<bool>,
    pub include_stabilizer_pad: Option<bool>,
    pub oval_stabilizer_pad: Option<bool>,
    pub choc_v1_support: Option<bool>,
    pub keycaps_x: Option<f64>,
    pub keycaps_y: Option<f64>,
    pub from: Option<Net>,
    pub to: Option<Net>,
}

/// Resolved, immutable option set for one footprint instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub side: Side,
    pub reverse: bool,
    pub hotswap: bool,
    pub solder: bool,
    pub outer_pad_width_front: f64,
    pub outer_pad_width_back: f64,
    pub show_keycaps: bool,
    pub show_corner_marks: bool,
    pub include_stabilizer_pad: bool,
    pub oval_stabilizer_pad: bool,
    pub choc_v1_support: bool,
    pub keycaps_x: f64,
    pub keycaps_y: f64,
    pub from: Net,
    pub to: Net,
}

impl Config {
    /// Applies defaults to a partial option record. Only the two nets are
    /// mandatory; numeric overrides are accepted as-is and left to the
    /// downstream rule checker.
    pub fn resolve(options: Options) -> Result<Self, ConfigError> {
        let from = options.from.ok_or(ConfigError::MissingNet("from"))?;
        let to = options.to.ok_or(ConfigError::MissingNet("to"))?;
        let config = Self {
            side: options.side.unwrap_or(Side::Back),
            reverse: options.reverse.unwrap_or(false),
            hotswap: options.hotswap.unwrap_or(true),
            solder: options.solder.unwrap_or(false),
            outer_pad_width_front: options.outer_pad_width_front.unwrap_or(2.6),
            outer_pad_width_back: options.outer_pad_width_back.unwrap_or(2.6),
            show_keycaps: options.show_keycaps.unwrap_or(false),
            show_corner_marks: options.show_corner_marks.unwrap_or(false),
            include_stabilizer_pad: options.include_stabilizer_pad.unwrap_or(true),
            oval_stabilizer_pad: options.oval_stabilizer_pad.unwrap_or(false),
            choc_v1_support: options.choc_v1_support.unwrap_or(false),
            keycaps_x: options.keycaps_x.unwrap_or(18.0),
            keycaps_y: options.keycaps_y.unwrap_or(18.0),
            from,
            to,
        };
        tracing::debug!(
            side = config.side.letter(),
            reverse = config.reverse,
            hotswap = config.hotswap,
            solder = config.solder,
            "resolved footprint options"
        );
        Ok(config)
    }

    /// Faces the face-specific fragment categories are emitted on, front
    /// first when the footprint is reversible.
    #[must_use]
    pub fn active_sides(&self) -> Vec<Side> {
        if self.reverse {
            vec![Side::Front, Side::Back]
        } else {
            vec![self.side]
        }
    }

    /// Per-face width of the hotswap outer (secondary) pad.
    #[must_use]
    pub fn outer_pad_width(&self, side: Side) -> f64 {
        match side {
            Side::Front => self.outer_pad_width_front,
            Side::Back => self.outer_pad_width_back,
        }
    }
}
