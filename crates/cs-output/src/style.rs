//! Courier colours and waypoint marker classification.

use std::fmt;

use cs_core::{CourierId, WayPoint};

/// Colour used for restaurant markers regardless of courier.
pub const RESTAURANT_COLOR: &str = "red";

/// A cyclic list of named colours, one per courier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub const DEFAULT_COLORS: [&'static str; 10] = [
        "green",
        "deepskyblue",
        "lightcoral",
        "gold",
        "orangered",
        "violet",
        "hotpink",
        "sandybrown",
        "purple",
        "darkblue",
    ];

    /// A palette over `colors`.  An empty list falls back to the default.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    /// Colour for `courier`, wrapping around the palette.
    pub fn color_for(&self, courier: CourierId) -> &str {
        if self.colors.is_empty() {
            return Self::DEFAULT_COLORS[courier.index() % Self::DEFAULT_COLORS.len()];
        }
        &self.colors[courier.index() % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: Self::DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

// ── MarkerKind ────────────────────────────────────────────────────────────────

/// How a waypoint is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// The courier's starting point (drawn as the courier itself).
    Origin,
    /// Label starting with `r`.
    Restaurant,
    /// Any other labelled stop.
    Stop,
    /// No label.
    Unlabeled,
}

impl MarkerKind {
    /// Classify a non-origin waypoint by its label.
    pub fn classify(label: Option<&str>) -> Self {
        match label {
            None | Some("") => MarkerKind::Unlabeled,
            Some(l) if l.starts_with('r') => MarkerKind::Restaurant,
            Some(_) => MarkerKind::Stop,
        }
    }

    /// Classify the `seq`-th waypoint of a route (0 = origin).
    pub fn for_route_position(seq: usize, waypoint: &WayPoint) -> Self {
        if seq == 0 {
            MarkerKind::Origin
        } else {
            Self::classify(waypoint.label.as_deref())
        }
    }

    /// Matplotlib-style marker glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            MarkerKind::Origin     => "o",
            MarkerKind::Restaurant => "*",
            MarkerKind::Stop       => ".",
            MarkerKind::Unlabeled  => "$?$",
        }
    }

    /// Marker colour given the owning courier's colour.
    pub fn color<'a>(self, courier_color: &'a str) -> &'a str {
        match self {
            MarkerKind::Restaurant => RESTAURANT_COLOR,
            _ => courier_color,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerKind::Origin     => "origin",
            MarkerKind::Restaurant => "restaurant",
            MarkerKind::Stop       => "stop",
            MarkerKind::Unlabeled  => "unlabeled",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
