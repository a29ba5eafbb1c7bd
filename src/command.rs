//! Vocabulary shared by every component.
//!
//! [`Direction`] and [`Section`] name the fixed arguments and blocks of the
//! catalog, while [`WorkspaceInfo`] / [`OutputInfo`] carry the live names
//! reported by the window manager.
//!
//! The literal parameter lists at the bottom of this module are exactly what
//! the i3 command grammar accepts; the catalog never invents any others.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cardinal direction as understood by i3 (`move left`, `focus output up`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
        }
    }
}

/// One block of the catalog.
///
/// The declaration order is the emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Renames, container moves, workspace jumps and workspace-to-output moves.
    Workspace,
    /// `layout ...`
    Layout,
    /// `split ...`
    Split,
    /// `move <direction>`
    Move,
    /// `focus ...` and `focus output ...`
    Focus,
}

impl Section {
    /// Every section, in emission order.
    pub const ALL: [Section; 5] = [
        Section::Workspace,
        Section::Layout,
        Section::Split,
        Section::Move,
        Section::Focus,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Workspace => write!(f, "workspace"),
            Section::Layout => write!(f, "layout"),
            Section::Split => write!(f, "split"),
            Section::Move => write!(f, "move"),
            Section::Focus => write!(f, "focus"),
        }
    }
}

/// Error returned when a section name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0:?} (expected workspace, layout, split, move or focus)")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    /// Case-insensitive; accepts the plural forms too (`"workspaces"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "workspace" | "workspaces" => Ok(Section::Workspace),
            "layout" | "layouts" => Ok(Section::Layout),
            "split" | "splits" => Ok(Section::Split),
            "move" | "moves" => Ok(Section::Move),
            "focus" => Ok(Section::Focus),
            _ => Err(UnknownSection(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}

/// A workspace as reported by the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceInfo {
    /// Name shown in the bar, e.g. `"1"` or `"2: web"`.
    pub name: String,
}

/// An output (monitor) as reported by the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    /// Output name, e.g. `"HDMI-1"`.
    pub name: String,
    /// Whether the output is currently enabled.  i3 also lists disabled
    /// connectors and the `xroot-0` pseudo-output.
    pub active: bool,
}

//  Literal parameter lists

/// Directions used for `move workspace to output <dir>` and `move <dir>`.
pub const MOVE_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Down,
    Direction::Up,
];

/// Directions used for `focus output <dir>`.  Note `up` precedes `down` here.
pub const FOCUS_OUTPUT_DIRECTIONS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

pub const LAYOUT_PARAMS: [&str; 7] = [
    "default",
    "tabbed",
    "stacking",
    "splitv",
    "splith",
    "toggle split",
    "toggle all",
];

pub const SPLIT_PARAMS: [&str; 3] = ["vertical", "horizontal", "toggle"];

/// Arguments for plain `focus <value>`, after the four move directions.
pub const FOCUS_TARGETS: [&str; 5] = ["parent", "child", "floating", "tiling", "mode_toggle"];
