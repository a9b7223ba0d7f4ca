//! Event profiles
//!
//! A profile lists the optional capabilities a motion event carries. Only
//! events whose profile contains [`Capability::Pos`] are touches: they are
//! routed through the widget tree and may be grabbed.
//!
//! | Capability | Payload on the event |
//! |------------|----------------------|
//! | `angle`    | `angle()` |
//! | `button`   | `button()` |
//! | `markerid` | `marker_id()` |
//! | `pos`      | `x()`, `y()`, `pos()` |
//! | `pos3d`    | `x()`, `y()`, `z()` |
//! | `pressure` | `pressure()` |
//! | `shape`    | `shape()` |

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;

/// A single capability name
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Angle,
    Button,
    MarkerId,
    Pos,
    Pos3d,
    Pressure,
    Shape,
    /// Provider-defined capability
    Other(String),
}

impl Capability {
    pub fn as_str(&self) -> &str {
        match self {
            Capability::Angle => "angle",
            Capability::Button => "button",
            Capability::MarkerId => "markerid",
            Capability::Pos => "pos",
            Capability::Pos3d => "pos3d",
            Capability::Pressure => "pressure",
            Capability::Shape => "shape",
            Capability::Other(name) => name,
        }
    }
}

impl From<&str> for Capability {
    fn from(name: &str) -> Self {
        match name {
            "angle" => Capability::Angle,
            "button" => Capability::Button,
            "markerid" => Capability::MarkerId,
            "pos" => Capability::Pos,
            "pos3d" => Capability::Pos3d,
            "pressure" => Capability::Pressure,
            "shape" => Capability::Shape,
            other => Capability::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of capabilities
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    capabilities: IndexSet<Capability>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// Add a capability, keeping the first insertion position
    pub fn insert(&mut self, capability: Capability) -> bool {
        self.capabilities.insert(capability)
    }

    pub fn remove(&mut self, capability: &Capability) -> bool {
        self.capabilities.shift_remove(capability)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter()
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl FromIterator<Capability> for Profile {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            capabilities: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Profile {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(Capability::from).collect()
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, capability) in self.capabilities.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{capability}")?;
        }
        f.write_str("]")
    }
}

/// Pointer button reported with the `button` capability
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Middle,
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
    /// Provider-defined button name
    Other(String),
}

impl Button {
    /// Whether this button denotes a wheel/scroll direction
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            Button::ScrollUp | Button::ScrollDown | Button::ScrollLeft | Button::ScrollRight
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            Button::Left => "left",
            Button::Right => "right",
            Button::Middle => "middle",
            Button::ScrollUp => "scrollup",
            Button::ScrollDown => "scrolldown",
            Button::ScrollLeft => "scrollleft",
            Button::ScrollRight => "scrollright",
            Button::Other(name) => name,
        }
    }
}

impl FromStr for Button {
    type Err = std::convert::Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "left" => Button::Left,
            "right" => Button::Right,
            "middle" => Button::Middle,
            "scrollup" | "scroll-up" => Button::ScrollUp,
            "scrolldown" | "scroll-down" => Button::ScrollDown,
            "scrollleft" | "scroll-left" => Button::ScrollLeft,
            "scrollright" | "scroll-right" => Button::ScrollRight,
            other => Button::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
