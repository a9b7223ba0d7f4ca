//! Concrete motion event kinds
//!
//! There is no generic "motion" kind: every event is created as one of the
//! concrete kinds below. A kind decides the default profile of a fresh event
//! and which attributes duplication copies, as [`BASE_ATTRIBUTES`] followed by
//! the kind's own extras.

use std::fmt;
use std::str::FromStr;

use crate::attr::Attr;
use crate::error::MotionError;
use crate::profile::{Capability, Profile};

/// Attributes every kind carries, in copy order
pub const BASE_ATTRIBUTES: &[Attr] = &[
    Attr::Device,
    Attr::PushAttrs,
    Attr::Id,
    Attr::Shape,
    Attr::Profile,
    Attr::Sx,
    Attr::Sy,
    Attr::Sz,
    Attr::Osx,
    Attr::Osy,
    Attr::Osz,
    Attr::Psx,
    Attr::Psy,
    Attr::Psz,
    Attr::Dsx,
    Attr::Dsy,
    Attr::Dsz,
    Attr::X,
    Attr::Y,
    Attr::Z,
    Attr::Ox,
    Attr::Oy,
    Attr::Oz,
    Attr::Px,
    Attr::Py,
    Attr::Pz,
    Attr::Dx,
    Attr::Dy,
    Attr::Dz,
    Attr::Pos,
    Attr::TimeStart,
    Attr::TimeUpdate,
    Attr::TimeEnd,
    Attr::IsDoubleTap,
    Attr::DoubleTapTime,
    Attr::UserData,
];

const TOUCH_ATTRIBUTES: &[Attr] = &[Attr::Pressure];
const MOUSE_ATTRIBUTES: &[Attr] = &[Attr::Button];
const MARKER_ATTRIBUTES: &[Attr] = &[Attr::Angle, Attr::MarkerId];

/// Kind of device contact an event describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Finger or stylus contact on a touch surface
    Touch,
    /// Mouse pointer with buttons and wheel
    Mouse,
    /// Tangible object or fiducial marker
    Marker,
    /// Position-less motion (hovering pen, proximity sensors); never a touch
    /// unless its provider adds `pos` to the profile
    Hover,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Touch,
        EventKind::Mouse,
        EventKind::Marker,
        EventKind::Hover,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EventKind::Touch => "touch",
            EventKind::Mouse => "mouse",
            EventKind::Marker => "marker",
            EventKind::Hover => "hover",
        }
    }

    /// Name shown when an event is displayed
    pub fn type_name(self) -> &'static str {
        match self {
            EventKind::Touch => "TouchEvent",
            EventKind::Mouse => "MouseEvent",
            EventKind::Marker => "MarkerEvent",
            EventKind::Hover => "HoverEvent",
        }
    }

    pub fn default_profile(self) -> Profile {
        let capabilities = match self {
            EventKind::Touch => vec![Capability::Pos],
            EventKind::Mouse => vec![Capability::Pos, Capability::Button],
            EventKind::Marker => vec![Capability::Pos, Capability::Angle, Capability::MarkerId],
            EventKind::Hover => Vec::new(),
        };
        capabilities.into_iter().collect()
    }

    /// Attributes this kind adds on top of [`BASE_ATTRIBUTES`]
    pub fn extra_attributes(self) -> &'static [Attr] {
        match self {
            EventKind::Touch => TOUCH_ATTRIBUTES,
            EventKind::Mouse => MOUSE_ATTRIBUTES,
            EventKind::Marker => MARKER_ATTRIBUTES,
            EventKind::Hover => &[],
        }
    }

    /// Full attribute manifest used by duplication
    pub fn manifest(self) -> impl Iterator<Item = Attr> {
        BASE_ATTRIBUTES
            .iter()
            .chain(self.extra_attributes())
            .copied()
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = MotionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "motion" => Err(MotionError::AbstractInstantiation),
            other => EventKind::ALL
                .into_iter()
                .find(|kind| kind.name() == other)
                .ok_or_else(|| MotionError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_kind_is_rejected() {
        assert_eq!(
            "motion".parse::<EventKind>(),
            Err(MotionError::AbstractInstantiation)
        );
        assert_eq!(
            "joystick".parse::<EventKind>(),
            Err(MotionError::UnknownKind("joystick".into()))
        );
        assert_eq!("mouse".parse::<EventKind>(), Ok(EventKind::Mouse));
    }

    #[test]
    fn test_manifest_is_base_then_extras() {
        let manifest: Vec<_> = EventKind::Marker.manifest().collect();
        assert_eq!(manifest.len(), BASE_ATTRIBUTES.len() + 2);
        assert_eq!(&manifest[..BASE_ATTRIBUTES.len()], BASE_ATTRIBUTES);
        assert_eq!(&manifest[BASE_ATTRIBUTES.len()..], &[Attr::Angle, Attr::MarkerId]);

        let hover: Vec<_> = EventKind::Hover.manifest().collect();
        assert_eq!(hover, BASE_ATTRIBUTES);
    }

    #[test]
    fn test_default_profiles() {
        assert!(EventKind::Touch.default_profile().contains(&Capability::Pos));
        assert!(EventKind::Mouse.default_profile().contains(&Capability::Button));
        assert!(EventKind::Hover.default_profile().is_empty());
    }
}
