//! Named motion event attributes
//!
//! Attributes are addressed by name for two purposes: the snapshot stack
//! (save a subset, mutate, restore) and duplication between events (copy the
//! kind's manifest). Both go through [`MotionEvent::attr`] and
//! [`MotionEvent::set_attr`] so they share one definition of what each name
//! means.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tactile_core::Point3;

use crate::error::MotionError;
use crate::motion::MotionEvent;
use crate::profile::{Button, Profile};
use crate::track::Track;
use crate::user_data::UserData;

/// Attribute name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    Device,
    Id,
    Profile,
    Shape,
    PushAttrs,
    // normalized space
    Sx,
    Sy,
    Sz,
    Osx,
    Osy,
    Osz,
    Psx,
    Psy,
    Psz,
    Dsx,
    Dsy,
    Dsz,
    // screen space
    X,
    Y,
    Z,
    Ox,
    Oy,
    Oz,
    Px,
    Py,
    Pz,
    Dx,
    Dy,
    Dz,
    Pos,
    TimeStart,
    TimeUpdate,
    TimeEnd,
    IsDoubleTap,
    DoubleTapTime,
    UserData,
    // capability payloads
    Button,
    Pressure,
    Angle,
    MarkerId,
}

/// Attributes saved by a default push: screen position, delta, origin,
/// previous position and the cached `pos`.
pub const DEFAULT_PUSH_ATTRS: &[Attr] = &[
    Attr::X,
    Attr::Y,
    Attr::Z,
    Attr::Dx,
    Attr::Dy,
    Attr::Dz,
    Attr::Ox,
    Attr::Oy,
    Attr::Oz,
    Attr::Px,
    Attr::Py,
    Attr::Pz,
    Attr::Pos,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Space {
    Normalized,
    Screen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Part {
    Current,
    Origin,
    Previous,
    Delta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
    Z,
}

impl Attr {
    pub fn name(self) -> &'static str {
        match self {
            Attr::Device => "device",
            Attr::Id => "id",
            Attr::Profile => "profile",
            Attr::Shape => "shape",
            Attr::PushAttrs => "push_attrs",
            Attr::Sx => "sx",
            Attr::Sy => "sy",
            Attr::Sz => "sz",
            Attr::Osx => "osx",
            Attr::Osy => "osy",
            Attr::Osz => "osz",
            Attr::Psx => "psx",
            Attr::Psy => "psy",
            Attr::Psz => "psz",
            Attr::Dsx => "dsx",
            Attr::Dsy => "dsy",
            Attr::Dsz => "dsz",
            Attr::X => "x",
            Attr::Y => "y",
            Attr::Z => "z",
            Attr::Ox => "ox",
            Attr::Oy => "oy",
            Attr::Oz => "oz",
            Attr::Px => "px",
            Attr::Py => "py",
            Attr::Pz => "pz",
            Attr::Dx => "dx",
            Attr::Dy => "dy",
            Attr::Dz => "dz",
            Attr::Pos => "pos",
            Attr::TimeStart => "time_start",
            Attr::TimeUpdate => "time_update",
            Attr::TimeEnd => "time_end",
            Attr::IsDoubleTap => "is_double_tap",
            Attr::DoubleTapTime => "double_tap_time",
            Attr::UserData => "ud",
            Attr::Button => "button",
            Attr::Pressure => "pressure",
            Attr::Angle => "a",
            Attr::MarkerId => "fid",
        }
    }

    /// Coordinate scalar addressed by this attribute, if it is one
    pub(crate) fn slot(self) -> Option<(Space, Part, Axis)> {
        use Axis::*;
        use Part::*;
        use Space::*;

        let slot = match self {
            Attr::Sx => (Normalized, Current, X),
            Attr::Sy => (Normalized, Current, Y),
            Attr::Sz => (Normalized, Current, Z),
            Attr::Osx => (Normalized, Origin, X),
            Attr::Osy => (Normalized, Origin, Y),
            Attr::Osz => (Normalized, Origin, Z),
            Attr::Psx => (Normalized, Previous, X),
            Attr::Psy => (Normalized, Previous, Y),
            Attr::Psz => (Normalized, Previous, Z),
            Attr::Dsx => (Normalized, Delta, X),
            Attr::Dsy => (Normalized, Delta, Y),
            Attr::Dsz => (Normalized, Delta, Z),
            Attr::X => (Screen, Current, X),
            Attr::Y => (Screen, Current, Y),
            Attr::Z => (Screen, Current, Z),
            Attr::Ox => (Screen, Origin, X),
            Attr::Oy => (Screen, Origin, Y),
            Attr::Oz => (Screen, Origin, Z),
            Attr::Px => (Screen, Previous, X),
            Attr::Py => (Screen, Previous, Y),
            Attr::Pz => (Screen, Previous, Z),
            Attr::Dx => (Screen, Delta, X),
            Attr::Dy => (Screen, Delta, Y),
            Attr::Dz => (Screen, Delta, Z),
            _ => return None,
        };
        Some(slot)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attr {
    type Err = MotionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        const ALL: &[Attr] = &[
            Attr::Device,
            Attr::Id,
            Attr::Profile,
            Attr::Shape,
            Attr::PushAttrs,
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
            Attr::Button,
            Attr::Pressure,
            Attr::Angle,
            Attr::MarkerId,
        ];

        match name {
            "angle" => return Ok(Attr::Angle),
            "markerid" => return Ok(Attr::MarkerId),
            _ => {}
        }
        ALL.iter()
            .copied()
            .find(|attr| attr.name() == name)
            .ok_or_else(|| MotionError::UnknownAttribute(name.to_string()))
    }
}

/// Value of a single attribute, captured by value
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Float(f64),
    MaybeFloat(Option<f64>),
    MaybeInt(Option<i64>),
    Pair(f64, f64),
    Flag(bool),
    Text(String),
    Profile(Profile),
    Button(Option<Button>),
    Shape(Option<Value>),
    UserData(UserData),
    Attrs(Vec<Attr>),
}

fn axis(point: &Point3, axis: Axis) -> f64 {
    match axis {
        Axis::X => point.x,
        Axis::Y => point.y,
        Axis::Z => point.z,
    }
}

fn axis_mut(point: &mut Point3, axis: Axis) -> &mut f64 {
    match axis {
        Axis::X => &mut point.x,
        Axis::Y => &mut point.y,
        Axis::Z => &mut point.z,
    }
}

impl MotionEvent {
    fn track(&self, space: Space) -> &Track {
        match space {
            Space::Normalized => &self.normalized,
            Space::Screen => &self.screen,
        }
    }

    fn track_mut(&mut self, space: Space) -> &mut Track {
        match space {
            Space::Normalized => &mut self.normalized,
            Space::Screen => &mut self.screen,
        }
    }

    /// Read an attribute by name
    pub fn attr(&self, attr: Attr) -> AttrValue {
        if let Some((space, part, ax)) = attr.slot() {
            return AttrValue::Float(axis(self.track(space).part(part), ax));
        }

        match attr {
            Attr::Device => AttrValue::Text(self.device.clone()),
            Attr::Id => AttrValue::Text(self.id.clone()),
            Attr::Profile => AttrValue::Profile(self.profile.clone()),
            Attr::Shape => AttrValue::Shape(self.shape.clone()),
            Attr::PushAttrs => AttrValue::Attrs(self.push_attrs.clone()),
            Attr::Pos => AttrValue::Pair(self.pos.x, self.pos.y),
            Attr::TimeStart => AttrValue::Float(self.time_start),
            Attr::TimeUpdate => AttrValue::Float(self.time_update),
            Attr::TimeEnd => AttrValue::MaybeFloat(self.time_end),
            Attr::IsDoubleTap => AttrValue::Flag(self.is_double_tap),
            Attr::DoubleTapTime => AttrValue::Float(self.double_tap_time),
            Attr::UserData => AttrValue::UserData(self.ud.clone()),
            Attr::Button => AttrValue::Button(self.button.clone()),
            Attr::Pressure => AttrValue::MaybeFloat(self.pressure),
            Attr::Angle => AttrValue::MaybeFloat(self.angle),
            Attr::MarkerId => AttrValue::MaybeInt(self.marker_id),
            _ => unreachable!("coordinate attributes are handled above"),
        }
    }

    /// Write an attribute by name. Returns `false` and leaves the event
    /// untouched when `value` does not have the attribute's type.
    pub(crate) fn set_attr(&mut self, attr: Attr, value: AttrValue) -> bool {
        if let Some((space, part, ax)) = attr.slot() {
            let AttrValue::Float(v) = value else {
                return false;
            };
            *axis_mut(self.track_mut(space).part_mut(part), ax) = v;
            return true;
        }

        match (attr, value) {
            (Attr::Device, AttrValue::Text(v)) => self.device = v,
            (Attr::Id, AttrValue::Text(v)) => self.id = v,
            (Attr::Profile, AttrValue::Profile(v)) => self.profile = v,
            (Attr::Shape, AttrValue::Shape(v)) => self.shape = v,
            (Attr::PushAttrs, AttrValue::Attrs(v)) => self.push_attrs = v,
            (Attr::Pos, AttrValue::Pair(x, y)) => self.pos = (x, y).into(),
            (Attr::TimeStart, AttrValue::Float(v)) => self.time_start = v,
            (Attr::TimeUpdate, AttrValue::Float(v)) => self.time_update = v,
            (Attr::TimeEnd, AttrValue::MaybeFloat(v)) => self.time_end = v,
            (Attr::IsDoubleTap, AttrValue::Flag(v)) => self.is_double_tap = v,
            (Attr::DoubleTapTime, AttrValue::Float(v)) => self.double_tap_time = v,
            (Attr::UserData, AttrValue::UserData(v)) => self.ud = v,
            (Attr::Button, AttrValue::Button(v)) => self.button = v,
            (Attr::Pressure, AttrValue::MaybeFloat(v)) => self.pressure = v,
            (Attr::Angle, AttrValue::MaybeFloat(v)) => self.angle = v,
            (Attr::MarkerId, AttrValue::MaybeInt(v)) => self.marker_id = v,
            (attr, value) => {
                tracing::warn!("ignoring {:?} for attribute `{}`", value, attr);
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for attr in DEFAULT_PUSH_ATTRS {
            assert_eq!(attr.name().parse::<Attr>().unwrap(), *attr);
        }
        assert_eq!("angle".parse::<Attr>().unwrap(), Attr::Angle);
        assert_eq!("fid".parse::<Attr>().unwrap(), Attr::MarkerId);
        assert_eq!(
            "uid".parse::<Attr>(),
            Err(MotionError::UnknownAttribute("uid".into()))
        );
    }

    #[test]
    fn test_slots_cover_coordinates_only() {
        assert!(Attr::Dsz.slot().is_some());
        assert!(Attr::Pos.slot().is_none());
        assert!(Attr::Device.slot().is_none());
    }
}
