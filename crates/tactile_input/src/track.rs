//! Position history for one coordinate space
//!
//! A motion event keeps two tracks, one in normalized (0..1) space and one in
//! screen space. Each track remembers where the contact started, where it was
//! before the last update, where it is now, and the difference between the
//! last two.

use tactile_core::Point3;

use crate::attr::Part;

/// Current/origin/previous/delta positions in a single coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Track {
    pub(crate) current: Point3,
    pub(crate) origin: Point3,
    pub(crate) previous: Point3,
    pub(crate) delta: Point3,
    seeded: bool,
}

impl Track {
    pub fn current(&self) -> Point3 {
        self.current
    }

    /// Position of the first coordinate assignment
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn previous(&self) -> Point3 {
        self.previous
    }

    /// `current - previous`
    pub fn delta(&self) -> Point3 {
        self.delta
    }

    /// Whether a coordinate has been assigned in this space yet
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Settle after `current` changed: the first call pins origin and
    /// previous to the current position, every call refreshes the delta.
    pub(crate) fn settle(&mut self) {
        if !self.seeded {
            self.origin = self.current;
            self.previous = self.current;
            self.seeded = true;
        }
        self.delta = self.current - self.previous;
    }

    /// Move the current position into previous ahead of an update
    pub(crate) fn shift(&mut self) {
        self.previous = self.current;
    }

    /// Recompute the planar delta, leaving the depth delta as is
    pub(crate) fn refresh_planar_delta(&mut self) {
        self.delta.x = self.current.x - self.previous.x;
        self.delta.y = self.current.y - self.previous.y;
    }

    pub(crate) fn copy_seed_from(&mut self, other: &Track) {
        self.seeded = other.seeded;
    }

    pub(crate) fn part(&self, part: Part) -> &Point3 {
        match part {
            Part::Current => &self.current,
            Part::Origin => &self.origin,
            Part::Previous => &self.previous,
            Part::Delta => &self.delta,
        }
    }

    pub(crate) fn part_mut(&mut self, part: Part) -> &mut Point3 {
        match part {
            Part::Current => &mut self.current,
            Part::Origin => &mut self.origin,
            Part::Previous => &mut self.previous,
            Part::Delta => &mut self.delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_settle_pins_origin() {
        let mut track = Track::default();
        track.current = Point3::new(0.3, 0.4, 0.0);
        track.settle();

        assert!(track.is_seeded());
        assert_eq!(track.origin(), track.current());
        assert_eq!(track.previous(), track.current());
        assert_eq!(track.delta(), Point3::ZERO);
    }

    #[test]
    fn test_origin_never_moves_after_seed() {
        let mut track = Track::default();
        track.current = Point3::new(1.0, 1.0, 0.0);
        track.settle();

        track.shift();
        track.current = Point3::new(4.0, 5.0, 0.0);
        track.settle();

        assert_eq!(track.origin(), Point3::new(1.0, 1.0, 0.0));
        assert_eq!(track.previous(), Point3::new(1.0, 1.0, 0.0));
        assert_eq!(track.delta(), Point3::new(3.0, 4.0, 0.0));
    }
}
