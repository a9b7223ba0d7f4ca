//! Motion events
//!
//! A [`MotionEvent`] follows one physical contact from the moment an input
//! provider reports it (begin), through every position update (update), until
//! the provider marks it finished (end).
//!
//! Positions are tracked twice. Providers report normalized coordinates in the
//! unit range; [`MotionEvent::scale_for_screen`] projects them onto the window
//! surface once its size is known. Each space keeps its own origin, previous
//! position and delta.
//!
//! ```rust
//! use tactile_core::UidSource;
//! use tactile_input::{EventKind, MotionEvent, RawArgs, Rotation};
//!
//! let uids = UidSource::new();
//! let mut touch = MotionEvent::new(&uids, EventKind::Touch, "mtdev", "0", RawArgs::at(0.25, 0.5));
//! touch.scale_for_screen(800.0, 600.0, None, Rotation::Deg0);
//! assert_eq!(touch.pos(), (200.0, 300.0));
//!
//! touch.advance(&RawArgs::at(0.5, 0.5));
//! touch.scale_for_screen(800.0, 600.0, None, Rotation::Deg0);
//! assert_eq!(touch.dpos(), (200.0, 0.0));
//! assert_eq!(touch.opos(), (200.0, 300.0));
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tactile_core::{PlanarTransform, Point, Uid, UidSource};

use crate::args::RawArgs;
use crate::attr::{Attr, DEFAULT_PUSH_ATTRS};
use crate::error::{MotionError, Result};
use crate::grab::{ClaimantArena, ClaimantId, GrabState};
use crate::kind::EventKind;
use crate::profile::{Button, Capability, Profile};
use crate::snapshot::Snapshot;
use crate::track::Track;
use crate::user_data::UserData;

/// Seconds since the Unix epoch
pub(crate) fn now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}

/// Screen rotation applied when projecting onto the window surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Map a normalized position onto a `width` x `height` surface.
    ///
    /// The unit square is rotated first; quarter turns swap the axes, so the
    /// rotated x is scaled by the height and the rotated y by the width.
    pub fn project(self, sx: f64, sy: f64, width: f64, height: f64) -> (f64, f64) {
        match self {
            Rotation::Deg0 => (sx * width, sy * height),
            Rotation::Deg90 => {
                let (rx, ry) = (sy, 1.0 - sx);
                (rx * height, ry * width)
            }
            Rotation::Deg180 => ((1.0 - sx) * width, (1.0 - sy) * height),
            Rotation::Deg270 => {
                let (rx, ry) = (1.0 - sy, sx);
                (rx * height, ry * width)
            }
        }
    }
}

impl TryFrom<u32> for Rotation {
    type Error = MotionError;

    fn try_from(degrees: u32) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(MotionError::UnsupportedRotation(other)),
        }
    }
}

/// One tracked input contact
///
/// Events are not `Clone`: a uid belongs to exactly one live event. Use
/// [`MotionEvent::copy_to`] to duplicate the attributes into an event with its
/// own uid.
///
/// ```compile_fail
/// use tactile_core::UidSource;
/// use tactile_input::{EventKind, MotionEvent, RawArgs};
///
/// let uids = UidSource::new();
/// let touch = MotionEvent::new(&uids, EventKind::Touch, "mtdev", "0", RawArgs::new());
/// let twin = touch.clone();
/// ```
#[derive(Debug)]
pub struct MotionEvent {
    pub(crate) uid: Uid,
    pub(crate) kind: EventKind,
    pub(crate) device: String,
    pub(crate) id: String,
    pub(crate) profile: Profile,

    pub(crate) button: Option<Button>,
    pub(crate) pressure: Option<f64>,
    pub(crate) angle: Option<f64>,
    pub(crate) marker_id: Option<i64>,
    pub(crate) shape: Option<Value>,

    pub(crate) normalized: Track,
    pub(crate) screen: Track,
    pub(crate) pos: Point,

    pub(crate) time_start: f64,
    pub(crate) time_update: f64,
    pub(crate) time_end: Option<f64>,
    pub(crate) is_double_tap: bool,
    pub(crate) double_tap_time: f64,

    pub(crate) grabs: GrabState,
    pub(crate) ud: UserData,

    pub(crate) push_attrs: Vec<Attr>,
    pub(crate) push_stack: Vec<Snapshot>,
}

impl MotionEvent {
    /// Create an event from the first payload of a new contact
    pub fn new(
        uids: &UidSource,
        kind: EventKind,
        device: impl Into<String>,
        id: impl Into<String>,
        args: RawArgs,
    ) -> Self {
        let time_start = now();
        let mut event = Self {
            uid: uids.next(),
            kind,
            device: device.into(),
            id: id.into(),
            profile: kind.default_profile(),
            button: None,
            pressure: None,
            angle: None,
            marker_id: None,
            shape: None,
            normalized: Track::default(),
            screen: Track::default(),
            pos: Point::ZERO,
            time_start,
            time_update: time_start,
            time_end: None,
            is_double_tap: false,
            double_tap_time: 0.0,
            grabs: GrabState::default(),
            ud: UserData::new(),
            push_attrs: DEFAULT_PUSH_ATTRS.to_vec(),
            push_stack: Vec::new(),
        };
        event.depack(&args);

        tracing::debug!(
            "{} {} created from {} (id {}, profile {})",
            kind.type_name(),
            event.uid,
            event.device,
            event.id,
            event.profile
        );
        event
    }

    // ─────────────────────────────────────────────────────────────────────
    // Coordinate tracking
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a provider payload.
    ///
    /// Recognized keys overwrite the matching attributes; missing keys keep
    /// their values. The first call pins the normalized origin; every call
    /// refreshes the normalized delta.
    pub fn depack(&mut self, args: &RawArgs) {
        let current = &mut self.normalized.current;
        if let Some(sx) = args.float("sx") {
            current.x = sx;
        }
        if let Some(sy) = args.float("sy") {
            current.y = sy;
        }
        if let Some(sz) = args.float("sz") {
            current.z = sz;
        }

        if let Some(profile) = args.profile() {
            self.profile = profile;
        }
        if let Some(button) = args.button() {
            self.button = Some(button);
        }
        if let Some(pressure) = args.float("pressure") {
            self.pressure = Some(pressure);
        }
        if let Some(angle) = args.float_any(&["angle", "a"]) {
            self.angle = Some(angle);
        }
        if let Some(marker_id) = args.int_any(&["markerid", "fid"]) {
            self.marker_id = Some(marker_id);
        }
        if let Some(shape) = args.get("shape") {
            self.shape = Some(shape.clone());
        }

        self.normalized.settle();
    }

    /// Move the contact: current positions become previous, the update time is
    /// stamped and the payload is applied.
    ///
    /// The screen delta is refreshed by the next [`scale_for_screen`].
    ///
    /// [`scale_for_screen`]: MotionEvent::scale_for_screen
    pub fn advance(&mut self, args: &RawArgs) {
        self.screen.shift();
        self.normalized.shift();
        self.time_update = now();
        self.depack(args);
    }

    /// Project the normalized position onto a `width` x `height` surface.
    ///
    /// When `depth` is given, `z = sz * depth`. The first projection pins the
    /// screen origin and previous position. Projecting again without an
    /// intervening [`advance`] leaves previous untouched, so repeating a call
    /// with the same arguments changes nothing.
    ///
    /// [`advance`]: MotionEvent::advance
    pub fn scale_for_screen(
        &mut self,
        width: f64,
        height: f64,
        depth: Option<f64>,
        rotation: Rotation,
    ) {
        let spos = self.normalized.current;
        let (x, y) = rotation.project(spos.x, spos.y, width, height);

        self.screen.current.x = x;
        self.screen.current.y = y;
        if let Some(depth) = depth {
            self.screen.current.z = spos.z * depth;
        }
        self.screen.settle();
        self.pos = Point::new(x, y);
    }

    /// Map current, previous and origin screen positions through `transform`.
    ///
    /// Used to move an event into a nested frame (e.g. a child widget's local
    /// space). Depth and normalized coordinates are left alone.
    pub fn apply_transform_2d<T: PlanarTransform + ?Sized>(&mut self, transform: &T) {
        let screen = &mut self.screen;
        for point in [&mut screen.current, &mut screen.previous, &mut screen.origin] {
            let (x, y) = transform.map(point.x, point.y);
            point.x = x;
            point.y = y;
        }
        screen.refresh_planar_delta();
        self.pos = screen.current.xy();
    }

    /// Stamp the end of the contact
    pub fn update_time_end(&mut self) {
        let time_end = now();
        self.time_end = Some(time_end);
        tracing::debug!(
            "{} {} ended after {:.3}s",
            self.kind.type_name(),
            self.uid,
            time_end - self.time_start
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Grab registry
    // ─────────────────────────────────────────────────────────────────────

    /// Claim continued delivery of this event for `claimant`.
    ///
    /// Only touches can be grabbed, and nothing can be grabbed while an
    /// exclusive claim is held. The same claimant may grab more than once.
    pub fn grab(&mut self, claimant: ClaimantId, exclusive: bool) -> Result<()> {
        if !self.is_touch() {
            tracing::warn!("Rejecting grab of non-touch event {}", self.uid);
            return Err(MotionError::NotGrabbable);
        }
        if self.grabs.exclusive.is_some() {
            tracing::warn!("Rejecting grab of exclusively grabbed event {}", self.uid);
            return Err(MotionError::AlreadyExclusive);
        }
        self.grabs.add(claimant, exclusive);
        tracing::trace!(
            "Event {} grabbed by {:?} (exclusive: {})",
            self.uid,
            claimant,
            exclusive
        );
        Ok(())
    }

    /// Release one grab held by `claimant`; releasing a grab that was never
    /// taken does nothing.
    pub fn ungrab(&mut self, claimant: ClaimantId) {
        if self.grabs.remove_first(claimant) {
            tracing::trace!("Event {} ungrabbed by {:?}", self.uid, claimant);
        }
    }

    /// Forget every grab held by a claimant that is being torn down
    pub fn release_claimant(&mut self, claimant: ClaimantId) {
        let removed = self.grabs.remove_all(claimant);
        if removed > 0 {
            tracing::trace!(
                "Event {} dropped {} grab(s) of released {:?}",
                self.uid,
                removed,
                claimant
            );
        }
    }

    /// Drop grabs whose claimant is no longer registered in `arena`
    pub fn prune_grabs(&mut self, arena: &ClaimantArena) -> usize {
        self.grabs.retain_alive(arena)
    }

    /// Grab entries in grab order, including stale ones
    pub fn grab_list(&self) -> &[ClaimantId] {
        &self.grabs.list
    }

    /// Grab entries whose claimant is still registered
    pub fn live_grabs<'a>(
        &'a self,
        arena: &'a ClaimantArena,
    ) -> impl Iterator<Item = ClaimantId> + 'a {
        self.grabs
            .list
            .iter()
            .copied()
            .filter(move |id| arena.is_alive(*id))
    }

    pub fn is_grabbed_by(&self, claimant: ClaimantId) -> bool {
        self.grabs.list.contains(&claimant)
    }

    pub fn grab_exclusive(&self) -> Option<ClaimantId> {
        self.grabs.exclusive
    }

    /// Claimant the dispatcher is currently delivering this event to
    pub fn grab_current(&self) -> Option<ClaimantId> {
        self.grabs.current
    }

    pub fn set_grab_current(&mut self, claimant: Option<ClaimantId>) {
        self.grabs.current = claimant;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Duplication and helpers
    // ─────────────────────────────────────────────────────────────────────

    /// Copy every attribute of this event's manifest into `target`.
    ///
    /// Values are copied, so later changes to either event do not show up in
    /// the other. The uid, grabs and snapshot stack of `target` are kept.
    pub fn copy_to(&self, target: &mut MotionEvent) {
        for attr in self.kind.manifest() {
            target.set_attr(attr, self.attr(attr));
        }
        target.normalized.copy_seed_from(&self.normalized);
        target.screen.copy_seed_from(&self.screen);
    }

    /// Distance between the screen positions of two events
    pub fn distance(&self, other: &MotionEvent) -> f64 {
        self.pos.distance(other.pos)
    }

    /// Whether this is a mouse wheel event
    pub fn is_mouse_scrolling(&self) -> bool {
        self.profile.contains(&Capability::Button)
            && self.button.as_ref().is_some_and(Button::is_scroll)
    }

    /// Only events with the `pos` capability are touches
    pub fn is_touch(&self) -> bool {
        self.profile.contains(&Capability::Pos)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn uid(&self) -> Uid {
        self.uid
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    /// Provider id, unique only within its device
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn button(&self) -> Option<&Button> {
        self.button.as_ref()
    }

    pub fn pressure(&self) -> Option<f64> {
        self.pressure
    }

    pub fn angle(&self) -> Option<f64> {
        self.angle
    }

    pub fn marker_id(&self) -> Option<i64> {
        self.marker_id
    }

    pub fn shape(&self) -> Option<&Value> {
        self.shape.as_ref()
    }

    /// Normalized position history
    pub fn normalized(&self) -> &Track {
        &self.normalized
    }

    /// Screen position history
    pub fn screen(&self) -> &Track {
        &self.screen
    }

    pub fn sx(&self) -> f64 {
        self.normalized.current.x
    }

    pub fn sy(&self) -> f64 {
        self.normalized.current.y
    }

    pub fn sz(&self) -> f64 {
        self.normalized.current.z
    }

    pub fn x(&self) -> f64 {
        self.screen.current.x
    }

    pub fn y(&self) -> f64 {
        self.screen.current.y
    }

    pub fn z(&self) -> f64 {
        self.screen.current.z
    }

    /// Cached screen position `(x, y)`
    pub fn pos(&self) -> (f64, f64) {
        self.pos.to_tuple()
    }

    /// Normalized position `(sx, sy)`
    pub fn spos(&self) -> (f64, f64) {
        self.normalized.current.xy().to_tuple()
    }

    /// Previous screen position `(px, py)`
    pub fn ppos(&self) -> (f64, f64) {
        self.screen.previous.xy().to_tuple()
    }

    /// Screen origin `(ox, oy)`
    pub fn opos(&self) -> (f64, f64) {
        self.screen.origin.xy().to_tuple()
    }

    /// Screen delta `(dx, dy)`
    pub fn dpos(&self) -> (f64, f64) {
        self.screen.delta.xy().to_tuple()
    }

    pub fn time_start(&self) -> f64 {
        self.time_start
    }

    pub fn time_update(&self) -> f64 {
        self.time_update
    }

    /// End time, `None` while the contact is live
    pub fn time_end(&self) -> Option<f64> {
        self.time_end
    }

    pub fn is_live(&self) -> bool {
        self.time_end.is_none()
    }

    pub fn is_double_tap(&self) -> bool {
        self.is_double_tap
    }

    /// Seconds since the previous tap when [`is_double_tap`] is set
    ///
    /// [`is_double_tap`]: MotionEvent::is_double_tap
    pub fn double_tap_time(&self) -> f64 {
        self.double_tap_time
    }

    pub(crate) fn mark_double_tap(&mut self, elapsed: f64) {
        self.is_double_tap = true;
        self.double_tap_time = elapsed;
    }

    pub fn ud(&self) -> &UserData {
        &self.ud
    }

    pub fn ud_mut(&mut self) -> &mut UserData {
        &mut self.ud
    }
}

impl fmt::Display for MotionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} spos={:?} pos={:?}>",
            self.kind.type_name(),
            self.spos(),
            self.pos()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::{Affine2D, Point3};

    fn touch_at(uids: &UidSource, sx: f64, sy: f64) -> MotionEvent {
        MotionEvent::new(uids, EventKind::Touch, "test", "0", RawArgs::at(sx, sy))
    }

    #[test]
    fn test_fresh_event_has_zero_delta() {
        let uids = UidSource::new();
        let event = touch_at(&uids, 0.3, 0.7);

        let track = event.normalized();
        assert_eq!(track.origin(), track.current());
        assert_eq!(track.previous(), track.current());
        assert_eq!(track.delta(), Point3::ZERO);
        assert!(event.is_live());
        assert_eq!(event.time_update(), event.time_start());
    }

    #[test]
    fn test_uids_are_unique() {
        let uids = UidSource::new();
        let a = touch_at(&uids, 0.0, 0.0);
        let b = touch_at(&uids, 0.0, 0.0);
        assert_ne!(a.uid(), b.uid());
        assert!(b.uid() > a.uid());
    }

    #[test]
    fn test_missing_keys_keep_values() {
        let uids = UidSource::new();
        let mut event = touch_at(&uids, 0.2, 0.4);
        event.advance(&RawArgs::new().with("sx", 0.6));

        assert_eq!(event.spos(), (0.6, 0.4));
        assert!((event.normalized().delta().x - 0.4).abs() < 1e-12);
        assert_eq!(event.normalized().delta().y, 0.0);
    }

    #[test]
    fn test_payload_capabilities() {
        let uids = UidSource::new();
        let args = RawArgs::at(0.1, 0.1)
            .with("profile", vec!["pos", "angle", "markerid", "shape"])
            .with("a", 1.5)
            .with("fid", 42)
            .with("shape", serde_json::json!({"width": 2.0, "height": 3.0}));
        let event = MotionEvent::new(&uids, EventKind::Marker, "tuio", "3", args);

        assert_eq!(event.angle(), Some(1.5));
        assert_eq!(event.marker_id(), Some(42));
        assert_eq!(event.shape().unwrap()["width"], 2.0);
        assert!(event.profile().contains(&Capability::Shape));
    }

    #[test]
    fn test_is_touch_follows_profile() {
        let uids = UidSource::new();
        let args = RawArgs::at(0.5, 0.5);
        let mut hover = MotionEvent::new(&uids, EventKind::Hover, "pen", "0", args);
        assert!(!hover.is_touch());

        hover.advance(&RawArgs::new().with("profile", vec!["pos"]));
        assert!(hover.is_touch());
    }

    #[test]
    fn test_rotation_table() {
        let (w, h) = (200.0, 100.0);
        assert_eq!(Rotation::Deg0.project(0.5, 0.25, w, h), (100.0, 25.0));
        assert_eq!(Rotation::Deg90.project(0.5, 0.25, w, h), (25.0, 100.0));
        assert_eq!(Rotation::Deg180.project(0.5, 0.25, w, h), (100.0, 75.0));
        assert_eq!(Rotation::Deg270.project(0.5, 0.25, w, h), (75.0, 100.0));
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::try_from(270), Ok(Rotation::Deg270));
        assert_eq!(Rotation::try_from(45), Err(MotionError::UnsupportedRotation(45)));
        assert_eq!(Rotation::Deg90.degrees(), 90);
    }

    #[test]
    fn test_first_projection_seeds_screen_origin() {
        let uids = UidSource::new();
        let mut event = touch_at(&uids, 0.5, 0.25);
        assert!(!event.screen().is_seeded());

        event.scale_for_screen(200.0, 100.0, None, Rotation::Deg90);
        assert_eq!(event.pos(), (25.0, 100.0));
        assert_eq!(event.opos(), (25.0, 100.0));
        assert_eq!(event.ppos(), (25.0, 100.0));
        assert_eq!(event.dpos(), (0.0, 0.0));
    }

    #[test]
    fn test_reprojection_with_same_arguments_is_stable() {
        let uids = UidSource::new();
        let mut event = touch_at(&uids, 0.1, 0.1);
        event.scale_for_screen(100.0, 100.0, None, Rotation::Deg0);
        event.advance(&RawArgs::at(0.2, 0.3));
        event.scale_for_screen(100.0, 100.0, None, Rotation::Deg0);
        let first = (event.pos(), event.ppos(), event.dpos());

        // previous only moves on advance
        event.scale_for_screen(100.0, 100.0, None, Rotation::Deg0);
        assert_eq!((event.pos(), event.ppos(), event.dpos()), first);
    }

    #[test]
    fn test_depth_projection() {
        let uids = UidSource::new();
        let mut event = MotionEvent::new(
            &uids,
            EventKind::Touch,
            "test",
            "0",
            RawArgs::at(0.5, 0.5).with("sz", 0.5),
        );
        event.scale_for_screen(10.0, 10.0, Some(4.0), Rotation::Deg0);
        assert_eq!(event.z(), 2.0);

        event.scale_for_screen(10.0, 10.0, None, Rotation::Deg0);
        assert_eq!(event.z(), 2.0);
    }

    #[test]
    fn test_apply_transform_2d() {
        let uids = UidSource::new();
        let mut event = touch_at(&uids, 0.1, 0.1);
        event.scale_for_screen(100.0, 100.0, Some(1.0), Rotation::Deg0);
        event.advance(&RawArgs::at(0.3, 0.2));
        event.scale_for_screen(100.0, 100.0, Some(1.0), Rotation::Deg0);

        let spos = event.spos();
        event.apply_transform_2d(&Affine2D::translation(-10.0, -10.0));

        assert_eq!(event.pos(), (20.0, 10.0));
        assert_eq!(event.ppos(), (0.0, 0.0));
        assert_eq!(event.opos(), (0.0, 0.0));
        assert_eq!(event.dpos(), (20.0, 10.0));
        assert_eq!(event.spos(), spos);

        event.apply_transform_2d(&|x: f64, y: f64| (x * 2.0, y * 2.0));
        assert_eq!(event.pos(), (40.0, 20.0));
        assert_eq!(event.dpos(), (40.0, 20.0));
    }

    #[test]
    fn test_grab_rules() {
        let uids = UidSource::new();
        let mut arena = ClaimantArena::new();
        let a = arena.register("a");
        let b = arena.register("b");

        let mut event = touch_at(&uids, 0.5, 0.5);
        event.grab(a, true).unwrap();
        assert_eq!(event.grab_exclusive(), Some(a));
        assert_eq!(event.grab(b, true), Err(MotionError::AlreadyExclusive));
        assert_eq!(event.grab(b, false), Err(MotionError::AlreadyExclusive));

        event.ungrab(a);
        assert_eq!(event.grab_exclusive(), None);
        assert!(event.grab_list().is_empty());

        // unknown claimant is a no-op
        event.ungrab(b);
        event.grab(b, false).unwrap();
        event.grab(b, false).unwrap();
        assert_eq!(event.grab_list(), &[b, b]);
    }

    #[test]
    fn test_grab_non_touch() {
        let uids = UidSource::new();
        let mut arena = ClaimantArena::new();
        let a = arena.register("a");
        let mut hover = MotionEvent::new(&uids, EventKind::Hover, "pen", "0", RawArgs::new());
        assert_eq!(hover.grab(a, false), Err(MotionError::NotGrabbable));
        assert!(hover.grab_list().is_empty());
    }

    #[test]
    fn test_release_claimant() {
        let uids = UidSource::new();
        let mut arena = ClaimantArena::new();
        let a = arena.register("a");
        let mut event = touch_at(&uids, 0.5, 0.5);
        event.grab(a, false).unwrap();
        event.grab(a, false).unwrap();
        event.set_grab_current(Some(a));

        event.release_claimant(a);
        assert!(!event.is_grabbed_by(a));
        assert_eq!(event.grab_current(), None);
    }

    #[test]
    fn test_distance() {
        let uids = UidSource::new();
        let mut a = touch_at(&uids, 0.0, 0.0);
        let mut b = touch_at(&uids, 0.03, 0.04);
        a.scale_for_screen(100.0, 100.0, None, Rotation::Deg0);
        b.scale_for_screen(100.0, 100.0, None, Rotation::Deg0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_copy_keeps_distinct_uid() {
        let uids = UidSource::new();
        let source = touch_at(&uids, 0.2, 0.8);
        let mut twin = touch_at(&uids, 0.0, 0.0);
        source.copy_to(&mut twin);

        assert_eq!(twin.spos(), source.spos());
        assert_ne!(twin.uid(), source.uid());
        assert_eq!(uids.last(), twin.uid().get());
    }

    #[test]
    fn test_mouse_scrolling() {
        let uids = UidSource::new();
        let wheel = MotionEvent::new(
            &uids,
            EventKind::Mouse,
            "mouse",
            "mouse1",
            RawArgs::at(0.5, 0.5).with("button", "scrolldown"),
        );
        assert!(wheel.is_mouse_scrolling());

        let click = MotionEvent::new(
            &uids,
            EventKind::Mouse,
            "mouse",
            "mouse2",
            RawArgs::at(0.5, 0.5).with("button", "left"),
        );
        assert!(!click.is_mouse_scrolling());

        // a button without the capability does not count
        let touch = MotionEvent::new(
            &uids,
            EventKind::Touch,
            "mtdev",
            "0",
            RawArgs::at(0.5, 0.5).with("button", "scrollup"),
        );
        assert!(!touch.is_mouse_scrolling());
    }

    #[test]
    fn test_time_end() {
        let uids = UidSource::new();
        let mut event = touch_at(&uids, 0.5, 0.5);
        event.update_time_end();
        assert!(!event.is_live());
        assert!(event.time_end().unwrap() >= event.time_start());
    }

    #[test]
    fn test_display() {
        let uids = UidSource::new();
        let mut event = touch_at(&uids, 0.5, 0.25);
        event.scale_for_screen(200.0, 100.0, None, Rotation::Deg0);
        assert_eq!(
            event.to_string(),
            "<TouchEvent spos=(0.5, 0.25) pos=(100.0, 25.0)>"
        );
    }
}
