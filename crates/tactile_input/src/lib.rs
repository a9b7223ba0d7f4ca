//! Tactile Input
//!
//! Motion events for touch, mouse, marker and hover input:
//!
//! - **Coordinate tracking**: normalized and screen positions with origin,
//!   previous and delta per space, plus rotation-aware projection
//! - **Grab protocol**: claimants keep receiving an event they grabbed, with
//!   generational handles so torn-down claimants never dangle
//! - **Snapshot stack**: push/pop of attribute values around dispatch into
//!   nested coordinate frames
//! - **Post-processing**: double tap detection driven by `input.toml`
//!
//! # Example
//!
//! ```rust
//! use tactile_core::UidSource;
//! use tactile_input::{EventKind, MotionEvent, RawArgs, Rotation};
//!
//! let uids = UidSource::new();
//! let mut touch = MotionEvent::new(&uids, EventKind::Touch, "mtdev", "0", RawArgs::at(0.5, 0.25));
//! touch.scale_for_screen(200.0, 100.0, None, Rotation::Deg90);
//! assert_eq!(touch.pos(), (25.0, 100.0));
//! ```

pub mod args;
pub mod attr;
pub mod config;
pub mod double_tap;
pub mod error;
pub mod grab;
pub mod kind;
pub mod motion;
pub mod profile;
pub mod snapshot;
pub mod track;
pub mod user_data;

pub use args::RawArgs;
pub use attr::{Attr, AttrValue, DEFAULT_PUSH_ATTRS};
pub use config::{InputConfig, PostprocConfig, ScreenConfig};
pub use double_tap::{DoubleTapDetector, MotionPhase};
pub use error::{ConfigError, MotionError, Result};
pub use grab::{Claimant, ClaimantArena, ClaimantId};
pub use kind::{EventKind, BASE_ATTRIBUTES};
pub use motion::{MotionEvent, Rotation};
pub use profile::{Button, Capability, Profile};
pub use snapshot::Pushed;
pub use track::Track;
pub use user_data::UserData;
