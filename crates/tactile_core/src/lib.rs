//! Tactile Core
//!
//! Foundational primitives shared by the Tactile input crates:
//!
//! - **Geometry**: points in two and three dimensions and 2D affine transforms
//! - **Planar transforms**: the seam used to move screen positions between
//!   nested coordinate frames
//! - **Unique ids**: a shared, atomically incremented id source injected into
//!   event construction
//!
//! # Example
//!
//! ```rust
//! use tactile_core::geometry::{Affine2D, Point};
//! use tactile_core::PlanarTransform;
//!
//! let to_child = Affine2D::translation(-10.0, -20.0);
//! assert_eq!(to_child.map(15.0, 25.0), (5.0, 5.0));
//! assert_eq!(to_child.transform_point(Point::new(10.0, 20.0)), Point::ZERO);
//! ```

pub mod geometry;
pub mod uid;

pub use geometry::{Affine2D, PlanarTransform, Point, Point3};
pub use uid::{Uid, UidSource};
