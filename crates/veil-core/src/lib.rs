//! Core types and traits for the Veil reveal-field engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Veil workspace:
//! influence bitmasks, reveal predicates, strongly-typed IDs, 2D
//! geometry, and the capability traits entities are registered with.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geom;
pub mod id;
pub mod influence;
pub mod predicate;
pub mod traits;

pub use geom::{Bounds, Vec2};
pub use id::{EmitterId, EntityId, TickId};
pub use influence::InfluenceMask;
pub use predicate::RevealPredicate;
pub use traits::{CollisionToggle, VisualSurface};
