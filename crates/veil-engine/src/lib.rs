//! Field coordinator orchestrating the Veil reveal pipeline.
//!
//! Provides the top-level [`FieldCoordinator`] that owns the effect
//! field, the emitter and entity registries, and the mask generator,
//! and drives them from an explicit `tick(dt, viewer)` entry point
//! invoked by the host loop. One coordinator per active level; it is
//! constructed explicitly and passed by ownership — there is no global
//! instance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coordinator;
pub mod event;
pub mod metrics;

pub use config::{ConfigError, CoordinatorConfig};
pub use coordinator::FieldCoordinator;
pub use event::RevealEvent;
pub use metrics::CoordinatorMetrics;
