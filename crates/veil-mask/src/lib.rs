//! Per-pixel reveal mask generation, LOD selection, and caching.
//!
//! The [`MaskGenerator`] samples an entity's bounds against the active
//! emitter set and produces a graded single-channel coverage bitmap:
//! reveal is binary at entity granularity (the predicate gates every
//! pixel), while coverage strength only softens the mask's edges.
//! Resolution is chosen by viewer distance ([`lod`]), results are held
//! in a FIFO-bounded [`MaskCache`], and the [`RegenPolicy`] throttles
//! how often regeneration actually runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod cache;
pub mod config;
pub mod generator;
pub mod key;
pub mod lod;
pub mod policy;

pub use bitmap::MaskBitmap;
pub use cache::MaskCache;
pub use config::{MaskConfig, MaskConfigError};
pub use generator::MaskGenerator;
pub use key::MaskKey;
pub use policy::RegenPolicy;
