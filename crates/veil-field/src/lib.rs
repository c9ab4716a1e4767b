//! Filter emitters and the aggregated effect field.
//!
//! An [`Emitter`] is a moving, typed, radius-bounded source of influence.
//! The [`EffectField`] discretizes 2D space into cells and holds, per
//! cell, the bitwise OR of every active emitter whose circular footprint
//! reaches that cell. The field is rebuilt wholesale on any emitter-set
//! or position change — OR aggregation is not invertible by subtraction,
//! so incremental removal would corrupt overlapping regions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod emitter;
pub mod field;

pub use emitter::Emitter;
pub use field::{CellCoord, EffectField};
