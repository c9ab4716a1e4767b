//! Reveal entity state machine and alpha easing.
//!
//! A [`RevealEntity`] owns a continuous-valued visibility transition
//! (hidden → revealing → revealed → hiding → hidden). The stored
//! progress converges linearly at a fixed rate; an easing curve shapes
//! only the rendered alpha. Collision toggles fire only at transition
//! completion so intermediate-alpha entities never interact.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod easing;
pub mod entity;

pub use easing::ease;
pub use entity::{RenderingMode, RevealEntity, RevealState};
