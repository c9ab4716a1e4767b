//! Veil: a reveal-field pipeline for 2D puzzle games.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Veil sub-crates. For most users, adding `veil` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use veil::prelude::*;
//!
//! const RED: InfluenceMask = InfluenceMask(1 << 0);
//!
//! // A trivial surface that stores the alpha it is handed.
//! struct Sprite {
//!     alpha: f32,
//! }
//! impl VisualSurface for Sprite {
//!     fn base_alpha(&self) -> f32 {
//!         1.0
//!     }
//!     fn set_alpha(&mut self, alpha: f32) {
//!         self.alpha = alpha;
//!     }
//! }
//!
//! let mut coordinator = FieldCoordinator::new(CoordinatorConfig::default()).unwrap();
//! coordinator.start();
//!
//! // A red lantern with a 5-unit radius, and a door it can reveal.
//! coordinator.register_emitter(Emitter::new(Vec2::new(5.0, 1.0), 5.0, RED));
//! let door = coordinator.register_entity(
//!     RevealEntity::new(Vec2::new(8.0, 4.0), RevealPredicate::all_of(RED))
//!         .with_surface(Box::new(Sprite { alpha: 0.0 })),
//! );
//!
//! // The door is in range, so registration starts its reveal; ticking
//! // drives the fade to completion.
//! for _ in 0..10 {
//!     coordinator.tick(0.1, Vec2::ZERO);
//! }
//! assert_eq!(coordinator.entity(door).unwrap().state(), RevealState::Revealed);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `veil-core` | IDs, geometry, influence masks, predicates, surface traits |
//! | [`field`] | `veil-field` | Emitters and the aggregated effect field |
//! | [`reveal`] | `veil-reveal` | Reveal entities, the transition state machine, easing |
//! | [`mask`] | `veil-mask` | Per-pixel mask generation, LOD, and caching |
//! | [`engine`] | `veil-engine` | The field coordinator and its tick loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// IDs, geometry, influence masks, predicates, and the surface traits
/// (`veil-core`).
pub use veil_core as core;

/// Emitters and the aggregated effect field (`veil-field`).
pub use veil_field as field;

/// Reveal entities and the visibility transition (`veil-reveal`).
pub use veil_reveal as reveal;

/// Per-pixel mask generation, LOD selection, and caching (`veil-mask`).
pub use veil_mask as mask;

/// The field coordinator and its tick loop (`veil-engine`).
pub use veil_engine as engine;

/// Common imports for typical Veil usage.
///
/// ```rust
/// use veil::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use veil_core::{
        Bounds, CollisionToggle, EmitterId, EntityId, InfluenceMask, RevealPredicate, TickId,
        Vec2, VisualSurface,
    };

    // Field
    pub use veil_field::{EffectField, Emitter};

    // Reveal
    pub use veil_reveal::{RenderingMode, RevealEntity, RevealState};

    // Mask
    pub use veil_mask::{MaskBitmap, MaskConfig};

    // Engine
    pub use veil_engine::{
        ConfigError, CoordinatorConfig, CoordinatorMetrics, FieldCoordinator, RevealEvent,
    };
}
