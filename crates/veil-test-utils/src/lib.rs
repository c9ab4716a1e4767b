//! Test utilities and recording mocks for Veil development.
//!
//! Provides recording implementations of the capability traits
//! ([`VisualSurface`], [`CollisionToggle`]) whose observed side effects
//! stay inspectable through shared probes after the mock is boxed and
//! handed to an entity.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex};

use veil_core::{CollisionToggle, VisualSurface};

/// A [`VisualSurface`] that records every alpha applied to it.
///
/// Create with [`RecordingSurface::new`], grab an [`AlphaProbe`] via
/// [`probe`](RecordingSurface::probe) before boxing, then inspect the
/// applied alpha history from the test.
pub struct RecordingSurface {
    base_alpha: f32,
    applied: Arc<Mutex<Vec<f32>>>,
}

impl RecordingSurface {
    pub fn new(base_alpha: f32) -> Self {
        Self {
            base_alpha,
            applied: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A shared handle to the recorded alpha history.
    pub fn probe(&self) -> AlphaProbe {
        AlphaProbe(Arc::clone(&self.applied))
    }
}

impl VisualSurface for RecordingSurface {
    fn base_alpha(&self) -> f32 {
        self.base_alpha
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.applied.lock().unwrap().push(alpha);
    }
}

/// Read side of a [`RecordingSurface`].
#[derive(Clone)]
pub struct AlphaProbe(Arc<Mutex<Vec<f32>>>);

impl AlphaProbe {
    /// The most recently applied alpha, if any.
    pub fn last(&self) -> Option<f32> {
        self.0.lock().unwrap().last().copied()
    }

    /// Every alpha applied so far, oldest first.
    pub fn history(&self) -> Vec<f32> {
        self.0.lock().unwrap().clone()
    }
}

/// A [`CollisionToggle`] that records its enable state and toggle count.
pub struct RecordingCollider {
    state: Arc<Mutex<ColliderState>>,
}

#[derive(Default)]
struct ColliderState {
    enabled: Option<bool>,
    toggle_count: u32,
}

impl RecordingCollider {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ColliderState::default())),
        }
    }

    /// A shared handle to the recorded collision state.
    pub fn probe(&self) -> CollisionProbe {
        CollisionProbe(Arc::clone(&self.state))
    }
}

impl Default for RecordingCollider {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionToggle for RecordingCollider {
    fn set_enabled(&mut self, enabled: bool) {
        let mut state = self.state.lock().unwrap();
        state.enabled = Some(enabled);
        state.toggle_count += 1;
    }
}

/// Read side of a [`RecordingCollider`].
#[derive(Clone)]
pub struct CollisionProbe(Arc<Mutex<ColliderState>>);

impl CollisionProbe {
    /// The last enable state set, or `None` if never toggled.
    pub fn enabled(&self) -> Option<bool> {
        self.0.lock().unwrap().enabled
    }

    /// How many times `set_enabled` has been called.
    pub fn toggle_count(&self) -> u32 {
        self.0.lock().unwrap().toggle_count
    }
}
