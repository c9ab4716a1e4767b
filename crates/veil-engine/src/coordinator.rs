//! The [`FieldCoordinator`] tick loop and registries.

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};
use indexmap::IndexMap;
use veil_core::{EmitterId, EntityId, InfluenceMask, RevealPredicate, TickId, Vec2};
use veil_field::{EffectField, Emitter};
use veil_mask::{MaskBitmap, MaskGenerator, RegenPolicy};
use veil_reveal::{RenderingMode, RevealEntity};

use crate::config::{ConfigError, CoordinatorConfig};
use crate::event::RevealEvent;
use crate::metrics::CoordinatorMetrics;

/// Owns the effect field, the emitter and entity registries, and the
/// mask generator, and drives them from the host loop's `tick`.
///
/// Registration changes mark the field dirty rather than rebuilding
/// immediately, so a burst of registrations in one frame costs a single
/// rebuild: the dirty flag is flushed at the start of the next tick, and
/// eagerly whenever a query or an entity registration needs a current
/// field. Movement is picked up by a periodic scan instead; an emitter
/// moving every frame therefore rebuilds at most once per scan interval.
///
/// All registries use [`IndexMap`] so evaluation order is deterministic
/// registration order.
pub struct FieldCoordinator {
    config: CoordinatorConfig,
    field: EffectField,
    emitters: IndexMap<EmitterId, Emitter>,
    entities: IndexMap<EntityId, RevealEntity>,
    masks: MaskGenerator,
    policies: IndexMap<EntityId, RegenPolicy>,
    latest_masks: IndexMap<EntityId, Arc<MaskBitmap>>,
    subscribers: Vec<Sender<RevealEvent>>,
    scan_elapsed: f32,
    field_dirty: bool,
    running: bool,
    tick: TickId,
    metrics: CoordinatorMetrics,
}

impl FieldCoordinator {
    /// Create a stopped coordinator from a validated configuration.
    pub fn new(config: CoordinatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = EffectField::new(config.cell_size);
        let masks = MaskGenerator::new(config.mask.clone());
        Ok(Self {
            config,
            field,
            emitters: IndexMap::new(),
            entities: IndexMap::new(),
            masks,
            policies: IndexMap::new(),
            latest_masks: IndexMap::new(),
            subscribers: Vec::new(),
            scan_elapsed: 0.0,
            field_dirty: false,
            running: false,
            tick: TickId(0),
            metrics: CoordinatorMetrics::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Begin ticking. Registration is allowed while stopped; ticks are
    /// no-ops until started.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop ticking. Registries and transition progress are retained, so
    /// a later [`start`](FieldCoordinator::start) resumes cleanly.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether ticks currently advance the pipeline.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The tick counter. Zero until the first tick runs.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Cumulative metrics.
    pub fn metrics(&self) -> &CoordinatorMetrics {
        &self.metrics
    }

    // ── Event subscription ───────────────────────────────────

    /// Subscribe to reveal-changed events over an unbounded channel.
    ///
    /// Dropping the receiver unsubscribes; the dead sender is pruned on
    /// the next emission.
    pub fn subscribe(&mut self) -> Receiver<RevealEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: RevealEvent) {
        self.metrics.reveal_events += 1;
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    // ── Emitter registry ─────────────────────────────────────

    /// Register an emitter and mark the field dirty.
    ///
    /// Re-registering an already-present ID replaces the stored emitter.
    pub fn register_emitter(&mut self, emitter: Emitter) -> EmitterId {
        let id = emitter.id();
        self.emitters.insert(id, emitter);
        self.field_dirty = true;
        id
    }

    /// Remove an emitter and mark the field dirty. Unknown IDs are
    /// ignored.
    pub fn unregister_emitter(&mut self, id: EmitterId) {
        if self.emitters.shift_remove(&id).is_some() {
            self.field_dirty = true;
        }
    }

    /// Mutable access to a registered emitter, for movement, pickup, and
    /// activation changes. Movement is observed by the periodic scan;
    /// callers toggling `set_active` should expect the change to take
    /// effect at the next rebuild.
    pub fn emitter_mut(&mut self, id: EmitterId) -> Option<&mut Emitter> {
        self.emitters.get_mut(&id)
    }

    /// Shared access to a registered emitter.
    pub fn emitter(&self, id: EmitterId) -> Option<&Emitter> {
        self.emitters.get(&id)
    }

    /// Number of registered emitters, active or not.
    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// Number of registered emitters currently contributing.
    pub fn active_emitter_count(&self) -> usize {
        self.emitters.values().filter(|e| e.is_active()).count()
    }

    /// Force a field rebuild at the next flush point.
    pub fn mark_field_dirty(&mut self) {
        self.field_dirty = true;
    }

    // ── Entity registry ──────────────────────────────────────

    /// Register a revealable entity and evaluate it immediately against
    /// the current field, so an entity spawned inside coverage starts
    /// its reveal on this frame rather than flashing hidden.
    ///
    /// Entities with no attached surface cannot be rendered; they are
    /// kept in the registry but degraded to permanently hidden, with a
    /// warning logged once at registration.
    pub fn register_entity(&mut self, entity: RevealEntity) -> EntityId {
        let id = entity.id();
        if !entity.has_surfaces() {
            log::warn!("entity {id} registered without surfaces; it will stay hidden");
        }
        if entity.rendering() == RenderingMode::PreciseMask {
            self.policies.insert(
                id,
                RegenPolicy::new(
                    self.config.mask.min_interval,
                    self.config.mask.viewer_threshold,
                ),
            );
        }
        self.entities.insert(id, entity);

        self.flush_field_if_dirty();
        if let Some(flip) = self.evaluate_one(id) {
            self.emit(flip);
        }
        id
    }

    /// Remove an entity along with its regeneration policy and cached
    /// latest mask. Unknown IDs are ignored.
    pub fn unregister_entity(&mut self, id: EntityId) {
        self.entities.shift_remove(&id);
        self.policies.shift_remove(&id);
        self.latest_masks.shift_remove(&id);
    }

    /// Shared access to a registered entity.
    pub fn entity(&self, id: EntityId) -> Option<&RevealEntity> {
        self.entities.get(&id)
    }

    /// Mutable access to a registered entity, for repositioning.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut RevealEntity> {
        self.entities.get_mut(&id)
    }

    /// Number of registered entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// The most recently generated mask for a precise-mask entity, if
    /// any generation has run for it.
    pub fn mask_for(&self, id: EntityId) -> Option<Arc<MaskBitmap>> {
        self.latest_masks.get(&id).map(Arc::clone)
    }

    // ── Field queries ────────────────────────────────────────

    /// The aggregated influence at a world position, as of the most
    /// recent rebuild. Call [`refresh`](FieldCoordinator::refresh) first
    /// if pending registrations must be visible.
    pub fn effect_at(&self, position: Vec2) -> InfluenceMask {
        self.field.sample(position)
    }

    /// Whether a predicate is satisfied at a world position, as of the
    /// most recent rebuild.
    pub fn is_satisfied_at(&self, position: Vec2, predicate: RevealPredicate) -> bool {
        predicate.is_satisfied(self.field.sample(position))
    }

    /// Flush any pending dirty rebuild immediately, outside the tick.
    pub fn refresh(&mut self) {
        self.flush_field_if_dirty();
    }

    // ── Tick ─────────────────────────────────────────────────

    /// Advance the pipeline by `dt` seconds. No-op while stopped.
    ///
    /// Order within a tick: flush pending registry changes, scan for
    /// emitter movement, advance entity transitions, then regenerate
    /// masks for precise-mask entities whose policy fires. `viewer` is
    /// the camera position used for mask LOD selection.
    pub fn tick(&mut self, dt: f32, viewer: Vec2) {
        if !self.running {
            return;
        }
        self.tick = TickId(self.tick.0 + 1);

        self.flush_field_if_dirty();
        self.scan_for_movement(dt);
        self.advance_transitions(dt);
        self.regenerate_masks(dt, viewer);
    }

    fn flush_field_if_dirty(&mut self) {
        if self.field_dirty {
            self.field_dirty = false;
            self.rebuild_field();
            self.evaluate_all();
        }
    }

    fn scan_for_movement(&mut self, dt: f32) {
        self.scan_elapsed += dt;
        if self.scan_elapsed < self.config.scan_interval {
            return;
        }
        self.scan_elapsed = 0.0;
        self.metrics.movement_scans += 1;

        let threshold = self.config.movement_threshold;
        let moved = self
            .emitters
            .values()
            .any(|e| e.moved_since_baseline(threshold));
        if moved {
            self.metrics.movement_rebuilds += 1;
            for emitter in self.emitters.values_mut() {
                emitter.rebaseline();
            }
            self.rebuild_field();
            self.evaluate_all();
        }
    }

    fn advance_transitions(&mut self, dt: f32) {
        let rate = self.config.reveal_rate;
        for entity in self.entities.values_mut() {
            entity.advance(dt, rate);
        }
    }

    fn regenerate_masks(&mut self, dt: f32, viewer: Vec2) {
        if self.policies.is_empty() {
            return;
        }
        let active_count = self.active_emitter_count();

        let due: Vec<EntityId> = self
            .policies
            .iter_mut()
            .filter_map(|(&id, policy)| {
                policy.tick(dt);
                policy.should_regenerate(active_count, viewer).then_some(id)
            })
            .collect();
        self.metrics.mask_requests += self.policies.len() as u64;

        for id in due {
            let Some(entity) = self.entities.get(&id) else {
                continue;
            };
            let predicate = entity.predicate();
            let bounds = entity.mask_bounds();
            let emitters: Vec<&Emitter> = self.emitters.values().collect();
            let bitmap = self.masks.generate(id, predicate, bounds, &emitters, viewer);
            self.latest_masks.insert(id, bitmap);
            self.metrics.mask_regens += 1;
        }
    }

    fn rebuild_field(&mut self) {
        let started = Instant::now();
        self.field.rebuild(self.emitters.values());
        self.metrics.last_rebuild_us = started.elapsed().as_micros() as u64;
        self.metrics.rebuilds += 1;
    }

    /// Re-evaluate every entity's predicate against the current field,
    /// queueing an event and a forced mask regeneration for each flip.
    fn evaluate_all(&mut self) {
        let mut flips = Vec::new();
        let tick = self.tick;
        for entity in self.entities.values_mut() {
            if !entity.has_surfaces() {
                continue;
            }
            self.metrics.evaluations += 1;
            let satisfied = self.field.sample(entity.position());
            if entity.set_revealed(entity.predicate().is_satisfied(satisfied)) {
                flips.push(RevealEvent {
                    entity: entity.id(),
                    revealed: entity.is_revealed(),
                    tick,
                });
            }
        }
        for flip in flips {
            if let Some(policy) = self.policies.get_mut(&flip.entity) {
                policy.force();
            }
            self.emit(flip);
        }
    }

    /// Evaluate a single entity, returning the event if it flipped.
    fn evaluate_one(&mut self, id: EntityId) -> Option<RevealEvent> {
        let tick = self.tick;
        let entity = self.entities.get_mut(&id)?;
        if !entity.has_surfaces() {
            return None;
        }
        self.metrics.evaluations += 1;
        let sample = self.field.sample(entity.position());
        if entity.set_revealed(entity.predicate().is_satisfied(sample)) {
            let event = RevealEvent {
                entity: id,
                revealed: entity.is_revealed(),
                tick,
            };
            if let Some(policy) = self.policies.get_mut(&id) {
                policy.force();
            }
            return Some(event);
        }
        None
    }
}

impl std::fmt::Debug for FieldCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldCoordinator")
            .field("running", &self.running)
            .field("tick", &self.tick)
            .field("emitters", &self.emitters.len())
            .field("entities", &self.entities.len())
            .field("field_cells", &self.field.len())
            .finish()
    }
}
