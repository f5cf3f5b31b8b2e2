//! Uniform access to all ten generators for the presentation layer.
//!
//! The catalog owns the random source and exactly one live instance per
//! kind.  `generate` replaces the live instance wholesale; nothing is kept
//! from earlier problems.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::trainer::{
    error::TrainerError,
    generator::generate_with,
    models::{ProblemInstance, ProblemKind, TrainerConfig, Verdict},
};

/// Live state of one generator.
#[derive(Debug, Clone, Default)]
pub struct GeneratorSlot {
    live: Option<ProblemInstance>,
    answered: bool,
}

impl GeneratorSlot {
    pub fn current(&self) -> Option<&ProblemInstance> {
        self.live.as_ref()
    }

    /// Set once an answer has been checked; cleared by the next `generate`.
    pub fn is_answered(&self) -> bool {
        self.answered
    }
}

pub struct ProblemCatalog<R: Rng = StdRng> {
    rng: R,
    config: TrainerConfig,
    slots: [GeneratorSlot; 10],
}

impl ProblemCatalog<StdRng> {
    /// Catalog seeded from `config.rng_seed`, or from entropy when unset.
    pub fn new(config: TrainerConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config)
    }
}

impl<R: Rng> ProblemCatalog<R> {
    /// Catalog driven by an injected random source (`config.rng_seed` is ignored).
    pub fn with_rng(rng: R, config: TrainerConfig) -> Self {
        ProblemCatalog {
            rng,
            config,
            slots: Default::default(),
        }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// The ten generators in catalog order.
    pub fn kinds(&self) -> &'static [ProblemKind] {
        &ProblemKind::ALL
    }

    pub fn slot(&self, kind: ProblemKind) -> &GeneratorSlot {
        &self.slots[slot_index(kind)]
    }

    pub fn current(&self, kind: ProblemKind) -> Option<&ProblemInstance> {
        self.slot(kind).current()
    }

    /// Replace the live instance of `kind` with a fresh one.  On failure the
    /// previous instance is left untouched.
    pub fn generate(&mut self, kind: ProblemKind) -> Result<&ProblemInstance, TrainerError> {
        let instance = generate_with(&mut self.rng, kind, self.config.max_attempts)?;
        let slot = &mut self.slots[slot_index(kind)];
        slot.answered = false;
        Ok(slot.live.insert(instance))
    }

    /// Check raw text against the live instance of `kind`.
    pub fn check(&mut self, kind: ProblemKind, raw: &str) -> Result<Verdict, TrainerError> {
        let slot = &mut self.slots[slot_index(kind)];
        let instance = slot.live.as_ref().ok_or(TrainerError::NoActiveProblem(kind))?;
        let verdict = instance.check(raw);
        slot.answered = true;
        Ok(verdict)
    }

    /// Two-box fraction entry for the live instance of `kind`.
    pub fn check_parts(
        &mut self,
        kind: ProblemKind,
        numer: &str,
        denom: &str,
    ) -> Result<Verdict, TrainerError> {
        let slot = &mut self.slots[slot_index(kind)];
        let instance = slot.live.as_ref().ok_or(TrainerError::NoActiveProblem(kind))?;
        let verdict = instance.check_parts(numer, denom);
        slot.answered = true;
        Ok(verdict)
    }
}

fn slot_index(kind: ProblemKind) -> usize {
    usize::from(kind.number()) - 1
}
