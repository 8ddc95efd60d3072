//! Rack generation
//!
//! Two policies: hand-picked presets, or random letters with a vowel floor.
//! Random racks are only likely, not guaranteed, to allow a dictionary word.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::domain::presets::PresetPool;
use crate::domain::value_objects::Rack;

pub const VOWELS: &[char] = &['А', 'Е', 'И', 'О', 'У', 'Ы', 'Э', 'Ю', 'Я'];
pub const CONSONANTS: &[char] = &[
    'Б', 'В', 'Г', 'Д', 'Ж', 'З', 'К', 'Л', 'М', 'Н', 'П', 'Р', 'С', 'Т', 'Ф', 'Х', 'Ц', 'Ч', 'Ш',
    'Щ',
];

/// Chance that an unconstrained slot receives a consonant.
const CONSONANT_PROBABILITY: f64 = 2.0 / 3.0;

pub const DEFAULT_RACK_LENGTH: usize = 6;
pub const DEFAULT_MIN_VOWELS: usize = 2;

/// How racks are produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RackPolicy {
    #[default]
    Preset,
    Random { length: usize, min_vowels: usize },
}

impl RackPolicy {
    pub fn random() -> Self {
        RackPolicy::Random {
            length: DEFAULT_RACK_LENGTH,
            min_vowels: DEFAULT_MIN_VOWELS,
        }
    }
}

/// Random rack of `length` letters holding at least `min(min_vowels, length)` vowels.
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R, length: usize, min_vowels: usize) -> Rack {
    let vowel_floor = min_vowels.min(length);
    let mut letters = Vec::with_capacity(length);
    for _ in 0..vowel_floor {
        letters.extend(VOWELS.choose(rng).copied());
    }
    while letters.len() < length {
        let pool = if rng.random_bool(CONSONANT_PROBABILITY) {
            CONSONANTS
        } else {
            VOWELS
        };
        letters.extend(pool.choose(rng).copied());
    }
    letters.shuffle(rng);
    Rack::new(letters)
}

/// Deals racks according to a policy.
///
/// Holds its own RNG so tests can seed it; the lock is held only while
/// drawing.
pub struct RackGenerator {
    policy: RackPolicy,
    presets: Arc<PresetPool>,
    redraw_attempts: u32,
    rng: Mutex<StdRng>,
}

impl RackGenerator {
    pub fn new(policy: RackPolicy, presets: Arc<PresetPool>, redraw_attempts: u32) -> Self {
        Self::with_rng(policy, presets, redraw_attempts, StdRng::from_os_rng())
    }

    pub fn seeded(
        policy: RackPolicy,
        presets: Arc<PresetPool>,
        redraw_attempts: u32,
        seed: u64,
    ) -> Self {
        Self::with_rng(policy, presets, redraw_attempts, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        policy: RackPolicy,
        presets: Arc<PresetPool>,
        redraw_attempts: u32,
        rng: StdRng,
    ) -> Self {
        if policy == RackPolicy::Preset && presets.is_empty() {
            tracing::warn!("Preset policy with an empty pool; dealing random racks instead");
        }
        Self {
            policy,
            presets,
            redraw_attempts: redraw_attempts.max(1),
            rng: Mutex::new(rng),
        }
    }

    pub fn policy(&self) -> &RackPolicy {
        &self.policy
    }

    /// Rack for a new round.
    pub fn draw(&self) -> Rack {
        self.deal(None)
    }

    /// Rack for a swap. Avoids handing back the same letters when the policy
    /// allows it.
    pub fn redraw(&self, previous: &Rack) -> Rack {
        self.deal(Some(previous))
    }

    fn deal(&self, previous: Option<&Rack>) -> Rack {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let (length, min_vowels) = match &self.policy {
            RackPolicy::Preset => {
                if let Some(preset) = self.presets.choose(&mut *rng, previous) {
                    return preset.rack.clone();
                }
                (DEFAULT_RACK_LENGTH, DEFAULT_MIN_VOWELS)
            }
            RackPolicy::Random { length, min_vowels } => (*length, *min_vowels),
        };

        let mut rack = random_rack(&mut *rng, length, min_vowels);
        if let Some(previous) = previous {
            // Bounded: the last draw is accepted even if it repeats.
            let mut attempts = 1;
            while rack.same_letters(previous) && attempts < self.redraw_attempts {
                rack = random_rack(&mut *rng, length, min_vowels);
                attempts += 1;
            }
        }
        rack
    }
}

impl std::fmt::Debug for RackGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RackGenerator")
            .field("policy", &self.policy)
            .field("presets", &self.presets.presets().len())
            .field("redraw_attempts", &self.redraw_attempts)
            .finish()
    }
}
