use crate::random::shuffle;
use cogex_core::{Direction, InkColor, Side, TrialSpec, Variant};
use rand::Rng;

/// Fixed response labels of a variant, in display order
pub fn variant_options(variant: Variant) -> Vec<&'static str> {
    match variant {
        Variant::Classic | Variant::Emotional | Variant::Switching => {
            InkColor::ALL.iter().map(InkColor::name).collect()
        }
        Variant::Numerical => Side::ALL.iter().map(Side::name).collect(),
        Variant::Spatial => Direction::ALL.iter().map(Direction::name).collect(),
    }
}

/// Response labels enabled for one trial.
///
/// Switching rebuilds its options per trial in a fresh random order; the
/// other variants reuse their fixed set.
pub fn trial_options<R: Rng + ?Sized>(trial: &TrialSpec, rng: &mut R) -> Vec<&'static str> {
    let mut options = variant_options(trial.variant);
    if trial.variant == Variant::Switching {
        shuffle(&mut options, rng);
    }
    options
}
