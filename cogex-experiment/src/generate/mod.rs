pub mod classic;
pub mod emotional;
pub mod numerical;
pub mod spatial;
pub mod switching;

use crate::config::ExperimentConfig;
use cogex_core::{StroopError, TrialSpec, Variant};
use rand::Rng;
use tracing::debug;

/// Generates `n` trials for `variant`.
///
/// Every variant except switching is condition-balanced and shuffled. `n`
/// below the variant's condition count yields a degenerate sequence, and
/// `n == 0` yields an empty one; the runner refuses to start on the latter.
pub fn generate<R: Rng + ?Sized>(
    variant: Variant,
    n: usize,
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<TrialSpec>, StroopError> {
    let trials = match variant {
        Variant::Classic => classic::generate(n, config, rng)?,
        Variant::Emotional => emotional::generate(n, config, rng)?,
        Variant::Numerical => numerical::generate(n, config, rng)?,
        Variant::Spatial => spatial::generate(n, config, rng)?,
        Variant::Switching => switching::generate(n, config, rng)?,
    };
    if variant.has_balanced_conditions() && n < variant.conditions().len() {
        debug!(
            "{} trials requested for {} conditions of {}; sequence is unbalanced",
            n,
            variant.conditions().len(),
            variant
        );
    }
    debug!("Generated {} {} trials", trials.len(), variant);
    Ok(trials)
}
