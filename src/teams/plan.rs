use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use super::balance::create_balanced_teams;
use super::bracket::standard_bracket;
use super::cede::plan_cede;
use super::outside::{resolve_group_layout, RotationStrategy};
use super::substitution::plan_substitutions;
use super::types::{GamePlan, Participant, Partition, PlanError, RotationPlan};

/// Knobs for one generation run
#[derive(Debug, Clone, Copy)]
pub struct GameOptions {
    /// Players per team
    pub capacity: usize,
    /// Selected-player total that switches the run into tournament mode;
    /// None disables the bracket entirely
    pub bracket_threshold: Option<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            capacity: 6,
            bracket_threshold: Some(24),
        }
    }
}

/// Runs one full generation: shuffle, balance, rotation planning.
///
/// The rng is the only source of non-determinism; the same selection with the
/// same rng state always yields the same plan, which is what makes seeded
/// runs reproducible.
pub fn generate_game_plan<R: Rng>(
    selected: &[Participant],
    options: &GameOptions,
    rng: &mut R,
) -> Result<GamePlan, PlanError> {
    if selected.len() < options.capacity {
        return Err(PlanError::NotEnoughPlayers {
            selected: selected.len(),
            capacity: options.capacity,
        });
    }

    // Shuffle a working copy so the greedy balancer's tie-breaks are not
    // biased by roster order; the selection itself is never reordered
    let mut pool: Vec<Participant> = selected.to_vec();
    pool.shuffle(rng);

    let layout = resolve_group_layout(pool.len(), options.capacity, options.bracket_threshold);

    if layout.bracket_mode {
        let teams = create_balanced_teams(&pool, layout.num_teams, options.capacity)?;
        info!(teams = teams.len(), "generated tournament plan");
        return Ok(GamePlan {
            partition: Partition { teams, outside: Vec::new() },
            rotation: RotationPlan::None,
            bracket: Some(standard_bracket()),
        });
    }

    // The outside group is the tail of the shuffled pool
    let outside = pool.split_off(pool.len() - layout.num_outside);
    let teams = create_balanced_teams(&pool, layout.num_teams, options.capacity)?;

    let rotation = match RotationStrategy::for_outside_count(outside.len()) {
        RotationStrategy::None => RotationPlan::None,
        RotationStrategy::Substitution => RotationPlan::Substitutions(plan_substitutions(&teams, &outside)),
        RotationStrategy::Cede => RotationPlan::Cede(plan_cede(&teams, &outside)),
    };

    info!(teams = teams.len(), outside = outside.len(), "generated game plan");

    Ok(GamePlan {
        partition: Partition { teams, outside },
        rotation,
        bracket: None,
    })
}
