use std::cmp::Reverse;
use tracing::debug;

use super::types::{Level, Participant, PlanError, Team};

/// Partitions players into `num_teams` teams of roughly equal total skill,
/// each holding at most `capacity` players.
///
/// Two phases: a greedy pass that sorts players by weight descending and drops
/// each one onto the non-full team with the lowest running skill sum (first
/// team on ties), then a swap refinement pass that trades players between team
/// pairs while a trade can strictly shrink that pair's skill-sum gap.
/// Refinement repeats full scans until a complete pass makes no swap, so the
/// result is a local optimum, not necessarily a global one.
pub fn create_balanced_teams(
    players: &[Participant],
    num_teams: usize,
    capacity: usize,
) -> Result<Vec<Team>, PlanError> {
    if num_teams == 0 {
        return Err(PlanError::InvalidTeamCount);
    }

    // Sort by weight descending; the sort is stable, so players of equal
    // weight keep their shuffled order
    let mut ordered: Vec<Participant> = players.to_vec();
    ordered.sort_by_key(|p| Reverse(p.level.weight()));

    let mut teams: Vec<Vec<Participant>> = vec![Vec::new(); num_teams];
    let mut sums = vec![0u32; num_teams];
    let mut advanced = vec![0usize; num_teams];
    let mut beginners = vec![0usize; num_teams];

    // Greedy pass: always fill the currently weakest team that still has room
    for player in ordered {
        let target = sums
            .iter()
            .enumerate()
            .filter(|(index, _)| teams[*index].len() < capacity)
            .min_by_key(|(_, sum)| **sum)
            .map(|(index, _)| index)
            .unwrap_or(0);
        sums[target] += player.level.weight();
        bump(&mut advanced, &mut beginners, target, player.level, true);
        teams[target].push(player);
    }

    // Swap refinement: a candidate pair must move a level-count imbalance in
    // the right direction (more Advanced on the stronger side, or fewer
    // Beginners), and the swap is only taken if it strictly narrows the
    // pair's skill-sum gap. Swaps apply immediately.
    let mut passes = 0u32;
    let mut swaps = 0u32;
    loop {
        let mut improved = false;
        passes += 1;

        for i in 0..num_teams {
            for j in (i + 1)..num_teams {
                for a in 0..teams[i].len() {
                    for b in 0..teams[j].len() {
                        let w1 = teams[i][a].level.weight();
                        let w2 = teams[j][b].level.weight();

                        let eligible = (advanced[i] > advanced[j] && w1 > w2)
                            || (beginners[i] < beginners[j] && w1 < w2);
                        if !eligible {
                            continue;
                        }

                        let new_sum_i = sums[i] - w1 + w2;
                        let new_sum_j = sums[j] - w2 + w1;
                        if new_sum_i.abs_diff(new_sum_j) < sums[i].abs_diff(sums[j]) {
                            let player_i = teams[i][a].clone();
                            let player_j = teams[j][b].clone();

                            bump(&mut advanced, &mut beginners, i, player_i.level, false);
                            bump(&mut advanced, &mut beginners, i, player_j.level, true);
                            bump(&mut advanced, &mut beginners, j, player_j.level, false);
                            bump(&mut advanced, &mut beginners, j, player_i.level, true);

                            teams[i][a] = player_j;
                            teams[j][b] = player_i;
                            sums[i] = new_sum_i;
                            sums[j] = new_sum_j;

                            swaps += 1;
                            improved = true;
                        }
                    }
                }
            }
        }

        if !improved {
            break;
        }
    }

    debug!(passes, swaps, "balance refinement settled");

    Ok(teams.into_iter().map(|members| Team { members }).collect())
}

/// Adjusts the running Advanced/Beginner counters for one team.
/// Intermediate players never enter the swap gate, so they are not tracked.
fn bump(advanced: &mut [usize], beginners: &mut [usize], team: usize, level: Level, add: bool) {
    let counter = match level {
        Level::Advanced => &mut advanced[team],
        Level::Beginner => &mut beginners[team],
        Level::Intermediate => return,
    };
    if add {
        *counter += 1;
    } else {
        *counter -= 1;
    }
}
