use super::types::{CedeScenario, Participant, Team};

/// How many players a losing team gives up for a given outside-group size.
/// Five waiting players only need one more; four need two. Other sizes are
/// handled by the substitution planner and cede nothing.
fn cede_count(num_outside: usize) -> usize {
    match num_outside {
        5 => 1,
        4 => 2,
        _ => 0,
    }
}

/// Builds one "if this team loses" merge projection per team, for outside
/// groups of 4 or 5 players.
///
/// The losing team cedes its lowest-weight players (earliest positions win
/// weight ties) and the outside group absorbs them into a full new team. A
/// five-player outside group absorbs exactly one ceded player. Rosters are
/// projections only; no team is modified. Outside groups of any other size
/// produce no scenarios.
pub fn plan_cede(teams: &[Team], outside: &[Participant]) -> Vec<CedeScenario> {
    let num_to_cede = cede_count(outside.len());
    if num_to_cede == 0 {
        return Vec::new();
    }

    let mut scenarios = Vec::new();

    for (losing_team_index, team) in teams.iter().enumerate() {
        // Ascending by weight; the sort is stable so original positions break ties
        let mut indices: Vec<usize> = (0..team.members.len()).collect();
        indices.sort_by_key(|&i| team.members[i].level.weight());
        let cede_indices: Vec<usize> = indices.into_iter().take(num_to_cede).collect();

        let ceded: Vec<Participant> = cede_indices.iter().map(|&i| team.members[i].clone()).collect();
        let remaining: Vec<Participant> = team
            .members
            .iter()
            .enumerate()
            .filter(|(i, _)| !cede_indices.contains(i))
            .map(|(_, p)| p.clone())
            .collect();

        let mut new_team: Vec<Participant> = outside.to_vec();
        if outside.len() == 5 {
            // Exactly one ceded player joins, even if the team could spare more
            new_team.push(ceded[0].clone());
        } else {
            new_team.extend(ceded.iter().cloned());
        }

        scenarios.push(CedeScenario {
            losing_team_index,
            ceded,
            new_team,
            remaining,
        });
    }

    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::types::Level;

    fn p(name: &str, level: Level) -> Participant {
        Participant { name: name.to_string(), level }
    }

    fn full_team() -> Team {
        Team {
            members: vec![
                p("Ana", Level::Advanced),
                p("Bia", Level::Beginner),
                p("Caio", Level::Intermediate),
                p("Duda", Level::Beginner),
                p("Edu", Level::Advanced),
                p("Fabi", Level::Intermediate),
            ],
        }
    }

    fn outsiders(n: usize) -> Vec<Participant> {
        (0..n).map(|i| p(&format!("out{}", i + 1), Level::Intermediate)).collect()
    }

    #[test]
    fn five_outside_players_absorb_exactly_one() {
        let teams = vec![full_team()];
        let scenarios = plan_cede(&teams, &outsiders(5));

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].ceded.len(), 1);
        assert_eq!(scenarios[0].new_team.len(), 6);
        assert_eq!(scenarios[0].remaining.len(), 5);
    }

    #[test]
    fn four_outside_players_absorb_two() {
        let teams = vec![full_team()];
        let scenarios = plan_cede(&teams, &outsiders(4));

        assert_eq!(scenarios[0].ceded.len(), 2);
        assert_eq!(scenarios[0].new_team.len(), 6);
        assert_eq!(scenarios[0].remaining.len(), 4);
    }

    #[test]
    fn lowest_weight_members_are_ceded_with_stable_ties() {
        let teams = vec![full_team()];
        let scenarios = plan_cede(&teams, &outsiders(4));

        // Both beginners go, in their original order
        let names: Vec<&str> = scenarios[0].ceded.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bia", "Duda"]);
    }

    #[test]
    fn remaining_roster_keeps_original_order() {
        let teams = vec![full_team()];
        let scenarios = plan_cede(&teams, &outsiders(4));

        let names: Vec<&str> = scenarios[0].remaining.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Caio", "Edu", "Fabi"]);
    }

    #[test]
    fn one_scenario_per_team() {
        let teams = vec![full_team(), full_team(), full_team()];
        let scenarios = plan_cede(&teams, &outsiders(5));
        assert_eq!(scenarios.len(), 3);
        for (index, scenario) in scenarios.iter().enumerate() {
            assert_eq!(scenario.losing_team_index, index);
        }
    }

    #[test]
    fn small_or_empty_outside_groups_produce_nothing() {
        let teams = vec![full_team()];
        assert!(plan_cede(&teams, &[]).is_empty());
        assert!(plan_cede(&teams, &outsiders(3)).is_empty());
    }
}
