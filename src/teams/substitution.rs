use super::types::{Participant, SubstitutionScenario, Team};

/// Builds one "if this team loses" swap projection per (outside player, team)
/// pair.
///
/// Each scenario picks the team member whose replacement by the outside player
/// changes the team's skill sum the least; on ties the earliest member wins.
/// Scenarios are independent of each other and the real rosters are never
/// modified. An empty outside group produces no scenarios.
pub fn plan_substitutions(teams: &[Team], outside: &[Participant]) -> Vec<SubstitutionScenario> {
    let mut scenarios = Vec::new();

    for outsider in outside {
        for (team_index, team) in teams.iter().enumerate() {
            if team.members.is_empty() {
                continue;
            }

            let current_sum = team.skill_sum();
            let mut best_index = 0;
            let mut best_diff = u32::MAX;

            for (member_index, member) in team.members.iter().enumerate() {
                let new_sum = current_sum - member.level.weight() + outsider.level.weight();
                let diff = new_sum.abs_diff(current_sum);
                if diff < best_diff {
                    best_diff = diff;
                    best_index = member_index;
                }
            }

            let mut resulting = team.members.clone();
            let outgoing = std::mem::replace(&mut resulting[best_index], outsider.clone());

            scenarios.push(SubstitutionScenario {
                team_index,
                incoming: outsider.clone(),
                outgoing,
                resulting_members: resulting,
            });
        }
    }

    scenarios
}
