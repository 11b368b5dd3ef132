use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

use crate::teams::types::{Bracket, CedeScenario, GamePlan, Participant, RotationPlan, SubstitutionScenario, Team};

/// Formats a player with their level tag
pub fn format_player(player: &Participant) -> String {
    format!("{} [{}]", player.name, player.level.label())
}

/// Renders a full plan as plain text; used for both stdout and the text file
pub fn render_game_plan(plan: &GamePlan) -> String {
    let mut out = String::new();

    writeln!(out, "=== Generated Teams ===").unwrap();
    for (index, team) in plan.partition.teams.iter().enumerate() {
        render_team(&mut out, index, team);
    }

    if !plan.partition.outside.is_empty() {
        writeln!(out, "\nOutside players ({}):", plan.partition.outside.len()).unwrap();
        for player in &plan.partition.outside {
            writeln!(out, "  - {}", format_player(player)).unwrap();
        }
    }

    match &plan.rotation {
        RotationPlan::None => {}
        RotationPlan::Substitutions(scenarios) => render_substitutions(&mut out, scenarios),
        RotationPlan::Cede(scenarios) => render_cede(&mut out, scenarios),
    }

    if let Some(bracket) = &plan.bracket {
        render_bracket(&mut out, bracket);
    }

    out
}

fn render_team(out: &mut String, index: usize, team: &Team) {
    writeln!(out, "\nTeam {} (skill {}):", index + 1, team.skill_sum()).unwrap();
    for player in &team.members {
        writeln!(out, "  - {}", format_player(player)).unwrap();
    }
}

fn render_substitutions(out: &mut String, scenarios: &[SubstitutionScenario]) {
    writeln!(out, "\n=== Rotation Plans ===").unwrap();
    for scenario in scenarios {
        writeln!(
            out,
            "\nIf Team {} loses: {} comes in for {}",
            scenario.team_index + 1,
            format_player(&scenario.incoming),
            format_player(&scenario.outgoing)
        )
        .unwrap();
        for player in &scenario.resulting_members {
            writeln!(out, "  - {}", format_player(player)).unwrap();
        }
    }
}

fn render_cede(out: &mut String, scenarios: &[CedeScenario]) {
    writeln!(out, "\n=== Rotation Plans ===").unwrap();
    for scenario in scenarios {
        let ceded_names: Vec<String> = scenario.ceded.iter().map(format_player).collect();
        writeln!(
            out,
            "\nIf Team {} loses, it cedes {} to the outside group",
            scenario.losing_team_index + 1,
            ceded_names.join(" and ")
        )
        .unwrap();

        writeln!(out, "New team with outside players:").unwrap();
        for player in &scenario.new_team {
            writeln!(out, "  - {}", format_player(player)).unwrap();
        }

        writeln!(out, "Team {} after ceding:", scenario.losing_team_index + 1).unwrap();
        for player in &scenario.remaining {
            writeln!(out, "  - {}", format_player(player)).unwrap();
        }
    }
}

fn render_bracket(out: &mut String, bracket: &Bracket) {
    writeln!(out, "\n=== Tournament Bracket ===").unwrap();
    for (round_index, round) in bracket.rounds.iter().enumerate() {
        writeln!(out, "\n{}:", round.name).unwrap();
        for (home, away) in &round.matches {
            // Later rounds pair winner slots, not concrete teams
            if round_index == 0 {
                writeln!(out, "  Team {} vs Team {}", home + 1, away + 1).unwrap();
            } else {
                writeln!(out, "  Winner {} vs Winner {}", home + 1, away + 1).unwrap();
            }
        }
    }
}

/// Prints a generated plan in a readable format
pub fn print_game_plan(plan: &GamePlan) {
    print!("{}", render_game_plan(plan));
}

/// Writes the plain-text plan to a file
pub fn write_game_plan_to_file(plan: &GamePlan, filename: &str) -> Result<(), std::io::Error> {
    let mut file = File::create(filename)?;
    file.write_all(render_game_plan(plan).as_bytes())?;
    Ok(())
}

/// Writes the plan as pretty-printed JSON, for other tools to consume
pub fn write_game_plan_json(plan: &GamePlan, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(filename)?;
    serde_json::to_writer_pretty(file, plan)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::bracket::standard_bracket;
    use crate::teams::types::{Level, Partition};

    fn p(name: &str, level: Level) -> Participant {
        Participant { name: name.to_string(), level }
    }

    #[test]
    fn player_formatting_includes_the_level_tag() {
        assert_eq!(format_player(&p("Ana", Level::Advanced)), "Ana [advanced]");
    }

    #[test]
    fn rendered_plan_lists_teams_and_outside_players() {
        let plan = GamePlan {
            partition: Partition {
                teams: vec![Team { members: vec![p("Ana", Level::Advanced), p("Bia", Level::Beginner)] }],
                outside: vec![p("Caio", Level::Intermediate)],
            },
            rotation: RotationPlan::None,
            bracket: None,
        };

        let text = render_game_plan(&plan);
        assert!(text.contains("Team 1 (skill 4):"));
        assert!(text.contains("Ana [advanced]"));
        assert!(text.contains("Outside players (1):"));
        assert!(text.contains("Caio [intermediate]"));
    }

    #[test]
    fn rendered_bracket_names_both_rounds() {
        let plan = GamePlan {
            partition: Partition { teams: Vec::new(), outside: Vec::new() },
            rotation: RotationPlan::None,
            bracket: Some(standard_bracket()),
        };

        let text = render_game_plan(&plan);
        assert!(text.contains("Quarterfinals:"));
        assert!(text.contains("Team 1 vs Team 2"));
        assert!(text.contains("Team 3 vs Team 4"));
        assert!(text.contains("Final:"));
        assert!(text.contains("Winner 1 vs Winner 2"));
    }
}
