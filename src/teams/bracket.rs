use super::types::{Bracket, BracketRound};

/// Fixed single-elimination bracket over exactly four teams: two
/// quarterfinals (team 1 vs 2, team 3 vs 4) and a final between the two
/// winner slots.
pub fn standard_bracket() -> Bracket {
    Bracket {
        rounds: vec![
            BracketRound {
                name: "Quarterfinals".to_string(),
                matches: vec![(0, 1), (2, 3)],
            },
            BracketRound {
                name: "Final".to_string(),
                matches: vec![(0, 1)],
            },
        ],
    }
}
