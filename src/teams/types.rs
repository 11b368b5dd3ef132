use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Skill level of a registered player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Numeric weight used for balancing (Beginner=1, Intermediate=2, Advanced=3)
    pub fn weight(self) -> u32 {
        match self {
            Level::Beginner => 1,
            Level::Intermediate => 2,
            Level::Advanced => 3,
        }
    }

    /// Lowercase tag used in CLI output and text exports
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

/// A player selected for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub level: Level,
}

/// One court team assembled by the balancer
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub members: Vec<Participant>,
}

impl Team {
    /// Sum of the members' level weights
    pub fn skill_sum(&self) -> u32 {
        self.members.iter().map(|p| p.level.weight()).sum()
    }

    /// Number of members at the given level
    pub fn level_count(&self, level: Level) -> usize {
        self.members.iter().filter(|p| p.level == level).count()
    }
}

/// Result of one balancing run: the court teams plus the outside group
#[derive(Debug, Clone, Serialize)]
pub struct Partition {
    pub teams: Vec<Team>,
    pub outside: Vec<Participant>,
}

impl Partition {
    /// Total players covered by this partition (team members + outside group)
    pub fn total_players(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum::<usize>() + self.outside.len()
    }
}

/// "If this team loses" swap projection for a single outside player.
/// The real team roster is never modified; `resulting_members` is a copy.
#[derive(Debug, Clone, Serialize)]
pub struct SubstitutionScenario {
    pub team_index: usize,
    pub incoming: Participant,
    pub outgoing: Participant,
    pub resulting_members: Vec<Participant>,
}

/// "If this team loses" merge projection used when the outside group is
/// large enough (4-5 players) to form its own team with ceded players
#[derive(Debug, Clone, Serialize)]
pub struct CedeScenario {
    pub losing_team_index: usize,
    pub ceded: Vec<Participant>,
    pub new_team: Vec<Participant>,
    pub remaining: Vec<Participant>,
}

/// Rotation planning output, depending on how many players ended up outside
#[derive(Debug, Clone, Serialize)]
pub enum RotationPlan {
    None,
    Substitutions(Vec<SubstitutionScenario>),
    Cede(Vec<CedeScenario>),
}

/// One round of the tournament bracket; matches are pairs of team slots
#[derive(Debug, Clone, Serialize)]
pub struct BracketRound {
    pub name: String,
    pub matches: Vec<(usize, usize)>,
}

/// Fixed single-elimination bracket used when exactly four full teams play
#[derive(Debug, Clone, Serialize)]
pub struct Bracket {
    pub rounds: Vec<BracketRound>,
}

/// Everything one generation run produces
#[derive(Debug, Clone, Serialize)]
pub struct GamePlan {
    pub partition: Partition,
    pub rotation: RotationPlan,
    pub bracket: Option<Bracket>,
}

/// Errors from the planning core
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("not enough players selected: {selected} selected, at least {capacity} required")]
    NotEnoughPlayers { selected: usize, capacity: usize },

    #[error("team count must be at least 1")]
    InvalidTeamCount,
}
