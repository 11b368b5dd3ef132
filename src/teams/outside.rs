/// How one selected group splits into court teams and an outside group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout {
    pub num_teams: usize,
    pub num_outside: usize,
    /// True only for the fixed four-team tournament layout
    pub bracket_mode: bool,
}

/// Which rotation planner applies for a given outside-group size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStrategy {
    None,
    Substitution,
    Cede,
}

/// Splits a selected total into full teams and an outside group.
///
/// The one special case: when the configured bracket threshold matches the
/// total and the total is exactly four full teams (24 players at the default
/// capacity of 6), the run switches to tournament mode with four teams and
/// nobody outside.
pub fn resolve_group_layout(total: usize, capacity: usize, bracket_threshold: Option<usize>) -> GroupLayout {
    if bracket_threshold == Some(total) && total == 4 * capacity {
        return GroupLayout {
            num_teams: 4,
            num_outside: 0,
            bracket_mode: true,
        };
    }

    GroupLayout {
        num_teams: total / capacity,
        num_outside: total % capacity,
        bracket_mode: false,
    }
}

impl RotationStrategy {
    /// Picks the planner for an outside group: none when empty, one-for-one
    /// substitutions for small groups, team ceding when 4-5 players wait
    /// outside (enough to seed a new team)
    pub fn for_outside_count(num_outside: usize) -> RotationStrategy {
        match num_outside {
            0 => RotationStrategy::None,
            4 | 5 => RotationStrategy::Cede,
            _ => RotationStrategy::Substitution,
        }
    }
}
