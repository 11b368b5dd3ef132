pub mod types;
pub mod balance;
pub mod outside;
pub mod substitution;
pub mod cede;
pub mod bracket;
pub mod plan;

pub use types::{GamePlan, Level, Participant, PlanError, RotationPlan};
pub use plan::{generate_game_plan, GameOptions};
