pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::{Challenge, TourChallenge};
pub use launcher::{
    solve, solve_with_progress, EvolutionLauncher, EvolutionResult, GenerationProgress,
    RunStatus,
};
pub use options::{EvolutionOptions, LogLevel, ReplacementPolicy};
