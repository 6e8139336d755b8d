pub mod scoring;
pub mod storage;

pub use scoring::IScoringEngine;
pub use storage::ISkillStorage;
