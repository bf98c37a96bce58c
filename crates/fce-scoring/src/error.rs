use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown MTM task: {0}")]
    UnknownTask(String),

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}
