use crate::models::{PlayerId, SkillKey};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Focus player not in roster: {0}")]
    InvalidFocusPlayer(PlayerId),

    #[error("Focus player {player} has no training headroom for {skill:?}")]
    FocusAlreadyMaxed { player: PlayerId, skill: SkillKey },

    #[error("Nothing to reveal for player {player}: {skill:?} is already known")]
    AlreadyKnown { player: PlayerId, skill: SkillKey },

    #[error("Roster is empty")]
    EmptyRoster,
}

impl AdvisorError {
    /// All advisor errors are recoverable: the caller re-prompts the user
    /// for a different focus/skill pair instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
