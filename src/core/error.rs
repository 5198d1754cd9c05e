use thiserror::Error;

/// The two failure kinds the player surfaces to the user. Neither is fatal;
/// both leave the previous stable state in place and require a fresh user
/// action to retry.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("failed to load audio file: {0}")]
    Decode(String),
    #[error("playback failed: {0}")]
    Playback(String),
}

impl PlayerError {
    /// Message shown in the user-facing alert.
    pub fn user_message(&self) -> String {
        match self {
            PlayerError::Decode(_) => "Could not load the audio file.".to_string(),
            PlayerError::Playback(_) => "Audio playback failed.".to_string(),
        }
    }
}
