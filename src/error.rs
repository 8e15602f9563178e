//! Setup-time error types
//!
//! Nothing in the tick path can fail; these only surface while a match is
//! being configured and built.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Sprite region not found: {0}")]
    MissingSprite(String),

    #[error("Texture not found: {0}")]
    MissingTexture(String),

    #[error("Sound not found: {0}")]
    MissingSound(String),

    #[error("Duplicate asset key: {0}")]
    DuplicateKey(String),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl SetupError {
    /// Name of the missing asset key, if that is what went wrong
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            SetupError::Asset(AssetError::MissingSprite(key))
            | SetupError::Asset(AssetError::MissingTexture(key))
            | SetupError::Asset(AssetError::MissingSound(key)) => Some(key),
            _ => None,
        }
    }
}
