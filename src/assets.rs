//! Asset lookup by symbolic key
//!
//! The simulation never loads media. Entities resolve sprite regions, texture
//! and sound handles through an [`AssetProvider`] while they are constructed
//! and keep the handles for the lifetime of the match.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::sim::geometry::Rect;

/// Opaque texture id assigned by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

/// Opaque playable sound id assigned by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundHandle(pub u32);

/// Resource capabilities the simulation consumes
pub trait AssetProvider {
    /// Location of a named image inside the sprite sheet
    fn sprite_region(&self, name: &str) -> Result<Rect, AssetError>;
    fn texture(&self, name: &str) -> Result<TextureHandle, AssetError>;
    fn sound(&self, name: &str) -> Result<SoundHandle, AssetError>;
    /// Seeded generator for spawn positions and serve directions
    fn random_source(&self) -> Pcg32;
}

/// Sprite-sheet manifest as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub seed: u64,
    pub textures: Vec<String>,
    pub sounds: Vec<String>,
    /// name -> [x, y, w, h] inside the sprite sheet
    pub sprites: BTreeMap<String, [f32; 4]>,
}

/// Manifest describing every key the core looks up
pub const DEFAULT_MANIFEST: &str = r#"{
    "seed": 2014,
    "textures": ["SpriteSheet", "Frame"],
    "sounds": [
        "HitSound", "ScoreSound", "BlackHoleSound", "GameOverSound"
    ],
    "sprites": {
        "Ball1": [0, 0, 64, 64],
        "Ball2": [64, 0, 64, 64],
        "Ball3": [128, 0, 64, 64],
        "Ball4": [192, 0, 64, 64],
        "Ball5": [256, 0, 64, 64],
        "Shadow": [320, 0, 64, 64],
        "Satellite": [0, 64, 150, 45],
        "Asteroid": [0, 128, 128, 128],
        "BlackHole": [128, 128, 200, 200],
        "RedBox": [384, 0, 32, 32]
    }
}"#;

/// In-memory provider backed by a [`Manifest`]
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    seed: u64,
    textures: BTreeMap<String, TextureHandle>,
    sounds: BTreeMap<String, SoundHandle>,
    sprites: BTreeMap<String, Rect>,
}

impl AssetCatalog {
    /// Build from a parsed manifest. Handles are assigned in listing order.
    pub fn from_manifest(manifest: Manifest) -> Result<Self, AssetError> {
        let mut textures = BTreeMap::new();
        for (i, name) in manifest.textures.into_iter().enumerate() {
            if textures.contains_key(&name) {
                return Err(AssetError::DuplicateKey(name));
            }
            textures.insert(name, TextureHandle(i as u32));
        }

        let mut sounds = BTreeMap::new();
        for (i, name) in manifest.sounds.into_iter().enumerate() {
            if sounds.contains_key(&name) {
                return Err(AssetError::DuplicateKey(name));
            }
            sounds.insert(name, SoundHandle(i as u32));
        }

        let sprites = manifest
            .sprites
            .into_iter()
            .map(|(name, xywh)| (name, Rect::from_xywh(xywh)))
            .collect();

        Ok(Self {
            seed: manifest.seed,
            textures,
            sounds,
            sprites,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    /// Catalog for the built-in sprite sheet
    pub fn builtin() -> Self {
        // DEFAULT_MANIFEST is a compile-time constant covered by tests
        Self::from_json(DEFAULT_MANIFEST).unwrap_or_else(|e| {
            log::error!("Built-in manifest rejected: {e}");
            Self::empty()
        })
    }

    /// Catalog with no keys at all
    pub fn empty() -> Self {
        Self {
            seed: 0,
            textures: BTreeMap::new(),
            sounds: BTreeMap::new(),
            sprites: BTreeMap::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Drop a key from every table (used to exercise setup failures)
    pub fn without(mut self, name: &str) -> Self {
        self.textures.remove(name);
        self.sounds.remove(name);
        self.sprites.remove(name);
        self
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AssetProvider for AssetCatalog {
    fn sprite_region(&self, name: &str) -> Result<Rect, AssetError> {
        self.sprites
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::MissingSprite(name.to_string()))
    }

    fn texture(&self, name: &str) -> Result<TextureHandle, AssetError> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::MissingTexture(name.to_string()))
    }

    fn sound(&self, name: &str) -> Result<SoundHandle, AssetError> {
        self.sounds
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::MissingSound(name.to_string()))
    }

    fn random_source(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_builtin_manifest_parses() {
        let catalog = AssetCatalog::from_json(DEFAULT_MANIFEST).unwrap();
        assert_eq!(catalog.seed(), 2014);
        assert!(catalog.sprite_region("Ball5").is_ok());
        assert_eq!(catalog.texture("SpriteSheet").unwrap(), TextureHandle(0));
        assert_eq!(catalog.sound("ScoreSound").unwrap(), SoundHandle(1));
    }

    #[test]
    fn test_missing_keys_are_typed() {
        let catalog = AssetCatalog::builtin();
        assert!(matches!(
            catalog.sprite_region("Comet"),
            Err(AssetError::MissingSprite(name)) if name == "Comet"
        ));
        assert!(matches!(
            catalog.texture("Nebula"),
            Err(AssetError::MissingTexture(_))
        ));
        assert!(matches!(
            catalog.sound("Boom"),
            Err(AssetError::MissingSound(_))
        ));
    }

    #[test]
    fn test_duplicate_texture_rejected() {
        let json = r#"{ "textures": ["A", "A"], "sounds": [], "sprites": {} }"#;
        assert!(matches!(
            AssetCatalog::from_json(json),
            Err(AssetError::DuplicateKey(k)) if k == "A"
        ));
    }

    #[test]
    fn test_random_source_is_seeded() {
        let catalog = AssetCatalog::builtin().with_seed(42);
        let a: u32 = catalog.random_source().random();
        let b: u32 = catalog.random_source().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_without_removes_key() {
        let catalog = AssetCatalog::builtin().without("HitSound");
        assert!(catalog.sound("HitSound").is_err());
        assert!(catalog.sound("ScoreSound").is_ok());
    }
}
