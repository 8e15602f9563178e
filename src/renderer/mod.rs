//! Presentation sink
//!
//! Entities describe themselves as sprite instances. The host owns the actual
//! graphics backend and uploads [`DrawList::as_bytes`] each frame.

pub mod instance;
pub mod shapes;

pub use instance::{SpriteInstance, depth};

/// Sprites emitted during one draw pass
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    instances: Vec<SpriteInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sprite: SpriteInstance) {
        self.instances.push(sprite);
    }

    pub fn extend(&mut self, sprites: impl IntoIterator<Item = SpriteInstance>) {
        self.instances.extend(sprites);
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    /// Order for painter's algorithm: largest depth first, stable otherwise
    pub fn sort_back_to_front(&mut self) {
        self.instances
            .sort_by(|a, b| b.depth.total_cmp(&a.depth));
    }

    /// Raw instance buffer contents
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}
