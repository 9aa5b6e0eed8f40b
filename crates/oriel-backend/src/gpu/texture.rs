use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle naming a texture across the UI boundary.
///
/// The UI layer stores this at atlas install and echoes it back inside draw
/// commands; the value itself carries no meaning to anyone but the backend
/// that allocated it. Never zero, never reused within a process.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(NonZeroU64);

impl TextureId {
    /// Allocates a fresh process-unique id.
    pub fn allocate() -> Self {
        let raw = NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed);
        match NonZeroU64::new(raw) {
            Some(id) => Self(id),
            // fetch_add from 1 can only yield 0 after u64 wraparound.
            None => Self(NonZeroU64::MIN),
        }
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0.get()
    }
}

/// One texture as handed to the GPU: padded dimensions, row stride in
/// texels, and the RGBA8 texel data (16-byte-aligned start).
#[derive(Debug, Copy, Clone)]
pub struct TextureBinding<'a> {
    pub id: TextureId,
    /// Padded width in texels; a power of two.
    pub width: u32,
    /// Padded height in texels; a power of two.
    pub height: u32,
    /// Row pitch in texels. Equals `width` for atlas textures.
    pub stride: u32,
    pub texels: &'a [u8],
}
