//! Font atlas baking.
//!
//! The UI library exports its font as one raw RGBA bitmap of arbitrary
//! size. The fixed-function texture unit only addresses power-of-two
//! textures, so the bitmap is copied row by row into the top-left of a
//! zero-filled power-of-two buffer. The zero padding matters: bilinear
//! filtering at the logical edge samples into it, and transparent black is
//! the one value that composites to nothing.

use std::fmt;

use crate::coords::Vec2;
use crate::gpu::{TextureBinding, TextureId};

/// Largest texture dimension the texture unit addresses.
pub const MAX_TEXTURE_DIM: u32 = 512;

/// Alignment the texture fetch unit requires of texel memory.
const TEXEL_ALIGN: usize = 16;

/// Smallest power of two >= `v`, saturating at [`MAX_TEXTURE_DIM`].
///
/// Callers must validate against the cap separately; the saturation here
/// only bounds the loop.
pub fn next_pot(v: u32) -> u32 {
    let mut result = 1;
    while result < v && result < MAX_TEXTURE_DIM {
        result <<= 1;
    }
    result
}

/// Borrowed view of the RGBA8 bitmap the UI library exports.
///
/// `pixels` is row-major, `width * height * 4` bytes, no row padding.
#[derive(Debug, Copy, Clone)]
pub struct RgbaBitmap<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
}

/// Error from [`FontAtlas::build`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AtlasError {
    /// A dimension is zero or exceeds [`MAX_TEXTURE_DIM`].
    BadDimensions { width: u32, height: u32 },
    /// The pixel slice does not match the declared dimensions.
    SourceSizeMismatch { expected: usize, actual: usize },
    /// The texel buffer reservation failed.
    Allocation { bytes: usize },
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::BadDimensions { width, height } => write!(
                f,
                "atlas bitmap {width}x{height} outside supported range 1..={MAX_TEXTURE_DIM}"
            ),
            AtlasError::SourceSizeMismatch { expected, actual } => write!(
                f,
                "atlas bitmap pixel data is {actual} bytes, dimensions require {expected}"
            ),
            AtlasError::Allocation { bytes } => {
                write!(f, "atlas texel allocation of {bytes} bytes failed")
            }
        }
    }
}

impl std::error::Error for AtlasError {}

/// One baked font atlas: the UI bitmap padded into a power-of-two texture.
///
/// Owns the texel memory for its entire lifetime; the GPU samples it in
/// place through [`FontAtlas::binding`]. Logical and padded sizes are kept
/// separate because UV scaling must use the logical size while the texture
/// descriptor uses the padded one.
#[derive(Debug)]
pub struct FontAtlas {
    id: TextureId,
    width: u32,
    height: u32,
    padded_width: u32,
    padded_height: u32,
    texels: Vec<u8>,
    start: usize,
}

impl FontAtlas {
    /// Bakes `bitmap` into a padded atlas and allocates its texture id.
    pub fn build(bitmap: RgbaBitmap<'_>) -> Result<FontAtlas, AtlasError> {
        let RgbaBitmap {
            pixels,
            width,
            height,
        } = bitmap;

        if width == 0 || height == 0 || width > MAX_TEXTURE_DIM || height > MAX_TEXTURE_DIM {
            return Err(AtlasError::BadDimensions { width, height });
        }

        let src_pitch = width as usize * 4;
        let expected = src_pitch * height as usize;
        if pixels.len() != expected {
            return Err(AtlasError::SourceSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        let padded_width = next_pot(width);
        let padded_height = next_pot(height);
        let dst_pitch = padded_width as usize * 4;
        let padded_len = dst_pitch * padded_height as usize;

        // Over-allocate so a 16-byte-aligned window of `padded_len` bytes
        // always exists, then blit at that offset. No growth happens after
        // this reservation, so the base address is stable.
        let mut texels = Vec::new();
        texels
            .try_reserve_exact(padded_len + TEXEL_ALIGN - 1)
            .map_err(|_| AtlasError::Allocation { bytes: padded_len })?;
        texels.resize(padded_len + TEXEL_ALIGN - 1, 0);

        let base = texels.as_ptr() as usize;
        let start = (TEXEL_ALIGN - (base & (TEXEL_ALIGN - 1))) & (TEXEL_ALIGN - 1);

        for row in 0..height as usize {
            let src = &pixels[row * src_pitch..row * src_pitch + src_pitch];
            let dst = start + row * dst_pitch;
            texels[dst..dst + src_pitch].copy_from_slice(src);
        }

        let atlas = FontAtlas {
            id: TextureId::allocate(),
            width,
            height,
            padded_width,
            padded_height,
            texels,
            start,
        };
        log::debug!(
            "font atlas baked: {}x{} in {}x{} texture ({})",
            width,
            height,
            padded_width,
            padded_height,
            atlas.id.raw(),
        );
        Ok(atlas)
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Logical bitmap width in texels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical bitmap height in texels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn padded_width(&self) -> u32 {
        self.padded_width
    }

    #[inline]
    pub fn padded_height(&self) -> u32 {
        self.padded_height
    }

    /// Padded texel data, 16-byte-aligned start.
    pub fn texels(&self) -> &[u8] {
        let len = self.padded_width as usize * self.padded_height as usize * 4;
        &self.texels[self.start..self.start + len]
    }

    /// Multiply normalized UVs by this to get texel coordinates.
    ///
    /// This is the logical size, not the padded one; scaling by the padded
    /// size would push samples into the zero padding.
    #[inline]
    pub fn texel_scale(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Texture descriptor for [`crate::gpu::Gpu::bind_texture`].
    pub fn binding(&self) -> TextureBinding<'_> {
        TextureBinding {
            id: self.id,
            width: self.padded_width,
            height: self.padded_height,
            stride: self.padded_width,
            texels: self.texels(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(width: u32, height: u32, pixels: &[u8]) -> RgbaBitmap<'_> {
        RgbaBitmap {
            pixels,
            width,
            height,
        }
    }

    /// Distinct per-pixel RGBA pattern so copies are position-checkable.
    fn test_pixels(width: u32, height: u32) -> Vec<u8> {
        let mut out = Vec::new();
        for y in 0..height {
            for x in 0..width {
                out.extend_from_slice(&[x as u8, y as u8, 0xab, 0xff]);
            }
        }
        out
    }

    fn texel_at(atlas: &FontAtlas, x: u32, y: u32) -> [u8; 4] {
        let pitch = atlas.padded_width() as usize * 4;
        let off = y as usize * pitch + x as usize * 4;
        let t = atlas.texels();
        [t[off], t[off + 1], t[off + 2], t[off + 3]]
    }

    // ── next_pot ──────────────────────────────────────────────────────────

    #[test]
    fn next_pot_fixed_points() {
        assert_eq!(next_pot(1), 1);
        assert_eq!(next_pot(64), 64);
        assert_eq!(next_pot(512), 512);
    }

    #[test]
    fn next_pot_rounds_up() {
        assert_eq!(next_pot(3), 4);
        assert_eq!(next_pot(100), 128);
        assert_eq!(next_pot(300), 512);
    }

    #[test]
    fn next_pot_saturates_at_cap() {
        assert_eq!(next_pot(513), 512);
        assert_eq!(next_pot(u32::MAX), 512);
    }

    // ── build ─────────────────────────────────────────────────────────────

    #[test]
    fn pads_to_power_of_two_and_preserves_pixels() {
        let pixels = test_pixels(3, 2);
        let atlas = FontAtlas::build(bitmap(3, 2, &pixels)).unwrap();

        assert_eq!((atlas.width(), atlas.height()), (3, 2));
        assert_eq!((atlas.padded_width(), atlas.padded_height()), (4, 2));

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(texel_at(&atlas, x, y), [x as u8, y as u8, 0xab, 0xff]);
            }
        }
    }

    #[test]
    fn padding_texels_are_zero() {
        let pixels = test_pixels(3, 5);
        let atlas = FontAtlas::build(bitmap(3, 5, &pixels)).unwrap();
        assert_eq!((atlas.padded_width(), atlas.padded_height()), (4, 8));

        for y in 0..8 {
            for x in 0..4 {
                if x < 3 && y < 5 {
                    continue;
                }
                assert_eq!(texel_at(&atlas, x, y), [0, 0, 0, 0]);
            }
        }
    }

    #[test]
    fn texel_start_is_aligned() {
        let pixels = test_pixels(7, 7);
        let atlas = FontAtlas::build(bitmap(7, 7, &pixels)).unwrap();
        assert_eq!(atlas.texels().as_ptr() as usize % 16, 0);
        assert_eq!(atlas.texels().len(), 8 * 8 * 4);
    }

    #[test]
    fn binding_reports_padded_geometry() {
        let pixels = test_pixels(100, 60);
        let atlas = FontAtlas::build(bitmap(100, 60, &pixels)).unwrap();

        let b = atlas.binding();
        assert_eq!((b.width, b.height), (128, 64));
        assert_eq!(b.stride, 128);
        assert_eq!(b.texels.len(), 128 * 64 * 4);
        assert_eq!(b.id, atlas.id());

        assert_eq!(atlas.texel_scale(), Vec2::new(100.0, 60.0));
    }

    #[test]
    fn rejects_zero_and_oversize_dimensions() {
        let pixels = test_pixels(1, 1);
        assert_eq!(
            FontAtlas::build(bitmap(0, 1, &pixels)).unwrap_err(),
            AtlasError::BadDimensions { width: 0, height: 1 }
        );
        assert!(matches!(
            FontAtlas::build(bitmap(513, 16, &[])),
            Err(AtlasError::BadDimensions { .. })
        ));
    }

    #[test]
    fn rejects_mismatched_pixel_slice() {
        let pixels = test_pixels(4, 4);
        assert_eq!(
            FontAtlas::build(bitmap(4, 4, &pixels[..10])).unwrap_err(),
            AtlasError::SourceSizeMismatch {
                expected: 64,
                actual: 10,
            }
        );
    }

    #[test]
    fn each_build_gets_a_fresh_id() {
        let pixels = test_pixels(2, 2);
        let a = FontAtlas::build(bitmap(2, 2, &pixels)).unwrap();
        let b = FontAtlas::build(bitmap(2, 2, &pixels)).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
