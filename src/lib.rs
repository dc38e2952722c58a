//! # mip_layout
//! mip_layout calculates where each mip level of a texture lives in a single packed buffer.
//!
//! # Getting Started
//! Mipmaps are stored starting with the full resolution base level.
//! Each level after that is half the width and height of the previous level.
/*!
```no_compile
Mip 0
Mip 1
...
Mip M-1
```
*/
//! The following example finds the mipmap data for an R8G8B8A8 texture.
//! Formats are anything that implements [PixelFormat].
//! Use [BitsPerPixel] when only the raw bits per pixel value is known.
/*!
```rust
use mip_layout::{max_mip_levels, mip_data_offset, mip_data_size, BitsPerPixel};

let width = 64;
let height = 64;
let format = BitsPerPixel(32);

let mipmap_count = max_mip_levels(width, height);
assert_eq!(7, mipmap_count);

// Allocate enough space for all the mipmaps.
let data = vec![0u8; mip_data_size(width, height, format, mipmap_count)];

// The second mipmap starts right after the 64x64 base level.
let offset = mip_data_offset(width, height, format, 1);
assert_eq!(64 * 64 * 4, offset);
let mip1 = &data[offset..mip_data_offset(width, height, format, 2)];
assert_eq!(32 * 32 * 4, mip1.len());
```
*/
//! # Unchecked Calculations
//! [mip_data_offset], [mip_data_size], and [max_mip_levels] assume the dimensions
//! are powers of two no larger than [MAX_TEXTURE_DIMENSION] and that the level is at most [max_mip_levels].
//! Inputs outside this range still return a value without panicking, but the value is not meaningful.
//! Use [try_mip_data_offset], [try_mip_data_size], and [try_max_mip_levels] to validate inputs first.
#![cfg_attr(not(feature = "std"), no_std)]

mod checked;
mod mip;

// Avoid making this module public to prevent people importing it accidentally.
#[cfg(feature = "ffi")]
mod ffi;

pub use checked::*;
pub use mip::*;

/// The largest supported width or height in pixels.
pub const MAX_TEXTURE_DIMENSION: u16 = 1024;

/// The most mip levels a texture is expected to store.
///
/// This is a limit for texture data rather than for the calculations.
/// A texture at [MAX_TEXTURE_DIMENSION] can have more levels than this according to [max_mip_levels].
pub const MAX_TEXTURE_LEVELS: usize = 8;

/// A pixel format that knows how many bits each pixel takes up.
///
/// Implement this for an application's own format type.
/// Handling unknown formats is up to the implementation.
/// # Examples
/**
```rust
use mip_layout::{mip_data_offset, PixelFormat};

enum Format {
    Rgba8,
    Rgb565,
    Etc1,
}

impl PixelFormat for Format {
    fn bits_per_pixel(&self) -> u32 {
        match self {
            Format::Rgba8 => 32,
            Format::Rgb565 => 16,
            Format::Etc1 => 4,
        }
    }
}

assert_eq!(128 * 128 * 2, mip_data_offset(128, 128, Format::Rgb565, 1));
```
 */
pub trait PixelFormat {
    /// The number of bits used to encode a single pixel.
    fn bits_per_pixel(&self) -> u32;
}

impl<T: PixelFormat + ?Sized> PixelFormat for &T {
    fn bits_per_pixel(&self) -> u32 {
        (**self).bits_per_pixel()
    }
}

/// A format described only by its bits per pixel like 32 for R8G8B8A8 or 4 for ETC1.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BitsPerPixel(pub u32);

impl PixelFormat for BitsPerPixel {
    fn bits_per_pixel(&self) -> u32 {
        self.0
    }
}

/// Errors that can occur while validating texture parameters.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LayoutError {
    /// The width or height is zero.
    ZeroDimension { width: u16, height: u16 },

    /// The width or height is larger than [MAX_TEXTURE_DIMENSION].
    DimensionTooLarge {
        width: u16,
        height: u16,
        max_dimension: u16,
    },

    /// The width or height is not a power of two.
    NotPowerOfTwo { width: u16, height: u16 },

    /// The pixel format has a bits per pixel value of zero.
    ZeroBitsPerPixel,

    /// The level is larger than the result of [max_mip_levels] for the texture dimensions.
    LevelOutOfRange { level: usize, max_levels: usize },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::ZeroDimension { width, height } => write!(
                f,
                "Dimensions {}x{} contain a zero. Textures must be at least 1x1.",
                width, height
            ),
            LayoutError::DimensionTooLarge {
                width,
                height,
                max_dimension,
            } => write!(
                f,
                "Dimensions {}x{} exceed the maximum dimension of {}.",
                width, height, max_dimension
            ),
            LayoutError::NotPowerOfTwo { width, height } => write!(
                f,
                "Dimensions {}x{} are not powers of two.",
                width, height
            ),
            LayoutError::ZeroBitsPerPixel => {
                write!(f, "Pixel formats must have a non zero bits per pixel.")
            }
            LayoutError::LevelOutOfRange { level, max_levels } => write!(
                f,
                "Level {} is out of range for a texture with {} levels.",
                level, max_levels
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Etc1;

    impl PixelFormat for Etc1 {
        fn bits_per_pixel(&self) -> u32 {
            4
        }
    }

    #[test]
    fn bits_per_pixel_through_reference() {
        let format = BitsPerPixel(16);
        assert_eq!(16, (&format).bits_per_pixel());
        assert_eq!(4, (&&Etc1).bits_per_pixel());
    }

    #[test]
    fn custom_format_offset() {
        // ETC1 packs a 4x4 block into 8 bytes.
        assert_eq!(8, mip_data_offset(4, 4, Etc1, 1));
        assert_eq!(8, mip_data_offset(4, 4, &Etc1, 1));
    }

    #[test]
    fn max_levels_exceed_level_limit() {
        assert!(max_mip_levels(MAX_TEXTURE_DIMENSION, MAX_TEXTURE_DIMENSION) > MAX_TEXTURE_LEVELS);
    }

    #[cfg(feature = "std")]
    #[test]
    fn error_messages() {
        assert_eq!(
            "Level 12 is out of range for a texture with 11 levels.",
            LayoutError::LevelOutOfRange {
                level: 12,
                max_levels: 11
            }
            .to_string()
        );
        assert_eq!(
            "Dimensions 0x16 contain a zero. Textures must be at least 1x1.",
            LayoutError::ZeroDimension {
                width: 0,
                height: 16
            }
            .to_string()
        );
        assert_eq!(
            "Dimensions 2048x2048 exceed the maximum dimension of 1024.",
            LayoutError::DimensionTooLarge {
                width: 2048,
                height: 2048,
                max_dimension: MAX_TEXTURE_DIMENSION
            }
            .to_string()
        );
    }
}
