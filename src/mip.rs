//! Offsets and sizes for mipmaps stored contiguously in a single buffer.
//!
//! Sizes are accumulated in bits and only converted to bytes at the end.
//! This keeps formats with fewer than 8 bits per pixel like ETC1 or L4 consistent
//! when the smallest mipmaps take up less than a byte.
use core::cmp::{max, min};

use crate::PixelFormat;

/// Calculates the offset in bytes for the start of the data for mipmap `level`.
///
/// Mipmaps are stored contiguously starting with the base level, so this is also
/// the combined size of all the mipmaps before `level`.
/// The result for a `level` of 0 is always 0.
///
/// # Examples
/// Each mipmap has a quarter as many pixels as the previous mipmap.
/**
```rust
use mip_layout::{mip_data_offset, BitsPerPixel};

// 8x8 L8 texture.
assert_eq!(0, mip_data_offset(8, 8, BitsPerPixel(8), 0));
assert_eq!(64, mip_data_offset(8, 8, BitsPerPixel(8), 1));
assert_eq!(64 + 16, mip_data_offset(8, 8, BitsPerPixel(8), 2));
assert_eq!(64 + 16 + 4, mip_data_offset(8, 8, BitsPerPixel(8), 3));
```
 */
/// Levels past the last mipmap are treated as 1x1 and do not panic.
/// The dimensions should be powers of two for the results to match other tools.
pub fn mip_data_offset<F: PixelFormat>(width: u16, height: u16, format: F, level: usize) -> usize {
    if level == 0 {
        return 0;
    }

    chain_size_in_bits(width, height, format.bits_per_pixel(), level) >> 3
}

/// Calculates the number of mipmaps for the given dimensions
/// by halving the largest dimension until it reaches 1.
///
/// This is `floor(log2(max(width, height))) + 1` and returns 0 if both dimensions are 0.
/// # Examples
/**
```rust
use mip_layout::max_mip_levels;

assert_eq!(7, max_mip_levels(64, 64));
assert_eq!(11, max_mip_levels(1024, 8));
assert_eq!(1, max_mip_levels(1, 1));
```
 */
pub const fn max_mip_levels(width: u16, height: u16) -> usize {
    let max_dimension = if width > height { width } else { height };
    (u16::BITS - max_dimension.leading_zeros()) as usize
}

/// Calculates the size in bytes for storing the first `levels` mipmaps contiguously.
///
/// This is the same as the offset of the mipmap after the last included mipmap,
/// so the result is always equal to [mip_data_offset] for `levels`.
/// # Examples
/**
```rust
use mip_layout::{max_mip_levels, mip_data_size, BitsPerPixel};

// 64x64 R8G8B8A8 texture with all its mipmaps.
let levels = max_mip_levels(64, 64);
assert_eq!(21844, mip_data_size(64, 64, BitsPerPixel(32), levels));

// Only the base level.
assert_eq!(16384, mip_data_size(64, 64, BitsPerPixel(32), 1));
```
 */
pub fn mip_data_size<F: PixelFormat>(width: u16, height: u16, format: F, levels: usize) -> usize {
    mip_data_offset(width, height, format, levels)
}

/// Calculates the dimensions in pixels for mipmap `level`.
/// Dimensions are never smaller than 1 even for levels past the last mipmap.
/**
```rust
use mip_layout::mip_dimensions;

assert_eq!((256, 64), mip_dimensions(1024, 256, 2));
assert_eq!((2, 1), mip_dimensions(1024, 256, 9));
```
 */
pub fn mip_dimensions(width: u16, height: u16, level: usize) -> (u16, u16) {
    (mip_dimension(width, level), mip_dimension(height, level))
}

/// Calculates the size in bytes for the data of mipmap `level`.
///
/// This is the difference between consecutive offsets from [mip_data_offset].
/// The sizes of levels smaller than a byte are rounded so that
/// the sizes of all levels still add up to [mip_data_size].
pub fn mip_level_size<F: PixelFormat>(width: u16, height: u16, format: F, level: usize) -> usize {
    let bits_per_pixel = format.bits_per_pixel();
    let start = chain_size_in_bits(width, height, bits_per_pixel, level) >> 3;
    let end = chain_size_in_bits(width, height, bits_per_pixel, level.saturating_add(1)) >> 3;
    end - start
}

/// The location and dimensions of a single mipmap in the combined buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MipLevel {
    /// The mipmap index starting from 0 for the base level.
    pub level: usize,
    /// The width of the mipmap in pixels.
    pub width: u16,
    /// The height of the mipmap in pixels.
    pub height: u16,
    /// The offset in bytes from the start of the buffer.
    pub offset: usize,
    /// The size in bytes of the mipmap's data.
    pub size: usize,
}

/// Iterates over the first `count` mipmaps in the combined buffer.
/// Created by [mip_levels].
#[derive(Debug, Clone)]
pub struct MipLevels<F> {
    width: u16,
    height: u16,
    format: F,
    level: usize,
    count: usize,
    offset_in_bits: usize,
}

/// Returns the offset, size, and dimensions of the first `count` mipmaps.
///
/// # Examples
/// The resulting ranges can be used to split a combined buffer into separate mipmaps.
/**
```rust
use mip_layout::{max_mip_levels, mip_data_size, mip_levels, BitsPerPixel};

let (width, height) = (16, 16);
let count = max_mip_levels(width, height);
let data = vec![0u8; mip_data_size(width, height, BitsPerPixel(32), count)];

let mipmaps: Vec<&[u8]> = mip_levels(width, height, BitsPerPixel(32), count)
    .map(|mip| &data[mip.offset..mip.offset + mip.size])
    .collect();

assert_eq!(5, mipmaps.len());
assert_eq!(16 * 16 * 4, mipmaps[0].len());
assert_eq!(4, mipmaps[4].len());
```
 */
pub fn mip_levels<F: PixelFormat>(width: u16, height: u16, format: F, count: usize) -> MipLevels<F> {
    MipLevels {
        width,
        height,
        format,
        level: 0,
        count,
        offset_in_bits: 0,
    }
}

impl<F: PixelFormat> Iterator for MipLevels<F> {
    type Item = MipLevel;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level >= self.count {
            return None;
        }

        let level = self.level;
        let (width, height) = mip_dimensions(self.width, self.height, level);
        let size_in_bits = mip_size_in_bits(
            self.width,
            self.height,
            self.format.bits_per_pixel(),
            level,
        );

        let start = self.offset_in_bits;
        let end = start.saturating_add(size_in_bits);
        self.offset_in_bits = end;
        self.level += 1;

        Some(MipLevel {
            level,
            width,
            height,
            offset: start >> 3,
            size: (end >> 3) - (start >> 3),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.level);
        (remaining, Some(remaining))
    }
}

impl<F: PixelFormat> ExactSizeIterator for MipLevels<F> {}

fn mip_dimension(dimension: u16, level: usize) -> u16 {
    if level >= u16::BITS as usize {
        1
    } else {
        max(dimension >> level, 1)
    }
}

fn mip_size_in_bits(width: u16, height: u16, bits_per_pixel: u32, level: usize) -> usize {
    // An empty texture has no data for any mipmap.
    if width == 0 || height == 0 {
        return 0;
    }

    let (mip_width, mip_height) = mip_dimensions(width, height, level);
    (bits_per_pixel as usize).saturating_mul(mip_width as usize * mip_height as usize)
}

// The combined size of mipmaps 0..levels in bits.
fn chain_size_in_bits(width: u16, height: u16, bits_per_pixel: u32, levels: usize) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }

    // Only sum up to the 1x1 mipmap.
    // Any levels after that take up a single pixel each.
    let chain_levels = min(levels, max_mip_levels(width, height));
    let chain_size = (0..chain_levels).fold(0usize, |size, level| {
        size.saturating_add(mip_size_in_bits(width, height, bits_per_pixel, level))
    });

    let tail_size = (bits_per_pixel as usize).saturating_mul(levels - chain_levels);
    chain_size.saturating_add(tail_size)
}
