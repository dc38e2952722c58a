use crate::{
    max_mip_levels, mip_data_offset, BitsPerPixel, LayoutError, PixelFormat,
    MAX_TEXTURE_DIMENSION,
};

/// Validates the dimensions before calculating [max_mip_levels].
///
/// Returns [LayoutError::ZeroDimension] if either dimension is zero,
/// [LayoutError::DimensionTooLarge] if either dimension is larger than [MAX_TEXTURE_DIMENSION],
/// and [LayoutError::NotPowerOfTwo] if either dimension is not a power of two.
/// # Examples
/**
```rust
use mip_layout::{try_max_mip_levels, LayoutError};

assert_eq!(Ok(11), try_max_mip_levels(1024, 1024));
assert_eq!(
    Err(LayoutError::NotPowerOfTwo { width: 300, height: 128 }),
    try_max_mip_levels(300, 128)
);
```
 */
pub fn try_max_mip_levels(width: u16, height: u16) -> Result<usize, LayoutError> {
    validate_dimensions(width, height)?;
    Ok(max_mip_levels(width, height))
}

/// Validates the inputs before calculating [mip_data_offset].
///
/// In addition to the errors from [try_max_mip_levels],
/// returns [LayoutError::ZeroBitsPerPixel] if `format` has no bits per pixel
/// and [LayoutError::LevelOutOfRange] if `level` is larger than [max_mip_levels].
/// A `level` equal to [max_mip_levels] is the end of the last mipmap.
/// # Examples
/**
```rust
use mip_layout::{try_mip_data_offset, BitsPerPixel, LayoutError};

assert_eq!(Ok(16384), try_mip_data_offset(64, 64, BitsPerPixel(32), 1));
assert_eq!(
    Err(LayoutError::LevelOutOfRange { level: 8, max_levels: 7 }),
    try_mip_data_offset(64, 64, BitsPerPixel(32), 8)
);
```
 */
pub fn try_mip_data_offset<F: PixelFormat>(
    width: u16,
    height: u16,
    format: F,
    level: usize,
) -> Result<usize, LayoutError> {
    let bits_per_pixel = validate_layout(width, height, format, level)?;
    Ok(mip_data_offset(width, height, bits_per_pixel, level))
}

/// Validates the inputs before calculating [crate::mip_data_size].
///
/// Returns the same errors as [try_mip_data_offset] with `levels` as the level.
/// # Examples
/**
```rust
use mip_layout::{try_mip_data_size, BitsPerPixel, LayoutError};

assert_eq!(Ok(85), try_mip_data_size(8, 8, BitsPerPixel(8), 4));
assert_eq!(
    Err(LayoutError::ZeroBitsPerPixel),
    try_mip_data_size(8, 8, BitsPerPixel(0), 4)
);
```
 */
pub fn try_mip_data_size<F: PixelFormat>(
    width: u16,
    height: u16,
    format: F,
    levels: usize,
) -> Result<usize, LayoutError> {
    try_mip_data_offset(width, height, format, levels)
}

fn validate_dimensions(width: u16, height: u16) -> Result<(), LayoutError> {
    if width == 0 || height == 0 {
        return Err(LayoutError::ZeroDimension { width, height });
    }

    if width > MAX_TEXTURE_DIMENSION || height > MAX_TEXTURE_DIMENSION {
        return Err(LayoutError::DimensionTooLarge {
            width,
            height,
            max_dimension: MAX_TEXTURE_DIMENSION,
        });
    }

    if !width.is_power_of_two() || !height.is_power_of_two() {
        return Err(LayoutError::NotPowerOfTwo { width, height });
    }

    Ok(())
}

// The format is only resolved once.
fn validate_layout<F: PixelFormat>(
    width: u16,
    height: u16,
    format: F,
    level: usize,
) -> Result<BitsPerPixel, LayoutError> {
    validate_dimensions(width, height)?;

    let bits_per_pixel = format.bits_per_pixel();
    if bits_per_pixel == 0 {
        return Err(LayoutError::ZeroBitsPerPixel);
    }

    let max_levels = max_mip_levels(width, height);
    if level > max_levels {
        return Err(LayoutError::LevelOutOfRange { level, max_levels });
    }

    Ok(BitsPerPixel(bits_per_pixel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mip_data_size;

    #[test]
    fn max_levels_valid() {
        assert_eq!(Ok(1), try_max_mip_levels(1, 1));
        assert_eq!(Ok(7), try_max_mip_levels(64, 64));
        assert_eq!(Ok(11), try_max_mip_levels(1024, 2));
    }

    #[test]
    fn max_levels_zero_dimension() {
        assert_eq!(
            Err(LayoutError::ZeroDimension {
                width: 0,
                height: 0
            }),
            try_max_mip_levels(0, 0)
        );
        assert_eq!(
            Err(LayoutError::ZeroDimension {
                width: 64,
                height: 0
            }),
            try_max_mip_levels(64, 0)
        );
    }

    #[test]
    fn max_levels_too_large() {
        assert_eq!(
            Err(LayoutError::DimensionTooLarge {
                width: 2048,
                height: 16,
                max_dimension: 1024
            }),
            try_max_mip_levels(2048, 16)
        );
        // Size is checked before the power of two.
        assert_eq!(
            Err(LayoutError::DimensionTooLarge {
                width: 16,
                height: 1025,
                max_dimension: 1024
            }),
            try_max_mip_levels(16, 1025)
        );
    }

    #[test]
    fn max_levels_not_power_of_two() {
        assert_eq!(
            Err(LayoutError::NotPowerOfTwo {
                width: 100,
                height: 100
            }),
            try_max_mip_levels(100, 100)
        );
    }

    #[test]
    fn offset_valid() {
        assert_eq!(Ok(0), try_mip_data_offset(8, 8, BitsPerPixel(8), 0));
        assert_eq!(Ok(84), try_mip_data_offset(8, 8, BitsPerPixel(8), 3));
        assert_eq!(Ok(85), try_mip_data_offset(8, 8, BitsPerPixel(8), 4));
    }

    #[test]
    fn offset_level_out_of_range() {
        assert_eq!(
            Err(LayoutError::LevelOutOfRange {
                level: 5,
                max_levels: 4
            }),
            try_mip_data_offset(8, 8, BitsPerPixel(8), 5)
        );
        assert_eq!(
            Err(LayoutError::LevelOutOfRange {
                level: usize::MAX,
                max_levels: 4
            }),
            try_mip_data_offset(8, 8, BitsPerPixel(8), usize::MAX)
        );
    }

    #[test]
    fn offset_dimensions_checked_first() {
        assert_eq!(
            Err(LayoutError::ZeroDimension {
                width: 0,
                height: 8
            }),
            try_mip_data_offset(0, 8, BitsPerPixel(0), 99)
        );
    }

    #[test]
    fn offset_zero_bits_per_pixel() {
        assert_eq!(
            Err(LayoutError::ZeroBitsPerPixel),
            try_mip_data_offset(8, 8, BitsPerPixel(0), 99)
        );
    }

    #[test]
    fn size_matches_unchecked() {
        for i in 0..=10 {
            for j in 0..=10 {
                let width = 1u16 << i;
                let height = 1u16 << j;
                for levels in 0..=max_mip_levels(width, height) {
                    assert_eq!(
                        Ok(mip_data_size(width, height, BitsPerPixel(4), levels)),
                        try_mip_data_size(width, height, BitsPerPixel(4), levels)
                    );
                }
            }
        }
    }

    #[test]
    fn format_resolved_once() {
        use core::cell::Cell;

        struct CountingFormat<'a>(&'a Cell<usize>);

        impl PixelFormat for CountingFormat<'_> {
            fn bits_per_pixel(&self) -> u32 {
                self.0.set(self.0.get() + 1);
                32
            }
        }

        let calls = Cell::new(0);
        assert_eq!(Ok(16384), try_mip_data_offset(64, 64, CountingFormat(&calls), 1));
        assert_eq!(1, calls.get());
    }
}
