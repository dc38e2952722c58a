//! Documentation for the C API.
//!
//! None of the FFI methods allocate memory or take pointers.
//! Pixel formats are passed as their bits per pixel value.
//! Use [crate::try_mip_data_size] from Rust for validating inputs,
//! since the C API follows the unchecked behavior of the Rust functions.
use crate::BitsPerPixel;

/// See [crate::mip_data_offset].
#[no_mangle]
pub extern "C" fn mip_data_offset(
    width: u16,
    height: u16,
    bits_per_pixel: u32,
    level: usize,
) -> usize {
    crate::mip_data_offset(width, height, BitsPerPixel(bits_per_pixel), level)
}

/// See [crate::max_mip_levels].
#[no_mangle]
pub extern "C" fn max_mip_levels(width: u16, height: u16) -> usize {
    crate::max_mip_levels(width, height)
}

/// See [crate::mip_data_size].
#[no_mangle]
pub extern "C" fn mip_data_size(
    width: u16,
    height: u16,
    bits_per_pixel: u32,
    levels: usize,
) -> usize {
    crate::mip_data_size(width, height, BitsPerPixel(bits_per_pixel), levels)
}
