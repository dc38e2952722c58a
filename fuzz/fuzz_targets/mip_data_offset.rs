#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate arbitrary;
use arbitrary::Arbitrary;
use mip_layout::BitsPerPixel;

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    height: u16,
    format: BitsPerPixel,
    level: usize,
}

fuzz_target!(|input: Input| {
    // This should never panic even if the level or dimensions are invalid.
    let offset = mip_layout::mip_data_offset(input.width, input.height, input.format, input.level);
    let size = mip_layout::mip_data_size(input.width, input.height, input.format, input.level);
    assert_eq!(offset, size);

    let _ = mip_layout::mip_level_size(input.width, input.height, input.format, input.level);
    let _ = mip_layout::max_mip_levels(input.width, input.height);
});
