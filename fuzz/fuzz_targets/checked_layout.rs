#![no_main]
use libfuzzer_sys::fuzz_target;

extern crate arbitrary;
use arbitrary::{Arbitrary, Result, Unstructured};
use mip_layout::BitsPerPixel;

#[derive(Debug)]
struct Input {
    width: u16,
    height: u16,
    format: BitsPerPixel,
    levels: usize,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Input {
            width: u.int_in_range(0..=2048)?,
            height: u.int_in_range(0..=2048)?,
            format: BitsPerPixel(u.int_in_range(0..=128)?),
            levels: u.int_in_range(0..=16)?,
        })
    }
}

fuzz_target!(|input: Input| {
    let result =
        mip_layout::try_mip_data_size(input.width, input.height, input.format, input.levels);

    if let Ok(size) = result {
        assert_eq!(
            mip_layout::mip_data_size(input.width, input.height, input.format, input.levels),
            size
        );

        // The mipmaps should exactly cover the combined buffer.
        let mut end = 0;
        for mip in mip_layout::mip_levels(input.width, input.height, input.format, input.levels) {
            assert_eq!(end, mip.offset);
            end = mip.offset + mip.size;
        }
        assert_eq!(size, end);
    }
});
