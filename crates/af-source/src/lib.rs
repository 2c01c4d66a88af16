/// Image Sampler for asciify: decode, adjust, resample, and grid extraction.

pub mod adjust;
pub mod image;
pub mod resize;
pub mod sampler;
