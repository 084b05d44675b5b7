//! This crate provides routines for loading and saving animated GIF
//! images: the ordered frame sequence, the per-frame display delays,
//! and the loop count.
//!
//! The pixel-level GIF codec (LZW-compressed image planes, color
//! palettes) is not reimplemented here.  It is supplied by the host
//! imaging library through the traits in the [`codec`](codec/index.html)
//! module; this crate owns the container semantics: interpreting the
//! embedded metadata blocks, sequencing frames, and driving the
//! multi-frame write protocol in the order other GIF readers expect.

extern crate byteorder;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

#[cfg(test)]
extern crate tempfile;

pub use errcode::GifError;
pub use errcode::GifResult;
pub use frame::Frame;
pub use gif::Animation;

pub mod codec;
pub mod errcode;

mod frame;
mod gif;
mod raster;

/// Number of bytes per pixel in a raster buffer: RGBA, 8 bits per
/// channel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An owned frame buffer.
///
/// Pixels are stored row major, [`BYTES_PER_PIXEL`](constant.BYTES_PER_PIXEL.html)
/// bytes per pixel, no padding between rows.  A newly allocated raster
/// is cleared to zero, which is the deterministic background that
/// sub-frames are composited onto.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct Raster {
    w: usize,
    h: usize,
    buf: Vec<u8>,
}

/// A writable view into pixel memory, with an offset and stride.
///
/// Decoders composite the active sub-frame into one of these.  The
/// fields are public so that host codecs can address the buffer
/// directly; the constructors check that the view lies inside the
/// buffer.  `x`, `w` and `stride` are measured in pixels.
pub struct RasterMut<'a> {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub buf: &'a mut [u8],
}
