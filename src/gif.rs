//! Animation container implementation.

use std::cmp::min;
use std::fs::File;
use std::io::{Read,Write};
use std::mem;
use std::path::Path;
use byteorder::LittleEndian as LE;
use byteorder::{ByteOrder,WriteBytesExt};

use ::{Frame,GifError,GifResult,Raster};
use codec::*;

/// An animated GIF: an ordered sequence of frames plus a loop count.
///
/// Insertion order is display order.  The container owns its frames
/// exclusively and, transitively, each frame's pixel buffer.  An empty
/// container is a valid transient state; at least one frame is
/// required only at save time.
///
/// All frames are assumed to share one width and height.  That is not
/// enforced here - it is the [`Frame`](struct.Frame.html) replacement
/// invariant that keeps a frame's dimensions stable over its life.
///
/// The container performs no internal synchronization; concurrent
/// mutation from multiple threads is the caller's problem
/// (single-writer discipline expected at the call site).
///
/// # Examples
///
/// ```
/// use gifanim::{Animation,Frame,Raster};
///
/// let mut anim = Animation::new();
/// anim.add_frame(Frame::new(Raster::new(2, 2), 10).unwrap());
/// anim.add_frame(Frame::new(Raster::new(2, 2), 20).unwrap());
/// assert_eq!(anim.frame_count(), 2);
/// assert_eq!(anim.loop_count(), 0);
/// ```
#[derive(Clone,Debug,Default)]
pub struct Animation {
    frames: Vec<Frame>,
    loop_count: u16,
}

/*--------------------------------------------------------------*/

impl Animation {
    /// Create an empty animation that loops forever.
    pub fn new() -> Self {
        Animation {
            frames: Vec::new(),
            loop_count: 0,
        }
    }

    /// Create an empty animation with the given loop count.
    pub fn with_loop_count(loop_count: u16) -> Self {
        Animation {
            frames: Vec::new(),
            loop_count: loop_count,
        }
    }

    /// Number of times the animation replays; 0 means loop forever.
    pub fn loop_count(&self) -> u16 {
        self.loop_count
    }

    /// Set the loop count; 0 means loop forever.
    pub fn set_loop_count(&mut self, loop_count: u16) {
        self.loop_count = loop_count;
    }

    /// Get the frame count.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True if the animation holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get the canvas dimensions, taken from the first frame.
    ///
    /// Returns `None` while the animation is empty.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.frames.first().map(|f| (f.width(), f.height()))
    }

    /// Borrow the frames, in display order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Borrow the frame at the given index.
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Borrow the frame at the given index, writable.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    /// Append a frame to the end of the sequence.
    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Insert a frame at the given index, shifting later frames back.
    ///
    /// # Panics
    ///
    /// Panics if `index > frame_count()`.
    pub fn insert_frame(&mut self, index: usize, frame: Frame) {
        self.frames.insert(index, frame);
    }

    /// Replace the frame at the given index, returning the old frame.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set_frame(&mut self, index: usize, frame: Frame) -> Frame {
        mem::replace(&mut self.frames[index], frame)
    }

    /// Remove and return the frame at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn remove_frame(&mut self, index: usize) -> Frame {
        self.frames.remove(index)
    }

    /// Remove the first frame equal to the given one.
    ///
    /// Returns true if a frame was removed.
    pub fn remove_item(&mut self, frame: &Frame) -> bool {
        match self.frames.iter().position(|f| f == frame) {
            Some(index) => {
                self.frames.remove(index);
                true
            },
            None => false,
        }
    }

    /// Remove every frame matching the predicate, preserving the
    /// relative order of the survivors.
    ///
    /// Returns the number of frames removed.
    pub fn remove_matching<F>(&mut self, mut f: F) -> usize
            where F: FnMut(&Frame) -> bool {
        let before = self.frames.len();
        self.frames.retain(|frame| !f(frame));
        before - self.frames.len()
    }

    /// Remove `count` frames starting at `start`, preserving the
    /// relative order of the survivors.
    ///
    /// # Panics
    ///
    /// Panics if the range runs past the end of the sequence.
    pub fn remove_range(&mut self, start: usize, count: usize) {
        self.frames.drain(start..start + count);
    }

    /// Remove all frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

/*--------------------------------------------------------------*/

impl Animation {
    /// Load an animation from a GIF file.
    ///
    /// Fails with `NotAnimated` if the file lacks the animation
    /// metadata blocks; IO failures are passed through.
    pub fn open(codec: &dyn Codec, filename: &Path)
            -> GifResult<Animation> {
        let file = File::open(filename)?;
        Animation::load(codec, file)
    }

    /// Load an animation from a byte stream.
    ///
    /// Fails with `NotAnimated` if the stream lacks the animation
    /// metadata blocks; IO failures are passed through.
    pub fn load<'a, R: Read + 'a>(codec: &dyn Codec, src: R)
            -> GifResult<Animation> {
        let mut decoder = codec.decoder(Box::new(src))?;
        Animation::from_decoder(&mut *decoder)
    }

    /// Load an animation from an opened decoder.
    ///
    /// The decoder must report at least one sub-frame along the
    /// temporal dimension and carry both the frame-delay and the
    /// loop-count property blocks, or the source is `NotAnimated`.
    ///
    /// Two documented leniencies, both logged as warnings rather than
    /// swallowed silently:
    ///
    /// - a trailing partial chunk of the delay table is read from the
    ///   bytes actually present, never zero padded, so its value is
    ///   short;
    /// - a delay table with fewer entries than the reported frame
    ///   count truncates the animation to the table's length and the
    ///   trailing frames are dropped.
    pub fn from_decoder(decoder: &mut dyn Decoder)
            -> GifResult<Animation> {
        let frame_count = decoder.frame_count()?;
        if frame_count == 0 {
            return Err(GifError::NotAnimated);
        }

        let loop_count = match decoder.property(TAG_LOOP_COUNT)? {
            Some(data) => read_loop_count(&data)?,
            None => return Err(GifError::NotAnimated),
        };

        let delays = match decoder.property(TAG_FRAME_DELAY)? {
            Some(data) => read_delays(&data),
            None => return Err(GifError::NotAnimated),
        };

        let w = decoder.width();
        let h = decoder.height();
        if w == 0 || h == 0 {
            return Err(GifError::NotAnimated);
        }

        if delays.len() < frame_count {
            warn!("delay table holds {} entries for {} frames; dropping trailing frames",
                    delays.len(), frame_count);
        }

        let count = min(frame_count, delays.len());
        let mut frames = Vec::with_capacity(count);
        for index in 0..count {
            decoder.select_frame(index)?;

            // Full-canvas target, cleared to the background color: a
            // sub-frame need not cover the whole canvas.
            let mut raster = Raster::new(w, h);
            decoder.read_frame(&mut raster.as_mut())?;

            frames.push(Frame::new(raster, delays[index])?);
        }

        Ok(Animation {
            frames: frames,
            loop_count: loop_count,
        })
    }
}

/*--------------------------------------------------------------*/

impl Animation {
    /// Save the animation to a GIF file.
    ///
    /// The file is created, or truncated if it exists.  Fails with
    /// `EmptyAnimation`, before the file is touched, if the animation
    /// holds no frames.
    pub fn save(&self, codec: &dyn Codec, filename: &Path)
            -> GifResult<()> {
        if self.frames.is_empty() {
            return Err(GifError::EmptyAnimation);
        }

        let file = File::create(filename)?;
        self.write(codec, file)
    }

    /// Save the animation to a byte stream.
    ///
    /// Fails with `EmptyAnimation`, before any byte is written, if
    /// the animation holds no frames.
    pub fn write<'a, W: Write + 'a>(&self, codec: &dyn Codec, dst: W)
            -> GifResult<()> {
        if self.frames.is_empty() {
            return Err(GifError::EmptyAnimation);
        }

        let mut encoder = codec.encoder(Box::new(dst))?;
        self.encode_to(&mut *encoder)
    }

    /// Drive an encoder through the multi-frame write protocol.
    ///
    /// The first frame is written with `MultiFrame`, carrying both
    /// property blocks; every remaining frame is appended in display
    /// order with `FrameDimensionTime`; one final `Flush` with no
    /// payload closes out the structure.  The ordering is load
    /// bearing for compatibility with other GIF readers.
    ///
    /// A failure at any step aborts the save.  Bytes already written
    /// to the destination are not rolled back: treat the output of a
    /// failed save as invalid, not as something to retry or append to.
    pub fn encode_to(&self, encoder: &mut dyn Encoder)
            -> GifResult<()> {
        if self.frames.is_empty() {
            return Err(GifError::EmptyAnimation);
        }

        let props = [
            PropertyBlock {
                tag: TAG_FRAME_DELAY,
                data: write_delays(&self.frames)?,
            },
            PropertyBlock {
                tag: TAG_LOOP_COUNT,
                data: write_loop_count(self.loop_count)?,
            },
        ];

        encoder.encode(Some(self.frames[0].raster()), &props,
                WriteMode::MultiFrame)?;

        for frame in &self.frames[1..] {
            encoder.encode(Some(frame.raster()), &[],
                    WriteMode::FrameDimensionTime)?;
        }

        encoder.encode(None, &[], WriteMode::Flush)?;

        Ok(())
    }
}

/*--------------------------------------------------------------*/

/// Read the loop-count property payload.
///
/// A payload too short to hold the value is treated the same as a
/// missing block.
fn read_loop_count(buf: &[u8])
        -> GifResult<u16> {
    if buf.len() < SIZE_OF_LOOP_COUNT {
        return Err(GifError::NotAnimated);
    }

    Ok(LE::read_u16(buf))
}

/// Split the frame-delay property payload into per-frame delays.
///
/// The payload is cut into chunks of `SIZE_OF_DELAY_ENTRY` bytes, one
/// little-endian integer per frame.  A trailing partial chunk is
/// truncated to the bytes actually present, never zero padded; the
/// short value it yields is the caller's risk, so it is warned about.
fn read_delays(buf: &[u8])
        -> Vec<u32> {
    if buf.len() % SIZE_OF_DELAY_ENTRY != 0 {
        warn!("delay table length {} is not a multiple of {}; final delay read from a short chunk",
                buf.len(), SIZE_OF_DELAY_ENTRY);
    }

    buf.chunks(SIZE_OF_DELAY_ENTRY)
        .map(|chunk| LE::read_uint(chunk, chunk.len()) as u32)
        .collect()
}

/// Serialize the per-frame delays into one property payload, in frame
/// order.
fn write_delays(frames: &[Frame])
        -> GifResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(SIZE_OF_DELAY_ENTRY * frames.len());
    for frame in frames {
        buf.write_u32::<LE>(frame.delay())?;
    }

    Ok(buf)
}

/// Serialize the loop count into one property payload.
fn write_loop_count(loop_count: u16)
        -> GifResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(SIZE_OF_LOOP_COUNT);
    buf.write_u16::<LE>(loop_count)?;

    Ok(buf)
}
