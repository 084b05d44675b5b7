//! Animation frame implementation.

use ::{GifError,GifResult,Raster};

/// A single timed frame of an animation.
///
/// A frame owns its pixel buffer exclusively; replacing the buffer
/// moves a new raster in rather than sharing one.  The display delay
/// is expressed in hundredths of a second, per the GIF convention.  A
/// delay of 0 is legal and means "no specified delay" - many readers
/// treat it as an instantaneous advance.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct Frame {
    raster: Raster,
    delay: u32,
}

impl Frame {
    /// Create a new frame from a raster and a display delay in
    /// hundredths of a second.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the raster has no pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// let raster = gifanim::Raster::new(320, 200);
    /// let frame = gifanim::Frame::new(raster, 10).unwrap();
    /// assert_eq!(frame.delay(), 10);
    /// ```
    pub fn new(raster: Raster, delay: u32)
            -> GifResult<Self> {
        if raster.is_empty() {
            return Err(GifError::InvalidArgument);
        }

        Ok(Frame {
            raster: raster,
            delay: delay,
        })
    }

    /// Get the frame width in pixels.
    pub fn width(&self) -> usize {
        self.raster.width()
    }

    /// Get the frame height in pixels.
    pub fn height(&self) -> usize {
        self.raster.height()
    }

    /// Borrow the frame's pixel buffer.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Replace the frame's pixel buffer, releasing the old one.
    ///
    /// The replacement must have the same width and height as the
    /// current buffer.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the dimensions differ; the
    /// stored buffer is left unchanged.
    pub fn set_raster(&mut self, raster: Raster)
            -> GifResult<()> {
        if raster.width() != self.raster.width()
                || raster.height() != self.raster.height() {
            return Err(GifError::DimensionMismatch);
        }

        self.raster = raster;
        Ok(())
    }

    /// Consume the frame and take its raster.
    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// Number of hundredths of a second to display the frame.
    pub fn delay(&self) -> u32 {
        self.delay
    }

    /// Set the display delay, in hundredths of a second.
    pub fn set_delay(&mut self, delay: u32) {
        self.delay = delay;
    }
}
