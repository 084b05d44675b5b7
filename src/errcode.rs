//! GIF error codes.

use std::io;

pub type GifResult<T> = Result<T, GifError>;

quick_error! {
    #[derive(Debug)]
    pub enum GifError {
        /// A required input was null sized or otherwise unusable.
        InvalidArgument {
            display("Invalid argument")
        }

        /// A frame's replacement buffer does not match the frame's
        /// width and height.
        DimensionMismatch {
            display("Dimension mismatch")
        }

        /// The source lacks the animation metadata blocks.
        NotAnimated {
            display("Not an animated image")
        }

        /// Save was attempted with zero frames.
        EmptyAnimation {
            display("Animation contains no frames")
        }

        /// The host platform has no GIF-capable encoder.
        UnsupportedEncoder {
            display("No GIF encoder available")
        }

        // IO error.
        Io(err: io::Error) {
            from()
            cause(err)
            display("IO error: {}", err)
        }
    }
}
