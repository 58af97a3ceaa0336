#[macro_use]
extern crate log;

use std::io::{self, Write};
use std::path::Path;
use failure::Fail;
use image::{image_dimensions, ImageError};

/// Badge images the app ships, relative to the repository root.
pub const BADGE_PATHS: [&str; 3] = [
    "assets/badges/android.png",
    "assets/badges/windows.png",
    "assets/badges/macos.png",
];

/// Name printed when the PNG decoder was not compiled in.
pub const DECODER_NAME: &str = "image (png)";

#[derive(Debug, Fail)]
pub enum CheckError {
    #[fail(display = "{} not installed", _0)]
    CapabilityUnavailable(&'static str),
    #[fail(display = "{} not found", _0)]
    FileNotFound(String),
    #[fail(display = "Error opening {}: {}", path, cause)]
    DecodeFailure {
        path: String,
        #[fail(cause)]
        cause: ImageError,
    },
}

/// Handle to the image decoding capability. Only obtainable through `Decoder::load`.
#[derive(Debug)]
pub struct Decoder {
    _loaded: (),
}

impl Decoder {
    /// Fails when the crate was built without the `png` feature.
    pub fn load() -> Result<Decoder, CheckError> {
        if cfg!(feature = "png") {
            trace!("PNG decoder available");
            Ok(Decoder { _loaded: () })
        } else {
            warn!("Built without PNG support");
            Err(CheckError::CapabilityUnavailable(DECODER_NAME))
        }
    }

    /// Return the width and height of an image.
    ///
    /// The file and decoder live only for the duration of this call and are
    /// dropped whether or not decoding succeeds.
    pub fn dimensions(&self, path: &Path) -> Result<(u32, u32), ImageError>
    { return image_dimensions(path); }
}

/// Existence check followed by a decode of a single path.
pub fn check(decoder: &Decoder, path: &str) -> Result<(u32, u32), CheckError> {
    if !Path::new(path).exists() {
        warn!("Badge image missing: {}", path);
        return Err(CheckError::FileNotFound(path.to_owned()));
    }
    match decoder.dimensions(Path::new(path)) {
        Ok(xy) => {
            debug!("Decoded {}: {}x{}", path, xy.0, xy.1);
            Ok(xy)
        },
        Err(e) => {
            warn!("Could not parse dimensions of image {}. Error {}", path, e);
            Err(CheckError::DecodeFailure { path: path.to_owned(), cause: e })
        }
    }
}

/// The report line for one path: its size, or whatever went wrong.
pub fn report_line(decoder: &Decoder, path: &str) -> String {
    match check(decoder, path) {
        Ok(dims) => format!("{}: {:?}", path, dims),
        Err(e) => e.to_string(),
    }
}

/// Write one line per path, in order. If the decoder could not be loaded,
/// write that single message instead and leave the filesystem alone.
pub fn report_paths<W: Write>(
    decoder: Result<Decoder, CheckError>,
    paths: &[&str],
    out: &mut W,
) -> io::Result<()> {
    let decoder = match decoder {
        Ok(decoder) => decoder,
        Err(e) => return writeln!(out, "{}", e),
    };
    for path in paths {
        trace!("Checking {}", path);
        writeln!(out, "{}", report_line(&decoder, path))?;
    }
    Ok(())
}

/// Report on every badge in `BADGE_PATHS`.
pub fn report<W: Write>(out: &mut W) -> io::Result<()> {
    report_paths(Decoder::load(), &BADGE_PATHS, out)
}
