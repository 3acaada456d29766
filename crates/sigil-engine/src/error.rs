//! Error types surfaced by the engine.
//!
//! Every fallible operation reports synchronously and leaves the context as it
//! was before the call. Recovery (fallback font, skipping a frame) is up to the
//! host.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A size conversion that would overflow or change sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRangeError {
    pub value: String,
    pub from: &'static str,
    pub to: &'static str,
}

impl fmt::Display for NumericRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad integral cast from {} ({}) to {}", self.from, self.value, self.to)
    }
}

impl std::error::Error for NumericRangeError {}

/// Converts between integer types, failing instead of truncating or wrapping.
pub fn checked_cast<T, U>(value: T) -> Result<U, NumericRangeError>
where
    T: Copy + fmt::Display,
    U: TryFrom<T>,
{
    U::try_from(value).map_err(|_| NumericRangeError {
        value: value.to_string(),
        from: std::any::type_name::<T>(),
        to: std::any::type_name::<U>(),
    })
}

/// Error returned by [`Context::set_font`](crate::core::Context::set_font).
#[derive(Debug)]
pub enum FontLoadError {
    /// Texture id 0 is reserved for untextured figures.
    NoTextureId { path: PathBuf },
    InvalidSize { path: PathBuf, size: f32 },
    CouldNotOpenFile { path: PathBuf, source: io::Error },
    InvalidFile { path: PathBuf, reason: String },
    /// The glyph range does not fit into the atlas at the requested size.
    CouldNotFitCharacters { path: PathBuf, size: f32, width: u32, height: u32 },
    NumericRange(NumericRangeError),
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::NoTextureId { path } => {
                write!(f, "no texture id was specified for font: [{}]", path.display())
            }
            FontLoadError::InvalidSize { path, size } => {
                write!(f, "invalid size specified for font: [{}], size: [{size}]", path.display())
            }
            FontLoadError::CouldNotOpenFile { path, source } => {
                write!(f, "could not open font file: [{}]: {source}", path.display())
            }
            FontLoadError::InvalidFile { path, reason } => {
                write!(f, "invalid file for font: [{}]: {reason}", path.display())
            }
            FontLoadError::CouldNotFitCharacters { path, size, width, height } => write!(
                f,
                "could not fit characters for font: [{}], size: [{size}], atlas size: [{width}x{height}]",
                path.display()
            ),
            FontLoadError::NumericRange(e) => write!(f, "font load error: {e}"),
        }
    }
}

impl std::error::Error for FontLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FontLoadError::CouldNotOpenFile { source, .. } => Some(source),
            FontLoadError::NumericRange(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NumericRangeError> for FontLoadError {
    fn from(e: NumericRangeError) -> Self {
        FontLoadError::NumericRange(e)
    }
}

/// `render_all` was called before a render handler was registered.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct NoRenderHandlerError;

impl fmt::Display for NoRenderHandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no render handler specified")
    }
}

impl std::error::Error for NoRenderHandlerError {}

/// Any engine error, for hosts that want a single error type.
#[derive(Debug)]
pub enum SigilError {
    FontLoad(FontLoadError),
    NoRenderHandler(NoRenderHandlerError),
    NumericRange(NumericRangeError),
}

impl fmt::Display for SigilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigilError::FontLoad(e) => e.fmt(f),
            SigilError::NoRenderHandler(e) => e.fmt(f),
            SigilError::NumericRange(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SigilError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SigilError::FontLoad(e) => Some(e),
            SigilError::NoRenderHandler(e) => Some(e),
            SigilError::NumericRange(e) => Some(e),
        }
    }
}

impl From<FontLoadError> for SigilError {
    fn from(e: FontLoadError) -> Self {
        SigilError::FontLoad(e)
    }
}

impl From<NoRenderHandlerError> for SigilError {
    fn from(e: NoRenderHandlerError) -> Self {
        SigilError::NoRenderHandler(e)
    }
}

impl From<NumericRangeError> for SigilError {
    fn from(e: NumericRangeError) -> Self {
        SigilError::NumericRange(e)
    }
}
