//! Error types for the a8car-core library.
//!
//! Every fallible operation in the crate returns [`Error`]. Each variant maps
//! onto one coarse [`ErrorKind`], which is what command-line front ends print.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for a8car operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all a8car operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O failure on a caller-supplied reader or writer
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is shorter than the fixed CAR header
    #[error("insufficient bytes for header: need {needed}, have {available}")]
    TruncatedHeader {
        /// Header length
        needed: usize,
        /// Bytes actually available
        available: usize,
    },

    /// Header does not start with the `CART` signature
    #[error("invalid signature {found:02X?}, expected \"CART\"")]
    BadMagic {
        /// The four bytes found at offset 0
        found: [u8; 4],
    },

    /// No cartridge type matches an explicitly named id or name
    #[error("unknown cartridge type '{query}'")]
    UnknownType {
        /// The id or name that was looked up
        query: String,
    },

    /// No cartridge type has a canonical size equal to the ROM length
    #[error("couldn't identify CART type for a ROM of {len} bytes")]
    NoMatchingType {
        /// ROM length in bytes
        len: usize,
    },

    /// Conversion of a zero-length ROM
    #[error("ROM file length is 0")]
    EmptyRom,

    /// Failed to serialize a listing
    #[error("failed to serialize listing: {0}")]
    Json(#[from] serde_json::Error),

    /// A virtual type was supplied where real hardware is required
    #[error("cannot set cart type to {id} - {description}")]
    VirtualType {
        /// Id of the rejected type
        id: i32,
        /// Description of the rejected type
        description: &'static str,
    },
}

/// Coarse classification of [`Error`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed container bytes
    Format,
    /// Strict type lookup failed
    Lookup,
    /// Autodetection found no candidate
    Detection,
    /// Argument value rejected
    Value,
    /// File system, stream or output serialization failure
    Io,
}

impl ErrorKind {
    /// Returns the diagnostic label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Format => "FormatError",
            ErrorKind::Lookup => "LookupError",
            ErrorKind::Detection => "DetectionError",
            ErrorKind::Value => "ValueError",
            ErrorKind::Io => "IoError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new lookup error
    pub fn unknown_type(query: impl Into<String>) -> Self {
        Self::UnknownType {
            query: query.into(),
        }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) | Self::Json(_) => {
                ErrorKind::Io
            }
            Self::TruncatedHeader { .. } | Self::BadMagic { .. } => ErrorKind::Format,
            Self::UnknownType { .. } => ErrorKind::Lookup,
            Self::NoMatchingType { .. } => ErrorKind::Detection,
            Self::EmptyRom | Self::VirtualType { .. } => ErrorKind::Value,
        }
    }
}
