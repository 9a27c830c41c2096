//! Resource acquisition seam for the one-time startup fetch.
//!
//! # Responsibility
//! - Define the fetch contract the store loads through.
//! - Provide the production JSON-file implementation.
//!
//! # Invariants
//! - A fetch either yields the complete seed list or a `LoadError`; there is
//!   no partial-data result.

use crate::model::celebrity::CelebritySeed;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

/// Fixed path of the static resource, relative to the working directory.
pub const DEFAULT_RESOURCE_PATH: &str = "celebrities.json";

/// Result type for fetch operations.
pub type FetchResult = Result<Vec<CelebritySeed>, LoadError>;

/// Failure raised by the initial fetch or its decoding.
///
/// This is the only failure the system can surface; everything after a
/// successful load is total over the in-memory roster.
#[derive(Debug)]
pub enum LoadError {
    /// The resource could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The resource content is not a valid celebrity array.
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Fetch contract for the startup load.
///
/// Implementations must be side-effect free beyond the read itself; the
/// store decides when (and that only once) a fetch happens.
pub trait CelebritySource {
    fn fetch(&self) -> FetchResult;
}

/// Production source: a JSON array at a fixed filesystem path.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_PATH)
    }
}

impl CelebritySource for JsonFileSource {
    fn fetch(&self) -> FetchResult {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| LoadError::Decode {
            path: self.path.clone(),
            source,
        })
    }
}
