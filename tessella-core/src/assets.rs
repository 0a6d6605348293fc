use std::path::PathBuf;

pub mod probe;
pub mod scan;

/// Decoded source image metadata.
///
/// `name` is the file basename and serves as the deterministic layout sort
/// key; ties are broken by the full path.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageRecord {
    /// Source file path.
    pub path: PathBuf,
    /// File basename, the layout sort key.
    pub name: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A file excluded from the run, with the reason it was excluded.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SkippedFile {
    /// Excluded source file.
    pub path: PathBuf,
    /// Failure description.
    pub reason: String,
}
