mod ply;
mod text;

use crate::PointSet;
use std::{fs, io, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("bad PLY header: {0}")]
    Header(String),
}

/// Loads a point set, picking the reader by file name: `.ply` files are
/// read as PLY, anything else as text. A trailing `.gz` is inflated first.
pub fn load(path: impl AsRef<Path>) -> Result<PointSet, LoadError> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let inner = name.strip_suffix(".gz");
    let reader: Box<dyn io::BufRead> = match inner {
        Some(_) => Box::new(io::BufReader::new(flate2::read::GzDecoder::new(file))),
        None => Box::new(io::BufReader::new(file)),
    };
    let name = inner.unwrap_or(name);
    let set = if name.ends_with(".ply") {
        ply::read(reader)?
    } else {
        text::read(reader)?
    };
    log::info!("Loaded {} points from {}", set.points.len(), path.display());
    Ok(set)
}

/// Parses points pasted as text, one `x, y, z` per line.
pub fn parse(text: &str) -> Result<PointSet, LoadError> {
    text::read(text.as_bytes())
}
