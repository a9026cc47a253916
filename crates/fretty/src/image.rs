//! Destinations for images referenced from embedded documents.

use std::path::{Path, PathBuf};

use log::debug;

use crate::{FrettyError, raster};

/// Receives the standalone SVG of every tag that asks for an image file.
pub trait ImageSink {
    /// Stores `svg` under `name`, e.g. `"a-minor.png"`.
    fn write_image(&self, name: &str, svg: &str) -> Result<(), FrettyError>;
}

/// Writes images into a directory; `.png` names are rasterized.
#[derive(Debug, Clone)]
pub struct FileImageSink {
    dir: PathBuf,
}

impl FileImageSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageSink for FileImageSink {
    fn write_image(&self, name: &str, svg: &str) -> Result<(), FrettyError> {
        let path = self.dir.join(name);
        debug!(name = name, path:? = path; "Writing embedded image");
        raster::write_image(&path, svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_writes_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileImageSink::new(dir.path());

        sink.write_image("g.svg", "<svg/>").unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("g.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn test_file_sink_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileImageSink::new(dir.path().join("missing"));

        assert!(matches!(
            sink.write_image("g.svg", "<svg/>"),
            Err(FrettyError::Io(_))
        ));
    }
}
