//! Local-filesystem file transport.

use std::fs;

use crate::errors::RadarError;
use crate::transport::FileTransport;

/// Reads delimited text straight from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFiles;

impl FileTransport for LocalFiles {
    fn fetch_text(&self, location: &str) -> Result<String, RadarError> {
        Ok(fs::read_to_string(location)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_text_from_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("radar.csv");
        fs::write(&path, "name,ring\n").unwrap();
        let text = LocalFiles.fetch_text(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "name,ring\n");
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let err = LocalFiles.fetch_text("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, RadarError::Io(_)));
    }
}
