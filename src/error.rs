//! Error types for bihmap.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bihmap operations.
pub type Result<T> = std::result::Result<T, MapError>;

/// Errors that can occur while loading, showing or exporting map data.
#[derive(Debug, Error)]
pub enum MapError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// File that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Unsupported geometry file format.
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat {
        /// Offending extension (may be empty).
        extension: String,
    },

    /// Malformed CSV row or header.
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// CSV file being read.
        path: PathBuf,
        /// Underlying parser error, carrying the line position.
        #[source]
        source: csv::Error,
    },

    /// Failed to read an ESRI shapefile.
    #[error("Shapefile error in {path}: {message}")]
    Shapefile {
        /// Shapefile being read.
        path: PathBuf,
        /// Reader message.
        message: String,
    },

    /// Failed to parse or convert GeoJSON.
    #[error("GeoJSON error in {path}: {message}")]
    GeoJson {
        /// GeoJSON file being read.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Unknown or unusable coordinate reference system.
    #[error("Projection error for '{crs}': {message}")]
    Projection {
        /// CRS definition that failed.
        crs: String,
        /// Transform message.
        message: String,
    },

    /// Directory walk failed.
    #[error("Failed to walk directory {path}: {message}")]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Walker message.
        message: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Failed to write an export file.
    #[error("Export to {path} failed: {source}")]
    Export {
        /// Export target.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a Csv error.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Create a Shapefile error.
    pub fn shapefile(path: impl Into<PathBuf>, err: shapefile::Error) -> Self {
        Self::Shapefile {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a Projection error.
    pub fn projection(crs: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Projection {
            crs: crs.into(),
            message: message.into(),
        }
    }

    /// Create a GeoJson error.
    pub fn geojson(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::GeoJson {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_names_extension() {
        let err = MapError::unsupported_format("kml");
        assert_eq!(err.to_string(), "Unsupported file format: kml");
    }

    #[test]
    fn file_open_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = MapError::file_open("BiH/data/country/bosnia.shp", io);
        assert!(err.to_string().contains("bosnia.shp"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
