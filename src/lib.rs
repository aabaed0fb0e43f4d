//! bihmap - A terminal map of Bosnia and Herzegovina.
//!
//! bihmap draws the country and municipality outlines together with points of
//! interest, grouped by priority. Priority toggles filter both the map markers
//! and a companion table of categories.
//!
//! # Features
//!
//! - ESRI shapefile and GeoJSON outline layers
//! - CSV category and point of interest tables
//! - Web Mercator projection
//! - Pan, zoom, hover tooltips and GeoJSON export
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use bihmap::data::MapData;
//! use std::path::Path;
//!
//! let data = MapData::load(Path::new("BiH/data"))?;
//! println!("{} points of interest", data.entries.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod filter;
pub mod input;
pub mod map;
pub mod projection;
pub mod shared;
pub mod summary;
pub mod table;
pub mod ui;
pub mod util;

pub use error::{MapError, Result};
