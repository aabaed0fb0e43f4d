//! Utility functions.
//!
//! This module provides helper functions for clipboard operations
//! and value formatting.

mod clipboard;
mod formatters;

pub use clipboard::{copy_marker_info, marker_info};
pub use formatters::{format_coordinate, format_number};
