//! Clipboard operations.

use crate::data::Priority;
use crate::error::Result;
use crate::map::Marker;
use crate::util::format_coordinate;
use arboard::Clipboard;

/// Text copied for a point of interest.
pub fn marker_info(marker: &Marker, priority_name: &str, priority: Priority) -> String {
    format!(
        "Name: {}\nPOI: {}\nPriority: {} ({})\nLocation: {}",
        marker.name,
        marker.category,
        priority_name,
        priority,
        format_coordinate(marker.longitude, marker.latitude)
    )
}

/// Copy point of interest details to the clipboard.
pub fn copy_marker_info(marker: &Marker, priority_name: &str, priority: Priority) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(marker_info(marker, priority_name, priority))?;
    Ok(())
}
