use std::path::Path;

/// What the quiz can show for a question's image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Ready { width: u32, height: u32 },
    Unreadable(String),
}

/// Decode just enough of the file to learn its dimensions.
pub fn probe(path: &Path) -> ImageStatus {
    match image::image_dimensions(path) {
        Ok((width, height)) => ImageStatus::Ready { width, height },
        Err(e) => ImageStatus::Unreadable(e.to_string()),
    }
}

/// Hand the image to the system viewer.
pub fn open_in_viewer(path: &Path) -> Result<(), String> {
    open::that(path).map_err(|e| e.to_string())
}
