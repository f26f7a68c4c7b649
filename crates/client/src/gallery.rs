//! View models for the gallery grid, the photo modal and the visitor badge.

use caramel_core::{file_name_from_url, lookup_metadata};

use crate::ClientError;

pub const EMPTY_GALLERY_MESSAGE: &str = "No images found in your storage container.";
pub const VISITOR_COUNT_ERROR: &str = "Error";

/// One grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCard {
    pub url: String,
    pub file_name: String,
    /// Metadata caption, or the file name for uncaptioned photos.
    pub caption: String,
}

impl ImageCard {
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let file_name = file_name_from_url(url);
        let caption = lookup_metadata(file_name).map_or(file_name, |meta| meta.caption);
        Self { url: url.to_owned(), file_name: file_name.to_owned(), caption: caption.to_owned() }
    }
}

/// Details panel shown next to the enlarged photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    pub title: String,
    pub date: String,
    pub weather: String,
    pub location: String,
    pub description: String,
}

impl ModalInfo {
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        let file_name = file_name_from_url(url);
        match lookup_metadata(file_name) {
            Some(meta) => Self {
                title: meta.caption.to_owned(),
                date: meta.date.to_owned(),
                weather: meta.weather.to_owned(),
                location: meta.location.to_owned(),
                description: meta.description.to_owned(),
            },
            None => Self {
                title: file_name.to_owned(),
                date: "Date not available".to_owned(),
                weather: "Weather not recorded".to_owned(),
                location: "Location unknown".to_owned(),
                description: "No description available for this image.".to_owned(),
            },
        }
    }
}

/// What the gallery area shows after a load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Empty,
    Cards(Vec<ImageCard>),
    Failed(String),
}

impl GalleryView {
    #[must_use]
    pub fn from_urls(urls: &[String]) -> Self {
        if urls.is_empty() {
            return Self::Empty;
        }
        Self::Cards(urls.iter().map(|url| ImageCard::from_url(url)).collect())
    }

    /// Maps a load result, naming the endpoint in the failure banner.
    #[must_use]
    pub fn from_result(result: &Result<Vec<String>, ClientError>, endpoint: &str) -> Self {
        match result {
            Ok(urls) => Self::from_urls(urls),
            Err(e) => {
                tracing::error!(error = %e, endpoint, "failed to load images");
                Self::Failed(format!("Failed to load images: {e}. Trying to fetch from: {endpoint}"))
            },
        }
    }

    /// Number shown in the stats line.
    #[must_use]
    pub fn image_count(&self) -> usize {
        match self {
            Self::Cards(cards) => cards.len(),
            Self::Empty | Self::Failed(_) => 0,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Empty => Some(EMPTY_GALLERY_MESSAGE),
            Self::Failed(message) => Some(message),
            Self::Cards(_) => None,
        }
    }
}

/// Visitor badge text; zero is treated like a failure.
#[must_use]
pub fn visitor_display(result: &Result<u64, ClientError>) -> String {
    match result {
        Ok(count) if *count > 0 => count.to_string(),
        Ok(_) => VISITOR_COUNT_ERROR.to_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "visitor count unavailable");
            VISITOR_COUNT_ERROR.to_owned()
        },
    }
}
