//! Client-side logic for the Caramel gallery page
//!
//! Fetches the image list and visitor count, turns them into view models and
//! drives the chat widget with its persisted session and reply cache.

mod api;
mod chat_widget;
mod error;
mod gallery;
mod local_state;

pub use api::{GalleryApi, resolve_base_url};
pub use chat_widget::{CHAT_CACHE_CAPACITY, ChatWidget, cache_key};
pub use error::ClientError;
pub use gallery::{
    EMPTY_GALLERY_MESSAGE, GalleryView, ImageCard, ModalInfo, VISITOR_COUNT_ERROR, visitor_display,
};
pub use local_state::{CachedReply, LocalState};
