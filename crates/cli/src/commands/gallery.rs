use std::path::PathBuf;

use anyhow::Result;
use caramel_client::{ChatWidget, GalleryApi, GalleryView, visitor_display};

pub(crate) async fn images(base_url: &str) -> Result<()> {
    let api = GalleryApi::new(base_url)?;
    let result = api.list_images().await;
    let view = GalleryView::from_result(&result, &api.list_images_url());
    if let Some(message) = view.message() {
        println!("{message}");
    }
    if let GalleryView::Cards(cards) = &view {
        for card in cards {
            println!("{}\t{}", card.caption, card.url);
        }
        println!("{} images", view.image_count());
    }
    Ok(())
}

pub(crate) async fn visitors(base_url: &str) -> Result<()> {
    let api = GalleryApi::new(base_url)?;
    println!("Visitors: {}", visitor_display(&api.visitor_count().await));
    Ok(())
}

pub(crate) async fn chat(base_url: &str, state_path: PathBuf, message: &str) -> Result<()> {
    let api = GalleryApi::new(base_url)?;
    let mut widget = ChatWidget::persistent(api, state_path)?;
    let reply = widget.send(message).await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}
