use crate::error::Result;
use crate::models::image::MapImage;
use async_trait::async_trait;

pub mod google;

/// A source of static map images.
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// Fetch and decode one image centred on (`lat`, `lon`) at `zoom`.
    ///
    /// Every call issues its own request; nothing is cached between calls.
    async fn download_image(&self, lat: f64, lon: f64, zoom: u8) -> Result<MapImage>;
}
