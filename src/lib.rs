pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod models;
pub mod provider;
pub mod utils;

pub use config::{FetcherConfig, ImageSize, MapType};
pub use error::{Error, Result};
pub use models::{
    credential::ApiKey,
    image::{MapImage, RasterArray},
};
pub use provider::{MapProvider, google::GoogleStaticMaps};
