use crate::error::{Error, Result};
use image::{ColorType, DynamicImage, ImageFormat};
use std::path::Path;

/// A decoded static map.
#[derive(Debug, Clone)]
pub struct MapImage {
    image: DynamicImage,
    format: Option<ImageFormat>,
}

/// Row-major `height × width × channels` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterArray {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
    pub data: Vec<u8>,
}

impl RasterArray {
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }

    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if row >= self.height || col >= self.width || channel >= self.channels {
            return None;
        }
        self.data
            .get((row * self.width + col) * self.channels + channel)
            .copied()
    }
}

impl MapImage {
    /// Decode a PNG/JPEG/GIF payload, sniffing the format from its magic bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let format = image::guess_format(bytes).ok();
        let image = image::load_from_memory(bytes)?;
        Ok(MapImage { image, format })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn channels(&self) -> u8 {
        self.image.color().channel_count()
    }

    pub fn color_type(&self) -> ColorType {
        self.image.color()
    }

    /// Format the payload arrived in, when it could be recognised.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.height() as usize,
            self.width() as usize,
            self.channels() as usize,
        )
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Flatten to 8-bit samples, keeping the source channel layout.
    pub fn to_array(&self) -> RasterArray {
        let (height, width, channels) = self.shape();
        let data = match channels {
            1 => self.image.to_luma8().into_raw(),
            2 => self.image.to_luma_alpha8().into_raw(),
            3 => self.image.to_rgb8().into_raw(),
            _ => self.image.to_rgba8().into_raw(),
        };
        RasterArray {
            height,
            width,
            channels: channels.min(4),
            data,
        }
    }

    /// Write to disk; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path).map_err(|e| match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Encode(other),
        })
    }
}
