use crate::config::{ImageSize, MapType};
use crate::geometry::{ground_resolution, image_bounds};
use crate::models::{geometry::GeometryExtent, image::MapImage};
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use serde::Serialize;
use std::path::PathBuf;

/// What one fetch produced, for the terminal or `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct FetchSummary {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
    pub requested_size: ImageSize,
    pub map_type: MapType,
    pub scale: u8,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub color_type: String,
    pub format: Option<String>,
    pub metres_per_pixel: f64,
    pub bounds: GeometryExtent,
    pub output: Option<PathBuf>,
}

impl FetchSummary {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        image: &MapImage,
        lat: f64,
        lon: f64,
        zoom: u8,
        requested_size: ImageSize,
        map_type: MapType,
        scale: u8,
        output: Option<PathBuf>,
    ) -> Self {
        FetchSummary {
            lat,
            lon,
            zoom,
            requested_size,
            map_type,
            scale,
            width: image.width(),
            height: image.height(),
            channels: image.channels(),
            color_type: format!("{:?}", image.color_type()),
            format: image.format().map(|f| format!("{:?}", f)),
            metres_per_pixel: ground_resolution(lat, zoom, scale),
            bounds: image_bounds(lat, lon, zoom, requested_size),
            output,
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .set_header(vec![
                Cell::new("Field")
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center),
                Cell::new("Value")
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center),
            ])
            .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

        let rows = [
            ("Centre", format!("{:.6}, {:.6}", self.lat, self.lon)),
            ("Zoom", self.zoom.to_string()),
            (
                "Map type",
                format!("{} (scale {})", self.map_type, self.scale),
            ),
            (
                "Shape (h×w×c)",
                format!("{} × {} × {}", self.height, self.width, self.channels),
            ),
            ("Colour type", self.color_type.clone()),
            (
                "Format",
                self.format.clone().unwrap_or_else(|| "unknown".to_string()),
            ),
            ("Resolution", format!("{:.3} m/px", self.metres_per_pixel)),
            (
                "Bounds",
                format!(
                    "[{:.6}, {:.6}] → [{:.6}, {:.6}]",
                    self.bounds.minx, self.bounds.miny, self.bounds.maxx, self.bounds.maxy
                ),
            ),
        ];
        for (field, value) in rows {
            table.add_row(vec![Cell::new(field), Cell::new(value)]);
        }
        if let Some(path) = &self.output {
            table.add_row(vec![
                Cell::new("Saved to"),
                Cell::new(path.display().to_string()),
            ]);
        }
        table
    }
}

pub fn print_fetch_summary(summary: &FetchSummary) {
    println!("{}", summary.to_table());
}
