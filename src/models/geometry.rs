use serde::Serialize;

/// Lon/lat bounding box, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryExtent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl GeometryExtent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
}

impl From<(f64, f64, f64, f64)> for GeometryExtent {
    fn from(extent: (f64, f64, f64, f64)) -> Self {
        GeometryExtent {
            minx: extent.0,
            miny: extent.1,
            maxx: extent.2,
            maxy: extent.3,
        }
    }
}
