pub mod projection;

pub use projection::{ground_resolution, image_bounds, lon_lat_to_mercator, mercator_to_lon_lat};
