pub mod credential;
pub mod geometry;
pub mod image;
