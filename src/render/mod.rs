/*
 * This module renders the transit network to an image: a hand-authored map
 * layout, an SVG document builder that draws the network and overlays the
 * computed route, and SVG-to-PNG rasterization.
 */

pub mod layout;
pub mod raster;
pub mod svg;

use thiserror::Error;

pub use layout::MapLayout;
pub use raster::write_png;
pub use svg::RouteMapSvg;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No layout position for stop: {0}")]
    MissingPosition(String),
    #[error("Failed to parse generated SVG: {0}")]
    Svg(#[from] usvg::Error),
    #[error("Rendered map has zero size")]
    EmptyCanvas,
    #[error("Failed to encode PNG: {0}")]
    Png(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
