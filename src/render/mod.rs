/// CPU drawing surface.
pub mod cpu;
/// Rendered pixel frames.
pub mod frame;
/// Geometry and caption rules shared by both renderers.
pub mod layout;
/// Background pattern painters.
pub mod pattern;
/// Raster renderer.
pub mod raster;
/// Drawing-surface capability.
pub mod surface;
pub(crate) mod text;
/// SVG renderer.
pub mod vector;
