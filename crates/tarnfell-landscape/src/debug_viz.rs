//! Heightfield debug visualization: 2D image rendering of generated
//! terrain, used by tooling to eyeball a seed before importing it.

mod image;
mod renderers;

pub use self::image::HeightfieldImage;
pub use renderers::{height_to_color, render_heightfield};
