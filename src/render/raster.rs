use std::path::Path;

use log::debug;
use tiny_skia::Pixmap;
use usvg::Tree;

use crate::render::RenderError;

/// Rasterize an SVG document and write it to `path` as a PNG.
///
/// System fonts are loaded into the font database so stop labels and the
/// title render as text; on a machine with no fonts the map still renders,
/// just without labels.
pub fn write_png(svg: &str, path: &Path) -> Result<(), RenderError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = Tree::from_data(svg.as_bytes(), &options)?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height()).ok_or(RenderError::EmptyCanvas)?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);

    pixmap
        .save_png(path)
        .map_err(|e| RenderError::Png(e.to_string()))?;
    debug!(
        "wrote {}x{} map to {}",
        size.width(),
        size.height(),
        path.display()
    );
    Ok(())
}
