use std::path::PathBuf;

use papersync_core::SlideRenderer;
use papersync_domain::Result;

/// Height for a `width`-wide image keeping the source aspect ratio.
///
/// Never returns zero.
pub fn scale_to_width(src_width: u32, src_height: u32, width: u32) -> u32 {
    if src_width == 0 {
        return 1;
    }
    let height = u64::from(src_height) * u64::from(width) / u64::from(src_width);
    u32::try_from(height).unwrap_or(u32::MAX).max(1)
}

/// Renders page one of a PDF through the pdfium library.
///
/// The library is bound per call; a missing library fails that thumbnail
/// only.
#[derive(Debug, Clone, Default)]
pub struct PdfiumRenderer {
    library_dir: Option<PathBuf>,
}

impl PdfiumRenderer {
    /// `library_dir` is the directory holding the pdfium shared library;
    /// `None` uses the system library search path.
    pub fn new(library_dir: Option<PathBuf>) -> Self {
        Self { library_dir }
    }
}

#[cfg(feature = "thumbnails")]
impl SlideRenderer for PdfiumRenderer {
    fn render_thumbnail(&self, pdf: &[u8], width: u32) -> Result<Vec<u8>> {
        use std::io::Cursor;

        use image::imageops::FilterType;
        use image::{DynamicImage, ImageFormat, RgbaImage};
        use papersync_domain::PaperSyncError;
        use pdfium_render::prelude::{PdfRenderConfig, Pdfium};

        use crate::errors::InfraError;

        let bindings = match &self.library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|err| PaperSyncError::from(InfraError::from(err)))?;
        let pdfium = Pdfium::new(bindings);

        let document = pdfium
            .load_pdf_from_byte_slice(pdf, None)
            .map_err(|err| PaperSyncError::from(InfraError::from(err)))?;
        let page = document
            .pages()
            .first()
            .map_err(|err| PaperSyncError::from(InfraError::from(err)))?;
        let bitmap = page
            .render_with_config(&PdfRenderConfig::new().set_target_width(width as i32))
            .map_err(|err| PaperSyncError::from(InfraError::from(err)))?;

        let (src_width, src_height) = (bitmap.width() as u32, bitmap.height() as u32);
        let rendered = RgbaImage::from_raw(src_width, src_height, bitmap.as_rgba_bytes())
            .ok_or_else(|| PaperSyncError::Render("bitmap size mismatch".into()))?;
        let height = scale_to_width(src_width, src_height, width);
        let thumbnail =
            DynamicImage::ImageRgba8(rendered).resize_exact(width, height, FilterType::Lanczos3);

        let mut png = Cursor::new(Vec::new());
        thumbnail
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|err| PaperSyncError::from(InfraError::from(err)))?;
        Ok(png.into_inner())
    }
}

#[cfg(not(feature = "thumbnails"))]
impl SlideRenderer for PdfiumRenderer {
    fn render_thumbnail(&self, _pdf: &[u8], _width: u32) -> Result<Vec<u8>> {
        Err(papersync_domain::PaperSyncError::Render(
            "built without the thumbnails feature".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_keeps_aspect_ratio() {
        assert_eq!(scale_to_width(1600, 900, 400), 225);
        assert_eq!(scale_to_width(800, 600, 400), 300);
    }

    #[test]
    fn scale_never_returns_zero() {
        assert_eq!(scale_to_width(4000, 1, 400), 1);
        assert_eq!(scale_to_width(0, 900, 400), 1);
    }

    #[test]
    fn garbage_input_fails_to_render() {
        let renderer = PdfiumRenderer::default();
        // Fails either at library binding or at parsing; never panics.
        assert!(renderer.render_thumbnail(b"not a pdf", 400).is_err());
    }
}
