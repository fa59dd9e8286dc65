use super::PdfError;
use genpdf::elements::Image as PdfImage;
use genpdf::Alignment;
use image::imageops::FilterType;
use image::{load_from_memory, DynamicImage, GenericImageView};
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Resolution at which embedded images are sampled.
pub const IMAGE_DPI: f64 = 150.0;
const POINTS_PER_INCH: f64 = 72.0;

/// Bounding box, in points, an image is fitted into while keeping its aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct ImageBox {
    pub max_width_pt: f64,
    pub max_height_pt: f64,
}

impl ImageBox {
    pub const fn new(max_width_pt: f64, max_height_pt: f64) -> Self {
        Self {
            max_width_pt,
            max_height_pt,
        }
    }

    fn pixels_at(&self, dpi: f64) -> (f64, f64) {
        (
            self.max_width_pt / POINTS_PER_INCH * dpi,
            self.max_height_pt / POINTS_PER_INCH * dpi,
        )
    }
}

/// Decodes `bytes` and turns them into a centered genpdf image that fits `bounds`.
///
/// Oversized images are resampled down; small ones keep their pixels and get a lower DPI so
/// they still fill the box. genpdf cannot embed alpha channels, so the image is flattened
/// over white and written to a temporary PNG that must outlive the rendering.
pub(crate) fn fitted_image(
    bytes: &[u8],
    bounds: ImageBox,
    temp_files: &mut Vec<NamedTempFile>,
) -> Result<PdfImage, PdfError> {
    let img = load_from_memory(bytes)?;
    let (orig_w, orig_h) = img.dimensions();
    let orig_w_f = f64::from(orig_w.max(1));
    let orig_h_f = f64::from(orig_h.max(1));

    let (max_w_px, max_h_px) = bounds.pixels_at(IMAGE_DPI);
    let scale = (max_w_px / orig_w_f).min(max_h_px / orig_h_f);

    let (resized, dpi): (DynamicImage, f64) = if scale >= 1.0 {
        (img, IMAGE_DPI / scale)
    } else {
        let new_w = (orig_w_f * scale).max(1.0).round() as u32;
        let new_h = (orig_h_f * scale).max(1.0).round() as u32;
        (img.resize(new_w, new_h, FilterType::Lanczos3), IMAGE_DPI)
    };

    let rgba = resized.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut background = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut background, &rgba, 0, 0);
    let raw = DynamicImage::ImageRgba8(background).to_rgb8().into_raw();

    let mut tmp = NamedTempFile::new()?;
    {
        let file = tmp.as_file_mut();
        let mut encoder = PngEncoder::new(file, w, h);
        encoder.set_color(PngColorType::Rgb);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&raw)?;
    }

    let path: PathBuf = tmp.path().to_path_buf();
    let mut element = PdfImage::from_path(path)?;
    element.set_dpi(dpi);
    element.set_alignment(Alignment::Center);
    temp_files.push(tmp);
    Ok(element)
}
