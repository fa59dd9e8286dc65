//! PDF rendering of inspection reports.
//!
//! - `document`: a genpdf document builder with best-effort section appends.
//! - `images`: fitting, alpha flattening and PNG re-encoding of embedded images.
//! - `report`: the material inspection report layout.

mod document;
mod images;
mod report;

pub use document::{ReportDocument, SkippedSection};
pub use images::ImageBox;
pub use report::{render_inspection_report, HeaderImages, ReportContent};

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("pdf layout failed: {0}")]
    Layout(#[from] genpdf::error::Error),

    #[error("image could not be decoded: {0}")]
    Image(#[from] image::ImageError),

    #[error("image could not be re-encoded: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
