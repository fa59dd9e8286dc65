use super::document::{centered_title, ReportDocument};
use super::images::ImageBox;
use super::PdfError;
use common::model::installation::Installation;
use common::model::or_not_available;
use common::model::report::Report;
use genpdf::elements::{LinearLayout, TableLayout};
use log::warn;
use std::io;
use std::path::{Path, PathBuf};

const HEADER_IMAGE_BOX: ImageBox = ImageBox::new(50.0, 50.0);
const PHOTO_BOX: ImageBox = ImageBox::new(400.0, 300.0);

/// The two logos printed in the report header.
pub struct HeaderImages {
    pub emblem: Vec<u8>,
    pub logo: Vec<u8>,
}

/// Everything the inspection report layout reads.
pub struct ReportContent<'a> {
    pub report: &'a Report,
    /// The installation whose UID equals `report.qr_data`, if any.
    pub installation: Option<&'a Installation>,
    /// Header logos, or the reason they could not be obtained.
    pub header: Result<HeaderImages, String>,
    /// On-disk file behind `report.photo`. `None` when the reference does not resolve.
    pub photo_path: Option<PathBuf>,
}

/// Lays out the material inspection report and serializes it.
///
/// Header images and the attached photo are best effort: when they cannot be used the page
/// gets a one-line notice instead and the document is still completed.
pub fn render_inspection_report(
    content: &ReportContent<'_>,
    fonts_dir: &Path,
) -> Result<Vec<u8>, PdfError> {
    let report = content.report;
    let details = content.installation.map(|installation| &installation.details);
    let field = |value: Option<&Option<String>>| {
        or_not_available(value.and_then(|v| v.as_deref())).to_string()
    };

    let mut doc = ReportDocument::new(
        &format!("Material Inspection Report {}", report.qr_data),
        fonts_dir,
    )?;

    // 1) Header logos and ministry title
    match &content.header {
        Ok(images) => {
            let pushed = doc.append_section("header", |doc| push_header(doc, images));
            if !pushed {
                let cause = doc
                    .skipped_sections()
                    .last()
                    .map(|skipped| skipped.cause.clone())
                    .unwrap_or_default();
                doc.warning(&format!(
                    "An error occurred while generating the report header: {}",
                    cause
                ));
            }
        }
        Err(cause) => {
            warn!("report {} rendered without header: {}", report.id, cause);
            doc.warning(&format!(
                "An error occurred while generating the report header: {}",
                cause
            ));
        }
    }
    doc.space(2.5);

    // 2) Report title and subject
    doc.title("MATERIAL INSPECTION REPORT", 18);
    doc.space(1.5);
    doc.label(&format!(
        "Subject: {}",
        field(details.map(|d| &d.part_name))
    ));
    doc.space(1.0);

    // 3) Inspection summary
    doc.label("Inspection Summary:");
    doc.space(0.5);
    let inspection_date = report.timestamp.format("%Y-%m-%d").to_string();
    let rows = [
        ("Product", field(details.map(|d| &d.part_name))),
        ("Specification", field(details.map(|d| &d.part_sub_type))),
        ("Vendor Lot Number", field(details.map(|d| &d.batch))),
        ("Date of Supply", field(details.map(|d| &d.date_of_supply))),
        ("Warranty Period", field(details.map(|d| &d.warranty))),
        ("Inspection Date", inspection_date),
    ];
    for (label, value) in rows {
        doc.line(&format!("- {}: {}", label, value));
    }
    doc.space(2.0);

    // 4) Blank blocks for manual remarks and signature
    doc.label("Verification Notes:");
    doc.space(8.0);
    doc.space(1.0);
    doc.label("Authorized By:");
    doc.space(3.0);
    doc.label("(Inspector\u{2019}s Name, Designation, and Signature)");

    // 5) Optional photo page
    if let Some(photo) = &report.photo {
        doc.new_page();
        doc.title("Attached Photo:", 14);
        doc.space(1.0);
        let attached = doc.append_section("photo", |doc| {
            let path = content.photo_path.as_deref().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("unresolved photo {}", photo))
            })?;
            let bytes = std::fs::read(path)?;
            let image = doc.image(&bytes, PHOTO_BOX)?;
            doc.push(image);
            Ok(())
        });
        if !attached {
            doc.warning("Could not load attached photo.");
        }
    }

    doc.render()
}

fn push_header(doc: &mut ReportDocument, images: &HeaderImages) -> Result<(), PdfError> {
    let emblem = doc.image(&images.emblem, HEADER_IMAGE_BOX)?;
    let logo = doc.image(&images.logo, HEADER_IMAGE_BOX)?;

    let mut titles = LinearLayout::vertical();
    titles.push(centered_title("GOVERNMENT OF INDIA", 16));
    titles.push(centered_title("MINISTRY OF RAILWAYS", 16));

    let mut table = TableLayout::new(vec![1, 4, 1]);
    table
        .row()
        .element(emblem)
        .element(titles)
        .element(logo)
        .push()?;
    doc.push(table);
    Ok(())
}
