use super::images::{fitted_image, ImageBox};
use super::PdfError;
use genpdf::elements::{Break, Image as PdfImage, PageBreak, Paragraph};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Document, Element, SimplePageDecorator};
use log::{debug, warn};
use std::path::Path;
use tempfile::NamedTempFile;

static DEJAVU_REGULAR: &[u8] = include_bytes!("../../fonts/DejaVuSans-Regular.ttf");
static DEJAVU_BOLD: &[u8] = include_bytes!("../../fonts/DejaVuSans-Bold.ttf");
static DEJAVU_ITALIC: &[u8] = include_bytes!("../../fonts/DejaVuSans-Italic.ttf");
static DEJAVU_BOLD_ITALIC: &[u8] = include_bytes!("../../fonts/DejaVuSans-BoldItalic.ttf");

const BODY_FONT_SIZE: u8 = 12;
const MARGIN_MM: i32 = 18;

/// Load the font family: LiberationSans from `fonts_dir` when present, the bundled DejaVu
/// Sans otherwise.
fn load_font(fonts_dir: &Path) -> Result<FontFamily<FontData>, PdfError> {
    match genpdf::fonts::from_files(fonts_dir, "LiberationSans", None) {
        Ok(family) => return Ok(family),
        Err(e) => debug!("using bundled fonts, {} unusable: {}", fonts_dir.display(), e),
    }
    Ok(FontFamily {
        regular: FontData::new(DEJAVU_REGULAR.to_vec(), None)?,
        bold: FontData::new(DEJAVU_BOLD.to_vec(), None)?,
        italic: FontData::new(DEJAVU_ITALIC.to_vec(), None)?,
        bold_italic: FontData::new(DEJAVU_BOLD_ITALIC.to_vec(), None)?,
    })
}

/// Sequential builder over a genpdf `Document`.
///
/// Sections that depend on external data are added through [`ReportDocument::append_section`]:
/// a failing section is logged and recorded, and the document stays usable, so a report is
/// always produced once building has started.
pub struct ReportDocument {
    doc: Document,
    // Keep temporary image files alive until rendering finishes
    temp_files: Vec<NamedTempFile>,
    skipped: Vec<SkippedSection>,
}

/// A section left out of the document and why.
#[derive(Debug, Clone)]
pub struct SkippedSection {
    pub section: String,
    pub cause: String,
}

impl ReportDocument {
    pub fn new(title: &str, fonts_dir: &Path) -> Result<Self, PdfError> {
        let mut doc = Document::new(load_font(fonts_dir)?);
        doc.set_title(title);
        doc.set_font_size(BODY_FONT_SIZE);
        doc.set_line_spacing(1.2);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(MARGIN_MM);
        doc.set_page_decorator(decorator);

        Ok(Self {
            doc,
            temp_files: Vec::new(),
            skipped: Vec::new(),
        })
    }

    pub fn push<E: Element + 'static>(&mut self, element: E) {
        self.doc.push(element);
    }

    pub fn title(&mut self, text: &str, font_size: u8) {
        self.push(centered_title(text, font_size));
    }

    pub fn label(&mut self, text: &str) {
        self.push(Paragraph::new(text).styled(Style::new().bold()));
    }

    pub fn line(&mut self, text: &str) {
        self.push(Paragraph::new(text));
    }

    pub fn warning(&mut self, text: &str) {
        self.push(Paragraph::new(text).styled(Style::new().with_color(Color::Rgb(200, 0, 0))));
    }

    pub fn space(&mut self, lines: f64) {
        self.push(Break::new(lines));
    }

    pub fn new_page(&mut self) {
        self.push(PageBreak::new());
    }

    /// Prepares an image element fitted into `bounds`; the caller decides where it goes.
    pub fn image(&mut self, bytes: &[u8], bounds: ImageBox) -> Result<PdfImage, PdfError> {
        fitted_image(bytes, bounds, &mut self.temp_files)
    }

    /// Runs `build` against the document. On error the section is skipped, the failure is
    /// logged and `false` is returned; building can continue either way.
    ///
    /// `build` should only push once all fallible work is done, otherwise a failing section
    /// leaves its first elements behind.
    pub fn append_section<F>(&mut self, section: &str, build: F) -> bool
    where
        F: FnOnce(&mut Self) -> Result<(), PdfError>,
    {
        match build(self) {
            Ok(()) => true,
            Err(e) => {
                warn!("skipping {} section: {}", section, e);
                self.skipped.push(SkippedSection {
                    section: section.to_string(),
                    cause: e.to_string(),
                });
                false
            }
        }
    }

    pub fn skipped_sections(&self) -> &[SkippedSection] {
        &self.skipped
    }

    pub fn render(self) -> Result<Vec<u8>, PdfError> {
        let ReportDocument {
            doc, temp_files, ..
        } = self;
        let mut out = Vec::new();
        doc.render(&mut out)?;
        // temp_files dropped and cleaned up here
        drop(temp_files);
        Ok(out)
    }
}

pub(crate) fn centered_title(text: &str, font_size: u8) -> impl Element {
    Paragraph::new(text)
        .aligned(Alignment::Center)
        .styled(Style::new().bold().with_font_size(font_size))
}
