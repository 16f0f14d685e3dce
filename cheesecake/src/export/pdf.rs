//! Letterhead PDF of the package request.
//!
//! Generation is split into a pure layout pass (positioned text lines on A4
//! pages) and a rendering pass through `printpdf`. The logo is fetched every
//! time a PDF is generated. If fetching, decoding or rendering fails, the
//! visitor gets the JSON download instead.

use async_trait::async_trait;
use chrono::NaiveDate;
use printpdf::image_crate::GenericImageView;
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument};

use super::{ExportArtifact, PDF_MIME, json::package_export};
use crate::cart::PackageCart;
use crate::contact;
use crate::error::ExportError;

pub const PDF_FILENAME: &str = "cheesecake-package.pdf";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_HEIGHT: f32 = 6.0;
const LOGO_WIDTH: f32 = 30.0;
const LOGO_HEIGHT: f32 = 30.0;
const PT_TO_MM: f32 = 0.352_778;

const BODY_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 12.0;
const LETTERHEAD_SIZE: f32 = 18.0;

const BOILERPLATE: &[(&str, &str)] = &[
    (
        "Vehicles",
        "All game drives are in well-maintained 4x4 safari vehicles with pop-up roofs, \
         charging points and a professional driver-guide who stays with you for the whole trip.",
    ),
    (
        "Accommodation",
        "Hotels and camps are booked at the tier you selected for each destination. \
         We confirm availability with the property before any payment is taken.",
    ),
    (
        "Flights",
        "Domestic and regional flights can be arranged on request. International flights \
         are not included unless you ask us to quote them.",
    ),
    (
        "Budget",
        "Prices depend on season, group size and accommodation tier. We reply with a \
         detailed quotation for the itinerary below, which you can adjust before booking.",
    ),
];

/// Where the letterhead logo comes from. The client fetches it over HTTP.
#[async_trait(?Send)]
pub trait LogoSource {
    async fn fetch_logo(&self) -> anyhow::Result<Vec<u8>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub x: f32,
    pub y: f32,
}

/// Positioned text for every page. The logo goes in the top-left corner of
/// the first page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageLayout {
    pub pages: Vec<Vec<TextLine>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfOutcome {
    Pdf(ExportArtifact),
    /// The PDF could not be produced; this is the JSON download instead.
    FallbackJson(ExportArtifact),
}

impl PdfOutcome {
    pub fn artifact(&self) -> &ExportArtifact {
        match self {
            PdfOutcome::Pdf(artifact) | PdfOutcome::FallbackJson(artifact) => artifact,
        }
    }

    pub fn into_artifact(self) -> ExportArtifact {
        match self {
            PdfOutcome::Pdf(artifact) | PdfOutcome::FallbackJson(artifact) => artifact,
        }
    }
}

struct Cursor {
    pages: Vec<Vec<TextLine>>,
    y: f32,
}

impl Cursor {
    fn new(start_y: f32) -> Self {
        Self {
            pages: vec![Vec::new()],
            y: start_y,
        }
    }

    fn line(&mut self, text: impl Into<String>, size: f32, bold: bool, x: f32) {
        if self.y - LINE_HEIGHT < MARGIN {
            self.pages.push(Vec::new());
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= LINE_HEIGHT;
        if let Some(page) = self.pages.last_mut() {
            page.push(TextLine {
                text: text.into(),
                size,
                bold,
                x,
                y: self.y,
            });
        }
    }

    fn gap(&mut self) {
        self.y -= LINE_HEIGHT / 2.0;
    }
}

pub fn layout(cart: &PackageCart, date: NaiveDate) -> PackageLayout {
    let text_x = MARGIN + LOGO_WIDTH + 6.0;
    let mut cursor = Cursor::new(PAGE_HEIGHT - MARGIN);

    cursor.line(contact::COMPANY_NAME.to_uppercase(), LETTERHEAD_SIZE, true, text_x);
    cursor.line(
        format!("{} | {}", contact::EMAIL, contact::PHONE_DISPLAY),
        BODY_SIZE,
        false,
        text_x,
    );
    cursor.line(
        format!("Prepared {}", date.format("%B %-d, %Y")),
        BODY_SIZE,
        false,
        text_x,
    );

    // Body text starts below the logo.
    cursor.y = cursor.y.min(PAGE_HEIGHT - MARGIN - LOGO_HEIGHT) - LINE_HEIGHT;
    cursor.line("Custom Safari Package Request", HEADING_SIZE + 2.0, true, MARGIN);
    cursor.gap();

    for (heading, paragraph) in BOILERPLATE {
        cursor.line(*heading, HEADING_SIZE, true, MARGIN);
        for line in wrap(paragraph, text_area(MARGIN), BODY_SIZE) {
            cursor.line(line, BODY_SIZE, false, MARGIN);
        }
        cursor.gap();
    }

    cursor.line(
        format!("Your destinations ({})", cart.len()),
        HEADING_SIZE,
        true,
        MARGIN,
    );
    for (i, entry) in cart.entries().iter().enumerate() {
        cursor.line(
            format!("{}. {} — {} days", i + 1, entry.location_name, entry.days),
            BODY_SIZE + 1.0,
            true,
            MARGIN,
        );
        cursor.line(format!("Hotel: {}", entry.hotel_type), BODY_SIZE, false, MARGIN + 5.0);
        if let Some(name) = &entry.client_name {
            cursor.line(format!("Client: {}", name), BODY_SIZE, false, MARGIN + 5.0);
        }
        if !entry.notes.trim().is_empty() {
            let notes = format!("Notes: {}", entry.notes);
            for line in wrap(&notes, text_area(MARGIN + 5.0), BODY_SIZE) {
                cursor.line(line, BODY_SIZE, false, MARGIN + 5.0);
            }
        }
        cursor.gap();
    }

    PackageLayout {
        pages: cursor.pages,
    }
}

fn text_area(x: f32) -> f32 {
    PAGE_WIDTH - MARGIN - x
}

/// Helvetica advance widths in 1/1000 em, close enough for line breaking.
fn glyph_width(c: char) -> u32 {
    match c {
        'i' | 'j' | 'l' | '\'' => 222,
        ' ' | 'f' | 't' | 'I' | '.' | ',' | ':' | ';' | '!' | '/' => 278,
        'r' | '-' | '(' | ')' => 333,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 500,
        'F' | 'T' | 'Z' => 611,
        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' | '&' => 667,
        'w' | 'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'G' | 'O' | 'Q' => 778,
        'm' | 'M' => 833,
        'W' => 944,
        '@' => 1015,
        c if c.is_ascii() => 556,
        _ => 1000,
    }
}

/// Printed width in millimetres at `size` points.
fn text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(glyph_width).sum();
    units as f32 * size / 1000.0 * PT_TO_MM
}

/// Splits a word that cannot fit on a line by itself into pieces that do.
fn break_word(word: &str, width: f32, size: f32) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut used = 0.0;
    for (i, c) in word.char_indices() {
        let advance = text_width(c.encode_utf8(&mut [0; 4]), size);
        if used + advance > width && i > start {
            pieces.push(&word[start..i]);
            start = i;
            used = 0.0;
        }
        used += advance;
    }
    pieces.push(&word[start..]);
    pieces
}

/// Greedy word wrap to `width` millimetres of `size`-point text.
fn wrap(text: &str, width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            for piece in break_word(word, width, size) {
                if !current.is_empty() && text_width(&format!("{current} {piece}"), size) > width {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(piece);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Characters the built-in PDF fonts (WinAnsi encoding) cannot show.
pub fn unprintable_chars(text: &str) -> usize {
    const WIN_ANSI_EXTRA: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";
    text.chars()
        .filter(|&c| !matches!(c, ' '..='~' | '\u{a0}'..='\u{ff}') && !WIN_ANSI_EXTRA.contains(c))
        .count()
}

pub fn render(layout: &PackageLayout, logo: &[u8]) -> anyhow::Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Cheesecake Safaris Package",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Page 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let bitmap = printpdf::image_crate::load_from_memory(logo)?;
    let dpi = bitmap.width().max(1) as f32 * 25.4 / LOGO_WIDTH;
    let first = doc.get_page(first_page).get_layer(first_layer);
    Image::from_dynamic_image(&bitmap).add_to_layer(
        first.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN)),
            translate_y: Some(Mm(PAGE_HEIGHT - MARGIN - LOGO_HEIGHT)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    let mut lossy = 0;
    for (index, lines) in layout.pages.iter().enumerate() {
        let layer = if index == 0 {
            first.clone()
        } else {
            let (page, layer) = doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Page {}", index + 1),
            );
            doc.get_page(page).get_layer(layer)
        };
        for line in lines {
            let font = if line.bold { &bold } else { &regular };
            if unprintable_chars(&line.text) > 0 {
                lossy += 1;
            }
            layer.use_text(line.text.clone(), line.size, Mm(line.x), Mm(line.y), font);
        }
    }
    if lossy > 0 {
        tracing::warn!(
            "{} PDF line(s) contain characters Helvetica cannot encode; they are left out",
            lossy
        );
    }

    Ok(doc.save_to_bytes()?)
}

/// Builds the PDF, falling back to the JSON export on any failure.
pub async fn export_pdf<L>(
    cart: &PackageCart,
    logo: &L,
    date: NaiveDate,
) -> Result<PdfOutcome, ExportError>
where
    L: LogoSource + ?Sized,
{
    let attempt = async {
        let bytes = logo.fetch_logo().await?;
        render(&layout(cart, date), &bytes)
    };

    match attempt.await {
        Ok(bytes) => Ok(PdfOutcome::Pdf(ExportArtifact {
            filename: PDF_FILENAME.to_string(),
            mime: PDF_MIME,
            bytes,
        })),
        Err(e) => {
            tracing::warn!("PDF generation failed, falling back to JSON download: {:#}", e);
            Ok(PdfOutcome::FallbackJson(package_export(cart, date)?))
        }
    }
}
