use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use id_arena::Id;
use pdf_writer::{Name, Pdf};
use std::{fmt, str::FromStr};

/// One of the standard PDF base fonts. These fonts are built into every conforming PDF
/// reader, so they are referenced by name and never embedded in the generated document.
/// Their advance widths are compiled into the crate so that text can be measured for
/// layout without loading any font files.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    Courier,
}

impl Font {
    /// The PostScript name of the font, as written into the `BaseFont` entry
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::TimesRoman => "Times-Roman",
            Font::Courier => "Courier",
        }
    }

    /// Advance width of a character in 1/1000 of the font size. Characters that can't be
    /// encoded are drawn as `?`, so they measure as `?` as well
    pub fn char_width(&self, ch: char) -> u16 {
        let code = winansi_byte(ch).unwrap_or(b'?');
        let (ascii, upper) = match self {
            Font::Courier => return 600,
            Font::Helvetica => (&HELVETICA_WIDTHS, &HELVETICA_UPPER_WIDTHS),
            Font::HelveticaBold => (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_UPPER_WIDTHS),
            Font::TimesRoman => (&TIMES_ROMAN_WIDTHS, &TIMES_ROMAN_UPPER_WIDTHS),
        };
        match code {
            0x20..=0x7e => ascii[(code - 0x20) as usize],
            0x80..=0xff => upper[(code - 0x80) as usize],
            // winansi_byte never yields control codes
            _ => ascii[(b'?' - 0x20) as usize],
        }
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        Pt(units as f32 * size.0 / 1000.0)
    }

    /// Encode text into the single-byte `WinAnsiEncoding` used for the font dictionaries,
    /// substituting `?` for anything the encoding can't represent
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| winansi_byte(ch).unwrap_or(b'?'))
            .collect()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.pdf_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pdf_name())
    }
}

impl FromStr for Font {
    type Err = PDFError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Helvetica" => Ok(Font::Helvetica),
            "Helvetica-Bold" => Ok(Font::HelveticaBold),
            "Times-Roman" => Ok(Font::TimesRoman),
            "Courier" => Ok(Font::Courier),
            _ => Err(PDFError::UnknownFont(name.to_string())),
        }
    }
}

/// Measures rendered text widths for line wrapping. Implementations must be
/// deterministic: the same text, font, and size always measure the same.
pub trait TextMeasurer {
    fn width_of_text(&self, text: &str, font: Font, size: Pt) -> Result<Pt, PDFError>;
}

/// Measures text using the compiled-in metrics of the standard base fonts
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardMetrics;

impl TextMeasurer for StandardMetrics {
    fn width_of_text(&self, text: &str, font: Font, size: Pt) -> Result<Pt, PDFError> {
        Ok(font.width_of_text(text, size))
    }
}

/// Maps a character onto its `WinAnsiEncoding` code, if it has one
pub(crate) fn winansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

// advance widths for ' ' through '~', from the Adobe core font metrics
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

// advance widths for WinAnsi codes 0x80 through 0xff; codes with no glyph use the
// bullet width
#[rustfmt::skip]
const HELVETICA_UPPER_WIDTHS: [u16; 128] = [
    556, 350, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_UPPER_WIDTHS: [u16; 128] = [
    556, 350, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 350, 611, 350,
    350, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 350, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[rustfmt::skip]
const TIMES_ROMAN_UPPER_WIDTHS: [u16; 128] = [
    500, 350, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 350, 611, 350,
    350, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 350, 444, 722,
    250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
    400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
    722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
    444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
];
