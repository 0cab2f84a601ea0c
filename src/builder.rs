use crate::canvas::{replay, Canvas, PdfCanvas};
use crate::font::{StandardMetrics, TextMeasurer};
use crate::info::Info;
use crate::layout::{Block, BlockRenderer, Cursor, DrawOp, Margins, PageGeometry, Theme};
use crate::pagesize::{PageSize, LETTER};
use crate::report::Report;
use crate::units::Pt;
use crate::PDFError;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Where the command line tool writes the report
pub const DEFAULT_OUTPUT_PATH: &str = "output/pdf/walktracker_app_summary.pdf";

/// Page setup and type styles for a summary document. The defaults lay out a US Letter
/// page with 40pt side margins and the first baseline 42pt below the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    /// The top margin is the offset from the top edge of the page to the first baseline
    pub margins: Margins,
    pub theme: Theme,
    pub body_size: Pt,
    pub body_leading: Pt,
    pub headline_size: Pt,
    pub headline_advance: Pt,
    pub note_size: Pt,
    pub note_advance: Pt,
    /// Extra space between one section's body and the next section's title
    pub section_gap: Pt,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_size: LETTER,
            margins: Margins::trbl(Pt(42.0), Pt(40.0), Pt(40.0), Pt(40.0)),
            theme: Theme::default(),
            body_size: Pt(9.5),
            body_leading: Pt(12.0),
            headline_size: Pt(16.0),
            headline_advance: Pt(20.0),
            note_size: Pt(8.5),
            note_advance: Pt(18.0),
            section_gap: Pt(8.0),
        }
    }
}

impl LayoutConfig {
    /// Set the page size, modifying `self`
    pub fn page_size(&mut self, page_size: PageSize) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Set the page margins, modifying `self`
    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    /// Set the fonts and title style, modifying `self`
    pub fn theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    /// Set the size and leading of paragraphs and bullet lists, modifying `self`
    pub fn body(&mut self, size: Pt, leading: Pt) -> &mut Self {
        self.body_size = size;
        self.body_leading = leading;
        self
    }

    /// Set the gap between sections, modifying `self`
    pub fn section_gap(&mut self, gap: Pt) -> &mut Self {
        self.section_gap = gap;
        self
    }
}

/// The result of laying out a document: the drawing instructions plus where the cursor
/// started and where it ended up
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub ops: Vec<DrawOp>,
    pub start: Cursor,
    pub end: Cursor,
}

/// Flows blocks down a single page. Layout and drawing are separate steps: [Self::layout]
/// is pure and produces a [Layout]; [Self::render] replays it onto a [Canvas].
pub struct SummaryBuilder {
    geometry: PageGeometry,
    theme: Theme,
}

impl SummaryBuilder {
    pub fn new(config: &LayoutConfig) -> Result<SummaryBuilder, PDFError> {
        Ok(SummaryBuilder {
            geometry: PageGeometry::new(config.page_size, config.margins)?,
            theme: config.theme.clone(),
        })
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Lay out the blocks top to bottom, each starting where the previous one stopped.
    /// Every block is validated before any layout happens. Content that runs past the
    /// bottom margin is still laid out; there are no page breaks.
    pub fn layout<M: TextMeasurer + ?Sized>(
        &self,
        measurer: &M,
        blocks: &[Block],
    ) -> Result<Layout, PDFError> {
        for block in blocks {
            block.validate()?;
        }

        let renderer = BlockRenderer::new(measurer, &self.theme);
        let width = self.geometry.content_width();
        let start = self.geometry.start();

        let mut ops = Vec::new();
        let mut cursor = start;
        for (i, block) in blocks.iter().enumerate() {
            cursor = renderer.render(block, cursor, width, &mut ops)?;
            debug!("block {i} ends at y = {}", cursor.y);
        }

        if cursor.y < self.geometry.bottom() {
            warn!(
                "content runs past the bottom margin: ended at y = {}, margin is {}",
                cursor.y,
                self.geometry.bottom()
            );
        }

        Ok(Layout {
            ops,
            start,
            end: cursor,
        })
    }

    /// Draw a laid out page onto the canvas, close the page, and save
    pub fn render<C: Canvas + ?Sized>(
        &self,
        layout: &Layout,
        canvas: &mut C,
    ) -> Result<(), PDFError> {
        replay(&layout.ops, canvas);
        canvas.new_page();
        canvas.save()
    }
}

/// Lay out `report` and write it as a single-page PDF at `path`, creating any missing
/// parent directories. Returns the final vertical cursor position.
pub fn build_pdf<P: AsRef<Path>>(
    path: P,
    config: &LayoutConfig,
    report: &Report,
) -> Result<Pt, PDFError> {
    let path = path.as_ref();
    let builder = SummaryBuilder::new(config)?;
    let blocks = report.blocks(config)?;
    let layout = builder.layout(&StandardMetrics, &blocks)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let out = BufWriter::new(File::create(path)?);
    let geometry = builder.geometry();
    let mut canvas = PdfCanvas::new(geometry.size(), Some(geometry.margins()), out);
    let mut info = Info::new();
    info.title(&report.headline);
    canvas.set_info(info);
    builder.render(&layout, &mut canvas)?;

    info!("wrote {} (final y = {})", path.display(), layout.end.y);
    Ok(layout.end.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;

    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn width_of_text(&self, text: &str, _font: Font, _size: Pt) -> Result<Pt, PDFError> {
            Ok(Pt(text.chars().count() as f32 * 5.0))
        }
    }

    struct UnknownFont;

    impl TextMeasurer for UnknownFont {
        fn width_of_text(&self, _text: &str, font: Font, _size: Pt) -> Result<Pt, PDFError> {
            Err(PDFError::UnknownFont(font.to_string()))
        }
    }

    #[test]
    fn default_config_matches_the_report_page() {
        let builder = SummaryBuilder::new(&LayoutConfig::default()).unwrap();
        assert_eq!(builder.geometry().content_width(), Pt(532.0));
        assert_eq!(builder.geometry().start(), Cursor::new(Pt(40.0), Pt(750.0)));
    }

    #[test]
    fn blocks_compose_without_overlap() {
        let builder = SummaryBuilder::new(&LayoutConfig::default()).unwrap();
        let blocks = vec![
            Block::title("What"),
            Block::paragraph("word ".repeat(200), Pt(9.5), Pt(12.0)).unwrap(),
            Block::spacer(Pt(8.0)).unwrap(),
            Block::title("How"),
        ];
        let layout = builder.layout(&FixedWidth, &blocks).unwrap();

        let ys: Vec<Pt> = layout
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                DrawOp::SetFont { .. } => None,
            })
            .collect();
        assert!(ys.windows(2).all(|pair| pair[1] < pair[0]));

        // 200 words of 4 chars + spaces at 5pt each: 21 words (104 chars) per 532pt line
        let lines = 200usize.div_ceil(21);
        let expected = Pt(750.0) - Pt(14.0) - Pt(12.0) * lines as f32 - Pt(8.0) - Pt(14.0);
        assert_eq!(layout.end.y, expected);
    }

    #[test]
    fn layout_is_repeatable() {
        let builder = SummaryBuilder::new(&LayoutConfig::default()).unwrap();
        let blocks = crate::report::walktracker()
            .blocks(&LayoutConfig::default())
            .unwrap();
        let first = builder.layout(&StandardMetrics, &blocks).unwrap();
        let second = builder.layout(&StandardMetrics, &blocks).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn measurement_errors_abort_layout() {
        let builder = SummaryBuilder::new(&LayoutConfig::default()).unwrap();
        let blocks = vec![Block::paragraph("two words", Pt(9.5), Pt(12.0)).unwrap()];
        assert!(matches!(
            builder.layout(&UnknownFont, &blocks),
            Err(PDFError::UnknownFont(_))
        ));
    }

    #[test]
    fn invalid_blocks_never_reach_the_wrapper() {
        let builder = SummaryBuilder::new(&LayoutConfig::default()).unwrap();
        let blocks = vec![
            Block::title("fine"),
            Block::Paragraph {
                text: "bad".into(),
                font_size: Pt(9.5),
                leading: Pt(-12.0),
            },
        ];
        // the measurer would fail if it were ever called
        assert!(matches!(
            builder.layout(&UnknownFont, &blocks),
            Err(PDFError::InvalidBlock(_))
        ));
    }

    #[test]
    fn rejects_geometry_without_room() {
        let mut config = LayoutConfig::default();
        config.margins(Margins::symmetric(Pt(40.0), Pt(400.0)));
        assert!(matches!(
            SummaryBuilder::new(&config),
            Err(PDFError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn overflow_is_laid_out_below_the_page() {
        let mut config = LayoutConfig::default();
        config.page_size((Pt(200.0), Pt(100.0)));
        let builder = SummaryBuilder::new(&config).unwrap();
        let blocks = vec![Block::bullet_list(["a"; 10], Pt(9.5), Pt(12.0)).unwrap()];
        let layout = builder.layout(&FixedWidth, &blocks).unwrap();
        assert_eq!(layout.end.y, Pt(58.0 - 120.0));
        assert!(layout.end.y < builder.geometry().bottom());
    }
}
