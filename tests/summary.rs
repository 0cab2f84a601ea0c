use pdf_summary::layout::{Block, DrawOp};
use pdf_summary::report::walktracker;
use pdf_summary::{
    build_pdf, Font, LayoutConfig, PDFError, Pt, StandardMetrics, SummaryBuilder, TextMeasurer,
};

fn text_ops(ops: &[DrawOp]) -> Vec<(Pt, Pt, &str)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text { x, y, text } => Some((*x, *y, text.as_str())),
            DrawOp::SetFont { .. } => None,
        })
        .collect()
}

#[test]
fn sample_report_builds_a_single_page() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let path = dir.path().join("output").join("pdf").join("summary.pdf");

    let final_y =
        build_pdf(&path, &LayoutConfig::default(), &walktracker()).expect("report builds");

    assert!(final_y < Pt(750.0));
    assert!(final_y > Pt(0.0), "sample report should fit the page, ended at {final_y}");

    let bytes = std::fs::read(&path).expect("output was written");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.starts_with("%PDF-"));
    assert!(text.contains("/Count 1"));
    assert!(text.contains("/BaseFont /Helvetica-Bold"));
    assert!(text.contains("/Title (WalkTracker - One-Page App Summary)"));
}

#[test]
fn sample_report_flows_strictly_downwards() {
    let config = LayoutConfig::default();
    let builder = SummaryBuilder::new(&config).unwrap();
    let blocks = walktracker().blocks(&config).unwrap();
    let layout = builder.layout(&StandardMetrics, &blocks).unwrap();

    assert_eq!(layout.start.y, Pt(750.0));
    assert!(layout.end.y < layout.start.y);
    assert!(layout.end.y >= builder.geometry().bottom());

    // a bullet marker shares its line with the item text; everything else is one per line
    let mut last_y = Pt(f32::INFINITY);
    for (x, y, text) in text_ops(&layout.ops) {
        if text == "-" && x == Pt(40.0) {
            assert!(y < last_y);
            last_y = Pt(y.0 + 0.001);
            continue;
        }
        assert!(y < last_y, "{text:?} at {y} is not below {last_y}");
        last_y = y;
    }

    // bullet text sits in the indented column and must end inside the right margin
    for (x, _, text) in text_ops(&layout.ops) {
        if x != Pt(51.0) {
            continue;
        }
        let width = Font::Helvetica.width_of_text(text, Pt(9.5));
        assert!(
            x + width <= Pt(572.0) || !text.contains(' '),
            "{text:?} overflows the right margin"
        );
    }
}

#[test]
fn long_bullet_wraps_under_its_text_column() {
    let config = LayoutConfig::default();
    let builder = SummaryBuilder::new(&config).unwrap();
    let item = lipsum::lipsum(80);
    let blocks = vec![Block::bullet_list([item.as_str()], Pt(9.5), Pt(12.0)).unwrap()];
    let layout = builder.layout(&StandardMetrics, &blocks).unwrap();

    let texts = text_ops(&layout.ops);
    let markers = texts.iter().filter(|(x, _, _)| *x == Pt(40.0)).count();
    let lines = texts.iter().filter(|(x, _, _)| *x == Pt(51.0)).count();
    assert_eq!(markers, 1);
    assert!(lines > 1);
    assert_eq!(layout.end.y, Pt(750.0) - Pt(12.0) * lines as f32);
}

#[test]
fn building_twice_gives_identical_line_breaks() {
    let config = LayoutConfig::default();
    let builder = SummaryBuilder::new(&config).unwrap();
    let blocks = walktracker().blocks(&config).unwrap();
    let first = builder.layout(&StandardMetrics, &blocks).unwrap();
    let second = builder.layout(&StandardMetrics, &blocks).unwrap();
    assert_eq!(first.ops, second.ops);
    assert_eq!(first.end, second.end);
}

struct NoMetrics;

impl TextMeasurer for NoMetrics {
    fn width_of_text(&self, _text: &str, font: Font, _size: Pt) -> Result<Pt, PDFError> {
        Err(PDFError::Measurement(format!("no metrics loaded for {font}")))
    }
}

#[test]
fn measurement_failures_surface_from_layout() {
    let config = LayoutConfig::default();
    let builder = SummaryBuilder::new(&config).unwrap();
    let blocks = walktracker().blocks(&config).unwrap();
    let err = builder.layout(&NoMetrics, &blocks).unwrap_err();
    assert!(err.to_string().contains("no metrics loaded for Helvetica"));
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, b"file").unwrap();

    let result = build_pdf(
        blocker.join("summary.pdf"),
        &LayoutConfig::default(),
        &walktracker(),
    );
    assert!(matches!(result, Err(PDFError::Io(_))));
}
