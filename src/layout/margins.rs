use crate::layout::Cursor;
use crate::pagesize::PageSize;
use crate::units::Pt;
use crate::PDFError;

/// Margins guide the layout of text on a page. Nothing stops text from
/// overflowing them; the layout reports an overflow but does not prevent it.
/// The margins are also applied
/// to [crate::Page]s to determine the `ArtBox` attribute of each page in the
/// generated PDF
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::default()
    }
}

/// The fixed frame that content is laid out in: the page size and its margins. The top
/// margin is the distance from the top edge of the page to the first baseline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    size: PageSize,
    margins: Margins,
}

impl PageGeometry {
    /// Create the geometry, rejecting margins that leave no horizontal room for content
    pub fn new(size: PageSize, margins: Margins) -> Result<PageGeometry, PDFError> {
        let geometry = PageGeometry { size, margins };
        let content_width = geometry.content_width();
        if !content_width.is_positive() {
            return Err(PDFError::InvalidGeometry(format!(
                "content width must be positive, margins leave {content_width}"
            )));
        }
        Ok(geometry)
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Page width minus the left and right margins; the wrap width for body text
    pub fn content_width(&self) -> Pt {
        self.size.0 - self.margins.left - self.margins.right
    }

    /// The lowest baseline that still sits inside the bottom margin
    pub fn bottom(&self) -> Pt {
        self.margins.bottom
    }

    /// Where the first line of the page is drawn
    pub fn start(&self) -> Cursor {
        Cursor::new(self.margins.left, self.size.1 - self.margins.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::LETTER;

    #[test]
    fn letter_with_forty_point_sides_leaves_532() {
        let geometry = PageGeometry::new(
            LETTER,
            Margins::trbl(Pt(42.0), Pt(40.0), Pt(40.0), Pt(40.0)),
        )
        .unwrap();
        assert_eq!(geometry.content_width(), Pt(532.0));
        assert_eq!(geometry.start(), Cursor::new(Pt(40.0), Pt(750.0)));
        assert_eq!(geometry.bottom(), Pt(40.0));
        assert_eq!(geometry.size(), LETTER);
        assert_eq!(geometry.margins().top, Pt(42.0));
    }

    #[test]
    fn rejects_margins_wider_than_the_page() {
        let result = PageGeometry::new(LETTER, Margins::symmetric(Pt(10.0), Pt(306.0)));
        assert!(matches!(result, Err(PDFError::InvalidGeometry(_))));
    }
}
