use crate::units::Pt;

/// The current drawing position. `x` stays fixed for the duration of a block while `y`
/// only ever moves down the page, one leading per emitted line. Nothing stops `y` from
/// running past the bottom of the page; callers decide what to do about overflow.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cursor {
    pub x: Pt,
    pub y: Pt,
}

impl Cursor {
    pub fn new(x: Pt, y: Pt) -> Cursor {
        Cursor { x, y }
    }

    /// Move down by `lines` lines of `leading` each, returning the new `y`
    pub fn advance(&mut self, lines: usize, leading: Pt) -> Pt {
        self.y -= leading * lines as f32;
        self.y
    }

    /// A copy of the cursor shifted right, e.g. for the text column of a bullet list
    pub fn indented(self, by: Pt) -> Cursor {
        Cursor {
            x: self.x + by,
            y: self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_down_by_whole_lines() {
        let mut cursor = Cursor::new(Pt(40.0), Pt(750.0));
        assert_eq!(cursor.advance(3, Pt(12.0)), Pt(714.0));
        assert_eq!(cursor.x, Pt(40.0));
        assert_eq!(cursor.advance(0, Pt(12.0)), Pt(714.0));
    }

    #[test]
    fn single_steps_match_one_big_step() {
        let mut stepped = Cursor::new(Pt(40.0), Pt(750.0));
        for _ in 0..25 {
            stepped.advance(1, Pt(12.0));
        }
        let mut jumped = Cursor::new(Pt(40.0), Pt(750.0));
        jumped.advance(25, Pt(12.0));
        assert_eq!(stepped, jumped);
        assert_eq!(stepped.y, Pt(450.0));
    }

    #[test]
    fn y_may_go_below_the_page() {
        let mut cursor = Cursor::new(Pt(0.0), Pt(10.0));
        assert_eq!(cursor.advance(2, Pt(14.0)), Pt(-18.0));
    }

    #[test]
    fn indenting_keeps_y() {
        let cursor = Cursor::new(Pt(40.0), Pt(100.0)).indented(Pt(11.0));
        assert_eq!(cursor, Cursor::new(Pt(51.0), Pt(100.0)));
    }
}
