use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of one answer button, `[ A ]`.
pub const BUTTON_WIDTH: u16 = 5;
const BUTTON_GAP: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥90 cols: legend as a sidebar
    Narrow, // <90 cols: legend below the feedback line
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn legend_sidebar(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

/// Screen regions of the quiz. Computed from the terminal size alone so the
/// renderer and the mouse hit-test always agree.
pub struct QuizLayout {
    pub header: Rect,
    pub tabs: Option<Rect>,
    pub prompt: Rect,
    pub buttons: Rect,
    pub feedback: Rect,
    pub legend: Option<Rect>,
    pub footer: Rect,
}

impl QuizLayout {
    pub fn new(area: Rect, show_tabs: bool, show_legend: bool, answer_count: usize) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(if show_tabs { 3 } else { 0 }),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(area);

        let (main, sidebar) = if show_legend && tier.legend_sidebar() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(vertical[2]);
            (horizontal[0], Some(horizontal[1]))
        } else {
            (vertical[2], None)
        };

        let button_height = button_rows(main.width.saturating_sub(2), answer_count) + 2;
        let below_legend = show_legend && sidebar.is_none();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(button_height),
                Constraint::Length(1),
                Constraint::Min(if below_legend { 3 } else { 0 }),
            ])
            .split(main);

        Self {
            header: vertical[0],
            tabs: show_tabs.then_some(vertical[1]),
            prompt: main_layout[0],
            buttons: main_layout[1],
            feedback: main_layout[2],
            legend: sidebar.or(below_legend.then_some(main_layout[3])),
            footer: vertical[3],
        }
    }
}

fn buttons_per_row(width: u16) -> u16 {
    ((width + BUTTON_GAP) / (BUTTON_WIDTH + BUTTON_GAP)).max(1)
}

/// Number of rows needed to lay out `count` buttons in `width` columns.
pub fn button_rows(width: u16, count: usize) -> u16 {
    let per_row = buttons_per_row(width) as usize;
    count.div_ceil(per_row).max(1) as u16
}

/// One rect per answer button inside the bordered `area`, row-major and
/// horizontally centred. Buttons that do not fit vertically are dropped.
pub fn button_rects(area: Rect, count: usize) -> Vec<Rect> {
    let inner = inner_rect(area);
    if inner.width < BUTTON_WIDTH || inner.height == 0 {
        return Vec::new();
    }

    let per_row = buttons_per_row(inner.width) as usize;
    let mut rects = Vec::with_capacity(count);

    for i in 0..count {
        let row = (i / per_row) as u16;
        if row >= inner.height {
            break;
        }
        let in_row = (count - (i / per_row) * per_row).min(per_row) as u16;
        let row_width = in_row * BUTTON_WIDTH + in_row.saturating_sub(1) * BUTTON_GAP;
        let left = inner.x + inner.width.saturating_sub(row_width) / 2;
        let col = (i % per_row) as u16;
        rects.push(Rect::new(
            left + col * (BUTTON_WIDTH + BUTTON_GAP),
            inner.y + row,
            BUTTON_WIDTH,
            1,
        ));
    }

    rects
}

/// One rect per group tab inside the bordered `area`, left to right.
pub fn tab_rects(area: Rect, labels: &[String]) -> Vec<Rect> {
    let inner = inner_rect(area);
    let right = inner.x + inner.width;
    let mut x = inner.x + 1;
    let mut rects = Vec::with_capacity(labels.len());

    for label in labels {
        let width = label.chars().count() as u16 + 2;
        if x + width > right || inner.height == 0 {
            break;
        }
        rects.push(Rect::new(x, inner.y, width, 1));
        x += width + 1;
    }

    rects
}

/// Index of the rect containing the cell at (`column`, `row`).
pub fn hit_test(rects: &[Rect], column: u16, row: u16) -> Option<usize> {
    rects
        .iter()
        .position(|r| r.contains(Position::new(column, row)))
}

fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_width() {
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 120, 40)), LayoutTier::Wide);
        assert_eq!(LayoutTier::from_area(Rect::new(0, 0, 60, 40)), LayoutTier::Narrow);
    }

    #[test]
    fn test_button_rows_wrap() {
        // 78 inner cols fit 13 buttons
        assert_eq!(button_rows(78, 26), 2);
        assert_eq!(button_rows(78, 4), 1);
        assert_eq!(button_rows(2, 3), 3);
    }

    #[test]
    fn test_button_rects_centered_single_row() {
        let area = Rect::new(0, 0, 42, 3);
        let rects = button_rects(area, 4);
        assert_eq!(rects.len(), 4);
        // inner width 40, row width 4*5+3 = 23, left = 1 + 17/2
        assert_eq!(rects[0], Rect::new(9, 1, 5, 1));
        assert_eq!(rects[1].x, 15);
        assert!(rects.iter().all(|r| r.y == 1));
    }

    #[test]
    fn test_button_rects_wraps_and_drops_overflow() {
        let area = Rect::new(0, 0, 20, 3); // 18 inner cols -> 3 per row, 1 row
        let rects = button_rects(area, 6);
        assert_eq!(rects.len(), 3);

        let area = Rect::new(0, 0, 20, 4);
        let rects = button_rects(area, 6);
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[3].y, 2);
    }

    #[test]
    fn test_hit_test_matches_button_rects() {
        let area = Rect::new(0, 10, 42, 3);
        let rects = button_rects(area, 4);
        let second = rects[1];
        assert_eq!(hit_test(&rects, second.x + 2, second.y), Some(1));
        assert_eq!(hit_test(&rects, second.x + BUTTON_WIDTH, second.y), None);
        assert_eq!(hit_test(&rects, 0, 0), None);
    }

    #[test]
    fn test_tab_rects_follow_labels() {
        let labels: Vec<String> = (1..=6).map(|i| format!("Group {i}")).collect();
        let rects = tab_rects(Rect::new(0, 3, 80, 3), &labels);
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0], Rect::new(2, 4, 9, 1));
        assert_eq!(rects[1].x, 12);
    }

    #[test]
    fn test_layout_places_legend_by_tier() {
        let wide = QuizLayout::new(Rect::new(0, 0, 120, 40), true, true, 4);
        assert!(wide.tabs.is_some());
        let legend = wide.legend.unwrap();
        assert!(legend.x > wide.prompt.x);

        let narrow = QuizLayout::new(Rect::new(0, 0, 70, 40), false, true, 26);
        assert!(narrow.tabs.is_none());
        let legend = narrow.legend.unwrap();
        assert!(legend.y > narrow.feedback.y);

        let hidden = QuizLayout::new(Rect::new(0, 0, 120, 40), true, false, 4);
        assert!(hidden.legend.is_none());
    }
}
