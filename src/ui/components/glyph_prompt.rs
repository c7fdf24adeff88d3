use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use ancients::session::quiz::Face;

use crate::ui::theme::Theme;

/// The glyph the user has to identify.
pub struct GlyphPrompt<'a> {
    pub symbol: char,
    pub face: Face,
    pub theme: &'a Theme,
}

impl<'a> GlyphPrompt<'a> {
    pub fn new(symbol: char, face: Face, theme: &'a Theme) -> Self {
        Self {
            symbol,
            face,
            theme,
        }
    }
}

impl Widget for GlyphPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let (style, border) = match self.face {
            Face::Ancients => (
                Style::default()
                    .fg(colors.glyph())
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
                colors.border_focused(),
            ),
            Face::Normal => (
                Style::default()
                    .fg(colors.correct())
                    .add_modifier(Modifier::BOLD),
                colors.correct(),
            ),
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let top_pad = inner.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
        lines.push(Line::from(Span::styled(format!(" {} ", self.symbol), style)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_symbol(buf: &Buffer, symbol: &str) -> Option<(u16, u16)> {
        let area = buf.area;
        (area.y..area.y + area.height)
            .flat_map(|y| (area.x..area.x + area.width).map(move |x| (x, y)))
            .find(|&(x, y)| buf[(x, y)].symbol() == symbol)
    }

    #[test]
    fn test_ancients_face_uses_glyph_color() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        GlyphPrompt::new('ᛗ', Face::Ancients, &theme).render(area, &mut buf);

        let (x, y) = find_symbol(&buf, "ᛗ").expect("glyph rendered");
        assert_eq!(y, 2);
        assert_eq!(buf[(x, y)].fg, theme.colors.glyph());
    }

    #[test]
    fn test_normal_face_uses_correct_color() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        GlyphPrompt::new('M', Face::Normal, &theme).render(area, &mut buf);

        let (x, y) = find_symbol(&buf, "M").expect("letter rendered");
        assert_eq!(buf[(x, y)].fg, theme.colors.correct());
    }
}
