use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use ancients::alphabet::Letter;

use crate::ui::theme::Theme;

/// Glyph -> letter table for the letters in play.
pub struct Legend<'a> {
    pub entries: Vec<(char, Letter)>,
    pub theme: &'a Theme,
}

impl<'a> Legend<'a> {
    pub fn new(entries: Vec<(char, Letter)>, theme: &'a Theme) -> Self {
        Self { entries, theme }
    }
}

impl Widget for Legend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Legend ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let glyph_style = Style::default()
            .fg(colors.glyph())
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(colors.fg());

        let mut spans = Vec::with_capacity(self.entries.len() * 2);
        for (glyph, letter) in &self.entries {
            spans.push(Span::styled(glyph.to_string(), glyph_style));
            spans.push(Span::styled(format!(" = {letter}   "), text_style));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_glyph_and_letter() {
        let theme = Theme::default();
        let entries = vec![
            ('ᛒ', Letter::from_char('B').unwrap()),
            ('ᚠ', Letter::from_char('F').unwrap()),
        ];
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        Legend::new(entries, &theme).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("ᛒ = B"), "row was {row:?}");
        assert!(row.contains("ᚠ = F"), "row was {row:?}");
    }
}
