use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::ui::layout;
use crate::ui::theme::Theme;

pub struct GroupTabs<'a> {
    pub labels: Vec<String>,
    pub active: usize,
    pub theme: &'a Theme,
}

impl<'a> GroupTabs<'a> {
    pub fn new(labels: Vec<String>, active: usize, theme: &'a Theme) -> Self {
        Self {
            labels,
            active,
            theme,
        }
    }
}

impl Widget for GroupTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Groups ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        block.render(area, buf);

        for (i, (label, rect)) in self
            .labels
            .iter()
            .zip(layout::tab_rects(area, &self.labels))
            .enumerate()
        {
            let style = if i == self.active {
                Style::default()
                    .fg(colors.bg())
                    .bg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg()).bg(colors.accent_dim())
            };
            buf.set_string(rect.x, rect.y, format!(" {label} "), style);
        }
    }
}
