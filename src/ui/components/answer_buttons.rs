use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use ancients::alphabet::Letter;
use ancients::session::quiz::Highlight;

use crate::ui::layout;
use crate::ui::theme::Theme;

pub struct AnswerButton {
    pub letter: Letter,
    pub highlight: Option<Highlight>,
}

pub struct AnswerButtons<'a> {
    pub buttons: Vec<AnswerButton>,
    pub focused: Option<usize>,
    pub theme: &'a Theme,
}

impl<'a> AnswerButtons<'a> {
    pub fn new(buttons: Vec<AnswerButton>, focused: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            buttons,
            focused,
            theme,
        }
    }
}

impl Widget for AnswerButtons<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Answers ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        block.render(area, buf);

        let rects = layout::button_rects(area, self.buttons.len());
        for (i, (button, rect)) in self.buttons.iter().zip(rects).enumerate() {
            let is_focused = self.focused == Some(i);

            let mut style = match button.highlight {
                Some(Highlight::Correct) => Style::default()
                    .fg(colors.correct())
                    .bg(colors.correct_bg())
                    .add_modifier(Modifier::BOLD),
                Some(Highlight::Wrong) => Style::default()
                    .fg(colors.wrong())
                    .bg(colors.wrong_bg())
                    .add_modifier(Modifier::CROSSED_OUT),
                None => Style::default().fg(colors.fg()).bg(colors.button_bg()),
            };
            if is_focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            let (open, close) = if is_focused { ('>', '<') } else { ('[', ']') };
            let display = format!("{open} {} {close}", button.letter);
            buf.set_string(rect.x, rect.y, &display, style);
        }
    }
}
