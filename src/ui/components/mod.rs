pub mod answer_buttons;
pub mod glyph_prompt;
pub mod group_tabs;
pub mod legend;
