pub mod components;
pub mod glyphs;
pub mod layout;
pub mod theme;
