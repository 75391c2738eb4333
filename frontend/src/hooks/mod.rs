pub mod use_hover_style;

pub use use_hover_style::use_hover_style;
