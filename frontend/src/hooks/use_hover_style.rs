use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::palette_provider::use_palette;

/// Inline hover styling for a primary action button, driven by the active
/// palette: the primary color is applied while hovered, the accent (when
/// the palette carries one) at rest. The stylesheet default applies when
/// there is no accent.
pub struct HoverStyle {
    pub style: String,
    pub on_mouse_over: Callback<MouseEvent>,
    pub on_mouse_out: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover_style() -> HoverStyle {
    let palette = use_palette();
    let hovered = use_state(|| false);

    let on_mouse_over = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };

    let on_mouse_out = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = if *hovered {
        format!("background-color: {};", palette.primary)
    } else {
        match &palette.accent {
            Some(accent) => format!("background-color: {};", accent),
            None => String::new(),
        }
    };

    HoverStyle {
        style,
        on_mouse_over,
        on_mouse_out,
    }
}
