use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::ColorPalette;

/// Fallback primary color used until the palette loads, and kept when the
/// palette service is unavailable.
pub const DEFAULT_PRIMARY: &str = "#4f8cff";

fn fallback_palette() -> ColorPalette {
    ColorPalette {
        primary: DEFAULT_PRIMARY.to_string(),
        accent: None,
    }
}

#[derive(Properties, PartialEq)]
pub struct PaletteProviderProps {
    pub children: Children,
}

/// Fetches the active palette once at the application root and distributes
/// it by context, so individual modals never fetch it themselves. The
/// fetch is cosmetic: failure is logged and the fallback color stays.
#[function_component(PaletteProvider)]
pub fn palette_provider(props: &PaletteProviderProps) -> Html {
    let palette = use_state(fallback_palette);

    use_effect_with((), {
        let palette = palette.clone();
        move |_| {
            spawn_local(async move {
                match ApiClient::new().get_active_palette().await {
                    Ok(active) => palette.set(active),
                    Err(e) => {
                        Logger::warn_with_component(
                            "palette-provider",
                            &format!("Palette fetch failed, using fallback: {}", e),
                        );
                    }
                }
            });
            || ()
        }
    });

    html! {
        <ContextProvider<ColorPalette> context={(*palette).clone()}>
            { for props.children.iter() }
        </ContextProvider<ColorPalette>>
    }
}

/// Read the active palette from context, falling back to the default
/// color outside a provider.
#[hook]
pub fn use_palette() -> ColorPalette {
    use_context::<ColorPalette>().unwrap_or_else(fallback_palette)
}
