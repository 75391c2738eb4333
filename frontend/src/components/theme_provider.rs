use yew::prelude::*;

use crate::services::theme::{self, Theme};

/// Theme state distributed from the application root. Components read it
/// through [`use_theme`] instead of inspecting the document themselves.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// CSS class carried by themed containers
    pub fn class(&self) -> &'static str {
        if self.is_dark() {
            "theme-dark"
        } else {
            "theme-light"
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Owns the theme preference for the whole application: reads the stored
/// preference once, keeps the document root class in sync, and hands the
/// current theme plus a toggle down through context.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme_state = use_state(theme::read_preference);

    // Keep the document root class in sync with the current theme
    use_effect_with(*theme_state, |theme| {
        theme::apply(*theme);
        || ()
    });

    let toggle = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            theme_state.set(theme::toggle(*theme_state));
        })
    };

    let context = ThemeContext {
        theme: *theme_state,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Subscribe to the theme from any component under the provider.
/// Components rendered outside a provider fall back to dark.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::Dark,
        toggle: Callback::noop(),
    })
}
