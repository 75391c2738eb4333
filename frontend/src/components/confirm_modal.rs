use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::hooks::use_hover_style;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Generic yes/no confirmation dialog. The caller owns the open state;
/// both actions are always available once open.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let theme = use_theme();
    let hover = use_hover_style();

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="confirm-modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("confirm-modal", theme.class())} onclick={on_modal_click}>
                <div class="confirm-modal-content">
                    <h3 class="confirm-title">{&props.title}</h3>

                    <p class="confirm-message">{&props.message}</p>

                    <div class="confirm-buttons">
                        <button
                            type="button"
                            class="btn btn-primary"
                            style={hover.style.clone()}
                            onmouseover={hover.on_mouse_over.clone()}
                            onmouseout={hover.on_mouse_out.clone()}
                            onclick={on_confirm_click}
                        >
                            {"Confirm"}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel_click}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
