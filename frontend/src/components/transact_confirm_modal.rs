use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::hooks::use_hover_style;

#[derive(Properties, PartialEq)]
pub struct TransactConfirmModalProps {
    pub is_open: bool,
    pub amount: f64,
    pub recipient: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmation dialog for a monetary transfer. Purely presentational;
/// the transfer itself is the caller's concern.
#[function_component(TransactConfirmModal)]
pub fn transact_confirm_modal(props: &TransactConfirmModalProps) -> Html {
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
        <div class="transact-confirm-modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("transact-confirm-modal", theme.class())} onclick={on_modal_click}>
                <div class="transact-confirm-modal-content">
                    <h3 class="transact-confirm-title">{"Confirm Transfer"}</h3>

                    <p class="transact-confirm-message">
                        {format!("Send ${:.2} to {}?", props.amount, props.recipient)}
                    </p>
                    <p class="transact-confirm-note">
                        {"This cannot be undone once submitted."}
                    </p>

                    <div class="transact-confirm-buttons">
                        <button
                            type="button"
                            class="btn btn-primary"
                            style={hover.style.clone()}
                            onmouseover={hover.on_mouse_over.clone()}
                            onmouseout={hover.on_mouse_out.clone()}
                            onclick={on_confirm_click}
                        >
                            {"Send"}
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
