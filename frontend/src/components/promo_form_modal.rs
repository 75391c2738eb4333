use std::collections::HashMap;

use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::hooks::use_hover_style;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::{prepare_save, Promo, PromoFormState, PROMO_STATUSES};

#[derive(Properties, PartialEq)]
pub struct PromoFormModalProps {
    pub is_open: bool,
    /// Promo being edited; None opens the form for creation
    #[prop_or_default]
    pub promo: Option<Promo>,
    pub on_save: Callback<()>,
    pub on_close: Callback<()>,
}

/// Create/edit overlay for a promo.
///
/// Validation runs only on save, never on keystroke. A save that fails
/// validation sets inline field errors and sends nothing. A save that
/// passes disables the Save button for the duration of the request and
/// reports the terminal outcome through one blocking notification.
#[function_component(PromoFormModal)]
pub fn promo_form_modal(props: &PromoFormModalProps) -> Html {
    let name = use_state(String::new);
    let status = use_state(String::new);
    let errors = use_state(HashMap::<String, String>::new);
    let is_submitting = use_state(|| false);
    // Bumped on every submit and on close; a resolution carrying an older
    // generation is stale and must not touch state
    let submit_generation = use_mut_ref(|| 0u64);
    let theme = use_theme();
    let hover = use_hover_style();
    let api_client = ApiClient::new();

    // Reset for creation or pre-fill for editing whenever the modal opens;
    // invalidate any in-flight save when it closes
    use_effect_with((props.is_open, props.promo.clone()), {
        let name = name.clone();
        let status = status.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let submit_generation = submit_generation.clone();
        move |(is_open, promo)| {
            if *is_open {
                let form = match promo {
                    Some(promo) => PromoFormState::from_promo(promo),
                    None => PromoFormState::new(),
                };
                name.set(form.name);
                status.set(form.status);
                errors.set(HashMap::new());
                is_submitting.set(false);
            } else {
                *submit_generation.borrow_mut() += 1;
            }
            || ()
        }
    });

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(select.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let status = status.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let submit_generation = submit_generation.clone();
        let promo_id = props.promo.as_ref().map(|p| p.id);
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = PromoFormState {
                promo_id,
                name: (*name).clone(),
                status: (*status).clone(),
            };

            let (route, request) = match prepare_save(&form) {
                Ok(plan) => plan,
                Err(validation) => {
                    // Submission blocked; no request leaves the component
                    errors.set(validation.errors);
                    return;
                }
            };

            errors.set(HashMap::new());
            is_submitting.set(true);

            Logger::debug_with_component(
                "promo-form-modal",
                &format!("Saving promo via {} {}", route.method, route.path),
            );

            let generation = {
                let mut current = submit_generation.borrow_mut();
                *current += 1;
                *current
            };

            let name = name.clone();
            let status = status.clone();
            let errors = errors.clone();
            let is_submitting = is_submitting.clone();
            let submit_generation = submit_generation.clone();
            let on_save = on_save.clone();
            let on_close = on_close.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                let result = api_client.save_promo(&route, &request).await;

                if *submit_generation.borrow() != generation {
                    Logger::debug_with_component(
                        "promo-form-modal",
                        "Discarding the result of a stale save",
                    );
                    return;
                }

                is_submitting.set(false);

                match result {
                    Ok(response) if response.success => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Promo saved".to_string());
                        alert(&message);
                        name.set(String::new());
                        status.set(String::new());
                        errors.set(HashMap::new());
                        on_save.emit(());
                        on_close.emit(());
                    }
                    Ok(response) => {
                        // Server-side rejection; keep the form as entered
                        alert(&response.failure_summary());
                    }
                    Err(e) => {
                        alert(&format!("Failed to save promo: {}", e));
                    }
                }
            });
        })
    };

    let reset_and_close = {
        let name = name.clone();
        let status = status.clone();
        let errors = errors.clone();
        let on_close = props.on_close.clone();
        move || {
            name.set(String::new());
            status.set(String::new());
            errors.set(HashMap::new());
            on_close.emit(());
        }
    };

    let on_backdrop_click = {
        let reset_and_close = reset_and_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            reset_and_close();
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = Callback::from(move |_: MouseEvent| {
        reset_and_close();
    });

    if !props.is_open {
        return html! {};
    }

    let is_editing = props.promo.is_some();

    html! {
        <div class="promo-form-modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("promo-form-modal", theme.class())} onclick={on_modal_click}>
                <div class="promo-form-modal-content">
                    <h3 class="promo-form-title">
                        {if is_editing { "🏷️ Edit Promo" } else { "🏷️ New Promo" }}
                    </h3>

                    <form class="promo-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="promo-name">{"Promo Name"}</label>
                            <input
                                id="promo-name"
                                type="text"
                                class="promo-form-input"
                                placeholder="Spring Sale, Free Shipping..."
                                value={(*name).clone()}
                                onchange={on_name_change}
                                autofocus=true
                            />
                            {if let Some(message) = errors.get("name") {
                                html! {
                                    <div class="field-error">
                                        {message.clone()}
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </div>

                        <div class="form-group">
                            <label for="promo-status">{"Status"}</label>
                            <select
                                id="promo-status"
                                class="promo-form-select"
                                value={(*status).clone()}
                                onchange={on_status_change}
                            >
                                <option value="" selected={status.is_empty()}>
                                    {"(none)"}
                                </option>
                                {for PROMO_STATUSES.iter().map(|&option| {
                                    html! {
                                        <option value={option} selected={option == status.as_str()}>
                                            {option}
                                        </option>
                                    }
                                })}
                            </select>
                        </div>

                        <div class="promo-form-buttons">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                style={hover.style.clone()}
                                onmouseover={hover.on_mouse_over.clone()}
                                onmouseout={hover.on_mouse_out.clone()}
                                disabled={*is_submitting}
                            >
                                {if *is_submitting {
                                    "Saving..."
                                } else if is_editing {
                                    "Update Promo"
                                } else {
                                    "Create Promo"
                                }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
