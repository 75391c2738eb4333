use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::theme_provider::use_theme;
use components::{
    ConfirmModal, PaletteProvider, PromoFormModal, ThemeProvider, TransactConfirmModal,
};
use services::api::ApiClient;
use services::logging::Logger;
use shared::{prepare_save, Promo, PromoFormState};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <PaletteProvider>
                <PromoAdmin />
            </PaletteProvider>
        </ThemeProvider>
    }
}

#[function_component(PromoAdmin)]
fn promo_admin() -> Html {
    let promos = use_state(Vec::<Promo>::new);
    let loading = use_state(|| true);

    // Promo form modal state
    let form_open = use_state(|| false);
    let editing = use_state(|| Option::<Promo>::None);

    // Deactivation confirm state
    let deactivate_target = use_state(|| Option::<Promo>::None);

    // Credit transfer demo state
    let transfer_open = use_state(|| false);
    let transfer_amount = use_state(String::new);
    let transfer_recipient = use_state(String::new);

    let theme = use_theme();

    let refresh_promos = {
        let promos = promos.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let promos = promos.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match ApiClient::new().list_promos().await {
                    Ok(response) => promos.set(response.promos),
                    Err(e) => {
                        Logger::error_with_component(
                            "promo-admin",
                            &format!("Failed to load promos: {}", e),
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    // Load the promo list once on mount
    use_effect_with((), {
        let refresh_promos = refresh_promos.clone();
        move |_| {
            refresh_promos.emit(());
            || ()
        }
    });

    let on_new_promo = {
        let form_open = form_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            form_open.set(true);
        })
    };

    let on_form_close = {
        let form_open = form_open.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            form_open.set(false);
            editing.set(None);
        })
    };

    let on_deactivate_confirm = {
        let deactivate_target = deactivate_target.clone();
        let refresh_promos = refresh_promos.clone();

        Callback::from(move |_| {
            let Some(promo) = (*deactivate_target).clone() else {
                return;
            };
            deactivate_target.set(None);

            let refresh_promos = refresh_promos.clone();
            spawn_local(async move {
                let form = PromoFormState {
                    promo_id: Some(promo.id),
                    name: promo.name.clone(),
                    status: "Inactive".to_string(),
                };

                match prepare_save(&form) {
                    Ok((route, request)) => {
                        match ApiClient::new().save_promo(&route, &request).await {
                            Ok(response) if response.success => refresh_promos.emit(()),
                            Ok(response) => alert(&response.failure_summary()),
                            Err(e) => alert(&format!("Failed to deactivate promo: {}", e)),
                        }
                    }
                    Err(_) => {
                        Logger::warn_with_component(
                            "promo-admin",
                            "Skipped deactivating a promo with an empty name",
                        );
                    }
                }
            });
        })
    };

    let on_deactivate_cancel = {
        let deactivate_target = deactivate_target.clone();
        Callback::from(move |_| deactivate_target.set(None))
    };

    let on_transfer_amount_change = {
        let transfer_amount = transfer_amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            transfer_amount.set(input.value());
        })
    };

    let on_transfer_recipient_change = {
        let transfer_recipient = transfer_recipient.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            transfer_recipient.set(input.value());
        })
    };

    let parsed_amount = transfer_amount.trim().parse::<f64>().ok();
    let transfer_ready = parsed_amount.is_some() && !transfer_recipient.trim().is_empty();

    let on_transfer_open = {
        let transfer_open = transfer_open.clone();
        Callback::from(move |_: MouseEvent| transfer_open.set(true))
    };

    let on_transfer_confirm = {
        let transfer_open = transfer_open.clone();
        let transfer_amount = transfer_amount.clone();
        let transfer_recipient = transfer_recipient.clone();
        Callback::from(move |_| {
            // The transfer itself belongs to the billing backend; this page
            // only collects the confirmation.
            Logger::info_with_component(
                "promo-admin",
                &format!(
                    "Credit transfer confirmed: {} -> {}",
                    *transfer_amount, *transfer_recipient
                ),
            );
            alert("Transfer confirmed");
            transfer_open.set(false);
            transfer_amount.set(String::new());
            transfer_recipient.set(String::new());
        })
    };

    let on_transfer_cancel = {
        let transfer_open = transfer_open.clone();
        Callback::from(move |_| transfer_open.set(false))
    };

    let on_theme_toggle = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <div class={classes!("promo-admin", theme.class())}>
            <header class="header">
                <div class="container">
                    <h1>{"Promotions"}</h1>
                    <button class="theme-toggle-btn" onclick={on_theme_toggle}>
                        {if theme.is_dark() { "Switch to light" } else { "Switch to dark" }}
                    </button>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <section class="promos-section">
                        <div class="promos-header">
                            <h2>{"Active Promotions"}</h2>
                            <button class="btn btn-primary" onclick={on_new_promo}>
                                {"New Promo"}
                            </button>
                        </div>

                        {if *loading {
                            html! { <div class="loading">{"Loading promos..."}</div> }
                        } else if promos.is_empty() {
                            html! { <div class="promos-empty">{"No promos yet"}</div> }
                        } else {
                            html! {
                                <div class="table-container">
                                    <table class="promos-table">
                                        <thead>
                                            <tr>
                                                <th>{"Name"}</th>
                                                <th>{"Status"}</th>
                                                <th>{"Actions"}</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {for promos.iter().map(|promo| {
                                                let on_edit = {
                                                    let form_open = form_open.clone();
                                                    let editing = editing.clone();
                                                    let promo = promo.clone();
                                                    Callback::from(move |_: MouseEvent| {
                                                        editing.set(Some(promo.clone()));
                                                        form_open.set(true);
                                                    })
                                                };
                                                let on_deactivate = {
                                                    let deactivate_target = deactivate_target.clone();
                                                    let promo = promo.clone();
                                                    Callback::from(move |_: MouseEvent| {
                                                        deactivate_target.set(Some(promo.clone()));
                                                    })
                                                };

                                                html! {
                                                    <tr>
                                                        <td class="promo-name">{&promo.name}</td>
                                                        <td class="promo-status">
                                                            {promo.status.clone().unwrap_or_else(|| "—".to_string())}
                                                        </td>
                                                        <td class="promo-actions">
                                                            <button class="btn btn-small" onclick={on_edit}>
                                                                {"Edit"}
                                                            </button>
                                                            <button class="btn btn-small btn-danger" onclick={on_deactivate}>
                                                                {"Deactivate"}
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })}
                                        </tbody>
                                    </table>
                                </div>
                            }
                        }}
                    </section>

                    <section class="transfer-section">
                        <h2>{"Send Promo Credit"}</h2>
                        <div class="form-group">
                            <label for="transfer-amount">{"Amount (dollars)"}</label>
                            <input
                                id="transfer-amount"
                                type="number"
                                placeholder="25.00"
                                step="0.01"
                                min="0.01"
                                value={(*transfer_amount).clone()}
                                onchange={on_transfer_amount_change}
                            />
                        </div>
                        <div class="form-group">
                            <label for="transfer-recipient">{"Recipient"}</label>
                            <input
                                id="transfer-recipient"
                                type="text"
                                placeholder="customer@example.com"
                                value={(*transfer_recipient).clone()}
                                onchange={on_transfer_recipient_change}
                            />
                        </div>
                        <button
                            class="btn btn-primary"
                            onclick={on_transfer_open}
                            disabled={!transfer_ready}
                        >
                            {"Send Credit"}
                        </button>
                    </section>
                </div>
            </main>

            <PromoFormModal
                is_open={*form_open}
                promo={(*editing).clone()}
                on_save={refresh_promos.clone()}
                on_close={on_form_close}
            />

            <ConfirmModal
                is_open={deactivate_target.is_some()}
                title="Deactivate Promo"
                message={deactivate_target
                    .as_ref()
                    .map(|p| format!("Deactivate \"{}\"? Customers will no longer see it.", p.name))
                    .unwrap_or_default()}
                on_confirm={on_deactivate_confirm}
                on_cancel={on_deactivate_cancel}
            />

            <TransactConfirmModal
                is_open={*transfer_open}
                amount={parsed_amount.unwrap_or(0.0)}
                recipient={(*transfer_recipient).clone()}
                on_confirm={on_transfer_confirm}
                on_cancel={on_transfer_cancel}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
