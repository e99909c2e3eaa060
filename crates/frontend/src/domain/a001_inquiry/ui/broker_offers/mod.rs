mod state;
pub mod view_model;

use contracts::usecases::u501_customer_response::CustomerResponseAction;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_inquiry::api;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::request_seq::RequestSequence;
use crate::usecases::u501_customer_response::{CustomerResponseModal, PendingResponse};
use state::{create_state, ReloadAfter};
use view_model::{build_offer_rows, OfferRow};

const TABLE_ID: &str = "broker-offers-table";

/// Broker offers awaiting the customer's decision
#[component]
pub fn BrokerOffersPage() -> impl IntoView {
    let config = StoredValue::new(use_context::<Config>().unwrap_or_default());
    let state = create_state();
    let sequence = RwSignal::new(RequestSequence::default());

    let load_broker_offers = move || {
        sequence.update_untracked(|s| s.advance());
        let ticket = sequence.with_untracked(|s| s.current());
        state.update(|s| s.begin_load());

        let config = config.get_value();
        spawn_local(async move {
            let result = api::fetch_inquiries(&config).await;

            // a newer load was started while this one was in flight
            if !sequence.with_untracked(|s| s.is_current(ticket)) {
                log::debug!("Discarding stale broker offers response");
                return;
            }

            match result {
                Ok(response) => {
                    let rows = build_offer_rows(&response, &config.offers.currency);
                    log::debug!(
                        "Loaded {} inquiries, {} with broker offers",
                        response.inquiries.len(),
                        rows.len()
                    );
                    state.update(|s| s.apply_loaded(rows));
                }
                Err(e) => {
                    log::error!("Error loading broker offers: {}", e);
                    state.update(|s| s.apply_load_failed());
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_broker_offers();
        }
    });

    let open_response_modal = Callback::new(move |target: PendingResponse| {
        state.update(|s| s.open_response(target));
    });

    let close_response_modal = Callback::new(move |_: ()| state.update(|s| s.close_response()));

    let on_responded = Callback::new(move |action: CustomerResponseAction| {
        let delay = config.with_value(|c| c.offers.reload_delay_ms);
        let mut reload = None;
        state.update(|s| reload = s.on_responded(action, delay));

        if let Some(ReloadAfter(delay)) = reload {
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                state.update(|s| s.on_reload_started());
                load_broker_offers();
            });
        }
    });

    // memoized so the dialog is not remounted on unrelated state changes
    let pending = Memo::new(move |_| state.with(|s| s.pending.clone()));

    let has_rows = move || state.with(|s| !s.rows.is_empty());
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));

    view! {
        <div class="page broker-offers">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("handshake")}
                    <h1 class="page__title">"Broker Offers"</h1>
                    <span class="badge bg-secondary">
                        {move || state.with(|s| s.rows.len()).to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_broker_offers()
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div id="broker-offers-message-container">
                {move || state.with(|s| s.message.clone()).map(|message| view! {
                    <div class=message.css_class()>{message.text().to_string()}</div>
                })}
            </div>

            <Show
                when=has_rows
                fallback=move || view! {
                    <Show when=move || state.with(|s| s.is_loaded)>
                        <div id="no-broker-offers-message" class="text-muted">
                            "No broker offers yet. Offers appear here once a broker accepts one of your inquiries."
                        </div>
                    </Show>
                }
            >
                <table id=TABLE_ID class="table table-striped table-hover">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Type"</th>
                            <th>"Location"</th>
                            <th>"Property"</th>
                            <th>"Price Range"</th>
                            <th>"Created"</th>
                            <th>"Broker Offer"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody id="broker-offers-tbody">
                        {move || state.with(|s| s.rows.clone()).into_iter().map(|row| view! {
                            <OfferRowView row=row on_respond=open_response_modal />
                        }).collect_view()}
                    </tbody>
                </table>
            </Show>

            {move || pending.get().map(|target| view! {
                <CustomerResponseModal
                    pending=target
                    on_close=close_response_modal
                    on_responded=on_responded
                />
            })}
        </div>
    }
}

#[component]
fn OfferRowView(row: OfferRow, on_respond: Callback<PendingResponse>) -> impl IntoView {
    let accept_target = row.pending(CustomerResponseAction::Accept);
    let reject_target = row.pending(CustomerResponseAction::Reject);
    let inquiry_id = row.inquiry_id.to_string();
    let broker_name = row.broker.name.clone();
    let badge_class = format!("badge {}", row.badge_class());
    let notes = row.broker.notes.clone();

    view! {
        <tr>
            <td>{row.inquiry_id}</td>
            <td>
                <span class=badge_class title=row.transaction_type.display_name()>
                    {row.transaction_type.code()}
                </span>
            </td>
            <td>{row.location}</td>
            <td>{row.property_summary}</td>
            <td>{row.price_range}</td>
            <td>{row.created_date}</td>
            <td>
                <div class="small">
                    <strong>"Broker:"</strong>" "{row.broker.name}<br/>
                    <strong>"Commission:"</strong>" "{row.broker.commission}<br/>
                    <strong>"Offered:"</strong>" "{row.broker.offered_date}
                    {notes.map(|notes| view! {
                        <br/>
                        <strong>"Notes:"</strong>
                        " "
                        {notes}
                    })}
                </div>
            </td>
            <td>
                <button
                    class="btn btn-success btn-sm me-2 accept-offer-btn"
                    data-inquiry-id=inquiry_id.clone()
                    data-broker-name=broker_name.clone()
                    on:click=move |_| on_respond.run(accept_target.clone())
                >
                    {icon("check")}
                    " Accept"
                </button>
                <button
                    class="btn btn-danger btn-sm reject-offer-btn"
                    data-inquiry-id=inquiry_id
                    data-broker-name=broker_name
                    on:click=move |_| on_respond.run(reject_target.clone())
                >
                    {icon("x")}
                    " Reject"
                </button>
            </td>
        </tr>
    }
}
