use contracts::usecases::u501_customer_response::{CustomerResponseAction, CustomerResponseRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use super::submission::{Submission, SubmissionOutcome};
use super::PendingResponse;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

fn alert(message: &str) {
    web_sys::window().and_then(|w| w.alert_with_message(message).ok());
}

/// Confirmation dialog for accepting or rejecting a broker offer.
///
/// Mounted once per opening, so the notes start empty every time.
/// `on_responded` fires only after the server accepted the response;
/// on failure the dialog stays open with its notes so the user can retry.
#[component]
pub fn CustomerResponseModal(
    pending: PendingResponse,
    on_close: Callback<()>,
    on_responded: Callback<CustomerResponseAction>,
) -> impl IntoView {
    let config = StoredValue::new(use_context::<Config>().unwrap_or_default());
    let notes = RwSignal::new(String::new());
    let submission = RwSignal::new(Submission::default());

    let inquiry_id = pending.inquiry_id;
    let chosen = pending.action;

    let respond = move |action: CustomerResponseAction| {
        if submission.try_update(|s| s.begin(action)) != Some(true) {
            return;
        }

        let request = CustomerResponseRequest {
            inquiry_id,
            action,
            customer_notes: notes.get_untracked(),
        };
        let config = config.get_value();
        log::debug!("Submitting {} for inquiry {}", action, inquiry_id);

        spawn_local(async move {
            let result = api::submit_customer_response(&config, &request).await;
            if let Err(e) = &result {
                log::error!("Error responding to broker offer: {}", e);
            }

            // dismissal is blocked while busy, so the dialog is still mounted
            match submission.try_update(|s| s.finish(action, result)) {
                Some(SubmissionOutcome::Close(action)) => {
                    log::info!("Customer response '{}' saved for inquiry {}", action, inquiry_id);
                    on_responded.run(action);
                }
                Some(SubmissionOutcome::StayOpen { alert: text }) => alert(&text),
                None => {}
            }
        });
    };

    let appearance_for = move |action: CustomerResponseAction| {
        if action == chosen {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Secondary
        }
    };
    let is_busy = Signal::derive(move || submission.with(|s| s.is_busy()));
    let label = move |action: CustomerResponseAction| submission.with(|s| s.label(action));

    view! {
        <ModalFrame
            modal_id="customerResponseModal"
            title="Respond to Broker Offer"
            on_close=on_close
            busy=is_busy
        >
            <div class="modal-body">
                <div id="broker-offer-details">
                    <div class="alert alert-info">
                        <h6>{format!("Inquiry ID: {}", inquiry_id)}</h6>
                        <p><strong>"Broker:"</strong>" "{pending.broker_name.clone()}</p>
                        <p>
                            "You are about to "
                            <strong>{chosen.code()}</strong>
                            " this broker's offer."
                        </p>
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label" for="customer-response-notes">"Notes (optional)"</label>
                    <textarea
                        id="customer-response-notes"
                        class="form__textarea"
                        rows=3
                        placeholder="Anything the broker should know"
                        disabled=move || is_busy.get()
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close.run(())
                    disabled=is_busy
                >
                    "Cancel"
                </Button>
                <Button
                    attr:id="reject-broker-offer"
                    appearance=appearance_for(CustomerResponseAction::Reject)
                    on_click=move |_| respond(CustomerResponseAction::Reject)
                    disabled=is_busy
                >
                    {icon("x")}
                    {move || label(CustomerResponseAction::Reject)}
                </Button>
                <Button
                    attr:id="accept-broker-offer"
                    appearance=appearance_for(CustomerResponseAction::Accept)
                    on_click=move |_| respond(CustomerResponseAction::Accept)
                    disabled=is_busy
                >
                    {icon("check")}
                    {move || label(CustomerResponseAction::Accept)}
                </Button>
            </div>
        </ModalFrame>
    }
}
