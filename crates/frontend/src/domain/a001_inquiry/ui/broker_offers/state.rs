use contracts::usecases::u501_customer_response::CustomerResponseAction;
use leptos::prelude::*;

use super::view_model::OfferRow;
use crate::usecases::u501_customer_response::api::success_message;
use crate::usecases::u501_customer_response::PendingResponse;

pub const LOAD_ERROR_MESSAGE: &str = "Error loading broker offers. Please refresh the page.";

/// Banner shown in `#broker-offers-message-container`
#[derive(Clone, Debug, PartialEq)]
pub enum PageMessage {
    Error(String),
    Success(String),
}

impl PageMessage {
    pub fn css_class(&self) -> &'static str {
        match self {
            PageMessage::Error(_) => "alert alert-danger",
            PageMessage::Success(_) => "alert alert-success",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            PageMessage::Error(text) | PageMessage::Success(text) => text,
        }
    }
}

/// Delay before the single follow-up reload after a saved response
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadAfter(pub u32);

#[derive(Clone, Debug, Default)]
pub struct BrokerOffersState {
    pub rows: Vec<OfferRow>,
    pub message: Option<PageMessage>,
    pub is_loading: bool,
    pub is_loaded: bool,
    /// `Some` while the response dialog is open
    pub pending: Option<PendingResponse>,
}

impl BrokerOffersState {
    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    /// A successful load replaces the rows and drops a stale load error.
    /// A success banner stays until its reload clears it.
    pub fn apply_loaded(&mut self, rows: Vec<OfferRow>) {
        self.rows = rows;
        self.is_loading = false;
        self.is_loaded = true;
        if matches!(self.message, Some(PageMessage::Error(_))) {
            self.message = None;
        }
    }

    pub fn apply_load_failed(&mut self) {
        self.is_loading = false;
        self.message = Some(PageMessage::Error(LOAD_ERROR_MESSAGE.to_string()));
    }

    pub fn open_response(&mut self, target: PendingResponse) {
        self.pending = Some(target);
    }

    pub fn close_response(&mut self) {
        self.pending = None;
    }

    /// The server saved the response: close the dialog, show the banner and
    /// ask for one reload. A completion without an open dialog asks for none.
    pub fn on_responded(
        &mut self,
        action: CustomerResponseAction,
        delay_ms: u32,
    ) -> Option<ReloadAfter> {
        self.pending.take()?;
        self.message = Some(PageMessage::Success(success_message(action)));
        Some(ReloadAfter(delay_ms))
    }

    /// The follow-up reload started; the success banner has served its purpose.
    pub fn on_reload_started(&mut self) {
        if matches!(self.message, Some(PageMessage::Success(_))) {
            self.message = None;
        }
    }
}

pub fn create_state() -> RwSignal<BrokerOffersState> {
    RwSignal::new(BrokerOffersState::default())
}
