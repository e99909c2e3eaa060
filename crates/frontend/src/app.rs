use crate::domain::a001_inquiry::ui::broker_offers::BrokerOffersPage;
use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // API endpoints, CSRF names and display settings for every page.
    provide_context(load_config());

    view! {
        <ConfigProvider>
            <BrokerOffersPage />
        </ConfigProvider>
    }
}
