use leptos::prelude::*;

use crate::components::header::{Header, Logo};

#[component]
pub fn AppLayout(#[prop(optional)] logo: Logo) -> impl IntoView {
    view! {
        <div class="app">
            <Header logo=logo />
        </div>
    }
}
