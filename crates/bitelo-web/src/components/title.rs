use bitelo_core::config::DEFAULT_TITLE;
use leptos::prelude::*;

#[component]
pub fn Title(#[prop(into, default = DEFAULT_TITLE.to_string())] text: String) -> impl IntoView {
    view! { <h1>{text}</h1> }
}
