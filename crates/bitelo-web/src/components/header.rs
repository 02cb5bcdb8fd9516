use bitelo_core::config::{HeaderConfig, DEFAULT_LOGO_ALT, DEFAULT_LOGO_SRC};
use leptos::prelude::*;

/// Image shown in the logo box. The browser falls back to `alt` when `src`
/// cannot be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub src: String,
    pub alt: String,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            src: DEFAULT_LOGO_SRC.to_string(),
            alt: DEFAULT_LOGO_ALT.to_string(),
        }
    }
}

impl From<&HeaderConfig> for Logo {
    fn from(config: &HeaderConfig) -> Self {
        Self {
            src: config.logo_src.clone(),
            alt: config.logo_alt.clone(),
        }
    }
}

#[component]
pub fn Header(#[prop(optional)] logo: Logo) -> impl IntoView {
    let Logo { src, alt } = logo;

    view! {
        <div class="header">
            <div class="logo-box">
                <img class="logo" src=src alt=alt />
            </div>
            <div class="nav-items">
                <ul>
                    <li></li>
                    <li></li>
                </ul>
            </div>
        </div>
    }
}
