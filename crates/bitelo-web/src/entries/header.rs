use bitelo_core::{EntryKind, HeaderConfig, Result};
use leptos::prelude::*;

use crate::app::AppLayout;
use crate::components::header::Logo;
use crate::mount::mount_once;

/// Mount `AppLayout` into the configured element.
pub fn mount(config: &HeaderConfig) -> Result<()> {
    let target = config.mount_target()?;
    let logo = Logo::from(config);

    mount_once(EntryKind::Header, &target, move || view! { <AppLayout logo=logo /> })
}
