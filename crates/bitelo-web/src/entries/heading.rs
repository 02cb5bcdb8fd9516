use bitelo_core::{Clock, DatePolicy, EntryKind, HeadingConfig, Result};
use leptos::prelude::*;

use crate::components::heading::HeadingComponent;
use crate::mount::mount_once;

/// Build the render function for the heading entry.
///
/// With [`DatePolicy::FreezeAtMount`] the clock is read here, once. With
/// [`DatePolicy::RecomputeOnRender`] it is read on every call of the
/// returned function.
pub fn renderer<C>(config: &HeadingConfig, clock: C) -> impl Fn() -> AnyView + 'static
where
    C: Clock + 'static,
{
    tracing::debug!(
        month_display = config.month_display.label(),
        date_policy = config.date_policy.label(),
        "Building heading renderer"
    );
    let frozen = match config.date_policy {
        DatePolicy::FreezeAtMount => Some(clock.today()),
        DatePolicy::RecomputeOnRender => None,
    };
    let month_display = config.month_display;
    let title = config.title.clone();
    let subheading = config.subheading.clone();

    move || {
        let date = frozen.unwrap_or_else(|| clock.today());
        view! {
            <HeadingComponent
                date=date
                month_display=month_display
                title=title.clone()
                subheading=subheading.clone()
            />
        }
        .into_any()
    }
}

/// Mount `HeadingComponent` into the configured element.
pub fn mount<C>(config: &HeadingConfig, clock: C) -> Result<()>
where
    C: Clock + 'static,
{
    let target = config.mount_target()?;
    mount_once(EntryKind::Heading, &target, renderer(config, clock))
}
