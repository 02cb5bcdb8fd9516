use bitelo_core::config::{DEFAULT_SUBHEADING, DEFAULT_TITLE};
use bitelo_core::{CalendarDate, MonthDisplay};
use leptos::prelude::*;

use crate::components::title::Title;

/// Date line followed by the title and a second-level heading.
///
/// The date is a prop rather than something read here, so the same inputs
/// always produce the same tree.
#[component]
pub fn HeadingComponent(
    date: CalendarDate,
    #[prop(optional)] month_display: MonthDisplay,
    #[prop(into, default = DEFAULT_TITLE.to_string())] title: String,
    #[prop(into, default = DEFAULT_SUBHEADING.to_string())] subheading: String,
) -> impl IntoView {
    let month = date.display_month(month_display);

    view! {
        <div>
            {date.day}"/"{month}"/"{date.year}
            <Title text=title />
            <h2>{subheading}</h2>
        </div>
    }
}
