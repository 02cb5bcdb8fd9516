use bitelo_core::{BiteloError, EntryKind, MountTarget, Result};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Look up the element an entry mounts into.
pub fn resolve_target(target: &MountTarget) -> Result<HtmlElement> {
    let window = web_sys::window().ok_or(BiteloError::NoWindow)?;
    let document = window.document().ok_or(BiteloError::NoDocument)?;

    let element = document
        .get_element_by_id(target.id())
        .ok_or_else(|| BiteloError::MountTargetMissing(target.id().to_string()))?;

    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| BiteloError::MountTargetNotHtml(target.id().to_string()))
}

/// Render `view` once into `target` and keep it there for the page lifetime.
///
/// Nothing is rendered when the target cannot be resolved.
pub fn mount_once<F, N>(kind: EntryKind, target: &MountTarget, view: F) -> Result<()>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let parent = match resolve_target(target) {
        Ok(parent) => parent,
        Err(e) => {
            tracing::error!(entry = kind.label(), "Mount failed: {}", e);
            return Err(e);
        }
    };

    // Dropping the handle would unmount; the view lives as long as the page.
    mount_to(parent, view).forget();
    tracing::info!(entry = kind.label(), "Mounted into {}", target);
    Ok(())
}
