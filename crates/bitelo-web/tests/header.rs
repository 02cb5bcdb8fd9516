#![cfg(target_arch = "wasm32")]

mod common;

use bitelo_core::{BiteloError, HeaderConfig};
use bitelo_web::components::header::{Header, Logo};
use bitelo_web::entries;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn header_entry_mounts_into_root() {
    let root = common::host("root");

    entries::header::mount(&HeaderConfig::default()).unwrap();

    assert_eq!(common::count(&root, ".app"), 1);
    assert_eq!(common::count(&root, ".app > .header > .logo-box > img"), 1);
    assert_eq!(common::count(&root, ".app > .header > .nav-items ul > li"), 2);

    let img = root.query_selector("img.logo").unwrap().unwrap();
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some(bitelo_core::config::DEFAULT_LOGO_SRC)
    );
    assert_eq!(img.get_attribute("alt").as_deref(), Some("Image Unavailable!"));
}

#[wasm_bindgen_test]
fn header_is_the_same_on_every_render() {
    for i in 0..3 {
        let host = common::host(&format!("header-repeat-{i}"));
        mount_to(host.clone(), || view! { <Header /> }).forget();

        let root: web_sys::Element = host.unchecked_into();
        assert_eq!(common::count(&root, "img"), 1);
        assert_eq!(common::count(&root, "li"), 2);

        let items = root.query_selector_all("li").unwrap();
        for n in 0..items.length() {
            let item = items.item(n).unwrap();
            assert_eq!(item.text_content().unwrap_or_default(), "");
            assert!(!item.has_child_nodes());
        }
    }
}

#[wasm_bindgen_test]
fn header_uses_configured_logo() {
    let host = common::host("header-custom-logo");
    let logo = Logo {
        src: "/missing.png".to_string(),
        alt: "no logo".to_string(),
    };
    mount_to(host.clone(), move || view! { <Header logo=logo /> }).forget();

    let img = host.query_selector("img").unwrap().unwrap();
    assert_eq!(img.get_attribute("src").as_deref(), Some("/missing.png"));
    assert_eq!(img.get_attribute("alt").as_deref(), Some("no logo"));
}

#[wasm_bindgen_test]
fn header_entry_without_target_renders_nothing() {
    let config = HeaderConfig {
        mount_id: "header-absent".to_string(),
        ..HeaderConfig::default()
    };
    let before = common::count(&common::document().document_element().unwrap(), ".app");

    let err = entries::header::mount(&config).unwrap_err();

    assert!(matches!(err, BiteloError::MountTargetMissing(ref id) if id == "header-absent"));
    let after = common::count(&common::document().document_element().unwrap(), ".app");
    assert_eq!(before, after);
}

#[wasm_bindgen_test]
fn header_entry_rejects_non_html_target() {
    let document = common::document();
    let svg = document
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_id("header-svg");
    document.body().unwrap().append_child(&svg).unwrap();

    let config = HeaderConfig {
        mount_id: "header-svg".to_string(),
        ..HeaderConfig::default()
    };
    let err = entries::header::mount(&config).unwrap_err();
    assert!(matches!(err, BiteloError::MountTargetNotHtml(_)));
}
