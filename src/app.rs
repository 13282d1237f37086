//! Resume Screener Frontend App
//!
//! Mounts the panels into whichever host elements the current page provides
//! and binds the page's delete controls.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{ShortlistPanel, UploadPanel};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::delete_controls;

pub const UPLOAD_ROOT_ID: &str = "upload-root";
pub const SHORTLIST_ROOT_ID: &str = "shortlist-root";

pub fn start(config: ClientConfig) {
    let document = document();

    if let Some(root) = mount_point(&document, UPLOAD_ROOT_ID) {
        let config = config.clone();
        mount_to(root, move || {
            provide_context(AppContext::new(config));
            view! { <UploadPanel /> }
        })
        .forget();
        log::info!("[App] Upload panel mounted");
    }

    if let Some(root) = mount_point(&document, SHORTLIST_ROOT_ID) {
        mount_to(root, move || {
            provide_context(AppContext::new(config));
            view! { <ShortlistPanel /> }
        })
        .forget();
        log::info!("[App] Shortlist panel mounted");
    }

    delete_controls::bind_delete_buttons(&document);
}

fn mount_point(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}
