//! Delete Controls
//!
//! Binds the server-rendered `.delete-btn` controls (buttons or links). Each click reads its
//! target from `data-type`, `data-id` and `data-name`, asks for
//! confirmation, then posts to the matching delete endpoint.

use leptos_busy::ElementBusy;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::api;
use crate::browser::{self, Navigation};
use crate::error::SubmitError;
use crate::models::DeleteTarget;
use crate::submission::run_submission;

pub const DELETE_SELECTOR: &str = ".delete-btn";

const DELETE_FALLBACK: &str = "Failed to delete. Please try again.";

/// Attach a click handler to every delete control in `document`
pub fn bind_delete_buttons(document: &web_sys::Document) {
    let controls = match document.query_selector_all(DELETE_SELECTOR) {
        Ok(controls) => controls,
        Err(e) => {
            log::error!("[Delete] Failed to query delete controls: {:?}", e);
            return;
        }
    };

    let mut bound = 0;
    for index in 0..controls.length() {
        let Some(node) = controls.item(index) else {
            continue;
        };
        let control = match node.dyn_into::<HtmlElement>() {
            Ok(control) => control,
            Err(node) => {
                log::warn!("[Delete] Skipping non-HTML delete control <{}>", node.node_name());
                continue;
            }
        };

        let clicked = control.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            handle_click(clicked.clone());
        });
        match control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            Ok(()) => bound += 1,
            Err(e) => log::error!("[Delete] Failed to bind delete control: {:?}", e),
        }
        on_click.forget();
    }
    log::debug!("[Delete] Bound {} delete controls", bound);
}

fn handle_click(control: HtmlElement) {
    let dataset = control.dataset();
    let kind = dataset.get("type");
    let id = dataset.get("id");
    let name = dataset.get("name");

    let target = match DeleteTarget::from_attributes(kind.as_deref(), id.as_deref(), name.as_deref()) {
        Ok(target) => target,
        Err(e) => {
            log::warn!("[Delete] Ignoring click: {}", e);
            return;
        }
    };

    if !browser::confirm(&target.confirm_message()) {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let busy = ElementBusy::new(control, "Deleting...");
        let result = run_submission(busy, || api::delete_target(&target)).await;

        match result {
            Ok(message) => {
                log::info!("[Delete] Deleted {} {}", target.kind.as_str(), target.id);
                browser::alert(&message);
                Navigation::after_delete(target.kind).apply();
            }
            Err(err) => {
                log::error!("[Delete] Deleting {} {} failed: {}", target.kind.as_str(), target.id, err);
                browser::alert(&failure_alert(&err));
            }
        }
    });
}

/// Alert text for a failed delete
fn failure_alert(err: &SubmitError) -> String {
    match err {
        SubmitError::Server { message, .. } => {
            format!("Error: {}", message.as_deref().unwrap_or("Unknown error"))
        }
        _ => DELETE_FALLBACK.to_string(),
    }
}
