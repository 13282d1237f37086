//! Recent Uploads Component
//!
//! Projection of the bounded upload history in the app store.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_recent_entries, store_recent_is_empty};

/// Newest-first list of this session's uploads
#[component]
pub fn RecentUploadsList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let uploads = ctx.uploads;

    view! {
        <div class="card mt-4">
            <div class="card-header">"Recent Uploads"</div>
            <div id="recentUploads" class="list-group list-group-flush">
                <Show when=move || store_recent_is_empty(&uploads)>
                    <div class="list-group-item text-center text-muted">"No uploads yet"</div>
                </Show>
                <For
                    each=move || store_recent_entries(&uploads)
                    key=|entry| entry.seq
                    children=move |entry| {
                        let href = entry.href();
                        let summary = entry.summary();
                        let experience = entry.experience_label();
                        view! {
                            <a href=href title=summary class="list-group-item list-group-item-action">
                                <div class="d-flex w-100 justify-content-between">
                                    <h5 class="mb-1">{entry.name}</h5>
                                    <small class="text-success">{entry.uploaded_at}</small>
                                </div>
                                <p class="mb-1">{entry.email}</p>
                                <small class="text-muted">
                                    <i class="bi bi-briefcase me-1"></i>
                                    {experience}
                                </small>
                            </a>
                        }
                    }
                />
            </div>
        </div>
    }
}
