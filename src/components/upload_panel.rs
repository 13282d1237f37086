//! Upload Panel Component
//!
//! Resume upload form, its feedback container and the recent uploads list.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_busy::BusyButton;

use crate::api;
use crate::components::{FeedbackView, RecentUploadsList};
use crate::context::AppContext;
use crate::feedback::Feedback;
use crate::submission::submit_upload;

/// File types the server can parse
const ACCEPTED_RESUME_TYPES: &str = ".pdf,.docx,.doc,.txt";

#[component]
pub fn UploadPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let feedback = RwSignal::new(None::<Feedback>);
    let (busy, set_busy) = signal(false);
    let form_ref = NodeRef::<html::Form>::new();
    let file_input = NodeRef::<html::Input>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        feedback.set(None);

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let config = ctx.config();
        let upload_url = config.upload_url;
        let max_upload_bytes = config.max_upload_bytes;

        spawn_local(async move {
            let result = submit_upload(set_busy, file, max_upload_bytes, move |file| async move {
                api::upload_resume(&upload_url, &file).await
            })
            .await;

            match result {
                Ok(uploaded) => {
                    log::info!("[Upload] Candidate {} created", uploaded.candidate_id);
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                    ctx.add_recent_upload(&uploaded);
                    feedback.set(Some(Feedback::Uploaded(uploaded)));
                }
                Err(err) => {
                    log::error!("[Upload] Upload failed: {}", err);
                    feedback.set(Some(Feedback::upload_failure(err)));
                }
            }
        });
    };

    let hint = format!("PDF, DOCX, DOC or TXT, up to {}MB", ctx.config().max_upload_megabytes());

    view! {
        <div class="upload-panel">
            <form id="uploadForm" enctype="multipart/form-data" node_ref=form_ref on:submit=on_submit>
                <div class="mb-3">
                    <label for="resume" class="form-label">"Resume"</label>
                    <input
                        type="file"
                        id="resume"
                        name="resume"
                        class="form-control"
                        accept=ACCEPTED_RESUME_TYPES
                        node_ref=file_input
                    />
                    <div class="form-text">{hint}</div>
                </div>
                <BusyButton
                    busy=busy
                    label="Upload Resume"
                    busy_label="Processing..."
                    class="btn btn-primary"
                />
            </form>
            <div id="message" class="mt-3">
                <FeedbackView feedback=feedback />
            </div>
            <RecentUploadsList />
        </div>
    }
}
