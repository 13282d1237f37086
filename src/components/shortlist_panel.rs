//! Shortlist Panel Component
//!
//! Job-description form that asks the server to shortlist candidates.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_busy::BusyButton;

use crate::api;
use crate::components::FeedbackView;
use crate::context::AppContext;
use crate::feedback::Feedback;
use crate::submission::submit_shortlist;

#[component]
pub fn ShortlistPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let feedback = RwSignal::new(None::<Feedback>);
    let (busy, set_busy) = signal(false);
    let (job_description, set_job_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        feedback.set(None);

        let text = job_description.get_untracked();
        let shortlist_url = ctx.config().shortlist_url;

        spawn_local(async move {
            let result = submit_shortlist(set_busy, text, move |text| async move {
                api::request_shortlist(&shortlist_url, &text).await
            })
            .await;

            match result {
                Ok(shortlisted) => {
                    log::info!(
                        "[Shortlist] {} ({} ranked)",
                        shortlisted.message,
                        shortlisted.top_candidates.len()
                    );
                    feedback.set(Some(Feedback::Shortlisted(shortlisted)));
                }
                Err(err) => {
                    log::error!("[Shortlist] Shortlisting failed: {}", err);
                    feedback.set(Some(Feedback::shortlist_failure(err)));
                }
            }
        });
    };

    view! {
        <div class="shortlist-panel">
            <form id="shortlistForm" on:submit=on_submit>
                <div class="mb-3">
                    <label for="jobDescription" class="form-label">"Job Description"</label>
                    <textarea
                        id="jobDescription"
                        name="job_description"
                        class="form-control"
                        rows="8"
                        placeholder="Paste the job description here..."
                        prop:value=move || job_description.get()
                        on:input=move |ev| set_job_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <BusyButton
                    busy=busy
                    label="Shortlist Candidates"
                    busy_label="Processing..."
                    class="btn btn-primary"
                />
            </form>
            <div id="shortlistResult" class="mt-3">
                <FeedbackView feedback=feedback />
            </div>
        </div>
    }
}
