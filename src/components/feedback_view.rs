//! Feedback View Component
//!
//! Renders a feedback container's alert from `Option<Feedback>`.

use leptos::prelude::*;

use crate::browser;
use crate::feedback::{Feedback, ERROR_ALERT_CLASS};
use crate::models::{DuplicateError, ShortlistResult, UploadResult};

/// Alert for the latest submission; empty while `feedback` is `None`
#[component]
pub fn FeedbackView(feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|current| match current {
            Feedback::Error(message) => error_alert(message, feedback).into_any(),
            Feedback::Duplicate(duplicate) => duplicate_alert(duplicate, feedback).into_any(),
            Feedback::Uploaded(result) => upload_success(result, feedback).into_any(),
            Feedback::Shortlisted(result) => shortlist_success(result).into_any(),
        })
    }
}

/// Close button that clears the container
fn dismiss_button(feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn-close"
            aria-label="Close"
            on:click=move |_| feedback.set(None)
        ></button>
    }
}

fn error_alert(message: String, feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    view! {
        <div class=ERROR_ALERT_CLASS role="alert">
            <strong>"Error!"</strong>
            " "
            {message}
            {dismiss_button(feedback)}
        </div>
    }
}

fn duplicate_alert(duplicate: DuplicateError, feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    let existing_href = duplicate.existing_href();
    view! {
        <div class="alert alert-warning alert-dismissible fade show" role="alert">
            <h4 class="alert-heading">
                <i class="bi bi-exclamation-triangle-fill me-2"></i>
                "Duplicate Email Found"
            </h4>
            <p><strong>{duplicate.error}</strong></p>
            <p class="mb-0">
                "Existing candidate: "
                <strong>{duplicate.existing_candidate_name}</strong>
            </p>
            <hr/>
            <div class="d-flex justify-content-between align-items-center">
                <span class="text-muted">"Would you like to view the existing candidate instead?"</span>
                <div>
                    <a href=existing_href class="btn btn-sm btn-warning">
                        <i class="bi bi-person-fill me-1"></i>
                        "View Existing Candidate"
                    </a>
                    <a href="/candidates" class="btn btn-sm btn-outline-secondary ms-2">
                        <i class="bi bi-people-fill me-1"></i>
                        "View All Candidates"
                    </a>
                </div>
            </div>
            {dismiss_button(feedback)}
        </div>
    }
}

fn upload_success(result: UploadResult, feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    let name = result.display_name().to_string();
    let details = format!(
        "Email: {} | Experience: {} years",
        result.display_email(),
        result.display_years()
    );
    let href = result.candidate_href();
    view! {
        <div class="alert alert-success alert-dismissible fade show" role="alert">
            <h4 class="alert-heading">
                <i class="bi bi-check-circle-fill me-2"></i>
                "Success!"
            </h4>
            <p>
                "Resume processed successfully for candidate: "
                <strong>{name}</strong>
            </p>
            <p class="mb-0">
                <small class="text-muted">{details}</small>
            </p>
            <hr/>
            <div class="d-flex justify-content-between">
                <a href=href class="btn btn-sm btn-success">
                    <i class="bi bi-person-fill me-1"></i>
                    "View Candidate Details"
                </a>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-success"
                    on:click=move |_| browser::reload_page()
                >
                    <i class="bi bi-upload me-1"></i>
                    "Upload Another"
                </button>
            </div>
            {dismiss_button(feedback)}
        </div>
    }
}

fn shortlist_success(result: ShortlistResult) -> impl IntoView {
    let shortlist_href = result.job_description_href();
    let ranked = (!result.top_candidates.is_empty()).then(|| {
        view! {
            <ol class="list-group list-group-numbered mb-2">
                {result
                    .top_candidates
                    .iter()
                    .map(|candidate| {
                        let href = candidate.candidate_href();
                        let name = candidate.display_name().to_string();
                        let score = candidate.score_percent();
                        view! {
                            <li class="list-group-item d-flex justify-content-between align-items-start">
                                <a href=href class="ms-2 me-auto">{name}</a>
                                <span class="badge bg-success rounded-pill">{score}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        }
    });

    view! {
        <div class="alert alert-success" role="alert">
            <h4 class="alert-heading">
                <i class="bi bi-check-circle-fill me-2"></i>
                "Shortlisting Complete!"
            </h4>
            <p>{result.message}</p>
            {ranked}
            <hr/>
            <div class="d-flex justify-content-between">
                <button
                    type="button"
                    class="btn btn-sm btn-success"
                    on:click=move |_| browser::reload_page()
                >
                    <i class="bi bi-arrow-clockwise me-1"></i>
                    "Refresh Page"
                </button>
                {shortlist_href.map(|href| view! {
                    <a href=href class="btn btn-sm btn-outline-success">
                        <i class="bi bi-trophy me-1"></i>
                        "View Shortlist"
                    </a>
                })}
                <a href="/job_descriptions" class="btn btn-sm btn-outline-success">
                    <i class="bi bi-list-ul me-1"></i>
                    "View All Job Descriptions"
                </a>
            </div>
        </div>
    }
}
