//! Error page: category, message, and remediation suggestions for a failed
//! upload or analysis, all derived from the error kind itself.

use leptos::prelude::*;

use crate::app::Page;
use crate::diagnosis::AnalysisError;

#[component]
pub fn ErrorPage(error: AnalysisError, on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div class="page error-page">
            <style>{include_str!("error.css")}</style>

            <div class="card error-card">
                <h2 class="error-title">{error.title()}</h2>
                <p class="error-message">{error.message()}</p>

                <div class="suggestions">
                    <h3>"Suggestions to resolve this issue:"</h3>
                    <ul>
                        {error
                            .suggestions()
                            .iter()
                            .map(|s| view! { <li>{*s}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="error-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_navigate.run(Page::Upload)
                    >
                        "Try Again"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_navigate.run(Page::Upload)
                    >
                        "Upload New Image"
                    </button>
                    <button
                        class="btn btn-ghost"
                        on:click=move |_| on_navigate.run(Page::Home)
                    >
                        "Go Home"
                    </button>
                </div>

                <p class="error-footer">
                    "If you continue to experience issues, please try refreshing the page or contact support."
                </p>
            </div>
        </div>
    }
}
