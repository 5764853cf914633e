use leptos::prelude::*;

/// Medical disclaimer banner shared by the result and about pages.
#[component]
pub fn Disclaimer() -> impl IntoView {
    view! {
        <div class="disclaimer">
            <p class="disclaimer-title">"Important Disclaimer"</p>
            <p>
                "This AI diagnosis is for educational and research purposes only. Always consult with a qualified dental professional for medical advice and treatment decisions."
            </p>
        </div>
    }
}
