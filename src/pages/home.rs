use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Dental X-Ray Diagnosis with Explainable AI"</h1>
                <p class="page-description">
                    "Upload a dental X-ray image and receive a diagnosis with visual explanations powered by AI. Our advanced system provides accurate predictions with transparent, interpretable results."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary btn-large"
                        on:click=move |_| on_navigate.run(Page::Upload)
                    >
                        "Upload X-ray"
                    </button>
                    <button
                        class="btn btn-secondary btn-large"
                        on:click=move |_| on_navigate.run(Page::About)
                    >
                        "Learn More"
                    </button>
                </div>
            </section>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <div class="card-grid">
                    <div class="card step-card">
                        <h3>"1. Upload X-ray"</h3>
                        <p>"Upload your dental X-ray image in JPG or PNG format"</p>
                    </div>
                    <div class="card step-card">
                        <h3>"2. AI Analysis"</h3>
                        <p>"Our AI model analyzes the image and predicts dental conditions"</p>
                    </div>
                    <div class="card step-card">
                        <h3>"3. Visual Explanation"</h3>
                        <p>"View results with Grad-CAM heatmap showing areas of focus"</p>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Analyze Your X-ray?"</h2>
                <p class="page-description">
                    "Get started with our AI-powered dental diagnosis system"
                </p>
                <button
                    class="btn btn-primary btn-large"
                    on:click=move |_| on_navigate.run(Page::Upload)
                >
                    "Start Analysis"
                </button>
            </section>
        </div>
    }
}
