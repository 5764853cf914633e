//! Result page: diagnosis summary, original image next to the Grad-CAM
//! heatmap, and a download affordance.

use leptos::prelude::*;

use crate::app::Page;
use crate::components::disclaimer::Disclaimer;
use crate::diagnosis::AnalysisResult;

#[component]
pub fn ResultPage(result: Option<AnalysisResult>, on_navigate: Callback<Page>) -> impl IntoView {
    // Reached without a stored result (direct navigation): render an empty
    // state with a way back instead of assuming data exists.
    let Some(result) = result else {
        return view! {
            <div class="page result-page">
                <div class="missing-result">
                    <p>"No analysis results to display"</p>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| on_navigate.run(Page::Upload)
                    >
                        "Upload New Image"
                    </button>
                </div>
            </div>
        }
        .into_any();
    };

    let (show_heatmap, set_show_heatmap) = signal(true);

    let is_healthy = result.is_healthy();
    let confidence_class = if result.confidence >= 90.0 {
        "confidence-high"
    } else if result.confidence >= 70.0 {
        "confidence-medium"
    } else {
        "confidence-low"
    };
    let confidence_display = format!("{:.1}%", result.confidence);
    let download_name = format!("dental-analysis-result-{}.png", js_sys::Date::now() as u64);

    let image_url = result.image_url.clone();
    let image_for_toggle = result.image_url.clone();
    let download_url = result.image_url.clone();
    let heatmap_url = result.heatmap_url.clone();

    view! {
        <div class="page result-page">
            <style>{include_str!("result.css")}</style>

            <h2>"Analysis Results"</h2>
            <p class="page-description">"AI-powered diagnosis with visual explanations."</p>

            <div class="result-grid">
                <div class="card summary-card">
                    <h3>"Diagnosis Results"</h3>

                    <div class="summary-field">
                        <span class="field-label">"Predicted Condition"</span>
                        <span class=if is_healthy { "badge badge-healthy" } else { "badge badge-warning" }>
                            {result.predicted_class.clone()}
                        </span>
                    </div>

                    <div class="summary-field">
                        <span class="field-label">"Confidence Score"</span>
                        <span class=format!("confidence-value {}", confidence_class)>
                            {confidence_display}
                        </span>
                    </div>

                    <label class="toggle-row">
                        <input
                            type="checkbox"
                            prop:checked=move || show_heatmap.get()
                            on:change=move |_| set_show_heatmap.update(|v| *v = !*v)
                        />
                        "Show Heatmap"
                    </label>
                    <p class="field-note">
                        "The heatmap highlights areas that influenced the AI's decision using Grad-CAM visualization."
                    </p>

                    <div class="summary-actions">
                        <a href=download_url download=download_name class="btn btn-secondary btn-full">
                            "Download Result"
                        </a>
                        <button
                            class="btn btn-primary btn-full"
                            on:click=move |_| on_navigate.run(Page::Upload)
                        >
                            "Upload Another Image"
                        </button>
                    </div>
                </div>

                <div class="images-column">
                    <div class="image-pair">
                        <div class="card image-card">
                            <h4>"Original X-ray"</h4>
                            <div class="image-frame">
                                <img src=image_url alt="Original X-ray" />
                            </div>
                        </div>
                        <div class="card image-card">
                            <h4>
                                {move || if show_heatmap.get() { "Grad-CAM Heatmap" } else { "Analysis View" }}
                            </h4>
                            <div class="image-frame">
                                <img
                                    src=move || {
                                        if show_heatmap.get() {
                                            heatmap_url.clone()
                                        } else {
                                            image_for_toggle.clone()
                                        }
                                    }
                                    alt="Analysis visualization"
                                />
                            </div>
                            <Show when=move || show_heatmap.get()>
                                <p class="field-note">
                                    "Red areas indicate regions of highest AI attention"
                                </p>
                            </Show>
                        </div>
                    </div>

                    <div class="card">
                        <h3>"Understanding Your Results"</h3>
                        <div class="explain-grid">
                            <div>
                                <h4>"Confidence Score"</h4>
                                <p class="field-note">
                                    "Indicates how certain the AI model is about its prediction. Higher scores indicate greater confidence in the diagnosis."
                                </p>
                            </div>
                            <div>
                                <h4>"Grad-CAM Heatmap"</h4>
                                <p class="field-note">
                                    "Shows which areas of the X-ray the AI focused on when making its prediction. Warmer colors indicate higher attention."
                                </p>
                            </div>
                        </div>
                        <Disclaimer />
                    </div>
                </div>
            </div>
        </div>
    }
    .into_any()
}
