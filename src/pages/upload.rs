//! Upload page: pick or drop an X-ray, validate it, preview it, and run the
//! simulated analysis with a progress bar.
//!
//! Both the file picker and the drop zone funnel through one validation
//! routine, and the progress ticker is cancelled on every exit path,
//! including navigating away mid-analysis.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::diagnosis::{
    advance_progress, mock_diagnosis, validate_upload, AnalysisError, AnalysisResult, Diagnosis,
    UploadPhase, COMPLETION_SETTLE_MS, INFERENCE_LATENCY_MS, PROGRESS_TICK_MS,
};

#[component]
pub fn UploadPage(
    on_analysis_complete: Callback<AnalysisResult>,
    on_error: Callback<AnalysisError>,
) -> impl IntoView {
    let (phase, set_phase) = signal(UploadPhase::Idle);
    let (file_name, set_file_name) = signal::<Option<String>>(None);
    let (preview_url, set_preview_url) = signal::<Option<String>>(None);
    let (progress, set_progress) = signal(0.0f64);
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "xray-file-input";

    // Progress interval id, torn-down flag checked after each await, and
    // whether the preview URL's ownership moved to the result page.
    let interval_id = StoredValue::new(None::<i32>);
    let torn_down = StoredValue::new(false);
    let handed_off = StoredValue::new(false);

    let stop_ticker = move || {
        if let Some(id) = interval_id.try_get_value().flatten() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
            let _ = interval_id.try_set_value(None);
        }
    };

    // Single validation routine shared by the picker and the drop zone.
    let handle_selected_file = move |file: web_sys::File| {
        if !phase.get_untracked().accepts_new_file() {
            return;
        }
        if let Err(kind) = validate_upload(&file.type_(), file.size() as u64) {
            on_error.run(kind);
            return;
        }
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                // A new selection releases the superseded preview right away
                if let Some(old) = preview_url.get_untracked() {
                    let _ = web_sys::Url::revoke_object_url(&old);
                }
                set_file_name.set(Some(file.name()));
                set_preview_url.set(Some(url));
                set_phase.set(UploadPhase::FileSelected);
            }
            Err(e) => {
                web_sys::console::error_1(&e);
                on_error.run(AnalysisError::AnalysisFailed);
            }
        }
    };

    // Handle drop event
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                if let Some(file) = files.get(0) {
                    handle_selected_file(file);
                }
            }
        }
    };

    // Handle file input change
    let on_input_change = move |ev: web_sys::Event| {
        let input: Option<web_sys::HtmlInputElement> =
            ev.target().and_then(|t| t.dyn_into().ok());
        if let Some(files) = input.and_then(|input| input.files()) {
            if let Some(file) = files.get(0) {
                handle_selected_file(file);
            }
        }
    };

    let start_ticker = move || {
        let callback = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            set_progress.update(|p| *p = advance_progress(*p, js_sys::Math::random()));
        }) as Box<dyn Fn()>);

        match web_sys::window()
            .unwrap()
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                PROGRESS_TICK_MS,
            ) {
            Ok(id) => interval_id.set_value(Some(id)),
            Err(e) => web_sys::console::error_1(&e),
        }
        callback.forget();
    };

    let on_analyze = move |_| {
        if !phase.get_untracked().can_start_analysis() {
            return;
        }
        set_phase.set(UploadPhase::Analyzing);
        set_progress.set(0.0);
        start_ticker();

        spawn_local(async move {
            let outcome = run_mock_inference().await;
            if torn_down.try_get_value().unwrap_or(true) {
                // Flow was dismantled mid-analysis; the ticker is already gone
                return;
            }
            match outcome {
                Ok(diagnosis) => {
                    stop_ticker();
                    set_progress.set(100.0);
                    sleep(COMPLETION_SETTLE_MS).await;
                    if torn_down.try_get_value().unwrap_or(true) {
                        return;
                    }
                    let image_url = preview_url.get_untracked().unwrap_or_default();
                    handed_off.set_value(true);
                    on_analysis_complete.run(AnalysisResult::from_diagnosis(diagnosis, image_url));
                }
                Err(kind) => {
                    stop_ticker();
                    set_phase.set(UploadPhase::FileSelected);
                    on_error.run(kind);
                }
            }
        });
    };

    on_cleanup(move || {
        let _ = torn_down.try_set_value(true);
        if let Some(id) = interval_id.try_get_value().flatten() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
        // A completed analysis hands the preview URL to the result page;
        // otherwise it is released with this page.
        if !handed_off.try_get_value().unwrap_or(false) {
            if let Some(url) = preview_url.try_get_untracked().flatten() {
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    });

    view! {
        <div class="page upload-page">
            <style>{include_str!("upload.css")}</style>

            <h2>"Upload Dental X-ray"</h2>
            <p class="page-description">
                "Upload your dental X-ray image to receive an AI-powered diagnosis with visual explanations."
            </p>

            <div class="upload-grid">
                <div class="card upload-card">
                    <h3>"Select X-ray Image"</h3>

                    <div
                        class="drop-zone"
                        class:drop-zone-active=move || is_over.get()
                        on:dragover=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            set_is_over.set(true);
                        }
                        on:dragleave=move |_| set_is_over.set(false)
                        on:drop=on_drop
                    >
                        <div class="drop-zone-content">
                            <p class="drop-main">
                                {move || file_name.get().unwrap_or_else(|| "Choose or drag X-ray image".to_string())}
                            </p>
                            <p class="drop-hint">"Supported formats: JPG, PNG (Max 10MB)"</p>
                            <label for=file_input_id class="btn btn-secondary">
                                "Browse Files"
                            </label>
                            <input
                                type="file"
                                id=file_input_id
                                accept="image/jpeg,image/jpg,image/png"
                                style="display: none"
                                on:change=on_input_change
                            />
                        </div>
                    </div>

                    <p class="upload-note">
                        "Please ensure the X-ray image is clear and properly oriented for best results."
                    </p>

                    <Show when=move || phase.get() != UploadPhase::Idle>
                        <button
                            class="btn btn-primary btn-full"
                            disabled=move || phase.get() == UploadPhase::Analyzing
                            on:click=on_analyze
                        >
                            {move || {
                                if phase.get() == UploadPhase::Analyzing {
                                    "Analyzing..."
                                } else {
                                    "Upload & Analyze"
                                }
                            }}
                        </button>
                    </Show>
                </div>

                <div class="card preview-card">
                    <h3>"Preview"</h3>
                    {move || match preview_url.get() {
                        Some(src) => view! {
                            <div class="preview-frame">
                                <img src=src class="preview-image" alt="X-ray preview" />
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="preview-empty">
                                <p>"No image selected"</p>
                            </div>
                        }
                        .into_any(),
                    }}

                    <Show when=move || phase.get() == UploadPhase::Analyzing>
                        <div class="progress-row">
                            <span>"Analyzing image..."</span>
                            <span>{move || format!("{}%", progress.get().round() as i32)}</span>
                        </div>
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style:width=move || format!("{}%", progress.get())
                            ></div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Simulated inference call. A real deployment swaps this body for a request
/// to the model service (image in, diagnosis out); the signature and failure
/// path already match that contract.
async fn run_mock_inference() -> Result<Diagnosis, AnalysisError> {
    sleep(INFERENCE_LATENCY_MS).await;
    Ok(mock_diagnosis(js_sys::Math::random(), js_sys::Math::random()))
}

/// Resolve after `ms` milliseconds on the browser event loop.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
