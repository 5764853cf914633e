use leptos::prelude::*;

use crate::components::disclaimer::Disclaimer;

struct ProcessStep {
    title: &'static str,
    description: &'static str,
    details: &'static [&'static str],
}

const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Upload Dental X-ray",
        description: "Users upload their dental X-ray images in JPG or PNG format. Our system accepts high-quality radiographic images and validates them before processing.",
        details: &[
            "Supports JPG and PNG formats",
            "Maximum file size: 10MB",
            "Automatic image validation",
            "Secure upload processing",
        ],
    },
    ProcessStep {
        title: "AI Model Predicts Condition",
        description: "Our deep learning model, trained on thousands of dental X-rays, analyzes the uploaded image to detect various dental conditions with high accuracy.",
        details: &[
            "Convolutional Neural Network (CNN)",
            "Trained on extensive dental X-ray dataset",
            "Multi-class classification",
            "Continuous model improvements",
        ],
    },
    ProcessStep {
        title: "Grad-CAM Shows Heatmap Explanation",
        description: "Using Gradient-weighted Class Activation Mapping (Grad-CAM), we generate visual explanations showing which areas of the X-ray influenced the AI's decision.",
        details: &[
            "Gradient-weighted Class Activation Mapping",
            "Visual attention highlights",
            "Transparent AI decision-making",
            "Interactive heatmap overlay",
        ],
    },
];

const TECHNOLOGIES: &[(&str, &str)] = &[
    ("Deep Learning", "CNN-based architecture for image analysis"),
    ("Grad-CAM", "Visual explanation technique"),
    ("Explainable AI", "Transparent and interpretable results"),
    ("Rust + WebAssembly", "Fast, reliable frontend"),
    ("Computer Vision", "Medical image processing"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h2>"How Our System Works"</h2>
            <p class="page-description">
                "Our AI-powered dental X-ray diagnosis system combines advanced machine learning with explainable AI techniques to provide accurate and transparent results."
            </p>

            <section class="process-steps">
                <h3>"Analysis Process"</h3>
                {PROCESS_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, step)| view! {
                        <div class="card process-step">
                            <span class="step-number">{format!("Step {}", i + 1)}</span>
                            <h4>{step.title}</h4>
                            <p>{step.description}</p>
                            <ul class="step-details">
                                {step
                                    .details
                                    .iter()
                                    .map(|d| view! { <li>{*d}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="technologies">
                <h3>"Technologies Used"</h3>
                <div class="card-grid">
                    {TECHNOLOGIES
                        .iter()
                        .map(|(name, description)| view! {
                            <div class="card">
                                <h4>{*name}</h4>
                                <p>{*description}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <Disclaimer />
        </div>
    }
}
