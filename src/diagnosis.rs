//! Core diagnosis-flow logic: upload validation, the user-facing error
//! taxonomy, the upload state machine, and the simulated inference output.
//!
//! Everything here is pure so it can be tested off the browser. The pages in
//! `crate::pages` wire these pieces to DOM events and timers.

use serde::{Deserialize, Serialize};

/// Media types accepted for upload. Browsers report JPEGs as either
/// `image/jpeg` or the legacy `image/jpg` alias depending on origin.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Upload size cap in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// The two labels the demo model can produce.
pub const CLASS_CAVITY: &str = "Cavity Detected";
pub const CLASS_HEALTHY: &str = "Healthy Tooth";

/// Milliseconds between progress ticks while an analysis is pending.
pub const PROGRESS_TICK_MS: i32 = 200;

/// The ticker stalls here so the bar never completes on its own; only a
/// finished analysis pushes it to 100.
pub const PROGRESS_STALL_AT: f64 = 90.0;

/// Largest random increment a single tick may add.
pub const PROGRESS_MAX_STEP: f64 = 10.0;

/// Simulated inference latency. Stand-in for a real backend round trip.
pub const INFERENCE_LATENCY_MS: i32 = 3000;

/// Pause between the bar reaching 100 and leaving the upload page.
pub const COMPLETION_SETTLE_MS: i32 = 500;

/// Placeholder Grad-CAM heatmap paired with every mock diagnosis.
pub const HEATMAP_URL: &str =
    "https://images.unsplash.com/photo-1609840114035-3c981b782dfe?w=400&h=400&fit=crop&crop=center";

/// Everything that can go wrong between picking a file and seeing a result.
///
/// The variant travels from the point of failure to the error page unchanged,
/// so display categories and suggestions come from a match, not from
/// inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    /// The selected file is not a JPEG or PNG.
    InvalidFileType,
    /// The selected file exceeds [`MAX_UPLOAD_BYTES`].
    FileTooLarge,
    /// The analysis itself failed.
    AnalysisFailed,
}

impl AnalysisError {
    /// Short category heading shown on the error page.
    pub fn title(self) -> &'static str {
        match self {
            AnalysisError::InvalidFileType => "Invalid File Type",
            AnalysisError::FileTooLarge => "File Too Large",
            AnalysisError::AnalysisFailed => "Analysis Error",
        }
    }

    /// One-sentence description of what happened.
    pub fn message(self) -> &'static str {
        match self {
            AnalysisError::InvalidFileType => {
                "Invalid file type. Please upload a JPG or PNG image."
            }
            AnalysisError::FileTooLarge => {
                "File size too large. Please upload an image smaller than 10MB."
            }
            AnalysisError::AnalysisFailed => "Analysis failed. Please try again.",
        }
    }

    /// Remediation bullet points for the error page.
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            AnalysisError::InvalidFileType => &[
                "Make sure your file is in JPG or PNG format",
                "Avoid uploading GIF, BMP, or other unsupported formats",
                "Check that the file extension matches the actual file type",
            ],
            AnalysisError::FileTooLarge => &[
                "Reduce the image file size to under 10MB",
                "Use image compression tools to reduce file size",
                "Try uploading a lower resolution version of the image",
            ],
            AnalysisError::AnalysisFailed => &[
                "Make sure the uploaded image is a clear dental X-ray",
                "Check that the image is properly oriented",
                "Try uploading a different X-ray image",
            ],
        }
    }
}

/// Where the upload flow currently stands.
///
/// Completion and failure leave the page through the router callbacks, so the
/// page itself only ever sits in one of these three phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    /// No file chosen yet.
    #[default]
    Idle,
    /// A file passed validation and is previewed.
    FileSelected,
    /// An analysis is in flight.
    Analyzing,
}

impl UploadPhase {
    /// Only a validated selection may start an analysis; re-triggering while
    /// one is already pending is rejected so timers never overlap.
    pub fn can_start_analysis(self) -> bool {
        matches!(self, UploadPhase::FileSelected)
    }

    /// Swapping the file mid-analysis is not allowed.
    pub fn accepts_new_file(self) -> bool {
        !matches!(self, UploadPhase::Analyzing)
    }
}

/// Validate a candidate upload by declared media type and byte size.
///
/// Checks run in order and the first failure wins: media type, then size.
/// Both the file picker and the drop zone funnel through here.
pub fn validate_upload(media_type: &str, byte_size: u64) -> Result<(), AnalysisError> {
    if !ACCEPTED_MEDIA_TYPES.contains(&media_type) {
        return Err(AnalysisError::InvalidFileType);
    }
    if byte_size > MAX_UPLOAD_BYTES {
        return Err(AnalysisError::FileTooLarge);
    }
    Ok(())
}

/// Advance the progress bar by one tick.
///
/// `jitter` is a uniform draw in [0,1). The bar creeps up by a random amount
/// per tick and stalls at [`PROGRESS_STALL_AT`] until the analysis finishes.
pub fn advance_progress(current: f64, jitter: f64) -> f64 {
    if current >= PROGRESS_STALL_AT {
        return current;
    }
    (current + jitter * PROGRESS_MAX_STEP).min(PROGRESS_STALL_AT)
}

/// What the (simulated) model returns for one image.
///
/// This struct is the payload shape a real inference backend would produce;
/// swapping the simulation for a network call keeps this type as the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub predicted_class: String,
    /// Model certainty as a percentage in [0,100].
    pub confidence: f64,
    pub heatmap_url: String,
}

/// A finished analysis as the result page consumes it: the diagnosis plus a
/// reference to the image it was produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub predicted_class: String,
    pub confidence: f64,
    pub image_url: String,
    pub heatmap_url: String,
}

impl AnalysisResult {
    pub fn from_diagnosis(diagnosis: Diagnosis, image_url: String) -> Self {
        AnalysisResult {
            predicted_class: diagnosis.predicted_class,
            confidence: diagnosis.confidence,
            image_url,
            heatmap_url: diagnosis.heatmap_url,
        }
    }

    /// The healthy label gets the reassuring styling, everything else the
    /// warning styling.
    pub fn is_healthy(&self) -> bool {
        self.predicted_class.to_lowercase().contains("healthy")
    }
}

/// Produce a mock diagnosis from two uniform draws in [0,1).
///
/// `class_pick` chooses between the two labels, `confidence_pick` maps to a
/// confidence in [80,100). Randomness is passed in so the mapping stays
/// deterministic under test.
pub fn mock_diagnosis(class_pick: f64, confidence_pick: f64) -> Diagnosis {
    let predicted_class = if class_pick > 0.5 {
        CLASS_CAVITY
    } else {
        CLASS_HEALTHY
    };
    Diagnosis {
        predicted_class: predicted_class.to_string(),
        confidence: 80.0 + confidence_pick * 20.0,
        heatmap_url: HEATMAP_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_jpeg_accepted() {
        assert!(validate_upload("image/jpeg", 1024 * 1024).is_ok());
    }

    #[test]
    fn test_jpg_alias_and_png_accepted() {
        assert!(validate_upload("image/jpg", 500).is_ok());
        assert!(validate_upload("image/png", 500).is_ok());
    }

    #[test]
    fn test_gif_rejected_as_invalid_type() {
        // 2 MB GIF: size is fine, type is not
        let result = validate_upload("image/gif", 2 * 1024 * 1024);
        assert_eq!(result, Err(AnalysisError::InvalidFileType));
    }

    #[test]
    fn test_oversized_png_rejected() {
        // 15 MB PNG
        let result = validate_upload("image/png", 15 * 1024 * 1024);
        assert_eq!(result, Err(AnalysisError::FileTooLarge));
    }

    #[test]
    fn test_exact_limit_accepted() {
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_upload("image/png", MAX_UPLOAD_BYTES + 1),
            Err(AnalysisError::FileTooLarge)
        );
    }

    #[test]
    fn test_type_check_wins_over_size_check() {
        // Both checks fail; the type error is reported because it runs first
        let result = validate_upload("image/gif", 15 * 1024 * 1024);
        assert_eq!(result, Err(AnalysisError::InvalidFileType));
    }

    #[test]
    fn test_error_display_mapping_is_distinct() {
        let kinds = [
            AnalysisError::InvalidFileType,
            AnalysisError::FileTooLarge,
            AnalysisError::AnalysisFailed,
        ];
        for kind in kinds {
            assert!(!kind.title().is_empty());
            assert!(!kind.message().is_empty());
            assert_eq!(kind.suggestions().len(), 3);
        }
        assert_ne!(
            AnalysisError::InvalidFileType.title(),
            AnalysisError::FileTooLarge.title()
        );
        assert_eq!(AnalysisError::FileTooLarge.title(), "File Too Large");
        assert_eq!(AnalysisError::InvalidFileType.title(), "Invalid File Type");
    }

    #[test]
    fn test_only_selected_phase_starts_analysis() {
        assert!(!UploadPhase::Idle.can_start_analysis());
        assert!(UploadPhase::FileSelected.can_start_analysis());
        assert!(!UploadPhase::Analyzing.can_start_analysis());
    }

    #[test]
    fn test_analyzing_phase_rejects_new_file() {
        assert!(UploadPhase::Idle.accepts_new_file());
        assert!(UploadPhase::FileSelected.accepts_new_file());
        assert!(!UploadPhase::Analyzing.accepts_new_file());
    }

    #[test]
    fn test_progress_advances_and_stalls() {
        let mut progress = 0.0;
        for _ in 0..1000 {
            let next = advance_progress(progress, 0.99);
            assert!(next >= progress);
            assert!(next <= PROGRESS_STALL_AT);
            progress = next;
        }
        assert_eq!(progress, PROGRESS_STALL_AT);
        // Once stalled it stays put
        assert_eq!(advance_progress(progress, 0.99), PROGRESS_STALL_AT);
    }

    #[test]
    fn test_progress_single_step_bounded() {
        let next = advance_progress(10.0, 0.999);
        assert!(next - 10.0 <= PROGRESS_MAX_STEP);
        assert_eq!(advance_progress(10.0, 0.0), 10.0);
    }

    #[test]
    fn test_mock_diagnosis_label_set() {
        assert_eq!(mock_diagnosis(0.9, 0.5).predicted_class, CLASS_CAVITY);
        assert_eq!(mock_diagnosis(0.1, 0.5).predicted_class, CLASS_HEALTHY);
        assert_eq!(mock_diagnosis(0.5, 0.5).predicted_class, CLASS_HEALTHY);
    }

    #[test]
    fn test_mock_diagnosis_confidence_range() {
        for pick in [0.0, 0.1, 0.5, 0.9, 0.999] {
            let diagnosis = mock_diagnosis(pick, pick);
            assert!(diagnosis.confidence >= 80.0);
            assert!(diagnosis.confidence < 100.0);
        }
        assert_eq!(mock_diagnosis(0.0, 0.0).confidence, 80.0);
    }

    #[test]
    fn test_mock_diagnosis_carries_heatmap() {
        assert_eq!(mock_diagnosis(0.0, 0.0).heatmap_url, HEATMAP_URL);
    }

    #[test]
    fn test_result_from_diagnosis_keeps_image() {
        let result = AnalysisResult::from_diagnosis(
            mock_diagnosis(0.9, 0.25),
            "blob:preview".to_string(),
        );
        assert_eq!(result.predicted_class, CLASS_CAVITY);
        assert_eq!(result.confidence, 85.0);
        assert_eq!(result.image_url, "blob:preview");
        assert_eq!(result.heatmap_url, HEATMAP_URL);
        assert!(!result.is_healthy());
        let healthy = AnalysisResult::from_diagnosis(
            mock_diagnosis(0.0, 0.0),
            "blob:preview".to_string(),
        );
        assert!(healthy.is_healthy());
    }

    #[test]
    fn test_result_payload_field_names() {
        // The result struct doubles as the backend payload contract; pin the
        // field names a real inference service would have to produce.
        let result = AnalysisResult {
            predicted_class: CLASS_HEALTHY.to_string(),
            confidence: 92.5,
            image_url: "blob:preview".to_string(),
            heatmap_url: HEATMAP_URL.to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["predicted_class"], CLASS_HEALTHY);
        assert_eq!(json["confidence"], 92.5);
        assert!(json["heatmap_url"].is_string());

        let parsed: AnalysisResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, result);
    }
}
