use leptos::prelude::*;

use crate::components::navigation::Navigation;
use crate::diagnosis::{AnalysisError, AnalysisResult};
use crate::pages::about::AboutPage;
use crate::pages::error::ErrorPage;
use crate::pages::home::HomePage;
use crate::pages::result::ResultPage;
use crate::pages::team::TeamPage;
use crate::pages::upload::UploadPage;
use crate::theme::{apply_theme, ThemeContext};

/// The pages of the app. Navigation is a state change, not a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Upload,
    Result,
    Error,
    About,
    Team,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Upload => "Upload",
            Page::Result => "Results",
            Page::Error => "Error",
            Page::About => "About",
            Page::Team => "Team",
        }
    }
}

/// Navigation state: the visible page plus the data threaded between pages.
///
/// The router is the sole owner of this struct; pages receive the pieces they
/// need as props and report back through callbacks. At most one of
/// `result`/`error` is set at a time.
#[derive(Debug, Clone, Default)]
pub struct RouterState {
    pub page: Page,
    pub result: Option<AnalysisResult>,
    pub error: Option<AnalysisError>,
}

impl RouterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch pages. Total over [`Page`]; stored data is left in place so a
    /// completed result stays visible when the user returns to it.
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// An analysis finished: store the result (overwriting any previous one),
    /// drop any stale error, and show the result page.
    pub fn complete(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.error = None;
        self.page = Page::Result;
    }

    /// Something failed: store the error kind, drop any stale result, and
    /// show the error page.
    pub fn fail(&mut self, error: AnalysisError) {
        self.error = Some(error);
        self.result = None;
        self.page = Page::Error;
    }
}

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(RouterState::new());

    let (theme, set_theme) = signal(String::from("system"));
    provide_context(ThemeContext { theme, set_theme });

    // Apply theme to DOM whenever the signal changes
    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(&t);
    });

    let navigate = Callback::new(move |page: Page| state.update(|s| s.navigate(page)));
    let on_complete =
        Callback::new(move |result: AnalysisResult| state.update(|s| s.complete(result)));
    let on_error = Callback::new(move |error: AnalysisError| state.update(|s| s.fail(error)));

    view! {
        <div class="app-shell">
            <Navigation
                current_page=Signal::derive(move || state.get().page)
                on_navigate=navigate
            />
            <main class="content">
                {move || match state.get().page {
                    Page::Home => view! { <HomePage on_navigate=navigate /> }.into_any(),
                    Page::Upload => view! {
                        <UploadPage on_analysis_complete=on_complete on_error=on_error />
                    }
                    .into_any(),
                    Page::Result => view! {
                        <ResultPage result=state.get().result on_navigate=navigate />
                    }
                    .into_any(),
                    Page::Error => view! {
                        <ErrorPage
                            error=state.get().error.unwrap_or(AnalysisError::AnalysisFailed)
                            on_navigate=navigate
                        />
                    }
                    .into_any(),
                    Page::About => view! { <AboutPage /> }.into_any(),
                    Page::Team => view! { <TeamPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::{CLASS_CAVITY, HEATMAP_URL};

    fn make_result() -> AnalysisResult {
        AnalysisResult {
            predicted_class: CLASS_CAVITY.to_string(),
            confidence: 91.3,
            image_url: "blob:preview".to_string(),
            heatmap_url: HEATMAP_URL.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_home_with_no_data() {
        let state = RouterState::new();
        assert_eq!(state.page, Page::Home);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_navigate_reaches_every_page() {
        let mut state = RouterState::new();
        for page in [
            Page::Upload,
            Page::Result,
            Page::Error,
            Page::About,
            Page::Team,
            Page::Home,
        ] {
            state.navigate(page);
            assert_eq!(state.page, page);
        }
    }

    #[test]
    fn test_complete_stores_result_and_shows_result_page() {
        let mut state = RouterState::new();
        state.navigate(Page::Upload);
        state.complete(make_result());
        assert_eq!(state.page, Page::Result);
        assert!(state.result.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fail_stores_error_and_shows_error_page() {
        let mut state = RouterState::new();
        state.navigate(Page::Upload);
        state.fail(AnalysisError::FileTooLarge);
        assert_eq!(state.page, Page::Error);
        assert_eq!(state.error, Some(AnalysisError::FileTooLarge));
        assert!(state.result.is_none());
    }

    #[test]
    fn test_complete_clears_previous_error() {
        let mut state = RouterState::new();
        state.fail(AnalysisError::InvalidFileType);
        state.complete(make_result());
        assert!(state.error.is_none());
        assert!(state.result.is_some());
    }

    #[test]
    fn test_fail_clears_previous_result() {
        let mut state = RouterState::new();
        state.complete(make_result());
        state.fail(AnalysisError::AnalysisFailed);
        assert!(state.result.is_none());
        assert_eq!(state.error, Some(AnalysisError::AnalysisFailed));
    }

    #[test]
    fn test_complete_overwrites_previous_result() {
        let mut state = RouterState::new();
        state.complete(make_result());
        let mut second = make_result();
        second.confidence = 84.0;
        state.complete(second.clone());
        assert_eq!(state.result, Some(second));
    }

    #[test]
    fn test_navigate_keeps_stored_result() {
        let mut state = RouterState::new();
        state.complete(make_result());
        state.navigate(Page::Home);
        state.navigate(Page::Result);
        assert!(state.result.is_some());
    }
}
