//! The client-side controller behind the popup: one owner for the questions
//! list, the rendered view, the auth state, and local persistence. Earlier
//! popup revisions each carried their own copy of this logic; this is the
//! single surviving implementation.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    client::store::{LocalStore, KEY_CONFIG_COLLAPSED, KEY_LAST_QUIZ, KEY_SESSION_TOKEN},
    errors::{AppError, AppResult},
    models::{
        domain::{Difficulty, QuizCategory, QuizQuestion, SavedQuiz},
        dto::request::GenerateQuizRequest,
    },
    render::{self, view::QuizView, DiagramState},
    services::QuizService,
};

/// How long the UI waits before giving up on a generation. The underlying
/// request is not cancelled; only its result is ignored.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated { token: String },
}

#[derive(Clone, Copy, Debug)]
pub struct QuizSettings {
    pub difficulty: Difficulty,
    pub category: QuizCategory,
    pub count: u8,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            category: QuizCategory::General,
            count: 5,
        }
    }
}

pub struct QuizSession {
    quiz_service: Arc<QuizService>,
    store: LocalStore,
    pub settings: QuizSettings,
    questions: Vec<QuizQuestion>,
    view: Option<QuizView>,
    auth: AuthState,
    timeout: Duration,
}

impl QuizSession {
    pub fn new(quiz_service: Arc<QuizService>, store: LocalStore, settings: QuizSettings) -> Self {
        let auth = match store.get::<String>(KEY_SESSION_TOKEN) {
            Some(token) => AuthState::Authenticated { token },
            None => AuthState::Anonymous,
        };

        Self {
            quiz_service,
            store,
            settings,
            questions: Vec::new(),
            view: None,
            auth,
            timeout: GENERATION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reloads the last persisted quiz, if any. Mirrors the popup reopening.
    pub fn restore_saved(&mut self) -> bool {
        match self.store.get::<SavedQuiz>(KEY_LAST_QUIZ) {
            Some(saved) if !saved.questions.is_empty() => {
                self.questions = saved.questions;
                self.view = Some(QuizView::build(&self.questions));
                true
            }
            _ => false,
        }
    }

    /// Runs the whole pipeline for the extracted page text and installs the
    /// result. The generation runs on its own task under a timeout guard; on
    /// expiry the task is left to finish into the void.
    pub async fn generate(&mut self, content: &str) -> AppResult<&QuizView> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Failed to extract page content".to_string(),
            ));
        }

        let request = GenerateQuizRequest {
            content: content.to_string(),
            difficulty: self.settings.difficulty,
            category: self.settings.category,
            count: self.settings.count,
        };

        let service = Arc::clone(&self.quiz_service);
        let handle = tokio::spawn(async move { service.generate(&request).await });

        let outcome = match tokio::time::timeout(self.timeout, handle).await {
            Err(_) => {
                return Err(AppError::Upstream(format!(
                    "Request timed out ({}s)",
                    self.timeout.as_secs()
                )))
            }
            Ok(Err(join_error)) => {
                return Err(AppError::InternalError(format!(
                    "Generation task failed: {}",
                    join_error
                )))
            }
            Ok(Ok(outcome)) => outcome,
        };

        let questions = match outcome {
            Ok(questions) => questions,
            Err(error) => {
                self.note_auth_failure(&error);
                return Err(error);
            }
        };

        self.questions = questions;
        let view = QuizView::build(&self.questions);
        self.persist_snapshot(&view);
        Ok(&*self.view.insert(view))
    }

    pub fn view(&self) -> Option<&QuizView> {
        self.view.as_ref()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn select_option(&mut self, question: usize, option: usize) -> Option<bool> {
        self.view.as_mut()?.select_option(question, option)
    }

    pub fn clear_selection(&mut self, question: usize) {
        if let Some(view) = self.view.as_mut() {
            view.clear_selection(question);
        }
    }

    pub fn toggle_answer(&mut self, question: usize) -> Option<bool> {
        self.view.as_mut()?.toggle_answer(question)
    }

    pub fn toggle_diagram(&mut self, question: usize) -> Option<DiagramState> {
        self.view.as_mut()?.toggle_diagram(question).cloned()
    }

    /// Explicit save, same snapshot the automatic persistence writes.
    pub fn save(&self) -> bool {
        match &self.view {
            Some(view) => {
                self.persist_snapshot(view);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.questions.clear();
        self.view = None;
        self.store.remove(KEY_LAST_QUIZ);
    }

    pub fn export_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(&self.questions)
            .map_err(|e| AppError::InternalError(format!("Failed to export quiz: {}", e)))
    }

    /// Plain-text transcript of the quiz, as copied to the clipboard.
    pub fn clipboard_text(&self) -> String {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let mut text = format!("Question {}: {}\n", i + 1, q.question);
                if let Some(options) = q.options.as_ref().filter(|o| !o.is_empty()) {
                    text.push_str(&format!("Options: {}\n", options.join(", ")));
                }
                text.push_str(&format!("Answer: {}", q.answer.as_deref().unwrap_or("")));
                text
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn set_config_collapsed(&mut self, collapsed: bool) {
        self.store.set(KEY_CONFIG_COLLAPSED, &collapsed);
    }

    pub fn config_collapsed(&self) -> bool {
        self.store.get(KEY_CONFIG_COLLAPSED).unwrap_or(false)
    }

    pub fn auth_state(&self) -> &AuthState {
        &self.auth
    }

    pub fn session_token(&self) -> Option<&str> {
        match &self.auth {
            AuthState::Authenticated { token } => Some(token),
            _ => None,
        }
    }

    pub fn begin_login(&mut self) {
        self.auth = AuthState::Authenticating;
    }

    /// Called with the session token returned from the token exchange.
    pub fn complete_login(&mut self, token: String) {
        self.store.set(KEY_SESSION_TOKEN, &token);
        self.auth = AuthState::Authenticated { token };
    }

    /// Client-local deletion only; an already-issued token stays valid
    /// upstream until its expiry.
    pub fn logout(&mut self) {
        self.store.remove(KEY_SESSION_TOKEN);
        self.auth = AuthState::Anonymous;
    }

    /// A protected action came back unauthorized: drop to the login state.
    pub fn note_auth_failure(&mut self, error: &AppError) {
        if matches!(error, AppError::Unauthorized(_)) {
            log::info!("Session token rejected; returning to login");
            self.logout();
        }
    }

    fn persist_snapshot(&self, view: &QuizView) {
        self.store.set(
            KEY_LAST_QUIZ,
            &SavedQuiz {
                questions: self.questions.clone(),
                rendered_markup: render::render_html(view),
            },
        );
    }
}
