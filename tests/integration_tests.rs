//! End-to-end pipeline runs against a stubbed completion model: prompt
//! assembly, normalization, rendering, and the client session flow.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use quiz_crawler_server::{
    client::{
        store::{LocalStore, KEY_LAST_QUIZ},
        QuizSession, QuizSettings,
    },
    errors::{AppError, AppResult},
    models::{
        domain::{Difficulty, QuizCategory, SavedQuiz},
        dto::request::GenerateQuizRequest,
    },
    render::{render_html, view::QuizView},
    services::{model_service::CompletionModel, QuizService},
};

struct StubModel {
    response: String,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubModel {
    fn new(response: &str) -> Arc<Self> {
        Arc::new(Self {
            response: response.to_string(),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_prompt(&self) -> String {
        self.last_prompt.lock().unwrap().clone().unwrap_or_default()
    }
}

#[async_trait]
impl CompletionModel for StubModel {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(self.response.clone())
    }
}

const CONCEPTUAL_TWO: &str = r#"[
    {"type": "conceptual", "question": "What does O(log n) describe?", "answer": "How the work grows as the input doubles."},
    {"type": "conceptual", "question": "Why does binary search need sorted input?", "answer": "Halving only works when order is total."}
]"#;

fn conceptual_request(content: &str) -> GenerateQuizRequest {
    GenerateQuizRequest {
        content: content.to_string(),
        difficulty: Difficulty::Easy,
        category: QuizCategory::Conceptual,
        count: 2,
    }
}

#[actix_rt::test]
async fn conceptual_scenario_runs_end_to_end() {
    let model = StubModel::new(CONCEPTUAL_TWO);
    let service = QuizService::new(model.clone());

    let questions = service
        .generate(&conceptual_request("Binary search runs in O(log n)"))
        .await
        .unwrap();

    // The prompt embeds every request field.
    let prompt = model.last_prompt();
    assert!(prompt.contains("Generate 2 easy level questions"));
    assert!(prompt.contains("\"Conceptual\""));
    assert!(prompt.contains("Binary search runs in O(log n)"));

    // The renderer produces two toggleable question blocks.
    let mut view = QuizView::build(&questions);
    assert_eq!(view.question_count(), 2);
    assert_eq!(view.toggle_answer(0), Some(true));
    assert_eq!(view.toggle_answer(1), Some(true));

    let html = render_html(&view);
    assert!(html.contains("<h3>Question 1</h3>"));
    assert!(html.contains("<h3>Question 2</h3>"));
}

#[actix_rt::test]
async fn fenced_empty_array_renders_zero_questions_without_error() {
    let model = StubModel::new("```json\n[]\n```");
    let service = QuizService::new(model);

    let questions = service
        .generate(&conceptual_request("some page text"))
        .await
        .unwrap();

    assert!(questions.is_empty());
    let view = QuizView::build(&questions);
    assert!(view.is_empty());
    assert!(render_html(&view).is_empty());
}

#[actix_rt::test]
async fn error_bodies_surface_their_message_unchanged() {
    let model = StubModel::new(r#"{"error": "API Error: You exceeded your current quota"}"#);
    let service = QuizService::new(model);

    let err = service
        .generate(&conceptual_request("some page text"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API Error: You exceeded your current quota");
}

#[actix_rt::test]
async fn missing_content_reports_an_input_error_without_a_network_call() {
    let model = StubModel::new(CONCEPTUAL_TWO);
    let service = QuizService::new(model.clone());

    let err = service.generate(&conceptual_request("")).await.unwrap_err();

    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(model.call_count(), 0);
}

#[actix_rt::test]
async fn popup_flow_generate_grade_save_and_restore() {
    let scenario = r#"[{
        "type": "scenario-based",
        "question": "Which method is best for searching sorted data?",
        "options": ["Linear scan", "Binary search", "Hash everything", "Sort again first"],
        "answer": "Binary search"
    }]"#;

    let dir = tempfile::tempdir().unwrap();
    let model = StubModel::new(scenario);
    let service = Arc::new(QuizService::new(model));

    let settings = QuizSettings {
        difficulty: Difficulty::Medium,
        category: QuizCategory::ScenarioBased,
        count: 1,
    };

    let mut session = QuizSession::new(
        Arc::clone(&service),
        LocalStore::new(dir.path().join("storage.json")),
        settings,
    );

    session.generate("a long article about search algorithms").await.unwrap();

    // Grade a wrong pick, then reset and grade the right one.
    assert_eq!(session.select_option(0, 0), Some(false));
    session.clear_selection(0);
    assert_eq!(session.select_option(0, 1), Some(true));
    assert!(session.save());

    // The persisted snapshot carries both the questions and the markup.
    let saved: SavedQuiz = LocalStore::new(dir.path().join("storage.json"))
        .get(KEY_LAST_QUIZ)
        .unwrap();
    assert_eq!(saved.questions.len(), 1);
    assert!(saved.rendered_markup.contains("data-correct=\"true\""));

    // A reopened session restores the same quiz.
    let mut reopened = QuizSession::new(
        service,
        LocalStore::new(dir.path().join("storage.json")),
        settings,
    );
    assert!(reopened.restore_saved());
    assert_eq!(reopened.view().unwrap().question_count(), 1);
}
