use quiz_core::model::{ProcessedDocument, QuizQuestion, UploadedFile};
use quiz_core::{Screen, SessionState};

use super::UploadIntent;
use super::test_harness::{
    StubProcessor, ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with,
};

fn doc() -> ProcessedDocument {
    ProcessedDocument::new(
        "doc.pdf",
        "The document explains **photosynthesis**.",
        vec![QuizQuestion::new(
            "Q1",
            vec!["A".to_string(), "B".to_string()],
            "A",
        )],
    )
}

fn state_with_document() -> SessionState {
    let mut state = SessionState::new();
    state.commit_document(doc()).unwrap();
    state
}

fn notification_title(harness: &ViewHarness) -> Option<String> {
    harness.handles.notification().map(|notification| notification.title)
}

#[test]
fn upload_view_smoke_renders_picker() {
    let mut harness = setup_view_harness(ViewKind::Upload, SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Upload Your PDF"), "missing title in {html}");
    assert!(html.contains("http://localhost:8000"), "missing service url in {html}");
    assert!(!html.contains("upload-submit"), "submit shown without a file in {html}");
}

#[test]
fn upload_view_smoke_shows_preselected_pdf() {
    let processor = StubProcessor::returning(doc());
    let file = UploadedFile::from_name("lecture.pdf", b"%PDF-1.4".to_vec());
    let mut harness = setup_view_harness_with(
        ViewKind::Upload,
        SessionState::new(),
        processor.clone(),
        Some(file),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("File Selected"), "missing selection in {html}");
    assert!(html.contains("lecture.pdf"), "missing file name in {html}");
    assert!(html.contains("Generate Summary"), "missing submit in {html}");
    assert_eq!(processor.calls(), 0, "rendering must not submit");
}

#[test]
fn upload_view_smoke_ignores_preselected_non_pdf() {
    let file = UploadedFile::from_name("notes.txt", b"text".to_vec());
    let mut harness = setup_view_harness_with(
        ViewKind::Upload,
        SessionState::new(),
        StubProcessor::failing(),
        Some(file),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("notes.txt"), "non-pdf selected in {html}");
    assert!(!html.contains("File Selected"), "selection shown in {html}");
}

#[test]
fn summary_view_smoke_renders_document() {
    let mut harness = setup_view_harness(ViewKind::Summary, state_with_document());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("doc.pdf"), "missing filename in {html}");
    assert!(html.contains("1 quiz questions"), "missing count in {html}");
    assert!(html.contains("1 min read"), "missing read time in {html}");
    assert!(html.contains("Take Quiz Now"), "missing cta in {html}");
}

#[test]
fn summary_view_smoke_renders_nothing_without_document() {
    let mut harness = setup_view_harness(ViewKind::Summary, SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Take Quiz Now"), "summary rendered in {html}");
    assert!(!html.contains("quiz questions"), "summary rendered in {html}");
}

#[test]
fn quiz_view_smoke_renders_question_and_options() {
    let mut state = state_with_document();
    state.start_quiz().unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz, state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 1"), "missing position in {html}");
    assert!(html.contains("q0-option0"), "missing first option in {html}");
    assert!(html.contains("q0-option1"), "missing second option in {html}");
    assert!(!html.contains("q0-option2"), "unexpected option in {html}");
    assert!(html.contains("Answer 1 more question"), "missing gate label in {html}");
}

#[test]
fn quiz_view_smoke_unlocks_submit_after_answer() {
    let mut state = state_with_document();
    state.start_quiz().unwrap();
    state.select_answer(0, "A");
    let mut harness = setup_view_harness(ViewKind::Quiz, state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Submit Quiz"), "missing submit in {html}");
    assert!(html.contains("1 / 1"), "missing progress in {html}");
}

#[test]
fn quiz_view_smoke_renders_nothing_without_document() {
    let mut harness = setup_view_harness(ViewKind::Quiz, SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Test Your Knowledge"), "quiz rendered in {html}");
}

#[test]
fn results_view_smoke_renders_score() {
    let mut state = state_with_document();
    state.start_quiz().unwrap();
    state.select_answer(0, "A");
    state.submit_quiz().unwrap();

    let mut harness = setup_view_harness(ViewKind::Results, state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("You scored 1 out of 1 questions"), "missing score in {html}");
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("Outstanding!"), "missing message in {html}");
    assert!(html.contains("Correct"), "missing badge in {html}");
}

#[test]
fn results_view_smoke_renders_nothing_before_scoring() {
    let mut state = state_with_document();
    state.start_quiz().unwrap();
    let mut harness = setup_view_harness(ViewKind::Results, state);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Quiz Complete!"), "results rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_commits_processed_document() {
    let processor = StubProcessor::returning(doc());
    let mut harness = setup_view_harness_with(
        ViewKind::Upload,
        SessionState::new(),
        processor.clone(),
        None,
    );
    harness.rebuild();

    let file = UploadedFile::from_name("lecture.pdf", b"%PDF-1.4".to_vec());
    harness.upload(UploadIntent::Pick(file));
    assert!(harness.render().contains("lecture.pdf"), "selection not rendered");

    harness.upload(UploadIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;

    let session = harness.handles.session();
    assert_eq!(session.document(), Some(&doc()));
    assert_eq!(session.screen(), Screen::Summary);
    assert_eq!(
        notification_title(&harness).as_deref(),
        Some("PDF processed successfully!")
    );
    assert_eq!(processor.calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_rejects_non_pdf_pick() {
    let processor = StubProcessor::returning(doc());
    let mut harness = setup_view_harness_with(
        ViewKind::Upload,
        SessionState::new(),
        processor.clone(),
        None,
    );
    harness.rebuild();

    let file = UploadedFile::from_name("notes.txt", b"text".to_vec());
    harness.upload(UploadIntent::Pick(file));
    harness.upload(UploadIntent::Submit);
    harness.drive_async().await;

    assert_eq!(notification_title(&harness).as_deref(), Some("Upload not started"));
    assert!(!harness.render().contains("notes.txt"), "non-pdf selected");
    assert_eq!(harness.handles.session().screen(), Screen::Uploading);
    assert_eq!(processor.calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_flags_non_pdf_pick() {
    let mut harness = setup_view_harness(ViewKind::Upload, SessionState::new());
    harness.rebuild();

    let file = UploadedFile::from_name("notes.txt", b"text".to_vec());
    harness.upload(UploadIntent::Pick(file));
    harness.drive_async().await;

    assert_eq!(notification_title(&harness).as_deref(), Some("Invalid file type"));
}

#[tokio::test(flavor = "current_thread")]
async fn upload_view_stays_put_when_processing_fails() {
    let processor = StubProcessor::failing();
    let mut harness = setup_view_harness_with(
        ViewKind::Upload,
        SessionState::new(),
        processor.clone(),
        None,
    );
    harness.rebuild();

    let file = UploadedFile::from_name("lecture.pdf", b"%PDF-1.4".to_vec());
    harness.upload(UploadIntent::Pick(file));
    harness.upload(UploadIntent::Submit);
    harness.drive_async().await;
    harness.drive_async().await;

    let session = harness.handles.session();
    assert!(session.document().is_none());
    assert_eq!(session.screen(), Screen::Uploading);
    assert_eq!(notification_title(&harness).as_deref(), Some("Processing failed"));
    assert_eq!(processor.calls(), 1);
    assert!(harness.render().contains("Generate Summary"), "retry not offered");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_view_redirects_to_upload_without_document() {
    let mut harness = setup_view_harness(ViewKind::Summary, SessionState::new());
    harness.rebuild();
    harness.drive_async().await;

    assert_eq!(harness.handles.redirects(), vec![Screen::Uploading]);
    assert_eq!(harness.handles.session().screen(), Screen::Uploading);
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_redirects_to_quiz_without_score() {
    let mut harness = setup_view_harness(ViewKind::Results, state_with_document());
    harness.rebuild();
    harness.drive_async().await;

    assert_eq!(harness.handles.redirects(), vec![Screen::QuizInProgress]);
    assert_eq!(harness.handles.session().screen(), Screen::QuizInProgress);
}

#[tokio::test(flavor = "current_thread")]
async fn summary_view_with_document_does_not_redirect() {
    let mut harness = setup_view_harness(ViewKind::Summary, state_with_document());
    harness.rebuild();
    harness.drive_async().await;

    assert!(harness.handles.redirects().is_empty());
    assert_eq!(harness.handles.session().screen(), Screen::Summary);
}
