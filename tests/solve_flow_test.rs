//! Solve flow: capture, submission, and failure isolation.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use mathwhiz::app::{App, AppMessage, Intent};
use mathwhiz::error::GatewayError;
use mathwhiz::gateway::{MockGateway, RecordedCall};
use mathwhiz::models::SolvedProblem;

fn png_fixture() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(12, 8, image::Rgba([200, 200, 200, 255]));
    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, image::ImageFormat::Png)
        .expect("Failed to encode fixture PNG");
    buf
}

fn write_fixture(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create fixture");
    file.write_all(&png_fixture()).expect("Failed to write fixture");
    path
}

fn solved(solution: &str) -> SolvedProblem {
    SolvedProblem {
        solution: solution.to_string(),
        steps: vec!["first".to_string(), "second".to_string()],
        explanation: "concept".to_string(),
    }
}

async fn pump(app: &mut App) -> AppMessage {
    let message = app
        .message_rx
        .as_mut()
        .expect("receiver taken")
        .recv()
        .await
        .expect("completion channel closed");
    app.apply_message(message.clone());
    message
}

#[tokio::test]
async fn test_submit_solves_and_shows_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "homework.png");

    let mock = MockGateway::new();
    mock.push_solve(Ok(solved("x = 4")));
    let mut app = App::new(Arc::new(mock.clone()));

    app.apply_intent(Intent::SubmitImage(path));
    assert!(app.state.busy);
    let preview = app.state.solve.preview.as_ref().expect("preview missing");
    assert_eq!(preview.file_name, "homework.png");
    assert_eq!((preview.width, preview.height), (12, 8));

    pump(&mut app).await;
    assert!(!app.state.busy);
    assert_eq!(app.state.solve.solved.as_ref().unwrap().solution, "x = 4");
    assert_eq!(
        mock.calls(),
        vec![RecordedCall::Solve("homework.png".to_string())]
    );
}

#[tokio::test]
async fn test_failed_solve_keeps_previous_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "second.png");

    let mock = MockGateway::new();
    mock.push_solve(Err(GatewayError::decode("missing field `steps`")));
    let mut app = App::new(Arc::new(mock));

    let earlier = solved("y = 7");
    app.state.solve.solved = Some(earlier.clone());

    app.apply_intent(Intent::SubmitImage(path));
    assert!(app.state.busy);

    pump(&mut app).await;
    assert!(!app.state.busy);
    // no partial overwrite: the earlier solution is still intact
    assert_eq!(app.state.solve.solved, Some(earlier));
    assert!(app.state.status.as_ref().is_some_and(|s| s.is_error));
}

#[tokio::test]
async fn test_unreadable_file_never_reaches_the_gateway() {
    let mock = MockGateway::new();
    let mut app = App::new(Arc::new(mock.clone()));

    app.apply_intent(Intent::SubmitImage(PathBuf::from("/no/such/file.png")));

    assert!(!app.state.busy);
    assert!(app.state.status.as_ref().is_some_and(|s| s.is_error));
    assert!(app.state.solve.preview.is_none());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_text_file_rejected_before_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "x + 1 = 2").unwrap();

    let mock = MockGateway::new();
    let mut app = App::new(Arc::new(mock.clone()));

    app.apply_intent(Intent::SubmitImage(path));

    assert!(!app.state.busy);
    assert!(mock.calls().is_empty());
}
