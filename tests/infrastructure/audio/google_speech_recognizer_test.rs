use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::post;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use phrasecheck::application::ports::{RecognitionError, SpeechRecognizer};
use phrasecheck::domain::{LanguageCode, WaveformFormat};
use phrasecheck::infrastructure::audio::GoogleSpeechRecognizer;

#[derive(Default)]
struct Captured {
    body: Option<serde_json::Value>,
    key: Option<String>,
}

async fn start_mock_google_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, Arc<Mutex<Captured>>, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/speech:recognize",
        post(
            move |Query(query): Query<HashMap<String, String>>, body: String| async move {
                {
                    let mut captured = sink.lock().unwrap();
                    captured.body = serde_json::from_str(&body).ok();
                    captured.key = query.get("key").cloned();
                }
                let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                (
                    status,
                    [(axum::http::header::CONTENT_TYPE, "application/json")],
                    response_body,
                )
                    .into_response()
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, captured, shutdown_tx)
}

fn spanish() -> LanguageCode {
    LanguageCode::parse("es-ES").unwrap()
}

#[tokio::test]
async fn given_results_when_recognizing_then_returns_segments_with_ranked_alternatives() {
    let response_body = r#"{
        "results": [
            {"alternatives": [{"transcript": "hola", "confidence": 0.92}, {"transcript": "ola"}]},
            {"alternatives": [{"transcript": " como estas", "confidence": 0.81}]}
        ]
    }"#;
    let (base_url, _captured, shutdown_tx) = start_mock_google_server(200, response_body).await;

    let recognizer = GoogleSpeechRecognizer::new("test-key".to_string(), Some(base_url));
    let segments = recognizer
        .recognize(b"RIFF fake wav", WaveformFormat::default(), &spanish())
        .await
        .unwrap();

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].alternatives.len(), 2);
    assert_eq!(segments[0].top().unwrap().transcript, "hola");
    assert_eq!(segments[0].top().unwrap().confidence, Some(0.92));
    assert_eq!(segments[1].top().unwrap().transcript, " como estas");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_waveform_when_recognizing_then_sends_linear16_config_and_base64_audio() {
    let (base_url, captured, shutdown_tx) = start_mock_google_server(200, "{}").await;

    let recognizer = GoogleSpeechRecognizer::new("secret-key".to_string(), Some(base_url));
    let waveform = b"RIFF fake wav";
    recognizer
        .recognize(waveform, WaveformFormat::new(16_000), &spanish())
        .await
        .unwrap();

    let captured = captured.lock().unwrap();
    let body = captured.body.as_ref().expect("request body captured");
    assert_eq!(body["config"]["encoding"], "LINEAR16");
    assert_eq!(body["config"]["sampleRateHertz"], 16_000);
    assert_eq!(body["config"]["audioChannelCount"], 1);
    assert_eq!(body["config"]["languageCode"], "es-ES");
    assert_eq!(body["audio"]["content"], BASE64.encode(waveform));
    assert_eq!(captured.key.as_deref(), Some("secret-key"));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_speech_detected_when_recognizing_then_returns_no_segments() {
    let (base_url, _captured, shutdown_tx) = start_mock_google_server(200, "{}").await;

    let recognizer = GoogleSpeechRecognizer::new("test-key".to_string(), Some(base_url));
    let segments = recognizer
        .recognize(b"silence", WaveformFormat::default(), &spanish())
        .await
        .unwrap();

    assert!(segments.is_empty());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_recognizing_then_returns_api_error() {
    let response_body = r#"{"error": {"code": 403, "message": "API key not valid"}}"#;
    let (base_url, _captured, shutdown_tx) = start_mock_google_server(403, response_body).await;

    let recognizer = GoogleSpeechRecognizer::new("bad-key".to_string(), Some(base_url));
    let result = recognizer
        .recognize(b"audio", WaveformFormat::default(), &spanish())
        .await;

    assert!(matches!(result, Err(RecognitionError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_body_when_recognizing_then_returns_invalid_response() {
    let (base_url, _captured, shutdown_tx) = start_mock_google_server(200, "not json").await;

    let recognizer = GoogleSpeechRecognizer::new("test-key".to_string(), Some(base_url));
    let result = recognizer
        .recognize(b"audio", WaveformFormat::default(), &spanish())
        .await;

    assert!(matches!(result, Err(RecognitionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_recognizing_then_error_does_not_leak_api_key() {
    let recognizer = GoogleSpeechRecognizer::new(
        "super-secret".to_string(),
        Some("http://127.0.0.1:1".to_string()),
    );

    let result = recognizer
        .recognize(b"audio", WaveformFormat::default(), &spanish())
        .await;

    match result {
        Err(RecognitionError::ApiRequestFailed(message)) => {
            assert!(!message.contains("super-secret"));
        }
        other => panic!("expected request failure, got {:?}", other.map(|s| s.len())),
    }
}
