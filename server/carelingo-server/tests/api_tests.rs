use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use carelingo_server::{create_app, AppConfig, CareLingoServer};
use transcription_service::{AudioPayload, Transcriber, TranscriptionResult};
use translation_service::{
    ProviderId, TranslationError, TranslationProvider, TranslationRequest, TranslationResult,
    TranslationRouter,
};

const BOUNDARY: &str = "carelingo-test-boundary";

enum Reply {
    Text(&'static str),
    Upstream(u16),
}

struct StubProvider {
    id: ProviderId,
    reply: Reply,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TranslationProvider for StubProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    async fn translate(&self, _request: &TranslationRequest) -> TranslationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Upstream(status) => Err(TranslationError::Upstream {
                provider: self.id,
                status,
                body: "upstream unhappy".to_string(),
            }),
        }
    }
}

fn stub_provider(id: ProviderId, reply: Reply) -> (Box<dyn TranslationProvider>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = StubProvider {
        id,
        reply,
        calls: Arc::clone(&calls),
    };
    (Box::new(provider), calls)
}

#[derive(Debug)]
struct CapturedAudio {
    file_name: String,
    content_type: String,
    byte_len: usize,
    language: String,
}

struct StubTranscriber {
    configured: bool,
    transcript: &'static str,
    calls: Mutex<Vec<CapturedAudio>>,
}

impl StubTranscriber {
    fn new(configured: bool, transcript: &'static str) -> Arc<Self> {
        Arc::new(Self {
            configured,
            transcript,
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl Transcriber for StubTranscriber {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn transcribe(&self, audio: AudioPayload, language: &str) -> TranscriptionResult<String> {
        self.calls.lock().unwrap().push(CapturedAudio {
            file_name: audio.file_name,
            content_type: audio.content_type,
            byte_len: audio.bytes.len(),
            language: language.to_string(),
        });
        Ok(self.transcript.to_string())
    }
}

fn test_app(
    providers: Vec<Box<dyn TranslationProvider>>,
    terminal: bool,
    transcriber: Arc<StubTranscriber>,
) -> Router {
    let server = CareLingoServer::with_services(
        AppConfig::default(),
        TranslationRouter::with_providers(providers, terminal),
        transcriber,
    );
    create_app(server)
}

fn translate_request(body: Value) -> Request<Body> {
    Request::builder()
        .uri("/translate")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_body(include_audio: bool, language: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    if include_audio {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"audio\"; \
                 filename=\"clip.webm\"\r\nContent-Type: audio/webm\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(&[0x1a, 0x45, 0xdf, 0xa3]);
        body.extend_from_slice(b"\r\n");
    }
    if let Some(language) = language {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"language\"\r\n\r\n\
                 {language}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn transcribe_request(include_audio: bool, language: Option<&str>) -> Request<Body> {
    Request::builder()
        .uri("/transcribe")
        .method("POST")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(include_audio, language)))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn translate_returns_fallback_provider_result() {
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text("Hola"));
    let app = test_app(vec![mymemory], false, StubTranscriber::new(true, ""));

    let body = json!({"text": "Hello", "srcLang": "en-US", "tgtLang": "es-ES"});
    let response = app.oneshot(translate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let data = response_json(response).await;
    assert_eq!(data["translatedText"], "Hola");
    assert_eq!(data["sourceLanguage"], "en-US");
    assert_eq!(data["targetLanguage"], "es-ES");
    assert_eq!(data["provider"], "mymemory");
}

#[tokio::test]
async fn translate_missing_field_is_rejected_without_provider_calls() {
    let (mymemory, calls) = stub_provider(ProviderId::Mymemory, Reply::Text("Hola"));
    let app = test_app(vec![mymemory], false, StubTranscriber::new(true, ""));

    // Empty text and an absent field are both "missing".
    let empty_text = json!({"text": "", "srcLang": "en-US", "tgtLang": "es-ES"});
    let response = app
        .clone()
        .oneshot(translate_request(empty_text))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error_response = response_json(response).await;
    assert_eq!(error_response["error_type"], "validation_error");
    assert_eq!(
        error_response["message"],
        "Missing required fields: text, srcLang, tgtLang"
    );
    assert!(error_response["error_id"].is_string());
    assert!(error_response["timestamp"].is_string());

    let absent_field = json!({"text": "Hello", "srcLang": "en-US"});
    let response = app.oneshot(translate_request(absent_field)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn translate_reports_bad_gateway_when_chain_is_exhausted() {
    let (groq, _) = stub_provider(ProviderId::Groq, Reply::Text(""));
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text("  "));
    let app = test_app(vec![groq, mymemory], false, StubTranscriber::new(true, ""));

    let body = json!({"text": "Hello", "srcLang": "en-US", "tgtLang": "es-ES"});
    let response = app.oneshot(translate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let error_response = response_json(response).await;
    assert_eq!(error_response["error_type"], "all_providers_failed");
    assert_eq!(
        error_response["message"],
        "Translation failed via all providers"
    );
}

#[tokio::test]
async fn translate_surfaces_terminal_provider_failure() {
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Upstream(503));
    let app = test_app(vec![mymemory], true, StubTranscriber::new(true, ""));

    let body = json!({"text": "Hello", "srcLang": "en-US", "tgtLang": "es-ES"});
    let response = app.oneshot(translate_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let error_response = response_json(response).await;
    assert_eq!(error_response["error_type"], "upstream_error");
}

#[tokio::test]
async fn transcribe_forwards_audio_and_language_hint() {
    let transcriber = StubTranscriber::new(true, "patient reports chest pain");
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text("Hola"));
    let app = test_app(vec![mymemory], false, Arc::clone(&transcriber));

    let response = app
        .oneshot(transcribe_request(true, Some("es")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let data = response_json(response).await;
    assert_eq!(data["transcript"], "patient reports chest pain");

    let calls = transcriber.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].file_name, "clip.webm");
    assert_eq!(calls[0].content_type, "audio/webm");
    assert_eq!(calls[0].byte_len, 4);
    assert_eq!(calls[0].language, "es");
}

#[tokio::test]
async fn transcribe_defaults_language_hint_to_en() {
    let transcriber = StubTranscriber::new(true, "hello");
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text(""));
    let app = test_app(vec![mymemory], false, Arc::clone(&transcriber));

    let response = app.oneshot(transcribe_request(true, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let calls = transcriber.calls.lock().unwrap();
    assert_eq!(calls[0].language, "en");
}

#[tokio::test]
async fn transcribe_without_audio_is_rejected_before_the_provider() {
    let transcriber = StubTranscriber::new(true, "never used");
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text(""));
    let app = test_app(vec![mymemory], false, Arc::clone(&transcriber));

    let response = app
        .oneshot(transcribe_request(false, Some("en")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error_response = response_json(response).await;
    assert_eq!(error_response["error_type"], "validation_error");
    assert_eq!(error_response["message"], "Audio file is required");

    assert!(transcriber.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn transcribe_without_credential_reports_configuration_error() {
    let transcriber = StubTranscriber::new(false, "never used");
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text(""));
    let app = test_app(vec![mymemory], false, Arc::clone(&transcriber));

    let response = app
        .oneshot(transcribe_request(true, Some("en")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error_response = response_json(response).await;
    assert_eq!(error_response["error_type"], "configuration_error");
    assert_eq!(error_response["message"], "GROQ_API_KEY not configured");

    assert!(transcriber.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn languages_returns_registry_with_defaults() {
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text(""));
    let app = test_app(vec![mymemory], false, StubTranscriber::new(true, ""));

    let request = Request::builder()
        .uri("/languages")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let data = response_json(response).await;
    let languages = data["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 16);
    assert_eq!(languages[0]["code"], "en-US");
    assert_eq!(languages[0]["nativeName"], "English (US)");
    assert_eq!(data["defaultSource"], "en-US");
    assert_eq!(data["defaultTarget"], "es-ES");
}

#[tokio::test]
async fn health_reports_provider_configuration() {
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text(""));
    let app = test_app(vec![mymemory], false, StubTranscriber::new(true, ""));

    let request = Request::builder()
        .uri("/health")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let data = response_json(response).await;
    assert_eq!(data["status"], "healthy");
    assert_eq!(data["checks"]["mymemory"], "available");
    assert_eq!(data["checks"]["transcription"], "configured");
    assert_eq!(data["checks"]["groq_translation"], "not_configured");
    assert!(data["timestamp"].is_string());
}

#[tokio::test]
async fn version_reports_service_name() {
    let (mymemory, _) = stub_provider(ProviderId::Mymemory, Reply::Text(""));
    let app = test_app(vec![mymemory], false, StubTranscriber::new(true, ""));

    let request = Request::builder()
        .uri("/version")
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let data = response_json(response).await;
    assert_eq!(data["name"], "CareLingo Engine");
    assert!(data["features"].as_array().unwrap().len() >= 2);
}
