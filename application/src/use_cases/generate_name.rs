//! Generate Name use case
//!
//! Runs one pass of the pipeline: build prompt, call the provider, parse the
//! answer, record it in the session store.

use crate::ports::generation_gateway::{GatewayError, GenerationGateway};
use crate::ports::progress::{GenerationProgress, NoProgress};
use petname_domain::util::log_preview;
use petname_domain::{
    DomainError, GenerationRequest, NameRecord, PromptTemplate, SessionStore, parse_response,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a name
///
/// None of these leave a record behind: the store is only touched after
/// every step has succeeded.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Provider error: {0}")]
    Provider(GatewayError),

    #[error("The provider returned an empty or unusable answer")]
    EmptyResponse,
}

impl From<GatewayError> for GenerateError {
    fn from(error: GatewayError) -> Self {
        if error.is_empty_response() {
            GenerateError::EmptyResponse
        } else {
            GenerateError::Provider(error)
        }
    }
}

/// Use case for generating a pet name
pub struct GenerateNameUseCase<G: GenerationGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: GenerationGateway + 'static> GenerateNameUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: GenerationRequest,
        store: &mut SessionStore,
    ) -> Result<NameRecord, GenerateError> {
        self.execute_with_progress(request, store, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: GenerationRequest,
        store: &mut SessionStore,
        progress: &dyn GenerationProgress,
    ) -> Result<NameRecord, GenerateError> {
        let subject = request.subject();
        info!("Generating name for {}", subject);

        progress.on_generation_start(&subject);
        let result = self.run(request).await;
        progress.on_generation_complete(result.is_ok());

        let record = result?;
        store.record_generation(record.clone());
        debug!(history_len = store.len(), "Recorded '{}'", record.name);

        Ok(record)
    }

    async fn run(&self, request: GenerationRequest) -> Result<NameRecord, GenerateError> {
        let prompt = PromptTemplate::build_prompt(&request);
        debug!(creativity = %request.creativity(), "Prompt: {}", log_preview(&prompt, 120));

        let raw = self
            .gateway
            .generate(&prompt, request.creativity())
            .await
            .inspect_err(|e| warn!("Generation failed: {}", e))?;

        if raw.trim().is_empty() {
            warn!("Provider returned blank text");
            return Err(GenerateError::EmptyResponse);
        }

        let parsed = parse_response(&raw);
        if parsed.name.is_empty() {
            warn!("No name found in provider answer: {}", log_preview(&raw, 200));
            return Err(GenerateError::EmptyResponse);
        }

        Ok(NameRecord::from_parsed(parsed, request))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use petname_domain::Creativity;
    use std::sync::Mutex;

    pub(crate) const BISCUIT: &str =
        "Name: Biscuit\nExplanation: playful and warm\nFun Fact: loves fetch\nNicknames: Bix, Cookie";

    /// Canned gateway that remembers every call
    pub(crate) struct StubGateway {
        reply: Box<dyn Fn() -> Result<String, GatewayError> + Send + Sync>,
        pub(crate) calls: Mutex<Vec<(String, f32)>>,
    }

    impl StubGateway {
        pub(crate) fn replying(text: &'static str) -> Self {
            Self::with(move || Ok(text.to_string()))
        }

        pub(crate) fn with(
            reply: impl Fn() -> Result<String, GatewayError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                reply: Box::new(reply),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationGateway for StubGateway {
        async fn generate(
            &self,
            prompt: &str,
            creativity: Creativity,
        ) -> Result<String, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), creativity.value()));
            (self.reply)()
        }
    }

    fn dog_request() -> GenerationRequest {
        GenerationRequest::new("dog", "brown")
            .unwrap()
            .with_traits(["playful"])
            .with_creativity(Creativity::new(0.7).unwrap())
    }

    #[tokio::test]
    async fn test_biscuit_scenario() {
        let gateway = Arc::new(StubGateway::replying(BISCUIT));
        let use_case = GenerateNameUseCase::new(Arc::clone(&gateway));
        let mut store = SessionStore::new();

        let record = use_case.execute(dog_request(), &mut store).await.unwrap();

        assert_eq!(record.name, "Biscuit");
        assert_eq!(record.explanation, "playful and warm");
        assert_eq!(record.fun_fact, "loves fetch");
        assert_eq!(record.nicknames, vec!["Bix".to_string(), "Cookie".to_string()]);
        assert_eq!(record.source_request, dog_request());

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (prompt, creativity) = &calls[0];
        assert!(prompt.contains("dog"));
        assert!(prompt.contains("brown"));
        assert!(prompt.contains("playful"));
        assert_eq!(*creativity, 0.7);

        assert_eq!(store.len(), 1);
        assert_eq!(store.latest().unwrap().id, record.id);
    }

    #[tokio::test]
    async fn test_provider_error_creates_no_record() {
        let gateway = Arc::new(StubGateway::with(|| {
            Err(GatewayError::RequestFailed("connection refused".to_string()))
        }));
        let use_case = GenerateNameUseCase::new(gateway);
        let mut store = SessionStore::new();

        let err = use_case.execute(dog_request(), &mut store).await.unwrap_err();
        assert!(matches!(err, GenerateError::Provider(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_is_not_retried() {
        let gateway = Arc::new(StubGateway::with(|| {
            Err(GatewayError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        }));
        let use_case = GenerateNameUseCase::new(Arc::clone(&gateway));
        let mut store = SessionStore::new();

        let _ = use_case.execute(dog_request(), &mut store).await;
        assert_eq!(gateway.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_answer_is_empty_response() {
        let use_case = GenerateNameUseCase::new(Arc::new(StubGateway::replying("  \n ")));
        let mut store = SessionStore::new();

        let err = use_case.execute(dog_request(), &mut store).await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResponse));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_answer_without_name_is_empty_response() {
        let use_case = GenerateNameUseCase::new(Arc::new(StubGateway::replying(
            "I'm sorry, I can't help with that.",
        )));
        let mut store = SessionStore::new();

        let err = use_case.execute(dog_request(), &mut store).await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResponse));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_empty_response_maps_to_empty_response() {
        let use_case = GenerateNameUseCase::new(Arc::new(StubGateway::with(|| {
            Err(GatewayError::EmptyResponse)
        })));
        let mut store = SessionStore::new();

        let err = use_case.execute(dog_request(), &mut store).await.unwrap_err();
        assert!(matches!(err, GenerateError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_progress_reports_outcome() {
        struct Recorder(Mutex<Vec<String>>);

        impl GenerationProgress for Recorder {
            fn on_generation_start(&self, subject: &str) {
                self.0.lock().unwrap().push(format!("start {}", subject));
            }
            fn on_generation_complete(&self, success: bool) {
                self.0.lock().unwrap().push(format!("done {}", success));
            }
        }

        let use_case = GenerateNameUseCase::new(Arc::new(StubGateway::replying(BISCUIT)));
        let mut store = SessionStore::new();
        let recorder = Recorder(Mutex::new(Vec::new()));

        use_case
            .execute_with_progress(dog_request(), &mut store, &recorder)
            .await
            .unwrap();

        assert_eq!(
            *recorder.0.lock().unwrap(),
            vec!["start brown dog".to_string(), "done true".to_string()]
        );
    }
}
