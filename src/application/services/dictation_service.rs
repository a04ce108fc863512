use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::application::ports::{
    AnswerScorer, MediaStore, MediaStoreError, RecognitionError, SpeechRecognizer,
    TranscodeError, Transcoder,
};
use crate::domain::{ExpectedPhrase, LanguageCode, MediaPaths, ScoreReport, Transcript, UploadId};

/// Everything one dictation check needs, validated before any work starts.
pub struct DictationRequest<'a> {
    pub filename: String,
    pub upload: BoxStream<'a, Result<Bytes, io::Error>>,
    pub language: LanguageCode,
    pub expected: ExpectedPhrase,
}

#[derive(Debug, Clone)]
pub struct DictationOutcome {
    pub transcript: Transcript,
    pub report: ScoreReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageTimeouts {
    pub receive: Duration,
    pub transcode: Duration,
    pub recognize: Duration,
}

impl Default for StageTimeouts {
    fn default() -> Self {
        Self {
            receive: Duration::from_secs(60),
            transcode: Duration::from_secs(60),
            recognize: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Receiving,
    Transcoding,
    Transcribing,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Receiving => "receiving",
            PipelineStage::Transcoding => "transcoding",
            PipelineStage::Transcribing => "transcribing",
        };
        f.write_str(name)
    }
}

/// Runs upload receipt, transcoding, transcription and scoring in order.
/// Any stage failure ends the pipeline; scratch files are removed either way.
pub struct DictationService {
    media_store: Arc<dyn MediaStore>,
    transcoder: Arc<dyn Transcoder>,
    recognizer: Arc<dyn SpeechRecognizer>,
    scorer: Arc<dyn AnswerScorer>,
    timeouts: StageTimeouts,
}

impl DictationService {
    pub fn new(
        media_store: Arc<dyn MediaStore>,
        transcoder: Arc<dyn Transcoder>,
        recognizer: Arc<dyn SpeechRecognizer>,
        scorer: Arc<dyn AnswerScorer>,
        timeouts: StageTimeouts,
    ) -> Self {
        Self {
            media_store,
            transcoder,
            recognizer,
            scorer,
            timeouts,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(upload_id = %upload_id, language = %request.language)
    )]
    pub async fn check_answer(
        &self,
        upload_id: UploadId,
        request: DictationRequest<'_>,
    ) -> Result<DictationOutcome, DictationError> {
        let paths = MediaPaths::new(&upload_id, &request.filename);
        let scratch = ScratchGuard::new(Arc::clone(&self.media_store), paths.clone());

        let result = self.run(&paths, request).await;
        scratch.release().await;

        match &result {
            Ok(outcome) => tracing::info!(
                ratio = outcome.report.ratio,
                is_match = outcome.report.is_match,
                words = outcome.report.query.len(),
                "Dictation scored"
            ),
            Err(e) => tracing::warn!(error = %e, "Dictation check failed"),
        }

        result
    }

    async fn run(
        &self,
        paths: &MediaPaths,
        request: DictationRequest<'_>,
    ) -> Result<DictationOutcome, DictationError> {
        let DictationRequest {
            upload,
            language,
            expected,
            ..
        } = request;

        let received = tokio::time::timeout(
            self.timeouts.receive,
            self.media_store.store(&paths.upload, upload),
        )
        .await
        .map_err(|_| DictationError::Timeout(PipelineStage::Receiving, self.timeouts.receive))?
        .map_err(DictationError::Storage)?;

        if received == 0 {
            return Err(DictationError::EmptyUpload);
        }
        tracing::debug!(bytes = received, path = %paths.upload, "Upload received");

        let input = self.media_store.resolve(&paths.upload);
        let output = self.media_store.resolve(&paths.waveform);
        tokio::time::timeout(
            self.timeouts.transcode,
            self.transcoder.transcode(&input, &output),
        )
        .await
        .map_err(|_| DictationError::Timeout(PipelineStage::Transcoding, self.timeouts.transcode))??;

        let waveform = self
            .media_store
            .fetch(&paths.waveform)
            .await
            .map_err(DictationError::Storage)?;
        tracing::debug!(bytes = waveform.len(), "Waveform ready for recognition");

        let segments = tokio::time::timeout(
            self.timeouts.recognize,
            self.recognizer
                .recognize(&waveform, self.transcoder.format(), &language),
        )
        .await
        .map_err(|_| DictationError::Timeout(PipelineStage::Transcribing, self.timeouts.recognize))??;

        let transcript = Transcript::from_segments(&segments);
        tracing::debug!(
            segments = segments.len(),
            empty = transcript.is_empty(),
            "Transcript assembled"
        );

        let report = self.scorer.score(&expected, &transcript);

        Ok(DictationOutcome { transcript, report })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictationError {
    #[error("uploaded file is empty")]
    EmptyUpload,
    #[error("storage: {0}")]
    Storage(MediaStoreError),
    #[error("transcoding: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("recognition: {0}")]
    Recognition(#[from] RecognitionError),
    #[error("{0} timed out after {1:?}")]
    Timeout(PipelineStage, Duration),
}

/// Deletes a request's scratch files. Released explicitly on normal exit;
/// if the request future is dropped first, cleanup is spawned on the runtime.
struct ScratchGuard {
    store: Arc<dyn MediaStore>,
    paths: Option<MediaPaths>,
}

impl ScratchGuard {
    fn new(store: Arc<dyn MediaStore>, paths: MediaPaths) -> Self {
        Self {
            store,
            paths: Some(paths),
        }
    }

    async fn release(mut self) {
        if let Some(paths) = self.paths.take() {
            purge(self.store.as_ref(), &paths).await;
        }
    }
}

impl Drop for ScratchGuard {
    fn drop(&mut self) {
        let Some(paths) = self.paths.take() else {
            return;
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let store = Arc::clone(&self.store);
                handle.spawn(async move {
                    purge(store.as_ref(), &paths).await;
                });
            }
            Err(_) => {
                tracing::warn!(upload = %paths.upload, "No runtime to remove abandoned scratch files");
            }
        }
    }
}

async fn purge(store: &dyn MediaStore, paths: &MediaPaths) {
    for path in paths.all() {
        match store.delete(path).await {
            Ok(()) | Err(MediaStoreError::NotFound(_)) => {}
            Err(e) => tracing::warn!(error = %e, path = %path, "Failed to remove scratch file"),
        }
    }
}
