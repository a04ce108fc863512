mod coverage_scorer;
mod dictation_service;

pub use coverage_scorer::CoverageScorer;
pub use dictation_service::{
    DictationError, DictationOutcome, DictationRequest, DictationService, PipelineStage,
    StageTimeouts,
};
