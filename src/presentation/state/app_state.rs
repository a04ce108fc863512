use std::sync::Arc;

use crate::application::services::DictationService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub dictation_service: Arc<DictationService>,
    pub settings: Settings,
}
