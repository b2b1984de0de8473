use std::sync::Arc;

use moviedata::DatasetSlot;

use crate::config::AppConfig;
use crate::render::Renderer;

pub type SharedState = Arc<AppState>;

/// Everything a handler can see. Built once before the listener binds and
/// never mutated afterwards.
pub struct AppState {
    pub config: AppConfig,
    pub dataset: DatasetSlot,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: AppConfig, dataset: DatasetSlot, renderer: Renderer) -> Self {
        Self { config, dataset, renderer }
    }
}
