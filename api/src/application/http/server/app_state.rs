use std::sync::Arc;

use flavorly_core::application::FlavorlyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FlavorlyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FlavorlyService) -> Self {
        Self { args, service }
    }
}
