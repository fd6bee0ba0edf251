use std::sync::Arc;

use gutflix_core::application::GutflixService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GutflixService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GutflixService) -> Self {
        Self { args, service }
    }
}
