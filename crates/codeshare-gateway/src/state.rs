use codeshare_core::ShareService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn ShareService>,
}

impl AppState {
    pub fn new(service: Arc<dyn ShareService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &dyn ShareService {
        self.service.as_ref()
    }
}
