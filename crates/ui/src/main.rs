//! Browser entry point: progress and theme live in `window.localStorage`.

use std::sync::Arc;

use dioxus::LaunchBuilder;
use services::{AppServices, SiteConfig};
use storage::Storage;
use ui::{App, LocalStorageStore, UiApp, build_app_context};

struct WebApp {
    services: AppServices,
}

impl UiApp for WebApp {
    fn site_title(&self) -> String {
        self.services.config().site_title.clone()
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

fn main() {
    let storage = Storage::new(Arc::new(LocalStorageStore::new()));
    // No config file in the browser; the compiled-in defaults describe the course.
    let services = match AppServices::new(&storage, SiteConfig::default()) {
        Ok(services) => services,
        Err(err) => {
            tracing::error!(error = %err, "falling back to in-memory progress");
            AppServices::in_memory()
        }
    };

    let app: Arc<dyn UiApp> = Arc::new(WebApp { services });
    LaunchBuilder::web()
        .with_context(build_app_context(&app))
        .launch(App);
}
