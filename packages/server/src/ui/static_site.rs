//! Static site serving.
//!
//! The entry documents are checked once at startup. When one is missing the
//! server still starts, logs the problem and answers every non-API path with
//! a 503 diagnostic page instead of a bare 404.

use std::path::{Path, PathBuf};

use axum::{Router, http::StatusCode, response::Html};
use tower_http::services::{ServeDir, ServeFile};

use super::config::SiteLayout;

const INDEX_DOCUMENT: &str = "index.html";
const MOBILE_DOCUMENT: &str = "mobile.html";

/// Static files served next to the API.
#[derive(Debug, Clone)]
pub struct StaticSite {
    dir: PathBuf,
    layout: SiteLayout,
}

impl StaticSite {
    pub fn new(dir: impl Into<PathBuf>, layout: SiteLayout) -> Self {
        Self {
            dir: dir.into(),
            layout,
        }
    }

    /// Documents the layout cannot work without.
    pub fn entry_documents(&self) -> Vec<PathBuf> {
        let names: &[&str] = match self.layout {
            SiteLayout::Spa => &[INDEX_DOCUMENT],
            SiteLayout::Lottery => &[MOBILE_DOCUMENT, INDEX_DOCUMENT],
        };
        names.iter().map(|name| self.dir.join(name)).collect()
    }

    /// Entry documents that do not exist on disk.
    pub fn missing_documents(&self) -> Vec<PathBuf> {
        self.entry_documents()
            .into_iter()
            .filter(|path| !path.is_file())
            .collect()
    }

    /// Attach the static routes (or the diagnostic fallback) to `router`.
    pub fn attach(self, router: Router) -> Router {
        let missing = self.missing_documents();
        if !missing.is_empty() {
            for path in &missing {
                tracing::error!("Static entry document not found: {}", path.display());
            }
            let page = Html(diagnostic_page(&self.dir, &missing));
            return router.fallback(move || {
                let page = page.clone();
                async move { (StatusCode::SERVICE_UNAVAILABLE, page) }
            });
        }

        tracing::info!(
            "Serving static files from {} ({:?} layout)",
            self.dir.display(),
            self.layout
        );
        match self.layout {
            SiteLayout::Spa => {
                let index = ServeFile::new(self.dir.join(INDEX_DOCUMENT));
                router.fallback_service(ServeDir::new(&self.dir).fallback(index))
            }
            SiteLayout::Lottery => router
                .route_service("/", ServeFile::new(self.dir.join(MOBILE_DOCUMENT)))
                .route_service("/screen", ServeFile::new(self.dir.join(INDEX_DOCUMENT)))
                .fallback_service(ServeDir::new(&self.dir)),
        }
    }
}

fn diagnostic_page(dir: &Path, missing: &[PathBuf]) -> String {
    let items: String = missing
        .iter()
        .map(|path| format!("<li><code>{}</code></li>", escape_html(&path.display().to_string())))
        .collect();
    format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>Site unavailable</title></head>\
         <body><h1>Site unavailable</h1>\
         <p>The static directory <code>{}</code> is missing required files:</p>\
         <ul>{}</ul>\
         <p>Build or copy the front-end into that directory and restart the server.</p>\
         </body></html>\n",
        escape_html(&dir.display().to_string()),
        items
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
