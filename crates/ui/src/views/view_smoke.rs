use std::sync::Arc;

use course_core::model::Theme;
use services::{AppServices, SiteConfig};
use storage::{InMemoryStore, KeyValueStore, Storage, StorageError};

use super::test_harness::setup_view_harness;

fn rendered(address: &str, services: AppServices) -> String {
    let mut harness = setup_view_harness(address, services);
    harness.rebuild();
    harness.render()
}

#[test]
fn landing_view_lists_every_chapter() {
    let html = rendered("/", AppServices::in_memory());
    assert!(html.contains("Test Course"), "missing site title in {html}");
    assert!(html.contains("10 chapters"), "missing count in {html}");
    assert!(html.contains("Start the course"), "missing start link in {html}");
    assert!(html.contains("CSS Foundations"), "missing outline entry in {html}");
    assert!(html.contains("0% complete"), "missing progress title in {html}");
    assert!(html.contains("sidebar__home--active"), "contents link not active in {html}");
}

#[test]
fn shell_scrolls_its_own_content() {
    let html = rendered("/04-layout.html", AppServices::in_memory());
    assert!(
        html.contains("height: 100vh; overflow-y: auto;"),
        "shell is not a scroll container in {html}"
    );
    assert!(html.contains(r#"id="progressBar""#), "missing reading bar in {html}");
    assert!(html.contains("width: 0.0%"), "reading bar should start empty in {html}");
}

#[test]
fn chapter_view_highlights_the_current_page() {
    let html = rendered("/03-css-foundations.html", AppServices::in_memory());
    assert!(html.contains("Chapter 3"), "missing chapter number in {html}");
    assert!(html.contains("nav-item nav-item--active"), "missing active item in {html}");
    assert!(html.contains("chapter-nav__link--next"), "missing next control in {html}");
    assert!(html.contains("chapter-nav__link--prev"), "missing previous control in {html}");
    assert!(!html.contains("Complete the course"), "unexpected graduation in {html}");
}

#[test]
fn sidebar_reflects_stored_progress() {
    let services = AppServices::in_memory();
    services.progress().mark_completed("01-welcome.html");
    services.progress().mark_completed("02-html-basics.html");

    let html = rendered("/03-css-foundations.html", services);
    assert!(html.contains("width: 20%"), "missing fill width in {html}");
    assert!(html.contains("20% complete"), "missing fill title in {html}");
    assert_eq!(html.matches("nav-item--done").count(), 2, "expected two ticks in {html}");
}

#[test]
fn last_chapter_offers_graduation() {
    let html = rendered("/10-shipping.html", AppServices::in_memory());
    assert!(html.contains("Complete the course"), "missing graduation in {html}");
    assert!(html.contains("Accessibility"), "missing previous title in {html}");
    assert!(!html.contains("chapter-nav__link--next"), "unexpected next link in {html}");
}

#[test]
fn first_chapter_links_back_to_contents() {
    let html = rendered("/01-welcome.html", AppServices::in_memory());
    assert!(html.contains("Contents"), "missing contents link in {html}");
}

#[test]
fn chapter_outside_the_outline_is_titled_by_file() {
    let html = rendered("/11-bonus.html", AppServices::in_memory());
    assert!(html.contains("Chapter 11"), "missing chapter number in {html}");
    assert!(html.contains("11-bonus.html"), "missing fallback title in {html}");
    assert!(!html.contains("nav-item--active"), "no sidebar item should be active in {html}");
}

#[test]
fn stored_theme_is_rendered_on_first_paint() {
    let store = InMemoryStore::new();
    store.set("dwc_theme", "light").unwrap();
    let services = AppServices::new(&Storage::new(Arc::new(store)), SiteConfig::default()).unwrap();

    let html = rendered("/", services);
    assert!(html.contains(r#"data-theme="light""#), "missing theme attribute in {html}");
    assert!(html.contains("Dark mode"), "toggle should offer dark mode in {html}");
}

#[test]
fn dark_theme_is_the_default() {
    let services = AppServices::in_memory();
    assert_eq!(services.theme().current(), Theme::Dark);
    let html = rendered("/", services);
    assert!(html.contains(r#"data-theme="dark""#), "missing theme attribute in {html}");
}

/// Storage that refuses every call.
struct DisabledStore;

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disabled".into()))
    }
}

#[test]
fn page_renders_without_storage() {
    let services =
        AppServices::new(&Storage::new(Arc::new(DisabledStore)), SiteConfig::default()).unwrap();
    let html = rendered("/05-typography.html", services);
    assert!(html.contains("0% complete"), "missing progress title in {html}");
    assert!(html.contains("Typography"), "missing chapter title in {html}");
}
