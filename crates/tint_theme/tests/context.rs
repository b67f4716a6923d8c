//! Theme context behavior: mode loading, persistence, and scheme following.

use std::sync::Arc;
use tint_theme::{
    ColorScheme, MemoryStore, ModeStore, StoreError, ThemeContext, ThemeMode, ThemePair,
    DEFAULT_DARK, DEFAULT_LIGHT,
};

struct FailingStore;

#[async_trait::async_trait]
impl ModeStore for FailingStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("store offline".into()))
    }

    async fn save(&self, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("store offline".into()))
    }
}

#[tokio::test]
async fn loads_persisted_mode() {
    let store = Arc::new(MemoryStore::with_value("dark"));
    let ctx = ThemeContext::load(ThemePair::default(), store, ColorScheme::Light).await;
    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert!(ctx.is_dark());
    assert_eq!(*ctx.theme(), *DEFAULT_DARK);
}

#[tokio::test]
async fn unrecognized_persisted_value_falls_back_to_auto() {
    let store = Arc::new(MemoryStore::with_value("purple"));
    let ctx = ThemeContext::load(ThemePair::default(), store, ColorScheme::Light).await;
    assert_eq!(ctx.mode(), ThemeMode::Auto);
    assert_eq!(ctx.effective_scheme(), ColorScheme::Light);
}

#[tokio::test]
async fn load_failure_falls_back_to_auto() {
    let ctx =
        ThemeContext::load(ThemePair::default(), Arc::new(FailingStore), ColorScheme::Dark).await;
    assert_eq!(ctx.mode(), ThemeMode::Auto);
    assert!(ctx.is_dark());
}

#[tokio::test]
async fn auto_follows_platform_scheme_changes() {
    let store = Arc::new(MemoryStore::new());
    let ctx = ThemeContext::load(ThemePair::default(), store, ColorScheme::Light).await;
    assert_eq!(*ctx.theme(), *DEFAULT_LIGHT);

    ctx.system_scheme_changed(ColorScheme::Dark);
    assert_eq!(*ctx.theme(), *DEFAULT_DARK);

    // explicit modes ignore platform changes
    ctx.set_mode(ThemeMode::Light);
    ctx.system_scheme_changed(ColorScheme::Light);
    ctx.system_scheme_changed(ColorScheme::Dark);
    assert_eq!(ctx.effective_scheme(), ColorScheme::Light);
}

#[tokio::test]
async fn toggle_moves_away_from_effective_scheme() {
    let store = Arc::new(MemoryStore::new());
    let ctx = ThemeContext::load(ThemePair::default(), store, ColorScheme::Dark).await;
    // auto + dark system scheme: toggling selects light explicitly
    assert_eq!(ctx.mode(), ThemeMode::Auto);
    ctx.toggle();
    assert_eq!(ctx.mode(), ThemeMode::Light);
    ctx.toggle();
    assert_eq!(ctx.mode(), ThemeMode::Dark);
}

#[tokio::test]
async fn set_mode_persists_fire_and_forget() {
    let store = Arc::new(MemoryStore::new());
    let ctx = ThemeContext::load(ThemePair::default(), Arc::clone(&store) as _, ColorScheme::Light)
        .await;
    ctx.set_mode(ThemeMode::Dark);
    // let the spawned save run
    tokio::task::yield_now().await;
    assert_eq!(store.load().await.unwrap().as_deref(), Some("dark"));
}

#[tokio::test]
async fn save_failure_keeps_in_memory_mode() {
    let ctx =
        ThemeContext::load(ThemePair::default(), Arc::new(FailingStore), ColorScheme::Light).await;
    ctx.set_mode(ThemeMode::Dark);
    tokio::task::yield_now().await;
    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert!(ctx.is_dark());
}

#[tokio::test]
async fn follow_system_returns_to_auto() {
    let store = Arc::new(MemoryStore::new());
    let ctx = ThemeContext::load(ThemePair::default(), store, ColorScheme::Light).await;
    ctx.set_mode(ThemeMode::Dark);
    assert!(!ctx.is_following_system());
    ctx.follow_system();
    assert!(ctx.is_following_system());
    assert_eq!(ctx.effective_scheme(), ColorScheme::Light);
}
