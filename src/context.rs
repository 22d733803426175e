//! Application Context
//!
//! The session, config and store handed to every component via the Leptos
//! Context API. All user actions go through here so that each one persists,
//! refreshes the rendered list and reports its outcome as a toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::codec;
use crate::commands;
use crate::config::AppConfig;
use crate::error::{RankingError, RankingResult};
use crate::models::ToastKind;
use crate::session::RankingSession;
use crate::storage::BrowserStorage;
use crate::store::{store_set_values, AppStateStoreFields, AppStore};

const CONFIRM_RESET: &str = "Czy na pewno chcesz zresetować listę do początkowych wartości?";
const CONFIRM_SHUFFLE: &str = "Czy na pewno chcesz wylosować kolejność wartości?";

#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<RankingSession<BrowserStorage>, LocalStorage>,
    config: StoredValue<AppConfig>,
    store: AppStore,
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

impl AppContext {
    pub fn new(session: RankingSession<BrowserStorage>, config: AppConfig, store: AppStore) -> Self {
        let ctx = Self {
            session: StoredValue::new_local(session),
            config: StoredValue::new(config),
            store,
        };
        ctx.sync_values();
        ctx
    }

    /// Copy the session's list into the render store
    fn sync_values(&self) {
        let items = self.session.with_value(|s| s.items().to_vec());
        store_set_values(&self.store, items);
    }

    /// Show a toast that disappears after the configured delay
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.store.toasts().write().push(message, kind);
        let store = self.store;
        let ttl = self.config.with_value(|c| c.toast_ttl_ms);
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            store.toasts().write().dismiss(id);
        });
    }

    fn report_error(&self, error: &RankingError) {
        log::error!("{}", error);
        self.notify(error_message(error), ToastKind::Error);
    }

    /// Run a session mutation, refresh the view, then toast the outcome
    fn mutate<F>(&self, op: F, success: Option<(String, ToastKind)>)
    where
        F: FnOnce(&mut RankingSession<BrowserStorage>) -> RankingResult<()>,
    {
        let result = settle(self.session.try_update_value(op));
        self.sync_values();
        match result {
            Ok(()) => {
                if let Some((message, kind)) = success {
                    self.notify(message, kind);
                }
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Drop handler: move the row at `from` to `to`
    pub fn move_item(&self, from: usize, to: usize) {
        let len = self.session.with_value(|s| s.len());
        if from >= len || to >= len {
            log::warn!("Ignoring stale drop {} -> {} (len {})", from, to, len);
            return;
        }
        self.mutate(|s| s.move_item(from, to), None);
    }

    pub fn reset(&self) {
        if !commands::confirm(CONFIRM_RESET) {
            return;
        }
        log::info!("Resetting list to seed values");
        self.mutate(|s| s.reset(), Some(("Lista została zresetowana".to_string(), ToastKind::Info)));
    }

    pub fn shuffle(&self) {
        if !commands::confirm(CONFIRM_SHUFFLE) {
            return;
        }
        let mut rng = browser_rng();
        self.mutate(
            |s| s.shuffle(&mut rng),
            Some(("Lista została wylosowana".to_string(), ToastKind::Info)),
        );
    }

    /// Read the file chosen in `input` and replace the list with its rows
    pub async fn import_from_input(&self, input: &web_sys::HtmlInputElement) {
        let text = match commands::read_selected_file(input).await {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(e) => return self.report_error(&e),
        };
        match codec::from_csv(&text) {
            Ok(items) => {
                let count = items.len();
                log::info!("Importing {} values from CSV", count);
                self.mutate(
                    |s| s.replace(items),
                    Some((format!("Zaimportowano {} wartości", count), ToastKind::Success)),
                );
            }
            Err(e) => self.report_error(&e),
        }
    }

    pub fn export_csv(&self) {
        let csv = self.session.with_value(|s| codec::to_csv(s.items()));
        let prefix = self.config.with_value(|c| c.export_prefix.clone());
        let file_name = codec::export_file_name(&prefix, chrono::Local::now().date_naive());
        match commands::download_csv(&file_name, &csv) {
            Ok(()) => {
                log::info!("Exported {}", file_name);
                self.notify("Plik CSV został wyeksportowany", ToastKind::Success);
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Copy recent log records, for attaching to a bug report
    pub async fn copy_log(&self) {
        let text = rolling_logger::installed().map(|logger| logger.dump()).unwrap_or_default();
        match commands::copy_text(&text).await {
            Ok(()) => self.notify("Dziennik został skopiowany do schowka", ToastKind::Info),
            Err(e) => self.report_error(&e),
        }
    }

    pub async fn copy_to_clipboard(&self) {
        let text = self.session.with_value(|s| codec::to_numbered_list(s.items()));
        match commands::copy_text(&text).await {
            Ok(()) => self.notify("Lista została skopiowana do schowka", ToastKind::Success),
            Err(e) => self.report_error(&e),
        }
    }
}

/// Result of a session update; `None` means the session was already disposed
fn settle(result: Option<RankingResult<()>>) -> RankingResult<()> {
    result.unwrap_or(Err(RankingError::SessionClosed))
}

/// Seed a fast rng from `Math.random`
fn browser_rng() -> SmallRng {
    let high = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let low = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    SmallRng::seed_from_u64((high << 32) | low)
}

/// Toast text shown for each error kind
pub fn error_message(error: &RankingError) -> &'static str {
    match error {
        RankingError::MalformedState(_) => "Nie udało się wczytać zapisanych wartości",
        RankingError::PersistenceWrite(_) => "Błąd podczas zapisywania",
        RankingError::NoValidRows => "Nie znaleziono poprawnych danych w pliku CSV",
        RankingError::Clipboard(_) => "Błąd podczas kopiowania do schowka",
        RankingError::FileRead(_) => "Błąd podczas importu pliku CSV",
        RankingError::Export(_) => "Błąd podczas eksportu pliku CSV",
        RankingError::SessionClosed => "Błąd aplikacji, odśwież stronę",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    #[test]
    fn test_error_messages() {
        let cases = [
            (RankingError::MalformedState("x".into()), "Nie udało się wczytać zapisanych wartości"),
            (RankingError::PersistenceWrite(StorageError::Unavailable), "Błąd podczas zapisywania"),
            (RankingError::NoValidRows, "Nie znaleziono poprawnych danych w pliku CSV"),
            (RankingError::Clipboard("x".into()), "Błąd podczas kopiowania do schowka"),
            (RankingError::FileRead("x".into()), "Błąd podczas importu pliku CSV"),
            (RankingError::Export("x".into()), "Błąd podczas eksportu pliku CSV"),
            (RankingError::SessionClosed, "Błąd aplikacji, odśwież stronę"),
        ];
        for (error, expected) in cases {
            assert_eq!(error_message(&error), expected, "{:?}", error);
        }
    }

    #[test]
    fn test_disposed_session_is_an_error() {
        assert_eq!(settle(None), Err(RankingError::SessionClosed));
        assert_eq!(settle(Some(Ok(()))), Ok(()));
        assert_eq!(settle(Some(Err(RankingError::NoValidRows))), Err(RankingError::NoValidRows));
    }
}
