//! Link operations: load, create, delete, copy
//!
//! Nothing here awaits on the UI loop. Work is spawned and its outcome shows
//! up through the query/mutation states and [`AppEvent`]s.

use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, warn};

use super::state::{App, AppEvent};
use crate::store::QueryKey;
use crate::structs::ShortenResponse;

impl App {
    /// Load (or reload) the URL list in the background
    pub fn refetch(&self) {
        let fetch = self.urls.fetch();
        tokio::spawn(async move {
            // Outcome lands in the query state
            let _ = fetch.await;
        });
    }

    /// Clear failed mutations and reload the list
    ///
    /// A pending mutation keeps its status.
    pub fn retry(&self) {
        if self.shorten.error().is_some() {
            self.shorten.reset();
        }
        if self.delete.error().is_some() {
            self.delete.reset();
        }
        self.refetch();
    }

    /// Submit the create form
    pub fn submit_form(&mut self) {
        if self.submit_disabled() {
            return;
        }

        let request = self.form.to_request();
        let tx = self.events_tx.clone();
        let on_success = move |created: &ShortenResponse| {
            let _ = tx.send(AppEvent::Shortened(created.clone()));
        };

        self.clear_status();
        let create = self.shorten.mutate(request, Some(on_success));
        tokio::spawn(async move {
            let _ = create.await;
        });
    }

    /// Delete the selected row, only while rows are on screen
    pub fn delete_selected(&mut self) {
        if self.delete_disabled() {
            return;
        }

        let Some(entry) = self.visible_entry() else {
            return;
        };

        let tx = self.events_tx.clone();
        let alias = entry.alias.clone();
        let on_success = move |_: &()| {
            let _ = tx.send(AppEvent::Deleted(alias));
        };

        self.clear_status();
        let delete = self.delete.mutate(entry.alias, Some(on_success));
        tokio::spawn(async move {
            let _ = delete.await;
        });
    }

    /// Copy the selected short URL to the clipboard
    pub fn copy_selected(&mut self) {
        let Some(entry) = self.visible_entry() else {
            return;
        };

        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(entry.short_url.clone())) {
            Ok(()) => self.set_status(format!("Copied {}", entry.short_url)),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                self.set_status(format!("Clipboard unavailable: {}", e));
            }
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Shortened(created) => {
                self.form.reset();
                self.set_status(format!("Short URL created: {}", created.short_url));
            }
            AppEvent::Deleted(alias) => {
                self.set_status(format!("Deleted {}", alias));
            }
        }
    }

    /// Drain completions and invalidations; refetch once if the list went stale
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }

        let mut stale = false;
        loop {
            match self.invalidations.try_recv() {
                Ok(key) => stale |= key == QueryKey::Urls,
                Err(TryRecvError::Lagged(skipped)) => {
                    debug!("Missed {} invalidation notices", skipped);
                    stale = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        if stale {
            self.refetch();
        }

        self.clamp_selection();
    }
}
