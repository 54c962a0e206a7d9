//! Render selectors derived from the query and mutation states

use super::state::App;
use crate::errors::LinkdeckError;
use crate::store::{QueryState, UrlList};
use crate::structs::UrlEntry;

/// What the URL list shows; exactly one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Error(LinkdeckError),
    Loading,
    Empty,
    Populated(UrlList),
}

/// First set error in read, create, delete order
pub fn banner_error(
    read: Option<&LinkdeckError>,
    create: Option<&LinkdeckError>,
    delete: Option<&LinkdeckError>,
) -> Option<LinkdeckError> {
    read.or(create).or(delete).cloned()
}

/// Error beats loading, loading beats empty, empty beats rows
pub fn select_list_view(
    read: &QueryState<UrlList>,
    create_error: Option<&LinkdeckError>,
    delete_error: Option<&LinkdeckError>,
) -> ListView {
    if let Some(error) = banner_error(read.error.as_ref(), create_error, delete_error) {
        return ListView::Error(error);
    }

    if read.is_loading() {
        return ListView::Loading;
    }

    match &read.data {
        Some(urls) if !urls.is_empty() => ListView::Populated(urls.clone()),
        _ => ListView::Empty,
    }
}

impl App {
    pub fn list_view(&self) -> ListView {
        select_list_view(
            &self.urls.snapshot(),
            self.shorten.error().as_ref(),
            self.delete.error().as_ref(),
        )
    }

    pub fn banner(&self) -> Option<LinkdeckError> {
        banner_error(
            self.urls.error().as_ref(),
            self.shorten.error().as_ref(),
            self.delete.error().as_ref(),
        )
    }

    /// The selected row, if the list is showing rows
    pub fn visible_entry(&self) -> Option<UrlEntry> {
        match self.list_view() {
            ListView::Populated(urls) => urls.get(self.selected_index).cloned(),
            _ => None,
        }
    }

    /// Invalid form or a create in flight
    pub fn submit_disabled(&self) -> bool {
        !self.form.is_valid() || self.shorten.is_pending()
    }

    /// Any delete in flight disables every delete control
    pub fn delete_disabled(&self) -> bool {
        self.delete.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Query, QueryCache, QueryKey};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn entry(alias: &str) -> UrlEntry {
        UrlEntry {
            id: 1,
            alias: alias.to_string(),
            short_url: format!("http://localhost:8080/{}", alias),
            original_url: "https://example.com".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(10, 15, 30))
                .unwrap(),
        }
    }

    async fn state_with(
        result: Result<Vec<UrlEntry>, LinkdeckError>,
    ) -> QueryState<UrlList> {
        let cache = QueryCache::new();
        let query = Query::new(QueryKey::Urls, cache, move || {
            let result = result.clone();
            Box::pin(async move { result.map(Arc::new) })
        });
        let _ = query.fetch().await;
        query.snapshot()
    }

    #[test]
    fn test_banner_precedence() {
        let read = LinkdeckError::network("connection refused");
        let create = LinkdeckError::api(409, "Alias already exists");
        let delete = LinkdeckError::api(404, "URL not found");

        assert_eq!(
            banner_error(Some(&read), Some(&create), Some(&delete)),
            Some(read.clone())
        );
        assert_eq!(
            banner_error(None, Some(&create), Some(&delete)),
            Some(create.clone())
        );
        assert_eq!(banner_error(None, None, Some(&delete)), Some(delete));
        assert_eq!(banner_error(None, None, None), None);
    }

    #[test]
    fn test_loading_before_first_data() {
        let mut state = QueryState::<UrlList>::default();
        assert_eq!(select_list_view(&state, None, None), ListView::Empty);

        // Simulate an in-flight first load
        state = {
            let cache = QueryCache::new();
            let query: Query<UrlList> = Query::new(QueryKey::Urls, cache, || {
                Box::pin(std::future::pending())
            });
            let _pending = query.fetch();
            query.snapshot()
        };
        assert_eq!(select_list_view(&state, None, None), ListView::Loading);
    }

    #[tokio::test]
    async fn test_error_beats_data() {
        let state = state_with(Ok(vec![entry("abc123")])).await;
        let create = LinkdeckError::api(409, "Alias already exists");

        assert_eq!(
            select_list_view(&state, Some(&create), None),
            ListView::Error(create)
        );
    }

    #[tokio::test]
    async fn test_empty_and_populated() {
        let empty = state_with(Ok(vec![])).await;
        assert_eq!(select_list_view(&empty, None, None), ListView::Empty);

        let populated = state_with(Ok(vec![entry("abc123")])).await;
        match select_list_view(&populated, None, None) {
            ListView::Populated(urls) => assert_eq!(urls[0].alias, "abc123"),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_error_view() {
        let state = state_with(Err(LinkdeckError::network("connection refused"))).await;
        assert_eq!(
            select_list_view(&state, None, None),
            ListView::Error(LinkdeckError::network("connection refused"))
        );
    }
}
