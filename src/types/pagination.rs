//! Cursor pagination for list endpoints.

use serde::Deserialize;

use crate::types::ListOrder;

/// Cursor position for a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// Return items after this resource ID.
    StartingAfter(String),
    /// Return items before this resource ID.
    EndingBefore(String),
}

/// Query parameters for a list request.
///
/// Passed through to the API unchanged; no defaults are injected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParameters {
    /// Number of results per page
    pub limit: Option<u32>,
    /// Result order
    pub order: Option<ListOrder>,
    /// Cursor position
    pub cursor: Option<Cursor>,
}

impl PaginationParameters {
    /// Parameters for the given page size.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Set the order.
    pub fn order(mut self, order: ListOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the cursor.
    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Query pairs in wire form.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(order) = self.order {
            query.push(("order".to_string(), order.to_string()));
        }
        match &self.cursor {
            Some(Cursor::StartingAfter(id)) => {
                query.push(("starting_after".to_string(), id.clone()));
            }
            Some(Cursor::EndingBefore(id)) => {
                query.push(("ending_before".to_string(), id.clone()));
            }
            None => {}
        }
        query
    }

    /// Recover parameters from a `next_uri`/`previous_uri` value.
    ///
    /// Unknown keys and unparseable values are ignored.
    pub fn from_uri(uri: &str) -> Self {
        let mut params = Self::default();
        let Some((_, query)) = uri.split_once('?') else {
            return params;
        };
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "limit" => params.limit = value.parse().ok(),
                "order" => params.order = value.parse().ok(),
                "starting_after" => {
                    params.cursor = Some(Cursor::StartingAfter(value.into_owned()));
                }
                "ending_before" => {
                    params.cursor = Some(Cursor::EndingBefore(value.into_owned()));
                }
                _ => {}
            }
        }
        params
    }
}

/// Pagination block of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Cursor the page ends before
    #[serde(default)]
    pub ending_before: Option<String>,
    /// Cursor the page starts after
    #[serde(default)]
    pub starting_after: Option<String>,
    /// Page size
    #[serde(default)]
    pub limit: Option<u32>,
    /// Result order
    #[serde(default)]
    pub order: Option<ListOrder>,
    /// URI of the previous page
    #[serde(default)]
    pub previous_uri: Option<String>,
    /// URI of the next page
    #[serde(default)]
    pub next_uri: Option<String>,
}

impl Pagination {
    /// Parameters for the next page, if there is one.
    pub fn next_page(&self) -> Option<PaginationParameters> {
        self.next_uri.as_deref().map(PaginationParameters::from_uri)
    }

    /// Parameters for the previous page, if there is one.
    pub fn previous_page(&self) -> Option<PaginationParameters> {
        self.previous_uri.as_deref().map(PaginationParameters::from_uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query() {
        let params = PaginationParameters::with_limit(25)
            .order(ListOrder::Asc)
            .cursor(Cursor::StartingAfter("abc".to_string()));
        assert_eq!(
            params.to_query(),
            vec![
                ("limit".to_string(), "25".to_string()),
                ("order".to_string(), "asc".to_string()),
                ("starting_after".to_string(), "abc".to_string()),
            ]
        );
        assert!(PaginationParameters::default().to_query().is_empty());
    }

    #[test]
    fn test_next_page_from_uri() {
        let json = r#"{
            "ending_before": null,
            "starting_after": null,
            "limit": 25,
            "order": "desc",
            "previous_uri": null,
            "next_uri": "/v2/accounts?&limit=25&starting_after=5d5aed5f-b7c0-5585-a3dd-a7ed9ef0e414"
        }"#;
        let pagination: Pagination = serde_json::from_str(json).unwrap();
        assert!(pagination.previous_page().is_none());

        let next = pagination.next_page().unwrap();
        assert_eq!(next.limit, Some(25));
        assert_eq!(
            next.cursor,
            Some(Cursor::StartingAfter(
                "5d5aed5f-b7c0-5585-a3dd-a7ed9ef0e414".to_string()
            ))
        );
        assert!(next.order.is_none());
    }

    #[test]
    fn test_from_uri_ignores_unknown_keys() {
        let params = PaginationParameters::from_uri("/v2/accounts?ending_before=x&order=up&foo=1");
        assert_eq!(params.cursor, Some(Cursor::EndingBefore("x".to_string())));
        assert!(params.order.is_none());
        assert_eq!(PaginationParameters::from_uri("/v2/accounts"), PaginationParameters::default());
    }
}
