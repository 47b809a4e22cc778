use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Page size used by resources that fall back to a default.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// How a resource treats a missing or non-positive page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSizePolicy {
    /// Use the given size when the request asks for none.
    DefaultSize(u64),
    /// Return every match in a single page when the request asks for none.
    Unpaged,
    /// A positive page size must be supplied.
    Required,
}

/// Rendering of the `messages` envelope field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessagesPolicy {
    Null,
    EmptyArray,
}

impl MessagesPolicy {
    pub fn render(self) -> Option<Vec<String>> {
        match self {
            MessagesPolicy::Null => None,
            MessagesPolicy::EmptyArray => Some(Vec::new()),
        }
    }
}

/// A normalized page request. `page_size` is `None` for unpaged responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u64,
    pub page_size: Option<u64>,
}

/// The rows a page covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageWindow {
    All,
    Slice { offset: u64, limit: u64 },
}

impl PageWindow {
    /// Applies the window to an already fetched list of matches.
    pub fn apply<T>(self, items: Vec<T>) -> Vec<T> {
        match self {
            PageWindow::All => items,
            PageWindow::Slice { offset, limit } => {
                let offset = usize::try_from(offset).unwrap_or(usize::MAX);
                let limit = usize::try_from(limit).unwrap_or(usize::MAX);
                items.into_iter().skip(offset).take(limit).collect()
            }
        }
    }

    /// Whether the window begins at or after the last of `total` rows.
    pub fn starts_after(self, total: u64) -> bool {
        match self {
            PageWindow::All => false,
            PageWindow::Slice { offset, .. } => offset >= total,
        }
    }
}

/// The paginated response shape legacy clients expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub items: Vec<T>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub page_size: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub messages: Option<Vec<String>>,
}

impl<T> PageEnvelope<T> {
    /// Converts every item while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageEnvelope<U> {
        PageEnvelope {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_count: self.total_count,
            page_size: self.page_size,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
            messages: self.messages,
        }
    }
}

impl<T: Serialize> IntoResponse for PageEnvelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
