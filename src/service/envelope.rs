//! Page normalization and envelope rendering.

use crate::{
    error::validation::ValidationError,
    model::page::{MessagesPolicy, PageEnvelope, PageRequest, PageSizePolicy, PageWindow},
};

/// Builds page envelopes under one resource's page-size and messages policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopeBuilder {
    page_size: PageSizePolicy,
    messages: MessagesPolicy,
}

impl EnvelopeBuilder {
    pub fn new(page_size: PageSizePolicy, messages: MessagesPolicy) -> Self {
        Self {
            page_size,
            messages,
        }
    }

    /// Normalizes the raw page number and size of a request.
    ///
    /// Page numbers below 1 become 1. A non-positive page size is replaced according
    /// to the page-size policy.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Normalized request; `page_size` is `None` when unpaged
    /// - `Err(ValidationError::InvalidPageSize)` - Non-positive size under
    ///   `PageSizePolicy::Required`
    pub fn request(&self, page_number: i64, page_size: i64) -> Result<PageRequest, ValidationError> {
        let page_number = u64::try_from(page_number).unwrap_or(0).max(1);

        let page_size = match u64::try_from(page_size) {
            Ok(size) if size > 0 => Some(size),
            _ => match self.page_size {
                PageSizePolicy::DefaultSize(size) => Some(size.max(1)),
                PageSizePolicy::Unpaged => None,
                PageSizePolicy::Required => {
                    return Err(ValidationError::InvalidPageSize(page_size));
                }
            },
        };

        Ok(PageRequest {
            page_number,
            page_size,
        })
    }

    /// Rows covered by `request`: `[(page - 1) * size, page * size)`, or everything.
    pub fn window(request: PageRequest) -> PageWindow {
        match request.page_size {
            Some(size) => PageWindow::Slice {
                offset: (request.page_number - 1).saturating_mul(size),
                limit: size,
            },
            None => PageWindow::All,
        }
    }

    /// Renders the envelope for one page of items.
    ///
    /// # Arguments
    /// - `items` - Records of the current page, already sliced
    /// - `total_count` - Number of records matching the search before slicing
    /// - `request` - The normalized request the items were fetched for
    pub fn build<T>(&self, items: Vec<T>, total_count: u64, request: PageRequest) -> PageEnvelope<T> {
        let messages = self.messages.render();

        match request.page_size {
            Some(size) => {
                let total_pages = total_count.div_ceil(size);

                PageEnvelope {
                    items,
                    current_page: request.page_number,
                    total_pages,
                    total_count,
                    page_size: size,
                    has_previous_page: request.page_number > 1,
                    has_next_page: request.page_number < total_pages,
                    messages,
                }
            }
            None => PageEnvelope {
                items,
                current_page: request.page_number,
                total_pages: 0,
                total_count,
                page_size: total_count,
                has_previous_page: false,
                has_next_page: false,
                messages,
            },
        }
    }
}
