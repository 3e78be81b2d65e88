//! Request types for the shared crate
//!
//! Collection queries carry an opaque set of paging, sorting and filter
//! options that the backend interprets.

use std::collections::BTreeMap;

/// Query parameters for a collection fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Page number (0-based, backend convention)
    pub page: Option<u32>,

    /// Items per page
    pub size: Option<u32>,

    /// Sort criteria such as `name,asc`; each entry becomes its own `sort` parameter
    pub sort: Vec<String>,

    /// Arbitrary filter parameters, forwarded verbatim
    pub filters: BTreeMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page and page size
    pub fn paginate(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// Append a sort criterion
    pub fn sort_by(mut self, criterion: impl Into<String>) -> Self {
        self.sort.push(criterion.into());
        self
    }

    /// Set a filter parameter, replacing any previous value for `key`
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Flatten into query parameters.
    ///
    /// Scalar keys appear once; `sort` repeats once per criterion.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            params.push(("size".to_string(), size.to_string()));
        }
        for (key, value) in &self.filters {
            if key == "sort" || key == "page" || key == "size" {
                continue;
            }
            params.push((key.clone(), value.clone()));
        }
        for criterion in &self.sort {
            params.push(("sort".to_string(), criterion.clone()));
        }
        params
    }
}

/// Build query parameters from optional request options
pub fn create_request_option(req: Option<&RequestOptions>) -> Vec<(String, String)> {
    req.map(RequestOptions::to_query_params).unwrap_or_default()
}
