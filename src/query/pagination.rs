//! Per-endpoint pagination defaults

/// What an endpoint does when the caller leaves `paginated` unset
///
/// Channel-scoped videos, `/videos` and `/live` answer with a plain array
/// unless asked otherwise; the search endpoints paginate by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationDefault {
    Paginated,
    Unpaginated,
}

impl PaginationDefault {
    /// Decide whether to paginate given the caller's option
    pub fn resolve(self, requested: Option<bool>) -> bool {
        requested.unwrap_or(self == PaginationDefault::Paginated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaginated_default() {
        let default = PaginationDefault::Unpaginated;
        assert!(!default.resolve(None));
        assert!(!default.resolve(Some(false)));
        assert!(default.resolve(Some(true)));
    }

    #[test]
    fn test_paginated_default() {
        let default = PaginationDefault::Paginated;
        assert!(default.resolve(None));
        assert!(default.resolve(Some(true)));
        assert!(!default.resolve(Some(false)));
    }
}
