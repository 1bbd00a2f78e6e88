//! Request bodies for the search endpoints
//!
//! "Any" fields are OR conditions, "all" fields AND conditions. Bodies are
//! JSON, so list options stay JSON arrays.

use crate::core::VideoType;
use crate::query::pagination::PaginationDefault;
use crate::query::params::QueryParams;
use serde::Serialize;

/// Offset sent when the caller does not choose one
pub const DEFAULT_SEARCH_OFFSET: u32 = 0;
/// Limit sent when the caller does not choose one
pub const DEFAULT_SEARCH_LIMIT: u32 = 25;

/// Result ordering for searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSort {
    Newest,
    Oldest,
}

/// Filters shared by video and comment search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchScope {
    pub sort: Option<SearchSort>,
    /// Any of these clip languages
    pub lang: Option<Vec<String>>,
    /// Any of these video types
    pub target: Option<Vec<VideoType>>,
    /// Any of these topics
    pub topic: Option<Vec<String>>,
    /// All of these channel ids must appear
    pub channels: Option<Vec<String>>,
    /// Any of these organizations
    pub org: Option<Vec<String>>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub paginated: Option<bool>,
}

impl SearchScope {
    pub const PAGINATION: PaginationDefault = PaginationDefault::Paginated;

    pub fn wants_pagination(&self) -> bool {
        Self::PAGINATION.resolve(self.paginated)
    }

    fn to_body(&self, paginated: bool) -> ScopeBody<'_> {
        ScopeBody {
            sort: self.sort,
            lang: self.lang.as_deref(),
            target: self.target.as_deref(),
            topic: self.topic.as_deref(),
            vch: self.channels.as_deref(),
            org: self.org.as_deref(),
            offset: self.offset.unwrap_or(DEFAULT_SEARCH_OFFSET),
            limit: self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            paginated,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScopeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SearchSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lang: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a [VideoType]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vch: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    org: Option<&'a [String]>,
    offset: u32,
    limit: u32,
    paginated: bool,
}

/// Free-text condition matched against titles and descriptions
#[derive(Debug, Serialize)]
pub struct SearchCondition<'a> {
    text: &'a str,
}

/// Options for `POST /search/videoSearch`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoSearchOptions {
    pub scope: SearchScope,
    /// All of these texts must match
    pub conditions: Option<Vec<String>>,
}

impl VideoSearchOptions {
    pub fn wants_pagination(&self) -> bool {
        self.scope.wants_pagination()
    }

    pub fn to_body(&self, paginated: bool) -> VideoSearchBody<'_> {
        VideoSearchBody {
            scope: self.scope.to_body(paginated),
            conditions: self.conditions.as_ref().map(|conditions| {
                conditions
                    .iter()
                    .map(|text| SearchCondition { text })
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VideoSearchBody<'a> {
    #[serde(flatten)]
    scope: ScopeBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conditions: Option<Vec<SearchCondition<'a>>>,
}

/// Options for `POST /search/commentSearch`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentSearchOptions {
    pub scope: SearchScope,
    /// Text to look for in comments
    pub comment: Option<Vec<String>>,
}

impl CommentSearchOptions {
    pub fn wants_pagination(&self) -> bool {
        self.scope.wants_pagination()
    }

    pub fn to_body(&self, paginated: bool) -> CommentSearchBody<'_> {
        CommentSearchBody {
            scope: self.scope.to_body(paginated),
            comment: self.comment.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentSearchBody<'a> {
    #[serde(flatten)]
    scope: ScopeBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a [String]>,
}

/// Query for `GET /search/autocomplete`
pub fn autocomplete_query(query: &str) -> QueryParams {
    let mut params = QueryParams::new();
    params.push("q", query);
    params
}
