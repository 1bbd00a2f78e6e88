//! Result envelopes returned by list endpoints

use serde::Serialize;

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    /// Number of results across all pages
    pub total: u64,
    pub items: Vec<T>,
}

/// Result of an endpoint that can answer with or without pagination
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paginated(Paginated<T>),
    Unpaginated(Vec<T>),
}

impl<T> Listing<T> {
    /// Items of this listing regardless of mode
    pub fn items(&self) -> &[T] {
        match self {
            Listing::Paginated(page) => &page.items,
            Listing::Unpaginated(items) => items,
        }
    }

    /// Consume the listing, keeping only its items
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paginated(page) => page.items,
            Listing::Unpaginated(items) => items,
        }
    }

    /// Total reported by the server, only known for paginated listings
    pub fn total(&self) -> Option<u64> {
        match self {
            Listing::Paginated(page) => Some(page.total),
            Listing::Unpaginated(_) => None,
        }
    }

    pub fn is_paginated(&self) -> bool {
        matches!(self, Listing::Paginated(_))
    }
}
