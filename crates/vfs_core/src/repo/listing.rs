//! Sort contract shared by folder and file listings.
//!
//! # Invariants
//! - Listing order is fully deterministic: the primary key is the chosen
//!   sort key, ties keep insertion order in both directions.
//! - Listings hand out references; record data is never copied.

use crate::model::timestamp::Timestamp;
use crate::repo::error::{StoreError, StoreResult};
use std::cmp::Ordering;
use std::str::FromStr;

/// Attribute a listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    CreatedAt,
}

impl FromStr for SortKey {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "--sort-name" | "name" => Ok(Self::Name),
            "--sort-created" | "created" | "created_at" => Ok(Self::CreatedAt),
            other => Err(StoreError::InvalidArgument(format!(
                "unsupported sort key `{other}`; expected --sort-name|--sort-created"
            ))),
        }
    }
}

/// Direction of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(StoreError::InvalidArgument(format!(
                "unsupported sort order `{other}`; expected asc|desc"
            ))),
        }
    }
}

/// Listing parameters. Defaults to name ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl ListQuery {
    pub fn new(sort_by: SortKey, order: SortOrder) -> Self {
        Self { sort_by, order }
    }

    /// Builds a query from raw tokens.
    ///
    /// # Errors
    /// - `InvalidArgument` when either token is unrecognized.
    pub fn parse(sort_by: &str, order: &str) -> StoreResult<Self> {
        Ok(Self {
            sort_by: sort_by.parse()?,
            order: order.parse()?,
        })
    }
}

/// Record shape the shared sorter understands.
pub(crate) trait Listable {
    fn list_name(&self) -> &str;
    fn list_created_at(&self) -> Timestamp;
    fn insertion_seq(&self) -> u64;
}

/// Orders registry entries per `query`.
pub(crate) fn sort_entries<'a, T, I>(entries: I, query: ListQuery) -> Vec<&'a T>
where
    T: Listable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items: Vec<&'a T> = entries.into_iter().collect();
    items.sort_by_key(|item| item.insertion_seq());
    // `sort_by` is stable, so equal keys stay in insertion order.
    items.sort_by(|left, right| {
        let ordering = compare_by_key(*left, *right, query.sort_by);
        match query.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    items
}

fn compare_by_key<T: Listable>(left: &T, right: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => left.list_name().cmp(right.list_name()),
        SortKey::CreatedAt => left.list_created_at().cmp(&right.list_created_at()),
    }
}
