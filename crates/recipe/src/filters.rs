use std::str::FromStr;

use recipebook_db::table::{Cuisine, Recipe};
use sea_query::{ColumnRef, IntoColumnRef, Order, SelectStatement};
use serde::Serialize;
use strum::{Display, EnumString};

use crate::Validator;

pub const SORT_SAFELIST: [&str; 8] = [
    "id",
    "title",
    "difficulty",
    "cuisinename",
    "-id",
    "-title",
    "-difficulty",
    "-cuisinename",
];

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_SORT: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub page: u32,
    pub page_size: u32,
    pub sort: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort: DEFAULT_SORT.to_owned(),
        }
    }
}

impl Filters {
    pub fn limit(&self) -> u64 {
        self.page_size.into()
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

pub fn validate_filters(v: &mut Validator, filters: &Filters) {
    v.check(filters.page > 0, "page", "must be greater than zero");
    v.check(
        filters.page <= 10_000_000,
        "page",
        "must be a maximum of 10 million",
    );
    v.check(filters.page_size > 0, "page_size", "must be greater than zero");
    v.check(
        filters.page_size <= 100,
        "page_size",
        "must be a maximum of 100",
    );
    v.check(
        SORT_SAFELIST.contains(&filters.sort.as_str()),
        "sort",
        "invalid sort value",
    );
}

#[derive(EnumString, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SortColumn {
    Id,
    Title,
    Difficulty,
    CuisineName,
}

impl SortColumn {
    pub fn column(self) -> ColumnRef {
        match self {
            SortColumn::Id => (Recipe::Table, Recipe::Id).into_column_ref(),
            SortColumn::Title => (Recipe::Table, Recipe::Title).into_column_ref(),
            SortColumn::Difficulty => (Recipe::Table, Recipe::Difficulty).into_column_ref(),
            SortColumn::CuisineName => (Cuisine::Table, Cuisine::Name).into_column_ref(),
        }
    }
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[strum(serialize = "ASC")]
    Asc,
    #[strum(serialize = "DESC")]
    Desc,
}

impl Direction {
    pub fn order(self) -> Order {
        match self {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

/// A resolved allow-list key, e.g. `-difficulty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SortColumn,
    pub direction: Direction,
}

impl FromStr for SortKey {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, name) = match s.strip_prefix('-') {
            Some(name) => (Direction::Desc, name),
            None => (Direction::Asc, s),
        };

        Ok(Self {
            column: name.parse()?,
            direction,
        })
    }
}

impl SortKey {
    /// Appends the ordering, then the ascending id tie-break.
    pub fn apply(&self, statement: &mut SelectStatement) {
        statement.order_by(self.column.column(), self.direction.order());

        if self.column != SortColumn::Id {
            statement.order_by((Recipe::Table, Recipe::Id), Order::Asc);
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub current_page: u32,
    pub page_size: u32,
    pub first_page: u32,
    pub last_page: u64,
    pub total_records: u64,
}

pub fn calculate_metadata(total_records: u64, page: u32, page_size: u32) -> Metadata {
    if total_records == 0 || page_size == 0 {
        return Metadata::default();
    }

    Metadata {
        current_page: page,
        page_size,
        first_page: 1,
        last_page: total_records.div_ceil(page_size.into()),
        total_records,
    }
}
