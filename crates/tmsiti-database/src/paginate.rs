//! Generic list queries shared by every collection endpoint.
//!
//! A [`ListQuery`] names a table, a set of typed filters, and a sort
//! column. The same WHERE clause feeds both the `COUNT(*)` aggregate and
//! the row slice, so totals always agree with the items returned. Rows
//! are ordered by the requested column with `id ASC` as a tie-breaker.

use serde::Serialize;
use sqlx::sqlite::{Sqlite, SqlitePool, SqliteRow};
use sqlx::{FromRow, QueryBuilder};

use tmsiti_core::error::{AppError, ErrorKind};
use tmsiti_core::result::AppResult;
use tmsiti_core::types::filter::{FilterField, FilterValue, Predicate};
use tmsiti_core::types::pagination::{OffsetRequest, PageRequest, PageResponse};
use tmsiti_core::types::sorting::SortField;

/// A filtered, ordered listing over one table.
#[derive(Debug, Clone)]
pub struct ListQuery {
    table: &'static str,
    filters: Vec<FilterField>,
    order: SortField,
}

impl ListQuery {
    /// Start a listing over `table`, ordered by primary key.
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: SortField::default(),
        }
    }

    /// Add a filter condition. Conditions are joined with `AND`.
    pub fn filter(mut self, filter: FilterField) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a filter condition only when one is given.
    pub fn filter_opt(self, filter: Option<FilterField>) -> Self {
        match filter {
            Some(f) => self.filter(f),
            None => self,
        }
    }

    /// Set the sort column and direction.
    pub fn order_by(mut self, order: SortField) -> Self {
        self.order = order;
        self
    }

    fn check_identifiers(&self) -> AppResult<()> {
        let names = std::iter::once(self.table)
            .chain(std::iter::once(self.order.field))
            .chain(self.filters.iter().map(|f| f.field));
        for name in names {
            if !is_identifier(name) {
                return Err(AppError::internal(format!(
                    "Refusing to build query with column or table name '{name}'"
                )));
            }
        }
        Ok(())
    }

    fn push_where(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        for (i, filter) in self.filters.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            qb.push(filter.field);
            match &filter.predicate {
                Predicate::Equals(FilterValue::Text(s)) => {
                    qb.push(" = ");
                    qb.push_bind(s.clone());
                }
                Predicate::Equals(FilterValue::Flag(b)) => {
                    qb.push(" = ");
                    qb.push_bind(*b);
                }
                Predicate::Contains(needle) => {
                    qb.push(" LIKE ");
                    qb.push_bind(format!("%{}%", escape_like(needle)));
                    qb.push(" ESCAPE '\\'");
                }
            }
        }
    }

    fn push_order(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push(" ORDER BY ");
        qb.push(self.order.field);
        qb.push(" ");
        qb.push(self.order.direction.as_sql());
        if self.order.field != "id" {
            qb.push(", id ASC");
        }
    }

    fn push_window(&self, qb: &mut QueryBuilder<'_, Sqlite>, limit: u64, offset: u64) {
        qb.push(" LIMIT ");
        qb.push_bind(to_sql_int(limit));
        qb.push(" OFFSET ");
        qb.push_bind(to_sql_int(offset));
    }
}

/// Run a page/per_page listing and wrap the slice in the full envelope.
pub async fn paginate<T>(
    pool: &SqlitePool,
    query: &ListQuery,
    page: &PageRequest,
) -> AppResult<PageResponse<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Unpin,
{
    query.check_identifiers()?;

    let mut count = QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) FROM {}", query.table));
    query.push_where(&mut count);
    let total: i64 = count
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to count rows in {}", query.table),
                e,
            )
        })?;

    let items = fetch_slice(pool, query, page.limit(), page.offset()).await?;
    Ok(PageResponse::new(items, page, total.max(0) as u64))
}

/// Run a limit/offset listing and return the bare rows.
pub async fn fetch_window<T>(
    pool: &SqlitePool,
    query: &ListQuery,
    window: &OffsetRequest,
) -> AppResult<Vec<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    query.check_identifiers()?;
    fetch_slice(pool, query, window.limit(), window.offset()).await
}

async fn fetch_slice<T>(
    pool: &SqlitePool,
    query: &ListQuery,
    limit: u64,
    offset: u64,
) -> AppResult<Vec<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut select = QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {}", query.table));
    query.push_where(&mut select);
    query.push_order(&mut select);
    query.push_window(&mut select, limit, offset);

    select
        .build_query_as::<T>()
        .fetch_all(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to list rows in {}", query.table),
                e,
            )
        })
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn to_sql_int(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
