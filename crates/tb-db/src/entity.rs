use crate::Result as DbErrorResult;

use sqlx::Sqlite;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};

/// Alias for the runtime query type entities bind against.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Static description of how a domain model maps onto its table.
///
/// Implemented once per model in this crate; the generic
/// [`crate::SqliteRepository`] derives all CRUD SQL from it. Column order in
/// `COLUMNS` is a contract: `bind_insert` binds values in exactly that order,
/// and `bind_update` binds every non-`id` column in that order followed by
/// the `id` itself.
pub trait Entity: Sized + Send + Sync + Unpin {
    type Id: ToString + Send + Sync;

    /// Table name.
    const TABLE: &'static str;
    /// All columns, `id` first.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Self::Id;

    /// Decode a full row selected with `COLUMNS`.
    fn from_row(row: &SqliteRow) -> DbErrorResult<Self>;

    /// Bind all `COLUMNS` values, in order, onto an INSERT.
    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    /// Bind all non-`id` values, in `COLUMNS` order, then the id.
    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// Marks an entity as an eagerly loadable child collection of `P`.
///
/// `PARENT_FK` is the column on the child table referencing the parent id;
/// `ORDER_BY` fixes the collection order when loading.
pub trait ChildOf<P: Entity>: Entity {
    const PARENT_FK: &'static str;
    const ORDER_BY: Option<&'static str> = None;
}
