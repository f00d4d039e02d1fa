//! Generic CRUD repository.
//!
//! One parameterized component covers existence checks and CRUD for every
//! entity type; all SQL is derived statically from the [`Entity`] metadata.
//! Storage errors propagate as [`crate::DbError`] without catch or retry —
//! retry policy, if any, belongs to the caller.

use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity};

use std::marker::PhantomData;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub struct SqliteRepository<E: Entity> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SqliteRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// True iff a row with that identifier exists.
    pub async fn exists(&self, id: &E::Id) -> DbErrorResult<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?", E::TABLE);
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    pub async fn add(&self, entity: &E) -> DbErrorResult<()> {
        let sql = Self::insert_sql();
        entity
            .bind_insert(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Bulk insert with the same all-or-nothing guarantee as [`Self::add`]:
    /// a single transaction, rolled back on the first failure.
    pub async fn add_range(&self, entities: &[E]) -> DbErrorResult<()> {
        let sql = Self::insert_sql();
        let mut tx = self.pool.begin().await?;

        for entity in entities {
            entity
                .bind_insert(sqlx::query(&sql))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// None when absent; absence is not an error.
    pub async fn find_by_id(&self, id: &E::Id) -> DbErrorResult<Option<E>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?",
            E::COLUMNS.join(", "),
            E::TABLE
        );
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| E::from_row(&r)).transpose()
    }

    /// [`Self::find_by_id`] plus one eagerly loaded child collection,
    /// avoiding a lazy load per access.
    pub async fn find_by_id_with<C: ChildOf<E>>(
        &self,
        id: &E::Id,
    ) -> DbErrorResult<Option<(E, Vec<C>)>> {
        let Some(entity) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let children = self.find_children::<C>(id).await?;

        Ok(Some((entity, children)))
    }

    /// All children of the given parent, in the child's declared order.
    pub async fn find_children<C: ChildOf<E>>(&self, id: &E::Id) -> DbErrorResult<Vec<C>> {
        let mut sql = format!(
            "SELECT {} FROM {} WHERE {} = ?",
            C::COLUMNS.join(", "),
            C::TABLE,
            C::PARENT_FK
        );
        if let Some(order) = C::ORDER_BY {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        let rows = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(C::from_row).collect()
    }

    /// Composable query surface seeded with `SELECT <columns> FROM <table>`.
    ///
    /// The escape hatch for filtering/sorting beyond basic CRUD. Callers
    /// push clauses with `push`/`push_bind` and finish with
    /// [`Self::fetch_all`] or [`Self::fetch_optional`]. Must not leak past
    /// the service layer.
    pub fn select(&self) -> QueryBuilder<'static, Sqlite> {
        QueryBuilder::new(format!(
            "SELECT {} FROM {}",
            E::COLUMNS.join(", "),
            E::TABLE
        ))
    }

    pub async fn fetch_all(
        &self,
        builder: &mut QueryBuilder<'_, Sqlite>,
    ) -> DbErrorResult<Vec<E>> {
        let rows = builder.build().fetch_all(&self.pool).await?;
        rows.iter().map(E::from_row).collect()
    }

    pub async fn fetch_optional(
        &self,
        builder: &mut QueryBuilder<'_, Sqlite>,
    ) -> DbErrorResult<Option<E>> {
        let row = builder.build().fetch_optional(&self.pool).await?;
        row.map(|r| E::from_row(&r)).transpose()
    }

    /// Full replace of the persisted state by identifier. False when no row
    /// matched.
    pub async fn update(&self, entity: &E) -> DbErrorResult<bool> {
        let sql = Self::update_sql();
        let result = entity
            .bind_update(sqlx::query(&sql))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove by identifier. False when absent.
    pub async fn delete(&self, id: &E::Id) -> DbErrorResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn insert_sql() -> String {
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        )
    }

    fn update_sql() -> String {
        let assignments = E::COLUMNS
            .iter()
            .filter(|c| **c != "id")
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments)
    }
}
