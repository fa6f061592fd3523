use std::marker::PhantomData;

use sea_orm::{DbConn, DbErr, EntityTrait, PaginatorTrait, QuerySelect, Select, SqlErr};

use murmur_core::domain::{MAX_WINDOW_VALUE, PageWindow};
use murmur_core::error::StorageError;

/// Generic PostgreSQL repository over a single SeaORM entity.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Run `select` bounded by `window`, then count every row `select` matches.
    ///
    /// The two statements run outside a transaction, so the total can drift
    /// from the page under concurrent inserts. `limit` and `offset` are
    /// saturated at [`MAX_WINDOW_VALUE`] since both bind as `BIGINT`.
    pub(crate) async fn fetch_page(
        &self,
        select: Select<E>,
        window: PageWindow,
    ) -> Result<(Vec<E::Model>, u64), StorageError> {
        let rows = select
            .clone()
            .limit(window.limit.min(MAX_WINDOW_VALUE))
            .offset(window.offset.min(MAX_WINDOW_VALUE))
            .all(&self.db)
            .await
            .map_err(storage_error)?;

        let total = select.count(&self.db).await.map_err(storage_error)?;

        Ok((rows, total))
    }
}

/// Classify a SeaORM error into the storage error taxonomy.
pub(crate) fn storage_error(err: DbErr) -> StorageError {
    let sql_err = err.sql_err();
    classify(err, sql_err)
}

/// `sql_err` is the driver-level reading of `err`, if any.
pub(crate) fn classify(err: DbErr, sql_err: Option<SqlErr>) -> StorageError {
    if matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
        return StorageError::Connection(err.to_string());
    }

    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(msg))
        | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StorageError::Constraint(msg),
        _ => StorageError::Query(err.to_string()),
    }
}
