use archetype_data::{DataError, Dialect, Entity, Repository, Statements};
use sqlx::{Database, Pool};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::entity::SqlxEntity;
use crate::error::{SqlxErrorExt, SqlxResult};
use crate::tx::Tx;

/// Databases a [`SqlxRepository`] knows how to render statements for.
pub trait SqlxDialect: Database {
    const DIALECT: Dialect;
}

#[cfg(feature = "sqlite")]
impl SqlxDialect for sqlx::Sqlite {
    const DIALECT: Dialect = Dialect::Sqlite;
}

#[cfg(feature = "postgres")]
impl SqlxDialect for sqlx::Postgres {
    const DIALECT: Dialect = Dialect::Postgres;
}

#[cfg(feature = "mysql")]
impl SqlxDialect for sqlx::MySql {
    const DIALECT: Dialect = Dialect::MySql;
}

/// A generic SQL-based repository implementation.
///
/// Statements are rendered once from the `Entity` metadata when the
/// repository is built; every call then runs inside its own transaction.
///
/// # Example
///
/// ```ignore
/// let repo = SqlxRepository::<Person, Sqlite>::new(pool.clone())?;
/// repo.persist(&person).await?;
/// ```
pub struct SqlxRepository<T, DB: Database> {
    pool: Pool<DB>,
    statements: Arc<Statements>,
    _marker: PhantomData<T>,
}

impl<T, DB> SqlxRepository<T, DB>
where
    T: Entity,
    DB: SqlxDialect,
{
    pub fn new(pool: Pool<DB>) -> SqlxResult<Self> {
        let statements = Statements::for_entity::<T>(DB::DIALECT)?;
        tracing::debug!(
            table = T::table_name(),
            upsert = %statements.upsert,
            "sqlx repository ready"
        );
        Ok(Self {
            pool,
            statements: Arc::new(statements),
            _marker: PhantomData,
        })
    }
}

impl<T, DB: Database> SqlxRepository<T, DB> {
    /// Get the underlying pool reference.
    pub fn pool(&self) -> &Pool<DB> {
        &self.pool
    }

    pub fn statements(&self) -> &Statements {
        &self.statements
    }
}

impl<T, DB: Database> Clone for SqlxRepository<T, DB> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            statements: self.statements.clone(),
            _marker: PhantomData,
        }
    }
}

macro_rules! impl_sqlx_repository {
    ($db:ty) => {
        impl<T> Repository<T, T::Id> for SqlxRepository<T, $db>
        where
            T: SqlxEntity<$db>,
            for<'q> T::Id: sqlx::Encode<'q, $db> + sqlx::Type<$db>,
        {
            async fn persist(&self, entity: &T) -> Result<(), DataError> {
                let mut tx = Tx::begin(&self.pool).await?;
                let result = entity
                    .bind_columns(sqlx::query(&self.statements.upsert))
                    .execute(tx.as_mut())
                    .await
                    .map_err(SqlxErrorExt::into_data_error)?;
                tx.commit().await?;
                tracing::debug!(
                    table = T::table_name(),
                    rows = result.rows_affected(),
                    "entity upserted"
                );
                Ok(())
            }

            async fn is_persistent(&self, entity: &T) -> Result<bool, DataError> {
                let mut tx = Tx::begin(&self.pool).await?;
                let count: i64 = sqlx::query_scalar(&self.statements.count_by_id)
                    .bind(entity.id())
                    .fetch_one(tx.as_mut())
                    .await
                    .map_err(SqlxErrorExt::into_data_error)?;
                tx.commit().await?;
                Ok(count > 0)
            }

            async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, DataError> {
                let mut tx = Tx::begin(&self.pool).await?;
                let found = sqlx::query_as::<_, T>(&self.statements.select_by_id)
                    .bind(id)
                    .fetch_optional(tx.as_mut())
                    .await
                    .map_err(SqlxErrorExt::into_data_error)?;
                tx.commit().await?;
                Ok(found)
            }

            async fn delete(&self, entity: &T) -> Result<bool, DataError> {
                let mut tx = Tx::begin(&self.pool).await?;
                let result = sqlx::query(&self.statements.delete_by_id)
                    .bind(entity.id())
                    .execute(tx.as_mut())
                    .await
                    .map_err(SqlxErrorExt::into_data_error)?;
                tx.commit().await?;
                Ok(result.rows_affected() > 0)
            }
        }
    };
}

#[cfg(feature = "sqlite")]
impl_sqlx_repository!(sqlx::Sqlite);

#[cfg(feature = "postgres")]
impl_sqlx_repository!(sqlx::Postgres);

#[cfg(feature = "mysql")]
impl_sqlx_repository!(sqlx::MySql);
