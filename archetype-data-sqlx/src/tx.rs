//! Transaction wrapper scoping one repository call.

use sqlx::{Database, Pool, Transaction};
use std::ops::{Deref, DerefMut};

use crate::error::{SqlxErrorExt, SqlxResult};

/// A wrapper around SQLx [`Transaction`].
///
/// - Begun from the pool before the statement runs
/// - Committed explicitly with [`Tx::commit`]
/// - Rolled back on drop if never committed (error paths, panics, cancellation)
pub struct Tx<'a, DB: Database>(pub Transaction<'a, DB>);

impl<'a, DB: Database> Deref for Tx<'a, DB> {
    type Target = Transaction<'a, DB>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, DB: Database> DerefMut for Tx<'a, DB> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<DB: Database> Tx<'static, DB> {
    pub async fn begin(pool: &Pool<DB>) -> SqlxResult<Self> {
        let tx = pool.begin().await.map_err(SqlxErrorExt::into_data_error)?;
        Ok(Tx(tx))
    }
}

impl<'a, DB: Database> Tx<'a, DB> {
    /// Unwraps the `Tx` into the inner `Transaction`.
    pub fn into_inner(self) -> Transaction<'a, DB> {
        self.0
    }

    /// Returns a mutable reference to the underlying connection.
    pub fn as_mut(&mut self) -> &mut <DB as Database>::Connection {
        &mut *self.0
    }

    pub async fn commit(self) -> SqlxResult<()> {
        self.into_inner()
            .commit()
            .await
            .map_err(SqlxErrorExt::into_data_error)
    }
}
