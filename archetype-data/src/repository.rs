use crate::error::DataError;
use std::future::Future;

/// Active-record style persistence contract behind the CRUD archetype.
///
/// Every call is its own unit of work: backends run it inside a transaction
/// that commits on success and rolls back on error.
///
/// Uses RPITIT (return-position `impl Trait` in traits), so no `async-trait` is needed.
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    /// Store `entity`, inserting it or overwriting the row with the same id.
    fn persist(&self, entity: &T) -> impl Future<Output = Result<(), DataError>> + Send;

    /// Whether a row with the entity's id currently exists.
    fn is_persistent(&self, entity: &T) -> impl Future<Output = Result<bool, DataError>> + Send;

    fn find_by_id(&self, id: &ID) -> impl Future<Output = Result<Option<T>, DataError>> + Send;

    /// Remove the row with the entity's id. Returns `false` if nothing was removed.
    fn delete(&self, entity: &T) -> impl Future<Output = Result<bool, DataError>> + Send;
}
