use std::fmt::Debug;
use std::marker::PhantomData;

use archetype_core::HttpError;
use archetype_data::{DataError, Entity, Repository};
use tracing::{debug, error, info, warn};

/// Generic create/read/update/delete over one entity type.
///
/// Every operation takes its argument as an `Option`: `None` is what an
/// absent request body (or path-less id) turns into, and each operation
/// answers it with a fixed status:
///
/// | Operation | Present | Absent |
/// |-----------|---------|--------|
/// | `create` | 200, or 400 if the row is not there afterwards | 500 |
/// | `read` | 200, or 400 if no row has that id | 400 |
/// | `update` | 200 | 400 |
/// | `delete` | 200 | 400 |
///
/// `update` and `delete` receive the path id but act on the entity's own id.
pub struct CrudArchetype<T, R> {
    repository: R,
    _marker: PhantomData<T>,
}

impl<T, R> CrudArchetype<T, R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _marker: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<T, R: Clone> Clone for CrudArchetype<T, R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            _marker: PhantomData,
        }
    }
}

fn persistence_failure(err: DataError) -> HttpError {
    error!(error = %err, "persistence call failed");
    HttpError::from(err)
}

impl<T, R> CrudArchetype<T, R>
where
    T: Entity + Debug,
    R: Repository<T, T::Id>,
{
    #[tracing::instrument(name = "create", skip_all, fields(table = T::table_name()))]
    pub async fn create(&self, entity: Option<T>) -> Result<T, HttpError> {
        info!(entity = ?entity, "persist entity");
        let Some(entity) = entity else {
            error!("entity not present");
            return Err(HttpError::Internal("Entity not present".into()));
        };

        self.repository
            .persist(&entity)
            .await
            .map_err(persistence_failure)?;
        let persistent = self
            .repository
            .is_persistent(&entity)
            .await
            .map_err(persistence_failure)?;

        if persistent {
            info!(persistent, "entity persisted");
            Ok(entity)
        } else {
            warn!("entity not persisted");
            Err(HttpError::BadRequest("Entity not persisted".into()))
        }
    }

    #[tracing::instrument(name = "read", skip_all, fields(table = T::table_name()))]
    pub async fn read(&self, id: Option<T::Id>) -> Result<T, HttpError> {
        let Some(id) = id else {
            info!("obtain entity by id: no id given");
            return Err(HttpError::BadRequest("Entity id not present".into()));
        };
        info!(id = %id.to_string(), "obtain entity by id");

        match self
            .repository
            .find_by_id(&id)
            .await
            .map_err(persistence_failure)?
        {
            Some(entity) => {
                debug!(entity = ?entity, "entity found");
                Ok(entity)
            }
            None => Err(HttpError::BadRequest(format!(
                "Entity {} not found",
                id.to_string()
            ))),
        }
    }

    #[tracing::instrument(name = "update", skip_all, fields(table = T::table_name()))]
    pub async fn update(&self, entity: Option<T>, id: T::Id) -> Result<T, HttpError> {
        let id = id.to_string();
        info!(entity = ?entity, id = %id, "update entity");
        let Some(entity) = entity else {
            return Err(HttpError::BadRequest("Entity not present".into()));
        };
        warn_on_id_mismatch(&entity, &id);

        self.repository
            .persist(&entity)
            .await
            .map_err(persistence_failure)?;
        Ok(entity)
    }

    #[tracing::instrument(name = "delete", skip_all, fields(table = T::table_name()))]
    pub async fn delete(&self, entity: Option<T>, id: T::Id) -> Result<T, HttpError> {
        let id = id.to_string();
        info!(entity = ?entity, id = %id, "delete entity");
        let Some(entity) = entity else {
            return Err(HttpError::BadRequest("Entity not present".into()));
        };
        warn_on_id_mismatch(&entity, &id);

        let removed = self
            .repository
            .delete(&entity)
            .await
            .map_err(persistence_failure)?;
        debug!(removed, "entity deleted");
        Ok(entity)
    }
}

/// The path id never reaches the repository; only flag the disagreement.
fn warn_on_id_mismatch<T: Entity>(entity: &T, path_id: &str) {
    let entity_id = entity.id().to_string();
    if entity_id != path_id {
        warn!(
            entity_id = %entity_id,
            path_id = %path_id,
            "path id differs from entity id, acting on entity id"
        );
    }
}
