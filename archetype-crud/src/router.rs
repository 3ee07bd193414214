use std::fmt::Debug;
use std::sync::Arc;

use archetype_core::{HttpError, PathId, Payload};
use archetype_data::{Entity, Repository};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::archetype::CrudArchetype;

type Shared<T, R> = State<Arc<CrudArchetype<T, R>>>;

async fn create<T, R>(
    State(crud): Shared<T, R>,
    Payload(entity): Payload<T>,
) -> Result<Json<T>, HttpError>
where
    T: Entity + Debug + Serialize + DeserializeOwned,
    R: Repository<T, T::Id> + 'static,
{
    crud.create(entity).await.map(Json)
}

async fn read<T, R>(
    State(crud): Shared<T, R>,
    Payload(id): Payload<T::Id>,
) -> Result<Json<T>, HttpError>
where
    T: Entity + Debug + Serialize,
    T::Id: DeserializeOwned,
    R: Repository<T, T::Id> + 'static,
{
    crud.read(id).await.map(Json)
}

async fn read_by_path<T, R>(
    State(crud): Shared<T, R>,
    PathId(id): PathId<T::Id>,
) -> Result<Json<T>, HttpError>
where
    T: Entity + Debug + Serialize,
    T::Id: DeserializeOwned,
    R: Repository<T, T::Id> + 'static,
{
    crud.read(Some(id)).await.map(Json)
}

async fn update<T, R>(
    State(crud): Shared<T, R>,
    PathId(id): PathId<T::Id>,
    Payload(entity): Payload<T>,
) -> Result<Json<T>, HttpError>
where
    T: Entity + Debug + Serialize + DeserializeOwned,
    T::Id: DeserializeOwned,
    R: Repository<T, T::Id> + 'static,
{
    crud.update(entity, id).await.map(Json)
}

async fn delete<T, R>(
    State(crud): Shared<T, R>,
    PathId(id): PathId<T::Id>,
    Payload(entity): Payload<T>,
) -> Result<Json<T>, HttpError>
where
    T: Entity + Debug + Serialize + DeserializeOwned,
    T::Id: DeserializeOwned,
    R: Repository<T, T::Id> + 'static,
{
    crud.delete(entity, id).await.map(Json)
}

impl<T, R> CrudArchetype<T, R>
where
    T: Entity + Debug + Serialize + DeserializeOwned,
    T::Id: DeserializeOwned,
    R: Repository<T, T::Id> + 'static,
{
    /// Routes, relative to wherever the router is mounted:
    ///
    /// | Method | Path | Operation | Body |
    /// |--------|------|-----------|------|
    /// | `POST` | `/` | create | entity |
    /// | `GET` | `/` | read | id |
    /// | `GET` | `/{id}` | read | none |
    /// | `PUT` | `/{id}` | update | entity |
    /// | `DELETE` | `/{id}` | delete | entity |
    ///
    /// The router carries no middleware; wrap it with
    /// `archetype_core::layers::standard` to get correlation ids and tracing.
    pub fn router(self) -> Router {
        Router::new()
            .route("/", post(create::<T, R>).get(read::<T, R>))
            .route(
                "/{id}",
                get(read_by_path::<T, R>)
                    .put(update::<T, R>)
                    .delete(delete::<T, R>),
            )
            .with_state(Arc::new(self))
    }

    /// [`router`](Self::router) nested under `base_path`.
    ///
    /// `""` and `"/"` mount at the root; a missing leading slash is added and
    /// trailing slashes are dropped.
    pub fn mount(self, base_path: &str) -> Router {
        let trimmed = base_path.trim_matches('/');
        if trimmed.is_empty() {
            self.router()
        } else {
            Router::new().nest(&format!("/{trimmed}"), self.router())
        }
    }
}
