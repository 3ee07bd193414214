pub mod entity;
pub mod error;
pub mod repository;
pub mod sql;

pub use entity::Entity;
pub use error::DataError;
pub use repository::Repository;
pub use sql::{Dialect, SqlError, Statements};

pub mod prelude {
    //! Re-exports of the most commonly used data types.
    pub use crate::{DataError, Entity, Repository};
}
