//! SQL text for the four statements a repository needs, derived from
//! [`Entity`] metadata.
//!
//! ```ignore
//! let stmts = Statements::for_entity::<Person>(Dialect::Postgres)?;
//! assert_eq!(stmts.select_by_id, r#"SELECT "id", "name" FROM "persons" WHERE "id" = $1"#);
//! ```
//!
//! Identifiers are validated against a conservative pattern and always quoted,
//! so a bad `table_name()` fails at repository construction instead of at
//! the first query.

use crate::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// SQLite-style `?` placeholders, `ON CONFLICT` upserts.
    Sqlite,
    /// MySQL-style `?` placeholders with backtick quoting, `ON DUPLICATE KEY` upserts.
    MySql,
    /// Postgres-style `$1, $2, ...` placeholders, `ON CONFLICT` upserts.
    Postgres,
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Sqlite | Dialect::MySql => "?".to_string(),
        }
    }

    fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Sqlite | Dialect::Postgres => '"',
        }
    }

    fn quote(self, ident: &str) -> String {
        let quote = self.quote_char();
        ident
            .split('.')
            .map(|part| format!("{quote}{part}{quote}"))
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    InvalidIdentifier { kind: &'static str, ident: String },
    NoColumns { table: String },
    IdColumnNotListed { table: String, id_column: String },
}

impl std::fmt::Display for SqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlError::InvalidIdentifier { kind, ident } => {
                write!(f, "Invalid {kind} identifier: {ident}")
            }
            SqlError::NoColumns { table } => write!(f, "Entity table {table} declares no columns"),
            SqlError::IdColumnNotListed { table, id_column } => {
                write!(f, "Id column {id_column} is not among the columns of {table}")
            }
        }
    }
}

impl std::error::Error for SqlError {}

/// Pre-rendered statements for one entity type.
///
/// Bind order:
/// - `upsert`: every column, in `Entity::columns()` order
/// - `select_by_id`, `count_by_id`, `delete_by_id`: the id only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    pub upsert: String,
    pub select_by_id: String,
    pub count_by_id: String,
    pub delete_by_id: String,
}

impl Statements {
    pub fn for_entity<T: Entity>(dialect: Dialect) -> Result<Self, SqlError> {
        Self::new(T::table_name(), T::id_column(), T::columns(), dialect)
    }

    pub fn new(
        table: &str,
        id_column: &str,
        columns: &[&str],
        dialect: Dialect,
    ) -> Result<Self, SqlError> {
        check_identifier(table, "table")?;
        check_identifier(id_column, "column")?;
        for col in columns {
            check_identifier(col, "column")?;
        }
        if columns.is_empty() {
            return Err(SqlError::NoColumns {
                table: table.to_string(),
            });
        }
        if !columns.contains(&id_column) {
            return Err(SqlError::IdColumnNotListed {
                table: table.to_string(),
                id_column: id_column.to_string(),
            });
        }

        let q_table = dialect.quote(table);
        let q_id = dialect.quote(id_column);
        let q_columns: Vec<String> = columns.iter().map(|c| dialect.quote(c)).collect();
        let column_list = q_columns.join(", ");
        let id_filter = format!("{q_id} = {}", dialect.placeholder(1));

        Ok(Self {
            upsert: build_upsert(&q_table, &q_id, id_column, columns, &q_columns, dialect),
            select_by_id: format!("SELECT {column_list} FROM {q_table} WHERE {id_filter}"),
            count_by_id: format!("SELECT COUNT(*) FROM {q_table} WHERE {id_filter}"),
            delete_by_id: format!("DELETE FROM {q_table} WHERE {id_filter}"),
        })
    }
}

fn build_upsert(
    q_table: &str,
    q_id: &str,
    id_column: &str,
    columns: &[&str],
    q_columns: &[String],
    dialect: Dialect,
) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| dialect.placeholder(i)).collect();
    let insert = format!(
        "INSERT INTO {q_table} ({}) VALUES ({})",
        q_columns.join(", "),
        placeholders.join(", ")
    );

    let updated: Vec<&String> = columns
        .iter()
        .zip(q_columns)
        .filter(|(raw, _)| **raw != id_column)
        .map(|(_, quoted)| quoted)
        .collect();

    match dialect {
        Dialect::MySql => {
            let assignments = if updated.is_empty() {
                format!("{q_id} = {q_id}")
            } else {
                updated
                    .iter()
                    .map(|c| format!("{c} = VALUES({c})"))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            format!("{insert} ON DUPLICATE KEY UPDATE {assignments}")
        }
        Dialect::Sqlite | Dialect::Postgres => {
            if updated.is_empty() {
                format!("{insert} ON CONFLICT ({q_id}) DO NOTHING")
            } else {
                let assignments = updated
                    .iter()
                    .map(|c| format!("{c} = excluded.{c}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{insert} ON CONFLICT ({q_id}) DO UPDATE SET {assignments}")
            }
        }
    }
}

fn check_identifier(ident: &str, kind: &'static str) -> Result<(), SqlError> {
    if is_valid_identifier(ident) {
        Ok(())
    } else {
        Err(SqlError::InvalidIdentifier {
            kind,
            ident: ident.to_string(),
        })
    }
}

fn is_valid_identifier(ident: &str) -> bool {
    !ident.is_empty() && ident.split('.').all(is_valid_segment)
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
