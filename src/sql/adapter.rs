//! Dialect capability descriptions.
//!
//! An [`Adapter`] tells the compiler how a database renders the handful of
//! things dialects disagree on: case-insensitive comparison, native ILIKE,
//! LIKE escape clauses and pagination. Everything else is standard SQL.

/// Dialect capabilities consumed by the compiler.
pub trait Adapter: std::fmt::Debug + Send + Sync {
    /// Wrap a SQL fragment so it compares case-insensitively.
    fn ignore_case(&self, sql: &str) -> String {
        format!("UPPER({})", sql)
    }

    /// True when the dialect has a native case-insensitive LIKE operator.
    fn use_ilike(&self) -> bool {
        false
    }

    /// True when LIKE patterns containing escapes need an explicit
    /// `ESCAPE '\'` clause.
    fn use_escape_clause_for_like(&self) -> bool {
        false
    }

    /// Render the pagination suffix, leading space included.
    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut sql = String::new();
        if let Some(n) = limit {
            sql.push_str(&format!(" LIMIT {}", n));
        }
        if let Some(n) = offset {
            sql.push_str(&format!(" OFFSET {}", n));
        }
        sql
    }
}

/// PostgreSQL: native ILIKE.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Adapter for Postgres {
    fn use_ilike(&self) -> bool {
        true
    }
}

/// MySQL / MariaDB.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Adapter for MySql {}

/// SQLite. OFFSET is only valid after a LIMIT, so a bare offset gets the
/// `LIMIT -1` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Adapter for Sqlite {
    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut sql = String::new();
        match (limit, offset) {
            (Some(l), _) => sql.push_str(&format!(" LIMIT {}", l)),
            (None, Some(_)) => sql.push_str(" LIMIT -1"),
            (None, None) => {}
        }
        if let Some(n) = offset {
            sql.push_str(&format!(" OFFSET {}", n));
        }
        sql
    }
}

/// Apache Derby: explicit ESCAPE clause for LIKE, standard OFFSET/FETCH
/// pagination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Derby;

impl Adapter for Derby {
    fn use_escape_clause_for_like(&self) -> bool {
        true
    }

    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut sql = String::new();
        if let Some(n) = offset {
            sql.push_str(&format!(" OFFSET {} ROWS", n));
        }
        if let Some(n) = limit {
            sql.push_str(&format!(" FETCH NEXT {} ROWS ONLY", n));
        }
        sql
    }
}

/// Resolve an adapter from a database name, for criteria carrying one.
pub fn for_name(name: &str) -> Option<Box<dyn Adapter>> {
    match name.to_ascii_lowercase().as_str() {
        "postgres" | "postgresql" => Some(Box::new(Postgres)),
        "mysql" | "mariadb" => Some(Box::new(MySql)),
        "sqlite" => Some(Box::new(Sqlite)),
        "derby" => Some(Box::new(Derby)),
        _ => None,
    }
}
