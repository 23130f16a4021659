use sea_orm::DatabaseBackend;
use serde::Serialize;
use std::fmt;

/// A pre-escaped SQL fragment inserted into the query verbatim.
///
/// Built by [`literal`]; the query builder does not escape it again, so the
/// content must never come from anywhere but the escaping routine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Literal(String);

impl Literal {
    #[must_use]
    pub fn as_sql(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape `raw` for interpolation inside a quoted SQL string literal.
///
/// The result carries no surrounding quotes. `MySQL` uses backslash escapes
/// for `\0 \b \t \n \r \x1a \\ ' "`; `PostgreSQL` and `SQLite` double single
/// quotes instead (`PostgreSQL` also rewrites NUL as `\0`).
#[must_use]
pub fn escape(raw: &str, backend: DatabaseBackend) -> String {
    match backend {
        DatabaseBackend::Postgres => raw.replace('\'', "''").replace('\0', "\\0"),
        DatabaseBackend::Sqlite => raw.replace('\'', "''"),
        _ => escape_backslash(raw),
    }
}

fn escape_backslash(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\u{1a}' => out.push_str("\\Z"),
            '\\' | '\'' | '"' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape `raw` and wrap it as a quoted prefix pattern: `'escaped%'`.
#[must_use]
pub fn literal(raw: &str, backend: DatabaseBackend) -> Literal {
    Literal(format!("'{}%'", escape(raw, backend)))
}
