use crate::core::{ExecutorError, Value};

/// A parameterized statement known to the executor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTemplate {
    pub name: &'static str,
    pub sql: &'static str,
    pub param_count: usize,
}

/// The only statement this crate issues: a full-row positional insert
pub const INSERT_TYPETEST: StatementTemplate = StatementTemplate {
    name: "typetest.insert",
    sql: "INSERT INTO typetest VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?);",
    param_count: 10,
};

impl StatementTemplate {
    /// Checks that the SQL carries exactly `param_count` placeholders
    pub fn validate(&self) -> Result<(), ExecutorError> {
        let placeholders = count_placeholders(self.sql);
        if placeholders != self.param_count {
            return Err(ExecutorError::MalformedStatement {
                name: self.name.to_string(),
                placeholders,
                param_count: self.param_count,
            });
        }
        Ok(())
    }

    /// Render the statement with `params` in place of its placeholders
    #[must_use]
    pub fn render(&self, params: &[Value]) -> String {
        substitute_parameters(self.sql, params)
    }
}

/// Substitute positional `?` placeholders with SQL literals.
///
/// Placeholders inside quoted string literals are left alone. Surplus
/// placeholders (more `?` than params) are kept as-is.
#[must_use]
pub fn substitute_parameters(sql: &str, params: &[Value]) -> String {
    let mut result = String::with_capacity(sql.len());
    let mut params = params.iter();
    let mut in_string = false;

    for ch in sql.chars() {
        match ch {
            '\'' => {
                in_string = !in_string;
                result.push(ch);
            }
            '?' if !in_string => match params.next() {
                Some(value) => result.push_str(&value.to_sql_literal()),
                None => result.push(ch),
            },
            _ => result.push(ch),
        }
    }

    result
}

/// Number of positional placeholders in `sql`
#[must_use]
pub fn count_placeholders(sql: &str) -> usize {
    let mut in_string = false;
    sql.chars()
        .filter(|&ch| {
            if ch == '\'' {
                in_string = !in_string;
            }
            ch == '?' && !in_string
        })
        .count()
}
