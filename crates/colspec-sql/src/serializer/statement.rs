use super::{Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, "CREATE TABLE IF NOT EXISTS ", name, " (");

        let mut s = "\n    ";
        for column in &self.columns {
            fmt!(f, s, column);
            s = ",\n    ";
        }

        if let Some(primary_key) = &self.primary_key {
            let primary_key = Ident(primary_key);
            fmt!(f, s, "PRIMARY KEY (", primary_key, ")");
        }

        fmt!(f, "\n)");
    }
}
