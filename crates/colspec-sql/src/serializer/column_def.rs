use super::{Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);

        fmt!(f, name, " ", &self.ty);

        if !self.nullable {
            fmt!(f, " NOT NULL");
        }

        if self.auto_increment {
            fmt!(f, " AUTO_INCREMENT");
        }
    }
}
