use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}
