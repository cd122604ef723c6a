use super::{Comma, Params, ToSql};

use crate::stmt::{Delete, Ident, Insert, Join, Returning, Select, Statement, Update, Value};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let returning = &self.returning;
        let source = &self.source;

        fmt!(f, "SELECT " returning " FROM " source);

        for join in &self.joins {
            fmt!(f, " " join);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &Returning {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Returning::Columns(columns) => fmt!(f, Comma(columns)),
            Returning::Count => fmt!(f, "COUNT(*)"),
        }
    }
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let target = &self.target;
        let source = &self.source;

        fmt!(f, "JOIN " table " ON " target " = " source);
    }
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let columns = Comma(&self.columns);
        let values = Comma(self.values.iter().map(Bound));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );
        let filter = &self.filter;

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " filter);
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let from = &self.from;
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " from " WHERE " filter);
    }
}

/// A value written as a parameter placeholder
struct Bound<'a>(&'a Value);

impl ToSql for Bound<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let placeholder = f.params.push(self.0);
        fmt!(f, placeholder);
    }
}

/// `column = ?N`
struct Assignment<'a>(&'a Ident, &'a Value);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.0 " = " Bound(self.1));
    }
}
