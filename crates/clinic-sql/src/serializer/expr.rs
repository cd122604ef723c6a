use super::{Delimited, Params, ToSql};

use crate::stmt::Expr;

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use Expr::*;

        match self {
            And(operands) => {
                fmt!(f, Delimited(operands.iter().map(Operand), " AND "));
            }
            Eq(lhs, rhs) => {
                let lhs: &Expr = lhs;
                let rhs: &Expr = rhs;
                fmt!(f, lhs " = " rhs);
            }
            Column(column) => {
                fmt!(f, column);
            }
            Like(expr, pattern) => {
                let expr: &Expr = expr;
                let pattern: &Expr = pattern;
                fmt!(f, expr " LIKE " pattern " ESCAPE '\\'");
            }
            Lower(expr) => {
                let expr: &Expr = expr;
                fmt!(f, "LOWER(" expr ")");
            }
            Or(operands) => {
                fmt!(f, Delimited(operands.iter().map(Operand), " OR "));
            }
            Value(value) => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
        }
    }
}

/// Operand of `AND` / `OR`; nested boolean lists are parenthesized.
struct Operand<'a>(&'a Expr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self.0 {
            Expr::And(_) | Expr::Or(_) => fmt!(f, "(" self.0 ")"),
            expr => fmt!(f, expr),
        }
    }
}
