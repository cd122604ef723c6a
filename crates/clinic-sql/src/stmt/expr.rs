use super::{ColumnRef, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// All operands must hold
    And(Vec<Expr>),

    /// `lhs = rhs`
    Eq(Box<Expr>, Box<Expr>),

    /// A column reference
    Column(ColumnRef),

    /// `expr LIKE pattern ESCAPE '\'`
    Like(Box<Expr>, Box<Expr>),

    /// `LOWER(expr)`
    Lower(Box<Expr>),

    /// At least one operand must hold
    Or(Vec<Expr>),

    /// A value, always bound as a parameter
    Value(Value),
}

impl Expr {
    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::Eq(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    pub fn like(expr: impl Into<Expr>, pattern: impl Into<Expr>) -> Expr {
        Expr::Like(Box::new(expr.into()), Box::new(pattern.into()))
    }

    pub fn lower(expr: impl Into<Expr>) -> Expr {
        Expr::Lower(Box::new(expr.into()))
    }

    /// Conjunction of `operands`; a single operand is returned as is.
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Expr {
        if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::And(operands)
        }
    }

    /// Disjunction of `operands`; a single operand is returned as is.
    pub fn or_from_vec(mut operands: Vec<Expr>) -> Expr {
        if operands.len() == 1 {
            operands.remove(0)
        } else {
            Expr::Or(operands)
        }
    }
}

impl From<ColumnRef> for Expr {
    fn from(value: ColumnRef) -> Self {
        Expr::Column(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}
