use crate::stmt::{Expr, Select, Value};

/// Narrows `select` to rows where any selected expression contains `text`,
/// ignoring case.
///
/// Foreign-key columns are matched on their label since the predicate runs
/// over the selected expressions. The text is bound as a parameter with the
/// `LIKE` wildcards escaped. Empty text leaves the select unchanged.
pub fn search(mut select: Select, text: &str) -> Select {
    if text.is_empty() {
        return select;
    }

    let pattern = Value::from(format!("%{}%", escape_like(&text.to_lowercase())));

    let predicates: Vec<_> = select
        .returning
        .columns()
        .iter()
        .map(|column| Expr::like(Expr::lower(column.clone()), pattern.clone()))
        .collect();

    if !predicates.is_empty() {
        select.and_filter(Expr::or_from_vec(predicates));
    }

    select
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
