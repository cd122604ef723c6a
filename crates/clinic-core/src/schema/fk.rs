/// A declared reference from a column of one table to a column of another.
///
/// `from_column` in the source table holds values equal to `to_column` in
/// `to_table`. Each edge has exactly one source column; composite foreign
/// keys are reported as one edge per column pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignKey {
    /// The column on the source table acting as the foreign key
    pub from_column: String,

    /// The referenced table
    pub to_table: String,

    /// The referenced column, usually the target's primary key
    pub to_column: String,
}

impl ForeignKey {
    pub fn new(
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        Self {
            from_column: from_column.into(),
            to_table: to_table.into(),
            to_column: to_column.into(),
        }
    }
}
