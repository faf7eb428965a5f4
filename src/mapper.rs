use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use tokio_postgres::Row;
use tokio_postgres::types::Type;

/// One result row shaped as a JSON object keyed by column label.
pub type Record = Map<String, Value>;

/// Shapes a tabular result into records, preserving row order. An empty row
/// set yields an empty iterator.
pub fn map_rows(rows: &[Row]) -> impl Iterator<Item = Record> + '_ {
    rows.iter().map(map_row)
}

pub fn map_row(row: &Row) -> Record {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, col)| (col.name().to_owned(), cell_value(row, idx)))
        .collect()
}

/// Converts one cell by its declared column type. No coercion beyond what the
/// driver already returns; NULLs and unrecognized types become JSON null.
fn cell_value(row: &Row, idx: usize) -> Value {
    let ty = row.columns()[idx].type_();
    if *ty == Type::INT2 {
        row.get::<_, Option<i16>>(idx).map_or(Value::Null, Value::from)
    } else if *ty == Type::INT4 {
        row.get::<_, Option<i32>>(idx).map_or(Value::Null, Value::from)
    } else if *ty == Type::INT8 {
        row.get::<_, Option<i64>>(idx).map_or(Value::Null, Value::from)
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR {
        row.get::<_, Option<String>>(idx)
            .map_or(Value::Null, Value::from)
    } else if *ty == Type::BOOL {
        row.get::<_, Option<bool>>(idx).map_or(Value::Null, Value::from)
    } else if *ty == Type::TIMESTAMP {
        row.get::<_, Option<NaiveDateTime>>(idx)
            .map_or(Value::Null, |t| Value::from(t.to_string()))
    } else {
        Value::Null
    }
}
