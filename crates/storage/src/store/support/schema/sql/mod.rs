#![forbid(unsafe_code)]

mod core;
mod indexes;
mod trips;

pub(super) fn full_schema_sql() -> String {
    let mut sql = String::new();
    sql.push_str(core::SQL);
    sql.push_str(trips::SQL);
    sql.push_str(indexes::SQL);
    sql
}
