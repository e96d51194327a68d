//! Walkthrough of every statement the maker renders for a small row type.
//!
//! Run with `cargo run --example sample`. Nothing here touches a database;
//! the printed SQL and argument arrays are what a caller would hand to its
//! executor.

use anyhow::Result;
use minorm::{
    Column, DataType, DynamicRow, MySqlDialect, Query, RowValues, SqlMaker, TableRow, TableSchema,
    Value,
};

struct Name {
    id: i64,
    firstname: String,
    lastname: String,
}

impl Name {
    fn new(firstname: &str, lastname: &str) -> Self {
        Self {
            id: 0,
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        }
    }
}

impl RowValues for Name {
    fn get(&self, column: &str) -> Value {
        match column {
            "id" => self.id.into(),
            "firstname" => self.firstname.as_str().into(),
            "lastname" => self.lastname.as_str().into(),
            _ => Value::Null,
        }
    }

    fn set(&mut self, column: &str, value: Value) {
        if column == "id" {
            if let Value::BigInt(id) = value {
                self.id = id;
            }
        }
    }
}

impl TableRow for Name {
    fn schema() -> TableSchema {
        TableSchema::named("names")
            .column(Column::new("id", DataType::BigInt).primary_key().generated())
            .column(Column::new("firstname", DataType::Text))
            .column(Column::new("lastname", DataType::Text))
    }
}

fn main() -> Result<()> {
    // pick the dialect to match your sql flavor
    let maker = SqlMaker::with_dialect(MySqlDialect);
    let query = Query::new();

    println!("{}", maker.create_table_sql::<Name>()?);

    let mut john = Name::new("John", "Doe");
    println!(
        "{}  <- {:?}",
        maker.insert_sql::<Name>(&query)?,
        maker.insert_args(&john)
    );

    // an executor would write the generated key back after the insert
    john.set("id", Value::BigInt(1));

    println!(
        "{}",
        maker.select_sql::<Name>(&Query::new().where_clause("firstname=?"))?
    );
    println!(
        "{}",
        maker.select_sql::<Name>(&Query::new().order_by("lastname"))?
    );

    john.firstname = "Joe".to_string();
    println!(
        "{}  <- {:?}",
        maker.update_sql::<Name>(&query)?,
        maker.update_args(&john)?
    );

    println!(
        "{}  <- {:?}",
        maker.upsert_sql::<Name>(&query)?,
        maker.upsert_args(&john)?
    );

    println!(
        "{}  <- {:?}",
        maker.delete_sql::<Name>(&query)?,
        maker.delete_args(&john)?
    );

    // count through the untyped placeholder, table supplied per call
    println!(
        "{}",
        maker.select_count_sql::<DynamicRow>(&Query::new().table("names"))?
    );

    Ok(())
}
