//! Statement rendering against a small fixture family: a keyed row type, a
//! keyless one, the dynamic placeholder, and a metadata-heavy catalog row.

use minorm::{
    Column, DataType, DbError, DynamicRow, MySqlDialect, Query, RowValues, SqlMaker, TableRow,
    TableSchema, Value,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use time::macros::datetime;

struct Name {
    id: i64,
    firstname: String,
    lastname: String,
}

impl Name {
    fn john() -> Self {
        Self {
            id: 7,
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
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

struct Reading {
    sensor: String,
    level: f64,
}

impl RowValues for Reading {
    fn get(&self, column: &str) -> Value {
        match column {
            "sensor" => self.sensor.as_str().into(),
            "level" => self.level.into(),
            _ => Value::Null,
        }
    }
}

impl TableRow for Reading {
    fn schema() -> TableSchema {
        TableSchema::new()
            .column(Column::new("sensor", DataType::Text))
            .column(Column::new("level", DataType::Double))
    }
}

struct Product {
    id: i64,
    name: String,
    price: Decimal,
    stocked_at: OffsetDateTime,
    checksum: String,
}

impl RowValues for Product {
    fn get(&self, column: &str) -> Value {
        match column {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "price" => self.price.into(),
            "stocked_at" => self.stocked_at.into(),
            "checksum" => self.checksum.as_str().into(),
            _ => Value::Null,
        }
    }
}

impl TableRow for Product {
    fn schema() -> TableSchema {
        TableSchema::new()
            .column(Column::new("id", DataType::BigInt).primary_key().generated())
            .column(Column::new("name", DataType::Text).length(40).unique().not_null())
            .column(Column::new("price", DataType::Decimal).precision(12).scale(3))
            .column(Column::new("stocked_at", DataType::Timestamp))
            .column(Column::new("attrs", DataType::Text).definition("attrs json not null"))
            .column(Column::new("checksum", DataType::Text).transient())
    }
}

fn sample_product() -> Product {
    Product {
        id: 3,
        name: "anvil".to_string(),
        price: Decimal::new(19999, 2),
        stocked_at: datetime!(2026-03-01 08:00 UTC),
        checksum: "ffcc".to_string(),
    }
}

#[test]
fn insert_excludes_generated_key() {
    let maker = SqlMaker::new();
    let sql = maker.insert_sql::<Name>(&Query::new()).unwrap();
    assert_eq!(sql, "insert into names (firstname,lastname) values (?,?)");
    assert_eq!(
        maker.insert_args(&Name::john()),
        vec![Value::Text("John".into()), Value::Text("Doe".into())]
    );
}

#[test]
fn update_places_key_values_last() {
    let maker = SqlMaker::new();
    let sql = maker.update_sql::<Name>(&Query::new()).unwrap();
    assert_eq!(sql, "update names set firstname=?,lastname=? where id=?");
    assert_eq!(
        maker.update_args(&Name::john()).unwrap(),
        vec![
            Value::Text("John".into()),
            Value::Text("Doe".into()),
            Value::BigInt(7)
        ]
    );
}

#[test]
fn delete_keys_on_primary_key() {
    let maker = SqlMaker::new();
    let sql = maker.delete_sql::<Name>(&Query::new()).unwrap();
    assert_eq!(sql, "delete from names where id=?");
    assert_eq!(maker.delete_args(&Name::john()).unwrap(), vec![Value::BigInt(7)]);
}

#[test]
fn select_appends_opaque_clauses() {
    let maker = SqlMaker::new();
    let sql = maker
        .select_sql::<Name>(&Query::new().where_clause("firstname=?"))
        .unwrap();
    assert_eq!(sql, "select id,firstname,lastname from names where firstname=?");

    let sql = maker
        .select_sql::<Name>(&Query::new().where_clause("firstname=?").order_by("lastname"))
        .unwrap();
    assert_eq!(
        sql,
        "select id,firstname,lastname from names where firstname=? order by lastname"
    );
}

#[test]
fn select_count_with_and_without_filter() {
    let maker = SqlMaker::new();
    assert_eq!(
        maker.select_count_sql::<Name>(&Query::new()).unwrap(),
        "select count(*) from names"
    );
    assert_eq!(
        maker
            .select_count_sql::<Name>(&Query::new().where_clause("lastname=?"))
            .unwrap(),
        "select count(*) from names where lastname=?"
    );
}

#[test]
fn table_override_wins_everywhere() {
    let maker = SqlMaker::new();
    let query = Query::new().table("legacy_names");
    assert_eq!(
        maker.insert_sql::<Name>(&query).unwrap(),
        "insert into legacy_names (firstname,lastname) values (?,?)"
    );
    assert_eq!(
        maker.update_sql::<Name>(&query).unwrap(),
        "update legacy_names set firstname=?,lastname=? where id=?"
    );
    assert_eq!(
        maker.delete_sql::<Name>(&query).unwrap(),
        "delete from legacy_names where id=?"
    );
    assert_eq!(
        maker.select_sql::<Name>(&query).unwrap(),
        "select id,firstname,lastname from legacy_names"
    );
}

#[test]
fn create_table_for_simple_type() {
    let maker = SqlMaker::new();
    assert_eq!(
        maker.create_table_sql::<Name>().unwrap(),
        "create table names (id bigint auto_increment, firstname varchar(255), \
         lastname varchar(255), primary key (id))"
    );
}

#[test]
fn create_table_honors_metadata_and_definitions() {
    let maker = SqlMaker::new();
    let sql = maker.create_table_sql::<Product>().unwrap();
    assert_eq!(
        sql,
        "create table products (id bigint auto_increment, name varchar(40) unique not null, \
         price decimal(12,3), stocked_at datetime, attrs json not null, primary key (id))"
    );
    assert!(sql.ends_with(')'));
}

#[test]
fn create_table_without_keys_has_no_key_clause() {
    let maker = SqlMaker::new();
    let sql = maker.create_table_sql::<Reading>().unwrap();
    assert_eq!(
        sql,
        "create table readings (sensor varchar(255), level double)"
    );
    assert!(!sql.contains("primary key"));
}

#[test]
fn transient_columns_never_reach_sql_or_args() {
    let maker = SqlMaker::new();
    let product = sample_product();

    let insert = maker.insert_sql::<Product>(&Query::new()).unwrap();
    assert!(!insert.contains("checksum"));
    assert_eq!(maker.insert_args(&product).len(), insert.matches('?').count());

    let update = maker.update_sql::<Product>(&Query::new()).unwrap();
    assert!(!update.contains("checksum"));

    let select = maker.select_sql::<Product>(&Query::new()).unwrap();
    assert!(!select.contains("checksum"));
}

#[test]
fn keyless_type_cannot_update_or_delete() {
    let maker = SqlMaker::new();
    let row = Reading {
        sensor: "s1".to_string(),
        level: 0.5,
    };
    assert!(matches!(
        maker.update_sql::<Reading>(&Query::new()),
        Err(DbError::MissingPrimaryKey(_))
    ));
    assert!(matches!(
        maker.update_args(&row),
        Err(DbError::MissingPrimaryKey(_))
    ));
    assert!(matches!(
        maker.delete_sql::<Reading>(&Query::new()),
        Err(DbError::MissingPrimaryKey(_))
    ));
    assert!(matches!(
        maker.delete_args(&row),
        Err(DbError::MissingPrimaryKey(_))
    ));
}

#[test]
fn keyless_insert_still_works() {
    let maker = SqlMaker::new();
    let row = Reading {
        sensor: "s1".to_string(),
        level: 0.5,
    };
    let sql = maker.insert_sql::<Reading>(&Query::new()).unwrap();
    assert_eq!(sql, "insert into readings (sensor,level) values (?,?)");
    assert_eq!(
        maker.insert_args(&row),
        vec![Value::Text("s1".into()), Value::Double(0.5)]
    );
}

#[test]
fn dynamic_row_selects_wildcard_under_override() {
    let maker = SqlMaker::new();
    assert_eq!(
        maker
            .select_sql::<DynamicRow>(&Query::new().table("events").where_clause("kind=?"))
            .unwrap(),
        "select * from events where kind=?"
    );
    assert_eq!(
        maker
            .select_count_sql::<DynamicRow>(&Query::new().table("events"))
            .unwrap(),
        "select count(*) from events"
    );
}

#[test]
fn dynamic_row_without_override_has_no_table() {
    let maker = SqlMaker::new();
    assert_eq!(
        maker.select_sql::<DynamicRow>(&Query::new()),
        Err(DbError::MissingTableName)
    );
    assert_eq!(
        maker.select_count_sql::<DynamicRow>(&Query::new()),
        Err(DbError::MissingTableName)
    );
    assert_eq!(
        maker.insert_sql::<DynamicRow>(&Query::new()),
        Err(DbError::MissingTableName)
    );
    assert_eq!(
        maker.create_table_sql::<DynamicRow>(),
        Err(DbError::MissingTableName)
    );
}

#[test]
fn placeholder_count_matches_arg_count() {
    let maker = SqlMaker::new();
    let name = Name::john();
    let product = sample_product();
    let query = Query::new();

    let cases = vec![
        (
            maker.insert_sql::<Name>(&query).unwrap(),
            maker.insert_args(&name),
        ),
        (
            maker.update_sql::<Name>(&query).unwrap(),
            maker.update_args(&name).unwrap(),
        ),
        (
            maker.delete_sql::<Name>(&query).unwrap(),
            maker.delete_args(&name).unwrap(),
        ),
        (
            maker.insert_sql::<Product>(&query).unwrap(),
            maker.insert_args(&product),
        ),
        (
            maker.update_sql::<Product>(&query).unwrap(),
            maker.update_args(&product).unwrap(),
        ),
        (
            maker.delete_sql::<Product>(&query).unwrap(),
            maker.delete_args(&product).unwrap(),
        ),
    ];
    for (sql, args) in cases {
        assert_eq!(sql.matches('?').count(), args.len(), "mismatch for `{sql}`");
    }
}

#[test]
fn base_dialect_rejects_upsert() {
    let maker = SqlMaker::new();
    assert!(matches!(
        maker.upsert_sql::<Name>(&Query::new()),
        Err(DbError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        maker.upsert_args(&Name::john()),
        Err(DbError::UnsupportedOperation(_))
    ));
}

#[test]
fn mysql_dialect_renders_upsert() {
    let maker = SqlMaker::with_dialect(MySqlDialect);
    let sql = maker.upsert_sql::<Name>(&Query::new()).unwrap();
    assert_eq!(
        sql,
        "insert into names (firstname,lastname) values (?,?) \
         on duplicate key update firstname=values(firstname),lastname=values(lastname)"
    );
    let args = maker.upsert_args(&Name::john()).unwrap();
    assert_eq!(args, maker.insert_args(&Name::john()));
    assert_eq!(sql.matches('?').count(), args.len());
}

struct Membership {
    org: i64,
    user: i64,
}

impl RowValues for Membership {
    fn get(&self, column: &str) -> Value {
        match column {
            "org" => self.org.into(),
            "user" => self.user.into(),
            _ => Value::Null,
        }
    }
}

impl TableRow for Membership {
    fn schema() -> TableSchema {
        TableSchema::new()
            .column(Column::new("org", DataType::BigInt).primary_key())
            .column(Column::new("user", DataType::BigInt).primary_key())
    }
}

#[test]
fn mysql_upsert_needs_an_updatable_column() {
    let maker = SqlMaker::with_dialect(MySqlDialect);
    assert!(matches!(
        maker.upsert_sql::<Membership>(&Query::new()),
        Err(DbError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        maker.update_sql::<Membership>(&Query::new()),
        Err(DbError::UnsupportedOperation(_))
    ));
    // the composite key still drives update and delete normally
    let row = Membership { org: 1, user: 2 };
    assert_eq!(
        maker.delete_sql::<Membership>(&Query::new()).unwrap(),
        "delete from memberships where org=? and user=?"
    );
    assert_eq!(
        maker.delete_args(&row).unwrap(),
        vec![Value::BigInt(1), Value::BigInt(2)]
    );
}

#[test]
fn mysql_base_templates_match_ansi() {
    let ansi = SqlMaker::new();
    let mysql = SqlMaker::with_dialect(MySqlDialect);
    let query = Query::new();
    assert_eq!(
        ansi.insert_sql::<Name>(&query).unwrap(),
        mysql.insert_sql::<Name>(&query).unwrap()
    );
    assert_eq!(
        ansi.update_sql::<Name>(&query).unwrap(),
        mysql.update_sql::<Name>(&query).unwrap()
    );
    assert_eq!(
        ansi.create_table_sql::<Name>().unwrap(),
        mysql.create_table_sql::<Name>().unwrap()
    );
}
