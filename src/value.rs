//! Database Value Types
//!
//! This module provides the [`Value`] enum, the element type of every
//! positional argument array produced by the statement makers. A `Value`
//! carries one column's worth of data in a driver-ready form and binds
//! directly into sqlx MySQL statements.
//!
//! ## Features
//!
//! - **Null Support**: `Value::Null` binds as SQL NULL
//! - **Automatic Conversion**: `From` implementations for the common Rust types
//! - **SQLx Integration**: implements `Encode`/`Type` so a `Vec<Value>` can be
//!   bound in order against the `?` placeholders of a generated statement

use rust_decimal::Decimal;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::mysql::MySqlTypeInfo;
use sqlx::{Database, Encode, MySql, Type};
use std::fmt::{self, Display};
use time::OffsetDateTime;
use uuid::Uuid;

/// One column value, ready to bind against a `?` placeholder.
///
/// The variants cover the semantic data types a column can declare, plus the
/// odds and ends a row accessor may want to hand back (`Bool`, `Uuid`). The
/// maker never inspects the payload; ordering, not content, is its contract.
///
/// # Examples
///
/// ```
/// use minorm::Value;
///
/// let v: Value = 42i64.into();
/// assert_eq!(v, Value::BigInt(42));
///
/// let v: Value = "hello".into();
/// assert_eq!(v, Value::Text("hello".to_string()));
///
/// let v: Value = Option::<i32>::None.into();
/// assert_eq!(v, Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    BigInt(i64),
    /// Single-precision float.
    Float(f32),
    /// Double-precision float.
    Double(f64),
    /// Arbitrary-precision decimal.
    Decimal(Decimal),
    /// Point in time, bound as a datetime.
    Timestamp(OffsetDateTime),
    /// UUID value.
    Uuid(Uuid),
    /// Text value.
    Text(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl<'q> Encode<'q, MySql> for Value {
    fn encode_by_ref(
        &self,
        buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::Int(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::BigInt(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::Float(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::Double(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::Decimal(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::Timestamp(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::Uuid(v) => Encode::<MySql>::encode_by_ref(v, buf),
            Value::Text(v) => Encode::<MySql>::encode_by_ref(v, buf),
        }
    }

    fn produces(&self) -> Option<MySqlTypeInfo> {
        Some(match self {
            Value::Null | Value::Text(_) => <str as Type<MySql>>::type_info(),
            Value::Bool(_) => <bool as Type<MySql>>::type_info(),
            Value::Int(_) => <i32 as Type<MySql>>::type_info(),
            Value::BigInt(_) => <i64 as Type<MySql>>::type_info(),
            Value::Float(_) => <f32 as Type<MySql>>::type_info(),
            Value::Double(_) => <f64 as Type<MySql>>::type_info(),
            Value::Decimal(_) => <Decimal as Type<MySql>>::type_info(),
            Value::Timestamp(_) => <OffsetDateTime as Type<MySql>>::type_info(),
            Value::Uuid(_) => <Uuid as Type<MySql>>::type_info(),
        })
    }
}

impl Type<MySql> for Value {
    fn type_info() -> MySqlTypeInfo {
        <str as Type<MySql>>::type_info()
    }

    fn compatible(_ty: &MySqlTypeInfo) -> bool {
        true
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(v: OffsetDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
