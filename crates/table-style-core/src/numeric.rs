//! Numeric value classification.
//!
//! Table renderers right-align numbers. Cells arrive either as concrete Rust
//! values (checked at compile time through [`Numeric`]) or as loosely typed
//! [`CellValue`]s (checked by variant).

use serde::{Deserialize, Serialize};

/// Marker trait for the primitive numeric types.
///
/// Implemented for every signed and unsigned integer width and for both
/// floating point widths. Sealed so the set stays closed.
pub trait Numeric: sealed::Sealed + Copy {}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Numeric for $ty {}
        )*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A loosely typed table cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer
    I64(i64),
    /// 128-bit signed integer
    I128(i128),
    /// Pointer-sized signed integer
    Isize(isize),
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 128-bit unsigned integer
    U128(u128),
    /// Pointer-sized unsigned integer
    Usize(usize),
    /// 32-bit float
    F32(f32),
    /// 64-bit float
    F64(f64),
    /// Text
    Text(String),
}

impl CellValue {
    /// Check if the value holds one of the numeric variants.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::I8(_)
                | CellValue::I16(_)
                | CellValue::I32(_)
                | CellValue::I64(_)
                | CellValue::I128(_)
                | CellValue::Isize(_)
                | CellValue::U8(_)
                | CellValue::U16(_)
                | CellValue::U32(_)
                | CellValue::U64(_)
                | CellValue::U128(_)
                | CellValue::Usize(_)
                | CellValue::F32(_)
                | CellValue::F64(_)
        )
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    CellValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => Text,
);

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<()> for CellValue {
    fn from(_: ()) -> Self {
        CellValue::Null
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

/// Check if a value is of a numeric kind.
///
/// Absent values, text, and booleans are not numeric.
///
/// ```
/// use table_style_core::is_numeric_value;
///
/// assert!(is_numeric_value(1u8));
/// assert!(is_numeric_value(1.0f32));
/// assert!(!is_numeric_value("1"));
/// assert!(!is_numeric_value(None::<i32>));
/// ```
pub fn is_numeric_value<V: Into<CellValue>>(value: V) -> bool {
    value.into().is_numeric()
}
