//! Static schema registry: the [`Record`] trait and the table definition macro.
//!
//! Each table is declared once with [`xer_record!`]. The declaration yields the
//! typed record struct, its ordered field schema, its key and foreign-key
//! accessors, and the glue that routes decoding and encoding through the
//! generic routines in [`crate::xer::format::decode`].

use std::fmt::Debug;
use std::hash::Hash;

use super::error::Result;
use super::fields::FieldKind;
use super::tables::Table;
use crate::xer::format::decode::RawRecord;
use crate::xer::graph::XerData;
use crate::xer::store::RecordStore;

/// One column of a table schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A typed row of one XER table.
///
/// Implementations are generated by [`xer_record!`]; nothing here is written by hand.
pub trait Record: Sized + Clone + Debug + PartialEq + 'static {
    /// Primary key type: `i64` for most tables, a tuple for join tables.
    type Key: Eq + Hash + Clone + Debug;

    const TABLE: Table;

    /// Columns in wire order.
    const FIELDS: &'static [FieldDef];

    /// Integer columns indexed for reverse lookups.
    const REFERENCES: &'static [&'static str];

    /// Primary key, `None` when any key column is absent.
    fn key(&self) -> Option<Self::Key>;

    /// Value of an indexed foreign-key column.
    fn reference(&self, field: &str) -> Option<i64>;

    fn decode(raw: &RawRecord<'_>) -> Result<Self>;

    /// Encoded values in [`Record::FIELDS`] order; absent values are empty strings.
    fn encode(&self) -> Vec<String>;

    fn store(data: &XerData) -> &RecordStore<Self>;

    fn store_mut(data: &mut XerData) -> &mut RecordStore<Self>;
}

#[doc(hidden)]
#[macro_export]
macro_rules! record_key {
    (@type $k:ident) => { i64 };
    (@type $($k:ident),+) => { ($($crate::record_key!(@int $k),)+) };
    (@int $k:ident) => { i64 };
    (@value $rec:ident; $k:ident) => { $rec.$k };
    (@value $rec:ident; $($k:ident),+) => {
        match ($($rec.$k,)+) {
            ($(Some($k),)+) => Some(($($k,)+)),
            _ => None,
        }
    };
}

/// Declares a table record.
///
/// ```ignore
/// xer_record! {
///     /// Doc comment for the struct.
///     TaskPred => predecessors,
///     key(task_pred_id),
///     refs(task_id, pred_task_id)
///     {
///         task_pred_id: i64,
///         task_id: i64,
///         pred_task_id: i64,
///     }
/// }
/// ```
///
/// The struct name doubles as the [`Table`] variant; `=> store` names the
/// [`XerData`] field holding the records.
#[doc(hidden)]
#[macro_export]
macro_rules! xer_record {
    (
        $(#[$meta:meta])*
        $name:ident => $store:ident,
        key($($key:ident),+),
        refs($($reference:ident),*)
        {
            $($field:ident : $ty:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: Option<$ty>,)+
        }

        impl $crate::xer::types::schema::Record for $name {
            type Key = $crate::record_key!(@type $($key),+);

            const TABLE: $crate::xer::types::tables::Table =
                $crate::xer::types::tables::Table::$name;

            const FIELDS: &'static [$crate::xer::types::schema::FieldDef] = &[
                $($crate::xer::types::schema::FieldDef::new(
                    stringify!($field),
                    <$ty as $crate::xer::types::fields::FieldCodec>::KIND,
                ),)+
            ];

            const REFERENCES: &'static [&'static str] = &[$(stringify!($reference)),*];

            fn key(&self) -> Option<Self::Key> {
                let record = self;
                $crate::record_key!(@value record; $($key),+)
            }

            #[allow(unused_variables)]
            fn reference(&self, field: &str) -> Option<i64> {
                $(if field == stringify!($reference) {
                    return self.$reference;
                })*
                None
            }

            fn decode(
                raw: &$crate::xer::format::decode::RawRecord<'_>,
            ) -> $crate::xer::types::error::Result<Self> {
                Ok(Self {
                    $($field: raw.decode::<$ty>(
                        <Self as $crate::xer::types::schema::Record>::TABLE,
                        stringify!($field),
                    )?,)+
                })
            }

            fn encode(&self) -> Vec<String> {
                vec![$($crate::xer::format::decode::encode_field(&self.$field)),+]
            }

            fn store(data: &$crate::xer::graph::XerData) -> &$crate::xer::store::RecordStore<Self> {
                &data.$store
            }

            fn store_mut(
                data: &mut $crate::xer::graph::XerData,
            ) -> &mut $crate::xer::store::RecordStore<Self> {
                &mut data.$store
            }
        }
    };
}
