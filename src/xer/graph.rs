//! The relational graph: one [`RecordStore`] per table.
//!
//! Records never point at each other. Relations are resolved when queried,
//! through [`Node`] handles that borrow the graph, so tables may be loaded in
//! any order and a reference to a record that never arrives simply resolves
//! to nothing.

use log::trace;

use crate::xer::format::decode::RawRecord;
use crate::xer::iter::{Node, Rows};
use crate::xer::store::RecordStore;
use crate::xer::types::error::Result;
use crate::xer::types::schema::Record;
use crate::xer::types::tables::*;

macro_rules! xer_data {
    ($($record:ident => $store:ident),+ $(,)?) => {
        /// Root context owning every table's records.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct XerData {
            $(pub(crate) $store: RecordStore<$record>,)+
        }

        impl XerData {
            /// Decodes a raw row and appends it to its table.
            ///
            /// Returns `Ok(false)` without touching the graph when the row's
            /// table has no schema. A decode failure is returned as is.
            pub fn insert_raw(&mut self, raw: &RawRecord<'_>) -> Result<bool> {
                match Table::from_name(raw.table) {
                    $(Some(Table::$record) => self.$store.push($record::decode(raw)?),)+
                    None => return Ok(false),
                }
                trace!("{} line {}: record stored", raw.table, raw.line);
                Ok(true)
            }

            /// Number of records held for `table`.
            pub fn count(&self, table: Table) -> usize {
                match table {
                    $(Table::$record => self.$store.len(),)+
                }
            }

            /// Encoded rows of `table` in insertion order, columns in schema order.
            pub fn encoded_rows(&self, table: Table) -> Vec<Vec<String>> {
                match table {
                    $(Table::$record => self.$store.iter().map(Record::encode).collect(),)+
                }
            }

            $(
                #[doc = concat!("All `", stringify!($record), "` rows.")]
                pub fn $store(&self) -> Rows<'_, $record> {
                    Rows::new(self)
                }
            )+
        }
    };
}

xer_data! {
    Currency => currencies,
    FinancialTemplate => financial_templates,
    NonWorkType => nonwork_types,
    Obs => obs,
    ProjectCodeType => project_code_types,
    ResourceCurve => resource_curves,
    UdfType => udf_types,
    Account => accounts,
    ProjectCodeValue => project_code_values,
    Role => roles,
    ResourceCodeType => resource_code_types,
    ResourceCodeValue => resource_code_values,
    Project => projects,
    Calendar => calendars,
    ProjectCodeAssignment => project_code_assignments,
    ScheduleOptions => schedule_options,
    Wbs => wbs,
    Resource => resources,
    RoleRate => role_rates,
    ActivityCodeType => activity_code_types,
    ResourceRate => resource_rates,
    ResourceCodeAssignment => resource_code_assignments,
    Task => tasks,
    ActivityCode => activity_codes,
    TaskPred => predecessors,
    TaskStep => task_steps,
    TaskRsrc => task_resources,
    TaskActv => task_activity_codes,
    UdfValue => udf_values,
}

impl XerData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already typed record.
    pub fn insert<R: Record>(&mut self, record: R) {
        R::store_mut(self).push(record);
    }

    /// The store behind any table.
    pub fn store<R: Record>(&self) -> &RecordStore<R> {
        R::store(self)
    }

    /// Rows of any table, as navigable nodes.
    pub fn rows<R: Record>(&self) -> Rows<'_, R> {
        Rows::new(self)
    }

    /// Primary key lookup on any table.
    pub fn get<R: Record>(&self, key: &R::Key) -> Option<Node<'_, R>> {
        self.rows::<R>().get(key)
    }

    /// Alias of [`XerData::tasks`].
    pub fn activities(&self) -> Rows<'_, Task> {
        self.tasks()
    }

    /// Alias of [`XerData::predecessors`]: every logic link in the file.
    pub fn relationships(&self) -> Rows<'_, TaskPred> {
        self.predecessors()
    }

    /// Total record count across all tables.
    pub fn total_records(&self) -> usize {
        Table::ALL.iter().map(|&table| self.count(table)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }

    /// Tables holding at least one record, in emission order.
    pub fn populated_tables(&self) -> impl Iterator<Item = Table> + '_ {
        Table::ALL.into_iter().filter(|&table| self.count(table) > 0)
    }
}
