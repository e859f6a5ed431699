//! Navigable views over the graph.
//!
//! A [`Node`] is a record together with the graph it lives in; it derefs to the
//! record, so fields read as usual (`task.task_code`), while relation methods
//! (`task.wbs()`, `task.predecessors()`) look up other tables on demand.
//! A [`Rows`] is a whole table seen the same way.
//!
//! Nothing here holds a cursor inside the graph. Every `iter()` call starts a
//! fresh traversal, so nested and repeated walks are independent.
//!
//! # Example
//! ```no_run
//! # use xer_reader::XerReader;
//! # let reader = XerReader::new("schedule.xer", None).unwrap();
//! for task in reader.data.tasks().iter() {
//!     let wbs = task.wbs().and_then(|wbs| wbs.wbs_name.clone());
//!     println!("{:?} in {:?}: {} predecessors", task.task_code, wbs, task.predecessors().len());
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use chrono::NaiveDateTime;

use crate::xer::codec::calendar::CalendarData;
use crate::xer::graph::XerData;
use crate::xer::types::schema::Record;
use crate::xer::types::tables::*;

/// Hours per day assumed when a task has no usable calendar.
pub const DEFAULT_DAY_HOURS: f64 = 8.0;

/// A record plus the graph it belongs to.
pub struct Node<'g, R: Record> {
    data: &'g XerData,
    record: &'g R,
}

impl<'g, R: Record> Node<'g, R> {
    pub fn new(data: &'g XerData, record: &'g R) -> Self {
        Self { data, record }
    }

    /// The underlying record, with the graph's lifetime.
    pub fn record(&self) -> &'g R {
        self.record
    }

    pub fn data(&self) -> &'g XerData {
        self.data
    }

    /// To-one lookup through a foreign key. Absent or dangling keys give `None`.
    fn lookup<T: Record<Key = i64>>(&self, id: Option<i64>) -> Option<Node<'g, T>> {
        id.and_then(|id| self.data.get::<T>(&id))
    }

    /// To-many lookup: rows of `T` whose `field` holds `id`.
    fn referencing<T: Record>(&self, field: &str, id: Option<i64>) -> Vec<Node<'g, T>> {
        let data = self.data;
        match id {
            Some(id) => T::store(data)
                .referencing(field, id)
                .map(|record| Node::new(data, record))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<'g, R: Record> Clone for Node<'g, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, R: Record> Copy for Node<'g, R> {}

impl<'g, R: Record> Deref for Node<'g, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.record
    }
}

impl<'g, R: Record> fmt::Debug for Node<'g, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.record, f)
    }
}

impl<'g, R: Record> PartialEq for Node<'g, R> {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record
    }
}

/// A table seen through the graph.
pub struct Rows<'g, R: Record> {
    data: &'g XerData,
    _record: PhantomData<&'g R>,
}

impl<'g, R: Record> Rows<'g, R> {
    pub fn new(data: &'g XerData) -> Self {
        Self {
            data,
            _record: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        R::store(self.data).len()
    }

    pub fn is_empty(&self) -> bool {
        R::store(self.data).is_empty()
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Node<'g, R>> + 'g {
        let data = self.data;
        R::store(data).iter().map(move |record| Node::new(data, record))
    }

    /// Primary key lookup. `None` for unknown keys and empty tables.
    pub fn get(&self, key: &R::Key) -> Option<Node<'g, R>> {
        R::store(self.data)
            .get(key)
            .map(|record| Node::new(self.data, record))
    }

    pub fn first(&self) -> Option<Node<'g, R>> {
        self.iter().next()
    }

    /// Rows whose indexed column `field` equals `id`, in insertion order.
    pub fn referencing(&self, field: &str, id: i64) -> Vec<Node<'g, R>> {
        let data = self.data;
        R::store(data)
            .referencing(field, id)
            .map(|record| Node::new(data, record))
            .collect()
    }
}

impl<'g, R: Record> Clone for Rows<'g, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, R: Record> Copy for Rows<'g, R> {}

impl<'g, R: Record> IntoIterator for Rows<'g, R> {
    type Item = Node<'g, R>;
    type IntoIter = Box<dyn Iterator<Item = Node<'g, R>> + 'g>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// A task's constraint: type plus date, present only when both are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub kind: String,
    pub date: NaiveDateTime,
}

impl<'g> Node<'g, Project> {
    pub fn calendar(&self) -> Option<Node<'g, Calendar>> {
        self.lookup(self.clndr_id)
    }

    pub fn financial_template(&self) -> Option<Node<'g, FinancialTemplate>> {
        self.lookup(self.fintmpl_id)
    }

    pub fn wbs(&self) -> Vec<Node<'g, Wbs>> {
        self.referencing("proj_id", self.proj_id)
    }

    pub fn tasks(&self) -> Vec<Node<'g, Task>> {
        self.referencing("proj_id", self.proj_id)
    }

    pub fn activities(&self) -> Vec<Node<'g, Task>> {
        self.tasks()
    }

    pub fn schedule_options(&self) -> Option<Node<'g, ScheduleOptions>> {
        self.referencing("proj_id", self.proj_id).into_iter().next()
    }

    pub fn code_assignments(&self) -> Vec<Node<'g, ProjectCodeAssignment>> {
        self.referencing("proj_id", self.proj_id)
    }
}

impl<'g> Node<'g, Wbs> {
    pub fn project(&self) -> Option<Node<'g, Project>> {
        self.lookup(self.proj_id)
    }

    pub fn parent(&self) -> Option<Node<'g, Wbs>> {
        self.lookup(self.parent_wbs_id)
    }

    pub fn children(&self) -> Vec<Node<'g, Wbs>> {
        self.referencing("parent_wbs_id", self.wbs_id)
    }

    pub fn tasks(&self) -> Vec<Node<'g, Task>> {
        self.referencing("wbs_id", self.wbs_id)
    }

    pub fn activities(&self) -> Vec<Node<'g, Task>> {
        self.tasks()
    }

    pub fn obs(&self) -> Option<Node<'g, Obs>> {
        self.lookup(self.obs_id)
    }
}

impl<'g> Node<'g, Task> {
    pub fn project(&self) -> Option<Node<'g, Project>> {
        self.lookup(self.proj_id)
    }

    pub fn wbs(&self) -> Option<Node<'g, Wbs>> {
        self.lookup(self.wbs_id)
    }

    pub fn calendar(&self) -> Option<Node<'g, Calendar>> {
        self.lookup(self.clndr_id)
    }

    /// Links in which this task is the successor.
    pub fn predecessors(&self) -> Vec<Node<'g, TaskPred>> {
        self.referencing("task_id", self.task_id)
    }

    /// Links in which this task is the predecessor.
    pub fn successors(&self) -> Vec<Node<'g, TaskPred>> {
        self.referencing("pred_task_id", self.task_id)
    }

    /// Resource assignments.
    pub fn resources(&self) -> Vec<Node<'g, TaskRsrc>> {
        self.referencing("task_id", self.task_id)
    }

    pub fn activity_codes(&self) -> Vec<Node<'g, TaskActv>> {
        self.referencing("task_id", self.task_id)
    }

    pub fn steps(&self) -> Vec<Node<'g, TaskStep>> {
        self.referencing("task_id", self.task_id)
    }

    pub fn primary_resource(&self) -> Option<Node<'g, Resource>> {
        self.lookup(self.rsrc_id)
    }

    /// UDF values whose type targets the `TASK` table.
    pub fn udf_values(&self) -> Vec<Node<'g, UdfValue>> {
        let mut values: Vec<Node<'g, UdfValue>> = self.referencing("fk_id", self.task_id);
        values.retain(|value| {
            value
                .udf_type()
                .is_some_and(|udf| udf.table_name.as_deref() == Some("TASK"))
        });
        values
    }

    /// Actual start, falling back to the planned start.
    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.act_start_date.or(self.target_start_date)
    }

    /// Actual finish, falling back to the planned finish.
    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.act_end_date.or(self.target_end_date)
    }

    pub fn constraint(&self) -> Option<Constraint> {
        match (&self.cstr_type, self.cstr_date) {
            (Some(kind), Some(date)) => Some(Constraint {
                kind: kind.clone(),
                date,
            }),
            _ => None,
        }
    }

    /// Planned duration in days of the task's calendar.
    ///
    /// Uses [`DEFAULT_DAY_HOURS`] when the calendar is missing or has no
    /// positive day length. Zero when the task has no planned duration.
    pub fn duration_days(&self) -> f64 {
        let Some(hours) = self.target_drtn_hr_cnt else {
            return 0.0;
        };
        let day_hours = self
            .calendar()
            .and_then(|calendar| calendar.day_hr_cnt)
            .filter(|&day_hours| day_hours > 0.0)
            .unwrap_or(DEFAULT_DAY_HOURS);
        hours / day_hours
    }

    /// Total float in 8-hour days.
    pub fn total_float_days(&self) -> Option<f64> {
        self.total_float_hr_cnt.map(|hours| hours / DEFAULT_DAY_HOURS)
    }
}

impl<'g> Node<'g, TaskPred> {
    /// The task on the `task_id` side.
    pub fn successor(&self) -> Option<Node<'g, Task>> {
        self.lookup(self.task_id)
    }

    /// The task on the `pred_task_id` side.
    pub fn predecessor(&self) -> Option<Node<'g, Task>> {
        self.lookup(self.pred_task_id)
    }

    /// True for a negative lag.
    pub fn is_lead(&self) -> bool {
        self.lag_hr_cnt.is_some_and(|lag| lag < 0.0)
    }

    pub fn is_finish_to_start(&self) -> bool {
        self.pred_type.as_deref() == Some("PR_FS")
    }
}

impl<'g> Rows<'g, TaskPred> {
    /// Links with a negative lag.
    pub fn leads(&self) -> Vec<Node<'g, TaskPred>> {
        self.iter().filter(|link| link.is_lead()).collect()
    }

    /// Finish-to-start links.
    pub fn finish_to_start(&self) -> Vec<Node<'g, TaskPred>> {
        self.iter().filter(|link| link.is_finish_to_start()).collect()
    }
}

/// One resource with its subordinate resources.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTree<'g> {
    pub resource: Node<'g, Resource>,
    pub children: Vec<ResourceTree<'g>>,
}

impl<'g> Node<'g, Resource> {
    pub fn parent(&self) -> Option<Node<'g, Resource>> {
        self.lookup(self.parent_rsrc_id)
    }

    pub fn children(&self) -> Vec<Node<'g, Resource>> {
        self.referencing("parent_rsrc_id", self.rsrc_id)
    }

    pub fn calendar(&self) -> Option<Node<'g, Calendar>> {
        self.lookup(self.clndr_id)
    }

    pub fn role(&self) -> Option<Node<'g, Role>> {
        self.lookup(self.role_id)
    }

    pub fn assignments(&self) -> Vec<Node<'g, TaskRsrc>> {
        self.referencing("rsrc_id", self.rsrc_id)
    }

    pub fn rates(&self) -> Vec<Node<'g, ResourceRate>> {
        self.referencing("rsrc_id", self.rsrc_id)
    }

    /// Activities naming this resource as their primary resource.
    pub fn led_tasks(&self) -> Vec<Node<'g, Task>> {
        self.referencing("rsrc_id", self.rsrc_id)
    }

    /// This resource and everything below it.
    ///
    /// A resource listed as its own ancestor is not descended into again.
    pub fn tree(&self) -> ResourceTree<'g> {
        let mut path = Vec::new();
        build_tree(*self, &mut path)
    }
}

fn build_tree<'g>(resource: Node<'g, Resource>, path: &mut Vec<i64>) -> ResourceTree<'g> {
    let mut children = Vec::new();
    if let Some(id) = resource.rsrc_id {
        path.push(id);
        for child in resource.children() {
            if child.rsrc_id.is_some_and(|child_id| path.contains(&child_id)) {
                continue;
            }
            children.push(build_tree(child, path));
        }
        path.pop();
    }
    ResourceTree { resource, children }
}

impl<'g> Rows<'g, Resource> {
    /// The resource forest. Roots are resources without a parent or whose
    /// parent is missing from the file.
    pub fn resource_tree(&self) -> Vec<ResourceTree<'g>> {
        self.iter()
            .filter(|resource| resource.parent().is_none())
            .map(|resource| resource.tree())
            .collect()
    }
}

impl<'g> Node<'g, TaskRsrc> {
    pub fn task(&self) -> Option<Node<'g, Task>> {
        self.lookup(self.task_id)
    }

    pub fn resource(&self) -> Option<Node<'g, Resource>> {
        self.lookup(self.rsrc_id)
    }

    pub fn role(&self) -> Option<Node<'g, Role>> {
        self.lookup(self.role_id)
    }

    pub fn account(&self) -> Option<Node<'g, Account>> {
        self.lookup(self.acct_id)
    }
}

impl<'g> Node<'g, Calendar> {
    pub fn base_calendar(&self) -> Option<Node<'g, Calendar>> {
        self.lookup(self.base_clndr_id)
    }

    pub fn project(&self) -> Option<Node<'g, Project>> {
        self.lookup(self.proj_id)
    }

    pub fn tasks(&self) -> Vec<Node<'g, Task>> {
        self.referencing("clndr_id", self.clndr_id)
    }
}

impl Calendar {
    /// Decodes `clndr_data`. A calendar without data decodes to an empty value.
    pub fn decoded(&self) -> CalendarData {
        self.clndr_data
            .as_deref()
            .map(CalendarData::parse)
            .unwrap_or_default()
    }
}

impl<'g> Node<'g, ActivityCodeType> {
    pub fn codes(&self) -> Vec<Node<'g, ActivityCode>> {
        self.referencing("actv_code_type_id", self.actv_code_type_id)
    }
}

impl<'g> Node<'g, ActivityCode> {
    pub fn code_type(&self) -> Option<Node<'g, ActivityCodeType>> {
        self.lookup(self.actv_code_type_id)
    }

    pub fn parent(&self) -> Option<Node<'g, ActivityCode>> {
        self.lookup(self.parent_actv_code_id)
    }

    pub fn children(&self) -> Vec<Node<'g, ActivityCode>> {
        self.referencing("parent_actv_code_id", self.actv_code_id)
    }

    pub fn assignments(&self) -> Vec<Node<'g, TaskActv>> {
        self.referencing("actv_code_id", self.actv_code_id)
    }
}

impl<'g> Node<'g, TaskActv> {
    pub fn task(&self) -> Option<Node<'g, Task>> {
        self.lookup(self.task_id)
    }

    pub fn activity_code(&self) -> Option<Node<'g, ActivityCode>> {
        self.lookup(self.actv_code_id)
    }

    pub fn code_type(&self) -> Option<Node<'g, ActivityCodeType>> {
        self.lookup(self.actv_code_type_id)
    }
}

impl<'g> Node<'g, TaskStep> {
    pub fn task(&self) -> Option<Node<'g, Task>> {
        self.lookup(self.task_id)
    }
}

impl<'g> Node<'g, Role> {
    pub fn parent(&self) -> Option<Node<'g, Role>> {
        self.lookup(self.parent_role_id)
    }

    pub fn rates(&self) -> Vec<Node<'g, RoleRate>> {
        self.referencing("role_id", self.role_id)
    }
}

impl<'g> Node<'g, RoleRate> {
    pub fn role(&self) -> Option<Node<'g, Role>> {
        self.lookup(self.role_id)
    }
}

impl<'g> Node<'g, ResourceRate> {
    pub fn resource(&self) -> Option<Node<'g, Resource>> {
        self.lookup(self.rsrc_id)
    }
}

impl<'g> Node<'g, Account> {
    pub fn parent(&self) -> Option<Node<'g, Account>> {
        self.lookup(self.parent_acct_id)
    }
}

impl<'g> Node<'g, Obs> {
    pub fn parent(&self) -> Option<Node<'g, Obs>> {
        self.lookup(self.parent_obs_id)
    }
}

impl<'g> Node<'g, UdfValue> {
    pub fn udf_type(&self) -> Option<Node<'g, UdfType>> {
        self.lookup(self.udf_type_id)
    }
}

impl<'g> Node<'g, ProjectCodeValue> {
    pub fn code_type(&self) -> Option<Node<'g, ProjectCodeType>> {
        self.lookup(self.proj_catg_type_id)
    }
}

impl<'g> Node<'g, ProjectCodeAssignment> {
    pub fn project(&self) -> Option<Node<'g, Project>> {
        self.lookup(self.proj_id)
    }

    pub fn code_value(&self) -> Option<Node<'g, ProjectCodeValue>> {
        self.lookup(self.proj_catg_id)
    }
}

impl<'g> Node<'g, ResourceCodeValue> {
    pub fn code_type(&self) -> Option<Node<'g, ResourceCodeType>> {
        self.lookup(self.rsrc_catg_type_id)
    }
}

impl<'g> Node<'g, ResourceCodeAssignment> {
    pub fn resource(&self) -> Option<Node<'g, Resource>> {
        self.lookup(self.rsrc_id)
    }

    pub fn code_value(&self) -> Option<Node<'g, ResourceCodeValue>> {
        self.lookup(self.rsrc_catg_id)
    }
}
