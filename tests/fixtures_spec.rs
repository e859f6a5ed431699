use chrono::{NaiveDate, NaiveDateTime, Weekday};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use xer_reader::{ParseWarning, Table, XerReader};

/// Expected record counts in `sample.xer`, by table.
const EXPECTED_COUNTS: &[(Table, usize)] = &[
    (Table::Currency, 1),
    (Table::Obs, 1),
    (Table::UdfType, 2),
    (Table::Project, 1),
    (Table::Calendar, 2),
    (Table::ScheduleOptions, 1),
    (Table::Wbs, 3),
    (Table::Resource, 4),
    (Table::ActivityCodeType, 1),
    (Table::Task, 4),
    (Table::ActivityCode, 2),
    (Table::TaskPred, 4),
    (Table::TaskStep, 1),
    (Table::TaskRsrc, 3),
    (Table::TaskActv, 2),
    (Table::UdfValue, 2),
];

fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}

fn open_sample() -> XerReader {
    let path = fixture_path(&["tests", "fixtures", "sample.xer"]);
    XerReader::new(&path, None).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn at(date: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M").expect("valid test timestamp")
}

#[test]
fn sample_table_counts() {
    let reader = open_sample();
    for table in Table::ALL {
        let expected = EXPECTED_COUNTS
            .iter()
            .find(|(t, _)| *t == table)
            .map(|(_, count)| *count)
            .unwrap_or(0);
        assert_eq!(expected, reader.data.count(table), "count mismatch for {}", table);
    }
    assert_eq!(reader.data.total_records(), 34);

    let summary: Vec<Table> = reader.summary().into_iter().map(|(table, _)| table).collect();
    let ordered: Vec<Table> = Table::ALL
        .into_iter()
        .filter(|table| EXPECTED_COUNTS.iter().any(|(t, _)| t == table))
        .collect();
    assert_eq!(ordered, summary);
}

#[test]
fn sample_export_header() {
    let reader = open_sample();
    let header = reader.header.as_ref().expect("ERMHDR row");
    assert_eq!(header.version, "8.0");
    assert_eq!(header.export_date, "2021-11-02");
    assert_eq!(header.export_type, "Project");
    assert_eq!(header.user_login, "admin");
    assert_eq!(header.user_name, "Primavera Admin");
    assert_eq!(header.database, "dbxDatabaseNoName");
    assert_eq!(header.module, "Project Management");
    assert_eq!(header.currency, "USD");
    assert!(header.extra.is_empty());
    assert_eq!(reader.encoding, encoding_rs::UTF_8);
}

#[test]
fn sample_unknown_table_is_reported_and_skipped() {
    let reader = open_sample();
    assert_eq!(
        reader.warnings,
        vec![ParseWarning::UnknownTable {
            table: "PROJCOST".to_string(),
            line: 19,
        }]
    );
}

#[test]
fn sample_field_values() {
    let reader = open_sample();
    let task = reader.data.tasks().get(&2001).expect("task 2001");
    assert_eq!(task.task_code.as_deref(), Some("A1000"));
    assert_eq!(task.task_name.as_deref(), Some("Mobilise site"));
    assert_eq!(task.target_drtn_hr_cnt, Some(16.0));
    assert_eq!(task.act_start_date, Some(at("2022-01-04 08:00")));
    assert_eq!(task.status_code.as_deref(), Some("TK_Complete"));
    assert!(task.rev_fdbk_flag.as_ref().is_some_and(|flag| !flag.is_yes()));
    assert_eq!(task.guid, None, "columns missing from %F are absent");

    // Text keeps its trailing blanks
    let pour = reader.data.tasks().get(&2003).expect("task 2003");
    assert_eq!(pour.task_name.as_deref(), Some("Pour concrete  "));

    let project = reader.data.projects().first().expect("one project");
    assert_eq!(project.proj_short_name.as_deref(), Some("PRJ-100"));
    assert_eq!(project.plan_end_date, None);
    assert_eq!(project.checkout_flag.as_ref().map(|flag| flag.as_str()), Some("N"));
    assert!(project.rsrc_self_add_flag.as_ref().is_some_and(|flag| flag.is_yes()));
}

#[test]
fn sample_task_navigation() {
    let reader = open_sample();
    let tasks = reader.data.tasks();

    let excavate = tasks.get(&2002).expect("task 2002");
    assert_eq!(excavate.project().and_then(|p| p.proj_id), Some(100));
    assert_eq!(
        excavate.wbs().and_then(|w| w.wbs_name.clone()).as_deref(),
        Some("Foundations")
    );
    assert_eq!(
        excavate.calendar().and_then(|c| c.clndr_name.clone()).as_deref(),
        Some("Standard 5 Day")
    );

    let preds: Vec<Option<i64>> = excavate.predecessors().iter().map(|p| p.pred_task_id).collect();
    assert_eq!(preds, vec![Some(2001)]);
    let succs: Vec<Option<i64>> = excavate.successors().iter().map(|p| p.task_id).collect();
    assert_eq!(succs, vec![Some(2003)]);

    let assigned: Vec<Option<String>> = excavate
        .resources()
        .iter()
        .map(|a| a.resource().and_then(|r| r.rsrc_name.clone()))
        .collect();
    assert_eq!(
        assigned,
        vec![Some("Excavator".to_string()), Some("Site Crew".to_string())]
    );

    let mobilise = tasks.get(&2001).expect("task 2001");
    assert_eq!(mobilise.steps().len(), 1);
    assert_eq!(
        mobilise.primary_resource().and_then(|r| r.rsrc_short_name.clone()).as_deref(),
        Some("CREW")
    );
    let codes: Vec<Option<String>> = mobilise
        .activity_codes()
        .iter()
        .map(|a| a.activity_code().and_then(|c| c.actv_code_name.clone()))
        .collect();
    assert_eq!(codes, vec![Some("Construction".to_string())]);

    let udfs: Vec<Option<String>> = mobilise.udf_values().iter().map(|u| u.udf_text.clone()).collect();
    assert_eq!(udfs, vec![Some("High".to_string())]);
}

#[test]
fn sample_task_derived_values() {
    let reader = open_sample();
    let tasks = reader.data.activities();

    let mobilise = tasks.get(&2001).expect("task 2001");
    assert_eq!(mobilise.start_date(), Some(at("2022-01-04 08:00")));
    assert_eq!(mobilise.end_date(), Some(at("2022-01-05 17:00")));
    assert_eq!(mobilise.duration_days(), 2.0);
    let constraint = mobilise.constraint().expect("MSO constraint");
    assert_eq!(constraint.kind, "CS_MSO");
    assert_eq!(constraint.date, at("2022-01-04 08:00"));

    let excavate = tasks.get(&2002).expect("task 2002");
    assert_eq!(excavate.start_date(), Some(at("2022-01-06 08:00")));
    assert_eq!(excavate.duration_days(), 5.0);
    assert_eq!(excavate.total_float_days(), Some(2.0));
    assert!(excavate.constraint().is_none());

    // Ten hour days on the six day calendar
    let pour = tasks.get(&2003).expect("task 2003");
    assert_eq!(pour.duration_days(), 3.0);
}

#[test]
fn sample_dangling_references_resolve_to_nothing() {
    let reader = open_sample();
    let handover = reader.data.tasks().get(&2004).expect("task 2004");
    assert!(handover.wbs().is_none(), "wbs 99 does not exist");
    assert!(handover.primary_resource().is_none());
    assert!(handover.successors().is_empty());

    let links = handover.predecessors();
    assert_eq!(links.len(), 2);
    assert_eq!(
        links[0].predecessor().and_then(|t| t.task_code.clone()).as_deref(),
        Some("A1020")
    );
    assert!(links[1].predecessor().is_none(), "task 9999 does not exist");
    assert_eq!(links[1].successor().and_then(|t| t.task_id), Some(2004));
}

#[test]
fn sample_relationship_views() {
    let reader = open_sample();
    let links = reader.data.relationships();
    assert_eq!(links.len(), 4);

    let leads: Vec<Option<i64>> = links.leads().iter().map(|l| l.task_pred_id).collect();
    assert_eq!(leads, vec![Some(3002)]);
    let fs: Vec<Option<i64>> = links.finish_to_start().iter().map(|l| l.task_pred_id).collect();
    assert_eq!(fs, vec![Some(3001), Some(3003)]);
}

#[test]
fn sample_wbs_and_project_trees() {
    let reader = open_sample();
    let root = reader.data.wbs().get(&9).expect("wbs 9");
    assert!(root.parent().is_none());
    let children: Vec<Option<String>> = root.children().iter().map(|w| w.wbs_short_name.clone()).collect();
    assert_eq!(children, vec![Some("MOB".to_string()), Some("FDN".to_string())]);
    assert_eq!(root.obs().and_then(|o| o.obs_name.clone()).as_deref(), Some("Enterprise"));

    let foundations = reader.data.wbs().get(&11).expect("wbs 11");
    assert_eq!(foundations.parent().and_then(|w| w.wbs_id), Some(9));
    assert_eq!(foundations.tasks().len(), 2);

    let project = reader.data.projects().get(&100).expect("project 100");
    assert_eq!(project.wbs().len(), 3);
    assert_eq!(project.tasks().len(), 4);
    assert_eq!(project.calendar().and_then(|c| c.clndr_id), Some(1));
    assert_eq!(
        project.schedule_options().and_then(|s| s.sched_float_type.clone()).as_deref(),
        Some("FT_FinishFloat")
    );
}

#[test]
fn sample_resource_tree() {
    let reader = open_sample();
    let forest = reader.data.resources().resource_tree();
    let roots: Vec<Option<i64>> = forest.iter().map(|t| t.resource.rsrc_id).collect();
    assert_eq!(roots, vec![Some(500), Some(503)], "503 has a dangling parent");

    let labour = &forest[0];
    let children: Vec<Option<i64>> = labour.children.iter().map(|t| t.resource.rsrc_id).collect();
    assert_eq!(children, vec![Some(501), Some(502)]);

    let crew = reader.data.resources().get(&501).expect("resource 501");
    assert_eq!(crew.parent().and_then(|r| r.rsrc_id), Some(500));
    assert_eq!(crew.assignments().len(), 2);

    let led: Vec<Option<i64>> = crew.led_tasks().iter().map(|t| t.task_id).collect();
    assert_eq!(led, vec![Some(2001)]);
    let labour_root = reader.data.resources().get(&500).expect("resource 500");
    assert!(labour_root.led_tasks().is_empty());
}

#[test]
fn sample_calendar_tasks() {
    let reader = open_sample();
    let standard = reader.data.calendars().get(&1).expect("calendar 1");
    let ids: Vec<Option<i64>> = standard.tasks().iter().map(|t| t.task_id).collect();
    assert_eq!(ids, vec![Some(2001), Some(2002), Some(2004)]);

    let site = reader.data.calendars().get(&2).expect("calendar 2");
    let ids: Vec<Option<i64>> = site.tasks().iter().map(|t| t.task_id).collect();
    assert_eq!(ids, vec![Some(2003)]);
}

#[test]
fn sample_activity_codes() {
    let reader = open_sample();
    let phase = reader.data.activity_code_types().get(&20).expect("code type 20");
    let names: Vec<Option<String>> = phase.codes().iter().map(|c| c.short_name.clone()).collect();
    assert_eq!(names, vec![Some("DES".to_string()), Some("CON".to_string())]);

    let construction = reader.data.activity_codes().get(&22).expect("code 22");
    assert_eq!(construction.assignments().len(), 2);
    assert_eq!(construction.code_type().and_then(|t| t.actv_code_type_id), Some(20));

    let assignment = reader
        .data
        .task_activity_codes()
        .get(&(2002, 22))
        .expect("composite key lookup");
    assert_eq!(assignment.task().and_then(|t| t.task_code.clone()).as_deref(), Some("A1010"));
}

#[test]
fn sample_calendars() {
    let reader = open_sample();
    let standard = reader.data.calendars().get(&1).expect("calendar 1");
    let decoded = standard.decoded();

    let monday = decoded.day(Weekday::Mon).expect("monday pattern");
    assert_eq!(monday.intervals.len(), 2);
    assert_eq!(monday.work_hours(), 8.0);
    let friday = decoded.day(Weekday::Fri).expect("friday pattern");
    assert_eq!(friday.work_hours(), 8.0);
    assert!(decoded.day(Weekday::Sun).is_some_and(|d| d.intervals.is_empty()));

    assert_eq!(
        decoded.exceptions,
        vec![
            NaiveDate::from_ymd_opt(2021, 12, 31).expect("date"),
            NaiveDate::from_ymd_opt(2022, 1, 1).expect("date"),
        ]
    );

    let site = reader.data.calendars().get(&2).expect("calendar 2");
    assert_eq!(site.base_calendar().and_then(|c| c.clndr_id), Some(1));
    assert_eq!(site.project().and_then(|p| p.proj_id), Some(100));
    let saturday = site.decoded();
    assert_eq!(saturday.day(Weekday::Sat).map(|d| d.work_hours()), Some(10.0));
    assert!(saturday.exceptions.is_empty());
}
