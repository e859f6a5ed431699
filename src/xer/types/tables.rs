//! The table catalogue: every supported XER table and its record schema.
//!
//! Field order in each declaration is the wire order used by the writer.

use std::fmt;

use super::fields::{Flag, Float, Int, Text, Timestamp};
use super::schema::{FieldDef, Record};
use crate::xer_record;

/// Every table the reader understands.
///
/// Variants share their name with the record struct holding the table's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Currency,
    FinancialTemplate,
    NonWorkType,
    Obs,
    ProjectCodeType,
    ResourceCurve,
    UdfType,
    Account,
    ProjectCodeValue,
    Role,
    ResourceCodeType,
    ResourceCodeValue,
    Project,
    Calendar,
    ProjectCodeAssignment,
    ScheduleOptions,
    Wbs,
    Resource,
    RoleRate,
    ActivityCodeType,
    ResourceRate,
    ResourceCodeAssignment,
    Task,
    ActivityCode,
    TaskPred,
    TaskStep,
    TaskRsrc,
    TaskActv,
    UdfValue,
}

impl Table {
    /// All tables in emission order.
    ///
    /// Referenced tables come before the tables that point at them: currencies
    /// and templates before projects, calendars before WBS and tasks, tasks
    /// before their relationship and assignment tables, UDF values last.
    pub const ALL: [Table; 29] = [
        Table::Currency,
        Table::FinancialTemplate,
        Table::NonWorkType,
        Table::Obs,
        Table::ProjectCodeType,
        Table::ResourceCurve,
        Table::UdfType,
        Table::Account,
        Table::ProjectCodeValue,
        Table::Role,
        Table::ResourceCodeType,
        Table::ResourceCodeValue,
        Table::Project,
        Table::Calendar,
        Table::ProjectCodeAssignment,
        Table::ScheduleOptions,
        Table::Wbs,
        Table::Resource,
        Table::RoleRate,
        Table::ActivityCodeType,
        Table::ResourceRate,
        Table::ResourceCodeAssignment,
        Table::Task,
        Table::ActivityCode,
        Table::TaskPred,
        Table::TaskStep,
        Table::TaskRsrc,
        Table::TaskActv,
        Table::UdfValue,
    ];

    /// The table name as written after `%T`.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Currency => "CURRTYPE",
            Table::FinancialTemplate => "FINTMPL",
            Table::NonWorkType => "NONWORK",
            Table::Obs => "OBS",
            Table::ProjectCodeType => "PCATTYPE",
            Table::ResourceCurve => "RSRCCURVDATA",
            Table::UdfType => "UDFTYPE",
            Table::Account => "ACCOUNT",
            Table::ProjectCodeValue => "PCATVAL",
            Table::Role => "ROLES",
            Table::ResourceCodeType => "RCATTYPE",
            Table::ResourceCodeValue => "RCATVAL",
            Table::Project => "PROJECT",
            Table::Calendar => "CALENDAR",
            Table::ProjectCodeAssignment => "PROJPCAT",
            Table::ScheduleOptions => "SCHEDOPTIONS",
            Table::Wbs => "PROJWBS",
            Table::Resource => "RSRC",
            Table::RoleRate => "ROLERATE",
            Table::ActivityCodeType => "ACTVTYPE",
            Table::ResourceRate => "RSRCRATE",
            Table::ResourceCodeAssignment => "RSRCRCAT",
            Table::Task => "TASK",
            Table::ActivityCode => "ACTVCODE",
            Table::TaskPred => "TASKPRED",
            Table::TaskStep => "TASKPROC",
            Table::TaskRsrc => "TASKRSRC",
            Table::TaskActv => "TASKACTV",
            Table::UdfValue => "UDFVALUE",
        }
    }

    /// Looks a table up by its wire name. Surrounding blanks are ignored.
    pub fn from_name(name: &str) -> Option<Table> {
        let name = name.trim();
        Table::ALL.into_iter().find(|table| table.name() == name)
    }

    /// The ordered column schema of this table.
    pub fn fields(&self) -> &'static [FieldDef] {
        match self {
            Table::Currency => Currency::FIELDS,
            Table::FinancialTemplate => FinancialTemplate::FIELDS,
            Table::NonWorkType => NonWorkType::FIELDS,
            Table::Obs => Obs::FIELDS,
            Table::ProjectCodeType => ProjectCodeType::FIELDS,
            Table::ResourceCurve => ResourceCurve::FIELDS,
            Table::UdfType => UdfType::FIELDS,
            Table::Account => Account::FIELDS,
            Table::ProjectCodeValue => ProjectCodeValue::FIELDS,
            Table::Role => Role::FIELDS,
            Table::ResourceCodeType => ResourceCodeType::FIELDS,
            Table::ResourceCodeValue => ResourceCodeValue::FIELDS,
            Table::Project => Project::FIELDS,
            Table::Calendar => Calendar::FIELDS,
            Table::ProjectCodeAssignment => ProjectCodeAssignment::FIELDS,
            Table::ScheduleOptions => ScheduleOptions::FIELDS,
            Table::Wbs => Wbs::FIELDS,
            Table::Resource => Resource::FIELDS,
            Table::RoleRate => RoleRate::FIELDS,
            Table::ActivityCodeType => ActivityCodeType::FIELDS,
            Table::ResourceRate => ResourceRate::FIELDS,
            Table::ResourceCodeAssignment => ResourceCodeAssignment::FIELDS,
            Table::Task => Task::FIELDS,
            Table::ActivityCode => ActivityCode::FIELDS,
            Table::TaskPred => TaskPred::FIELDS,
            Table::TaskStep => TaskStep::FIELDS,
            Table::TaskRsrc => TaskRsrc::FIELDS,
            Table::TaskActv => TaskActv::FIELDS,
            Table::UdfValue => UdfValue::FIELDS,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

xer_record! {
    /// `CURRTYPE`: currency definitions.
    Currency => currencies,
    key(curr_id),
    refs()
    {
        curr_id: Int,
        decimal_digit_cnt: Int,
        curr_symbol: Text,
        decimal_symbol: Text,
        digit_group_symbol: Text,
        pos_curr_fmt_type: Text,
        neg_curr_fmt_type: Text,
        curr_type: Text,
        curr_short_name: Text,
        group_digit_cnt: Int,
        base_exch_rate: Float,
    }
}

xer_record! {
    /// `FINTMPL`: financial period templates.
    FinancialTemplate => financial_templates,
    key(fintmpl_id),
    refs()
    {
        fintmpl_id: Int,
        fintmpl_name: Text,
        default_flag: Flag,
    }
}

xer_record! {
    /// `NONWORK`: non-work time categories.
    NonWorkType => nonwork_types,
    key(nonwork_type_id),
    refs()
    {
        nonwork_type_id: Int,
        seq_num: Int,
        nonwork_code: Text,
        nonwork_type: Text,
    }
}

xer_record! {
    /// `OBS`: organisational breakdown structure nodes.
    Obs => obs,
    key(obs_id),
    refs(parent_obs_id)
    {
        obs_id: Int,
        parent_obs_id: Int,
        guid: Text,
        seq_num: Int,
        obs_name: Text,
        obs_descr: Text,
    }
}

xer_record! {
    /// `PCATTYPE`: project code types.
    ProjectCodeType => project_code_types,
    key(proj_catg_type_id),
    refs()
    {
        proj_catg_type_id: Int,
        seq_num: Int,
        proj_catg_short_len: Int,
        proj_catg_type: Text,
        export_flag: Flag,
    }
}

xer_record! {
    /// `RSRCCURVDATA`: resource distribution curves (21 percentage points).
    ResourceCurve => resource_curves,
    key(curv_id),
    refs()
    {
        curv_id: Int,
        curv_name: Text,
        default_flag: Flag,
        pct_usage_0: Float,
        pct_usage_1: Float,
        pct_usage_2: Float,
        pct_usage_3: Float,
        pct_usage_4: Float,
        pct_usage_5: Float,
        pct_usage_6: Float,
        pct_usage_7: Float,
        pct_usage_8: Float,
        pct_usage_9: Float,
        pct_usage_10: Float,
        pct_usage_11: Float,
        pct_usage_12: Float,
        pct_usage_13: Float,
        pct_usage_14: Float,
        pct_usage_15: Float,
        pct_usage_16: Float,
        pct_usage_17: Float,
        pct_usage_18: Float,
        pct_usage_19: Float,
        pct_usage_20: Float,
    }
}

xer_record! {
    /// `UDFTYPE`: user-defined field definitions.
    UdfType => udf_types,
    key(udf_type_id),
    refs()
    {
        udf_type_id: Int,
        table_name: Text,
        udf_type_name: Text,
        udf_type_label: Text,
        logical_data_type: Text,
        super_flag: Flag,
        indicator_expression: Text,
        summary_indicator_expression: Text,
        export_flag: Flag,
    }
}

xer_record! {
    /// `ACCOUNT`: cost accounts.
    Account => accounts,
    key(acct_id),
    refs(parent_acct_id)
    {
        acct_id: Int,
        parent_acct_id: Int,
        acct_seq_num: Int,
        acct_name: Text,
        acct_short_name: Text,
        acct_descr: Text,
    }
}

xer_record! {
    /// `PCATVAL`: project code values.
    ProjectCodeValue => project_code_values,
    key(proj_catg_id),
    refs(proj_catg_type_id, parent_proj_catg_id)
    {
        proj_catg_id: Int,
        proj_catg_type_id: Int,
        seq_num: Int,
        proj_catg_short_name: Text,
        parent_proj_catg_id: Int,
        proj_catg_name: Text,
    }
}

xer_record! {
    /// `ROLES`: resource roles.
    Role => roles,
    key(role_id),
    refs(parent_role_id)
    {
        role_id: Int,
        parent_role_id: Int,
        seq_num: Int,
        role_name: Text,
        role_short_name: Text,
        pobs_id: Int,
        def_cost_qty_link_flag: Flag,
        cost_qty_type: Text,
        role_descr: Text,
        last_checksum: Text,
    }
}

xer_record! {
    /// `RCATTYPE`: resource code types.
    ResourceCodeType => resource_code_types,
    key(rsrc_catg_type_id),
    refs()
    {
        rsrc_catg_type_id: Int,
        seq_num: Int,
        rsrc_catg_short_len: Int,
        rsrc_catg_type: Text,
    }
}

xer_record! {
    /// `RCATVAL`: resource code values.
    ResourceCodeValue => resource_code_values,
    key(rsrc_catg_id),
    refs(rsrc_catg_type_id, parent_rsrc_catg_id)
    {
        rsrc_catg_id: Int,
        rsrc_catg_type_id: Int,
        rsrc_catg_short_name: Text,
        rsrc_catg_name: Text,
        parent_rsrc_catg_id: Int,
    }
}

xer_record! {
    /// `PROJECT`: one exported project and its scheduling defaults.
    Project => projects,
    key(proj_id),
    refs()
    {
        proj_id: Int,
        fy_start_month_num: Int,
        rsrc_self_add_flag: Flag,
        allow_complete_flag: Flag,
        rsrc_multi_assign_flag: Flag,
        checkout_flag: Flag,
        project_flag: Flag,
        step_complete_flag: Flag,
        cost_qty_recalc_flag: Flag,
        batch_sum_flag: Flag,
        name_sep_char: Text,
        def_complete_pct_type: Text,
        proj_short_name: Text,
        acct_id: Int,
        orig_proj_id: Int,
        source_proj_id: Int,
        base_type_id: Int,
        clndr_id: Int,
        sum_base_proj_id: Int,
        task_code_base: Int,
        task_code_step: Int,
        priority_num: Int,
        wbs_max_sum_level: Int,
        strgy_priority_num: Int,
        last_checksum: Text,
        critical_drtn_hr_cnt: Float,
        def_cost_per_qty: Float,
        last_recalc_date: Timestamp,
        plan_start_date: Timestamp,
        plan_end_date: Timestamp,
        scd_end_date: Timestamp,
        add_date: Timestamp,
        last_tasksum_date: Timestamp,
        fcst_start_date: Timestamp,
        def_duration_type: Text,
        task_code_prefix: Text,
        guid: Text,
        def_qty_type: Text,
        add_by_name: Text,
        web_local_root_path: Text,
        proj_url: Text,
        def_rate_type: Text,
        add_act_remain_flag: Flag,
        act_this_per_link_flag: Flag,
        def_task_type: Text,
        act_pct_link_flag: Flag,
        critical_path_type: Text,
        task_code_prefix_flag: Flag,
        def_rollup_dates_flag: Flag,
        use_project_baseline_flag: Flag,
        rem_target_link_flag: Flag,
        reset_planned_flag: Flag,
        allow_neg_act_flag: Flag,
        sum_assign_level: Text,
        last_fin_dates_id: Int,
        last_baseline_update_date: Timestamp,
        cr_external_key: Text,
        apply_actuals_date: Timestamp,
        fintmpl_id: Int,
        location_id: Int,
        loaded_scope_level: Text,
        export_flag: Flag,
        new_fin_dates_id: Int,
        baselines_to_export: Text,
        baseline_names_to_export: Text,
        next_data_date: Timestamp,
        close_period_flag: Flag,
        sum_refresh_date: Timestamp,
        trsrcsum_loaded: Text,
        sumtask_loaded: Text,
    }
}

xer_record! {
    /// `CALENDAR`: work calendars. `clndr_data` holds the encoded work pattern,
    /// decoded on demand by [`Calendar::decoded`].
    Calendar => calendars,
    key(clndr_id),
    refs(base_clndr_id, proj_id)
    {
        clndr_id: Int,
        default_flag: Flag,
        clndr_name: Text,
        proj_id: Int,
        base_clndr_id: Int,
        last_chng_date: Timestamp,
        clndr_type: Text,
        day_hr_cnt: Float,
        week_hr_cnt: Float,
        month_hr_cnt: Float,
        year_hr_cnt: Float,
        rsrc_private: Flag,
        clndr_data: Text,
    }
}

xer_record! {
    /// `PROJPCAT`: project code assignments.
    ProjectCodeAssignment => project_code_assignments,
    key(proj_id, proj_catg_type_id),
    refs(proj_id, proj_catg_id)
    {
        proj_id: Int,
        proj_catg_type_id: Int,
        proj_catg_id: Int,
    }
}

xer_record! {
    /// `SCHEDOPTIONS`: per-project scheduler settings.
    ScheduleOptions => schedule_options,
    key(schedoptions_id),
    refs(proj_id)
    {
        schedoptions_id: Int,
        proj_id: Int,
        sched_outer_depend_type: Text,
        sched_open_critical_flag: Flag,
        sched_lag_early_start_flag: Flag,
        sched_retained_logic: Text,
        sched_setplantoforecast: Text,
        sched_float_type: Text,
        sched_calendar_on_relationship_lag: Text,
        sched_use_expect_end_flag: Flag,
        sched_progress_override: Text,
        level_float_thrs_cnt: Int,
        level_outer_assign_flag: Flag,
        level_outer_assign_priority: Text,
        level_over_alloc_pct: Float,
        level_within_float_flag: Flag,
        level_keep_sched_date_flag: Flag,
        level_all_rsrc_flag: Flag,
        sched_use_project_end_date_for_float: Text,
        enable_multiple_longest_path_calc: Text,
        limit_multiple_longest_path_calc: Text,
        max_multiple_longest_path: Int,
        use_total_float_multiple_longest_paths: Text,
        key_activity_for_multiple_longest_paths: Int,
    }
}

xer_record! {
    /// `PROJWBS`: work breakdown structure nodes.
    Wbs => wbs,
    key(wbs_id),
    refs(proj_id, parent_wbs_id)
    {
        wbs_id: Int,
        proj_id: Int,
        obs_id: Int,
        seq_num: Int,
        est_wt: Float,
        proj_node_flag: Flag,
        sum_data_flag: Flag,
        status_code: Text,
        wbs_short_name: Text,
        wbs_name: Text,
        phase_id: Int,
        parent_wbs_id: Int,
        ev_user_pct: Float,
        ev_etc_user_value: Float,
        orig_cost: Float,
        indep_remain_total_cost: Float,
        ann_dscnt_rate_pct: Float,
        dscnt_period_type: Text,
        indep_remain_work_qty: Float,
        anticip_start_date: Timestamp,
        anticip_end_date: Timestamp,
        ev_compute_type: Text,
        ev_etc_compute_type: Text,
        guid: Text,
        tmpl_guid: Text,
        plan_open_state: Text,
    }
}

xer_record! {
    /// `RSRC`: resources (labour, equipment, material), arranged as a tree.
    Resource => resources,
    key(rsrc_id),
    refs(parent_rsrc_id)
    {
        rsrc_id: Int,
        parent_rsrc_id: Int,
        clndr_id: Int,
        role_id: Int,
        shift_id: Int,
        user_id: Int,
        pobs_id: Int,
        guid: Text,
        rsrc_seq_num: Int,
        email_addr: Text,
        employee_code: Text,
        office_phone: Text,
        other_phone: Text,
        rsrc_name: Text,
        rsrc_short_name: Text,
        rsrc_title_name: Text,
        def_qty_per_hr: Float,
        cost_qty_type: Text,
        ot_factor: Float,
        active_flag: Flag,
        auto_compute_act_flag: Flag,
        def_cost_qty_link_flag: Flag,
        ot_flag: Flag,
        curr_id: Int,
        unit_id: Int,
        rsrc_type: Text,
        location_id: Int,
        rsrc_notes: Text,
        load_tasks_flag: Flag,
        level_flag: Flag,
        last_checksum: Text,
    }
}

xer_record! {
    /// `ROLERATE`: role price tiers.
    RoleRate => role_rates,
    key(role_rate_id),
    refs(role_id)
    {
        role_rate_id: Int,
        role_id: Int,
        cost_per_qty: Float,
        cost_per_qty2: Float,
        cost_per_qty3: Float,
        cost_per_qty4: Float,
        cost_per_qty5: Float,
    }
}

xer_record! {
    /// `ACTVTYPE`: activity code types.
    ActivityCodeType => activity_code_types,
    key(actv_code_type_id),
    refs(proj_id)
    {
        actv_code_type_id: Int,
        actv_short_len: Int,
        seq_num: Int,
        actv_code_type: Text,
        proj_id: Int,
        wbs_id: Int,
        actv_code_type_scope: Text,
    }
}

xer_record! {
    /// `RSRCRATE`: resource price tiers effective from a date.
    ResourceRate => resource_rates,
    key(rsrc_rate_id),
    refs(rsrc_id)
    {
        rsrc_rate_id: Int,
        rsrc_id: Int,
        max_qty_per_hr: Float,
        cost_per_qty: Float,
        start_date: Timestamp,
        shift_period_id: Int,
        cost_per_qty2: Float,
        cost_per_qty3: Float,
        cost_per_qty4: Float,
        cost_per_qty5: Float,
    }
}

xer_record! {
    /// `RSRCRCAT`: resource code assignments.
    ResourceCodeAssignment => resource_code_assignments,
    key(rsrc_id, rsrc_catg_type_id),
    refs(rsrc_id, rsrc_catg_id)
    {
        rsrc_id: Int,
        rsrc_catg_type_id: Int,
        rsrc_catg_id: Int,
    }
}

xer_record! {
    /// `TASK`: activities.
    Task => tasks,
    key(task_id),
    refs(proj_id, wbs_id, clndr_id, rsrc_id)
    {
        task_id: Int,
        proj_id: Int,
        wbs_id: Int,
        clndr_id: Int,
        phys_complete_pct: Float,
        rev_fdbk_flag: Flag,
        est_wt: Float,
        lock_plan_flag: Flag,
        auto_compute_act_flag: Flag,
        complete_pct_type: Text,
        task_type: Text,
        duration_type: Text,
        status_code: Text,
        task_code: Text,
        task_name: Text,
        rsrc_id: Int,
        total_float_hr_cnt: Float,
        free_float_hr_cnt: Float,
        remain_drtn_hr_cnt: Float,
        act_work_qty: Float,
        remain_work_qty: Float,
        target_work_qty: Float,
        target_drtn_hr_cnt: Float,
        target_equip_qty: Float,
        act_equip_qty: Float,
        remain_equip_qty: Float,
        cstr_date: Timestamp,
        act_start_date: Timestamp,
        act_end_date: Timestamp,
        late_start_date: Timestamp,
        late_end_date: Timestamp,
        expect_end_date: Timestamp,
        early_start_date: Timestamp,
        early_end_date: Timestamp,
        restart_date: Timestamp,
        reend_date: Timestamp,
        target_start_date: Timestamp,
        target_end_date: Timestamp,
        rem_late_start_date: Timestamp,
        rem_late_end_date: Timestamp,
        cstr_type: Text,
        priority_type: Text,
        suspend_date: Timestamp,
        resume_date: Timestamp,
        int_path: Text,
        int_path_order: Int,
        guid: Text,
        tmpl_guid: Text,
        cstr_date2: Timestamp,
        cstr_type2: Text,
        driving_path_flag: Flag,
        act_this_per_work_qty: Float,
        act_this_per_equip_qty: Float,
        external_early_start_date: Timestamp,
        external_late_end_date: Timestamp,
        create_date: Timestamp,
        update_date: Timestamp,
        create_user: Text,
        update_user: Text,
        location_id: Int,
    }
}

xer_record! {
    /// `ACTVCODE`: activity code values.
    ActivityCode => activity_codes,
    key(actv_code_id),
    refs(actv_code_type_id, parent_actv_code_id)
    {
        actv_code_id: Int,
        parent_actv_code_id: Int,
        actv_code_type_id: Int,
        actv_code_name: Text,
        short_name: Text,
        seq_num: Int,
        color: Text,
        total_assignments: Int,
    }
}

xer_record! {
    /// `TASKPRED`: a logic link. `pred_task_id` is the predecessor and
    /// `task_id` the successor. Either end may be missing from the file.
    TaskPred => predecessors,
    key(task_pred_id),
    refs(task_id, pred_task_id)
    {
        task_pred_id: Int,
        task_id: Int,
        pred_task_id: Int,
        proj_id: Int,
        pred_proj_id: Int,
        pred_type: Text,
        lag_hr_cnt: Float,
        comments: Text,
        float_path: Text,
        aref: Text,
        arls: Text,
    }
}

xer_record! {
    /// `TASKPROC`: activity steps.
    TaskStep => task_steps,
    key(proc_id),
    refs(task_id)
    {
        proc_id: Int,
        task_id: Int,
        proj_id: Int,
        seq_num: Int,
        proc_name: Text,
        complete_flag: Flag,
        proc_wt: Float,
        complete_pct: Float,
        proc_descr: Text,
    }
}

xer_record! {
    /// `TASKRSRC`: resource assignments joining tasks and resources.
    TaskRsrc => task_resources,
    key(taskrsrc_id),
    refs(task_id, rsrc_id)
    {
        taskrsrc_id: Int,
        task_id: Int,
        proj_id: Int,
        cost_qty_link_flag: Flag,
        role_id: Int,
        acct_id: Int,
        rsrc_id: Int,
        pobs_id: Int,
        skill_level: Int,
        remain_qty: Float,
        target_qty: Float,
        remain_qty_per_hr: Float,
        target_lag_drtn_hr_cnt: Float,
        target_qty_per_hr: Float,
        act_ot_qty: Float,
        act_reg_qty: Float,
        relag_drtn_hr_cnt: Float,
        ot_factor: Float,
        cost_per_qty: Float,
        target_cost: Float,
        act_reg_cost: Float,
        act_ot_cost: Float,
        remain_cost: Float,
        act_start_date: Timestamp,
        act_end_date: Timestamp,
        restart_date: Timestamp,
        reend_date: Timestamp,
        target_start_date: Timestamp,
        target_end_date: Timestamp,
        rem_late_start_date: Timestamp,
        rem_late_end_date: Timestamp,
        rollup_dates_flag: Flag,
        target_crv: Text,
        remain_crv: Text,
        actual_crv: Text,
        ts_pend_act_end_flag: Flag,
        guid: Text,
        rate_type: Text,
        act_this_per_cost: Float,
        act_this_per_qty: Float,
        curv_id: Int,
        rsrc_type: Text,
        cost_per_qty_source_type: Text,
        create_user: Text,
        create_date: Timestamp,
        cbs_id: Int,
        has_rsrchours: Flag,
        taskrsrc_sum_id: Int,
    }
}

xer_record! {
    /// `TASKACTV`: activity code assignments.
    TaskActv => task_activity_codes,
    key(task_id, actv_code_id),
    refs(task_id, actv_code_id)
    {
        task_id: Int,
        actv_code_type_id: Int,
        actv_code_id: Int,
        proj_id: Int,
    }
}

xer_record! {
    /// `UDFVALUE`: user-defined field values. `fk_id` points into the table
    /// named by the value's [`UdfType`].
    UdfValue => udf_values,
    key(udf_type_id, fk_id),
    refs(udf_type_id, fk_id)
    {
        udf_type_id: Int,
        fk_id: Int,
        proj_id: Int,
        udf_date: Timestamp,
        udf_number: Float,
        udf_text: Text,
        udf_code_id: Int,
    }
}
