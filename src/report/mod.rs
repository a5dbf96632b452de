// ==========================================
// 机队维修预测排产系统 - 报表层
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 10. 外部接口
// ==========================================
// 职责: 把三张输出表落盘为 CSV 快照,每次运行整体覆盖
// 红线: 空结果也必须写出带完整表头的文件,
//       下游把空风险登记表理解为"计划全部满足",不是读失败
// ==========================================

use crate::domain::plan::AllocationResult;
use crate::domain::risk::RiskEntry;
use crate::engine::summary::CapacitySummaryRow;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

// ===== 报表文件名 =====
pub const MAINTENANCE_PLAN_FILE: &str = "maintenance_plan.csv";
pub const CAPACITY_CALENDAR_FILE: &str = "capacity_calendar.csv";
pub const RISK_REGISTER_FILE: &str = "risk_register.csv";

// ===== 固定列定义 =====
pub const MAINTENANCE_PLAN_COLUMNS: [&str; 14] = [
    "aircraft_id",
    "fleet_type",
    "base",
    "task_id",
    "task_name",
    "criticality",
    "labor_hours",
    "interval_days",
    "window_days",
    "due_date",
    "scheduled",
    "scheduled_date",
    "scheduled_base",
    "allocated_labor_hours",
];

pub const CAPACITY_CALENDAR_COLUMNS: [&str; 5] = [
    "base",
    "date",
    "capacity_labor_hours",
    "used_labor_hours",
    "utilization_pct",
];

// 风险登记表 schema 固定,空表也要声明,下游据此渲染空表格
pub const RISK_REGISTER_COLUMNS: [&str; 7] = [
    "risk_type",
    "aircraft_id",
    "task_id",
    "due_date",
    "scheduled_date",
    "days_late",
    "details",
];

/// 报表模块错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("报表目录创建失败: {0}")]
    DirCreation(#[from] std::io::Error),

    #[error("CSV 写出失败: {0}")]
    CsvWrite(#[from] csv::Error),
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;

// ==========================================
// ReportPaths - 本轮输出文件路径
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct ReportPaths {
    pub maintenance_plan: PathBuf,
    pub capacity_calendar: PathBuf,
    pub risk_register: PathBuf,
}

// ==========================================
// ReportWriter - CSV 报表输出
// ==========================================
pub struct ReportWriter {
    reports_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(reports_dir: &Path) -> Self {
        Self {
            reports_dir: reports_dir.to_path_buf(),
        }
    }

    /// 本轮三张报表的目标路径 (不落盘也可查询)
    pub fn paths(&self) -> ReportPaths {
        ReportPaths {
            maintenance_plan: self.reports_dir.join(MAINTENANCE_PLAN_FILE),
            capacity_calendar: self.reports_dir.join(CAPACITY_CALENDAR_FILE),
            risk_register: self.reports_dir.join(RISK_REGISTER_FILE),
        }
    }

    /// 写出全部报表,整体覆盖上一轮文件
    #[instrument(skip(self, plan, summary, risks), fields(
        plan_rows = plan.len(),
        summary_rows = summary.len(),
        risk_rows = risks.len()
    ))]
    pub fn write_all(
        &self,
        plan: &[AllocationResult],
        summary: &[CapacitySummaryRow],
        risks: &[RiskEntry],
    ) -> ReportResult<ReportPaths> {
        fs::create_dir_all(&self.reports_dir)?;
        let paths = self.paths();

        self.write_plan(&paths.maintenance_plan, plan)?;
        self.write_capacity(&paths.capacity_calendar, summary)?;
        self.write_risks(&paths.risk_register, risks)?;

        debug!(dir = %self.reports_dir.display(), "报表落盘完成");
        Ok(paths)
    }

    fn write_plan(&self, path: &Path, plan: &[AllocationResult]) -> ReportResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(MAINTENANCE_PLAN_COLUMNS)?;
        for result in plan {
            let f = &result.forecast;
            writer.write_record([
                f.aircraft_id.clone(),
                f.fleet_type.clone(),
                f.base.clone(),
                f.task_id.clone(),
                f.task_name.clone(),
                f.criticality.as_label().to_string(),
                fmt_hours(f.labor_hours),
                f.interval_days.to_string(),
                f.window_days.to_string(),
                f.due_date.to_string(),
                result.scheduled.to_string(),
                fmt_opt_date(result.scheduled_date),
                result.scheduled_base.clone(),
                fmt_hours(result.allocated_labor_hours),
            ])?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    fn write_capacity(&self, path: &Path, summary: &[CapacitySummaryRow]) -> ReportResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(CAPACITY_CALENDAR_COLUMNS)?;
        for row in summary {
            writer.write_record([
                row.base.clone(),
                row.date.to_string(),
                fmt_hours(row.capacity_labor_hours),
                fmt_hours(row.used_labor_hours),
                format!("{:.2}", row.utilization_pct),
            ])?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    fn write_risks(&self, path: &Path, risks: &[RiskEntry]) -> ReportResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(RISK_REGISTER_COLUMNS)?;
        for risk in risks {
            writer.write_record([
                risk.risk_type.as_db_str().to_string(),
                risk.aircraft_id.clone(),
                risk.task_id.clone(),
                risk.due_date.to_string(),
                fmt_opt_date(risk.scheduled_date),
                risk.days_late.to_string(),
                risk.notes.clone(),
            ])?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

fn fmt_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

fn fmt_opt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
