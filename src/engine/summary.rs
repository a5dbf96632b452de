// ==========================================
// 机队维修预测排产系统 - 工时利用汇总引擎
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 9. Capacity Summarizer
// ==========================================
// 职责: 把分配后的工时日历聚合为利用率报表行
// 分配器输出的下游消费者,薄聚合层
// ==========================================

use crate::domain::capacity::{CapacityCalendar, LaborCapacity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// CapacitySummaryRow - 工时日历报表行
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitySummaryRow {
    pub base: String,              // 基地代码
    pub date: NaiveDate,           // 日历日期
    pub capacity_labor_hours: f64, // 当日工时预算
    pub used_labor_hours: f64,     // 已用工时
    pub utilization_pct: f64,      // 利用率百分比 (预算为 0 时按 0)
}

// ==========================================
// CapacitySummarizer - 工时利用汇总引擎
// ==========================================
pub struct CapacitySummarizer {
    // 无状态引擎,不需要注入依赖
}

impl Default for CapacitySummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CapacitySummarizer {
    pub fn new() -> Self {
        Self {}
    }

    /// 聚合为每 (基地, 日期) 一行的利用率报表
    ///
    /// 输出按 (基地升序, 日期升序),空日历返回空列表
    #[instrument(skip(self, calendar), fields(slot_count = calendar.len()))]
    pub fn summarize(&self, calendar: &CapacityCalendar) -> Vec<CapacitySummaryRow> {
        let mut rows: Vec<CapacitySummaryRow> = calendar
            .slots()
            .iter()
            .map(|slot| CapacitySummaryRow {
                base: slot.base.clone(),
                date: slot.date,
                capacity_labor_hours: slot.capacity_labor_hours,
                used_labor_hours: slot.used_labor_hours,
                utilization_pct: slot.utilization_pct(),
            })
            .collect();

        rows.sort_by(|a, b| a.base.cmp(&b.base).then(a.date.cmp(&b.date)));
        rows
    }
}
