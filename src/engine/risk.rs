// ==========================================
// 机队维修预测排产系统 - 风险分类引擎
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 8. Risk Classifier
// 红线: 所有规则必须输出可解释的 notes
// ==========================================
// 职责: 对排产结果做事后风险标记,不回写排产结果
// 四条规则独立判定,互不排斥,同一任务可命中多条:
//   MISSED_WINDOW      完全未排上
//   CAPACITY_SHORTFALL 分配 < 所需 (容差外),含部分分配
//   LATE_SCHEDULE      已排上但排程日期晚于到期日
//   OVERDUE            到期日早于基准日且未按期解决
// 零风险输出空集合,是"计划全部满足"的合法结果
// ==========================================

use crate::domain::plan::AllocationResult;
use crate::domain::risk::RiskEntry;
use crate::domain::types::RiskType;
use crate::engine::allocator::FULL_ALLOCATION_EPSILON;
use chrono::NaiveDate;
use tracing::{debug, instrument};

// ==========================================
// RiskClassifier - 风险分类引擎
// ==========================================
pub struct RiskClassifier {
    // 无状态引擎,不需要注入依赖
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskClassifier {
    pub fn new() -> Self {
        Self {}
    }

    /// 生成风险登记表
    ///
    /// # 参数
    /// - `results`: 排产结果集
    /// - `as_of`: 基准日 (通常取预测起始日)
    ///
    /// # 返回
    /// 按 (严重度 rank, 风险类型, 到期日) 升序的风险条目;
    /// 无风险时返回空列表
    #[instrument(skip(self, results), fields(
        result_count = results.len(),
        as_of = %as_of
    ))]
    pub fn classify(&self, results: &[AllocationResult], as_of: NaiveDate) -> Vec<RiskEntry> {
        let mut risks = Vec::new();

        for result in results {
            // MISSED_WINDOW: 窗口内完全未排上
            if !result.scheduled {
                risks.push(self.entry(
                    result,
                    RiskType::MissedWindow,
                    None,
                    as_of,
                    "维修窗口内未找到可用工时容量".to_string(),
                ));
            }

            // CAPACITY_SHORTFALL: 部分分配 (与是否排上无关)
            let forecast = &result.forecast;
            if result.allocated_labor_hours + FULL_ALLOCATION_EPSILON < forecast.labor_hours {
                risks.push(self.entry(
                    result,
                    RiskType::CapacityShortfall,
                    result.scheduled_date,
                    as_of,
                    format!(
                        "仅分配 {:.1}/{:.1} 工时",
                        result.allocated_labor_hours, forecast.labor_hours
                    ),
                ));
            }

            // LATE_SCHEDULE: 排程晚于到期日
            if result.is_late() {
                risks.push(self.entry(
                    result,
                    RiskType::LateSchedule,
                    result.scheduled_date,
                    as_of,
                    "排程日期晚于到期日,存在维修窗口扰动风险".to_string(),
                ));
            }

            // OVERDUE: 到期日早于基准日且未按期解决
            let unresolved_on_time = !result.scheduled
                || result
                    .scheduled_date
                    .map(|d| d > forecast.due_date)
                    .unwrap_or(false);
            if forecast.due_date < as_of && unresolved_on_time {
                risks.push(self.entry(
                    result,
                    RiskType::Overdue,
                    result.scheduled_date.filter(|_| result.scheduled),
                    as_of,
                    "截至运行基准日已逾期未处置".to_string(),
                ));
            }
        }

        risks.sort_by_key(|r| r.sort_key());
        debug!(risk_count = risks.len(), "风险分类完成");
        risks
    }

    /// 构造单条风险条目
    fn entry(
        &self,
        result: &AllocationResult,
        risk_type: RiskType,
        scheduled_date: Option<NaiveDate>,
        as_of: NaiveDate,
        notes: String,
    ) -> RiskEntry {
        let forecast = &result.forecast;
        RiskEntry {
            risk_type,
            severity: forecast.criticality,
            aircraft_id: forecast.aircraft_id.clone(),
            fleet_type: forecast.fleet_type.clone(),
            base: forecast.base.clone(),
            task_id: forecast.task_id.clone(),
            task_name: forecast.task_name.clone(),
            due_date: forecast.due_date,
            scheduled_date,
            days_late: days_late(forecast.due_date, scheduled_date, as_of),
            notes,
        }
    }
}

/// 逾期天数
///
/// 已排上且晚于到期日 → 排程日与到期日之差;
/// 未解决且已过基准日 → 基准日与到期日之差;其余为 0
fn days_late(due: NaiveDate, scheduled: Option<NaiveDate>, as_of: NaiveDate) -> i64 {
    match scheduled {
        Some(d) if d > due => (d - due).num_days(),
        Some(_) => 0,
        None if as_of > due => (as_of - due).num_days(),
        None => 0,
    }
}
