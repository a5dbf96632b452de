// ==========================================
// 机队维修预测排产系统 - 排产结果领域模型
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 5. Greedy Allocator 输出
// ==========================================
// 用途: 预测条目 + 分配结果,维修计划表的行记录
// ==========================================

use crate::domain::forecast::ForecastEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// AllocationResult - 排产结果
// ==========================================
// 不变量: 0 <= allocated_labor_hours <= forecast.labor_hours
// scheduled_date 取最后一个贡献分配的日期,未排上则为 None
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    // ===== 预测条目 (原样保留) =====
    pub forecast: ForecastEntry,

    // ===== 分配结果 =====
    pub scheduled: bool,                   // 是否完整排上
    pub scheduled_date: Option<NaiveDate>, // 排程日期 (最后分配日)
    pub scheduled_base: String,            // 消耗工时的基地
    pub allocated_labor_hours: f64,        // 实际分配工时
}

impl AllocationResult {
    /// 工时缺口 (所需 - 已分配,不为负)
    pub fn shortfall_hours(&self) -> f64 {
        (self.forecast.labor_hours - self.allocated_labor_hours).max(0.0)
    }

    /// 是否晚于到期日排程
    pub fn is_late(&self) -> bool {
        match self.scheduled_date {
            Some(d) => self.scheduled && d > self.forecast.due_date,
            None => false,
        }
    }
}
