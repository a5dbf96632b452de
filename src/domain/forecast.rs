// ==========================================
// 机队维修预测排产系统 - 预测条目领域模型
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 2. Forecast Builder
// ==========================================
// 用途: (飞机 × 任务卡 × 到期日) 派生记录
// 生命周期: 仅属于单次运行,重跑即全量重建
// ==========================================

use crate::domain::types::Criticality;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ForecastEntry - 维修任务预测条目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    // ===== 飞机维度 =====
    pub aircraft_id: String,      // 飞机注册号
    pub fleet_type: String,       // 机型
    pub base: String,             // 驻场基地

    // ===== 任务维度 =====
    pub task_id: String,          // 任务卡编号
    pub task_name: String,        // 任务名称
    pub criticality: Criticality, // 严重度等级
    pub labor_hours: f64,         // 所需工时
    pub interval_days: i64,       // 重复间隔 (天)
    pub window_days: i64,         // 施工窗口 (天)

    // ===== 派生字段 =====
    pub due_date: NaiveDate,      // 计算出的到期日
}

impl ForecastEntry {
    /// 施工窗口起点 (含当日)
    ///
    /// 窗口为 [due_date - window_days, due_date],按天粒度
    pub fn window_start(&self) -> NaiveDate {
        self.due_date - chrono::Duration::days(self.window_days)
    }
}
