// ==========================================
// 机队维修预测排产系统 - 任务卡领域模型
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 1.2 任务卡主数据
// ==========================================
// 用途: 周期性维修项目定义,只读参考数据
// ==========================================

use crate::domain::fleet::Aircraft;
use crate::domain::types::Criticality;
use serde::{Deserialize, Serialize};

// ==========================================
// TaskDefinition - 维修任务卡
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub task_id: String,            // 任务卡编号
    pub task_name: String,          // 任务名称
    pub fleet_type: String,         // 适用机型
    pub criticality: Criticality,   // 严重度等级
    pub labor_hours: f64,           // 所需工时
    pub interval_days: i64,         // 重复间隔 (天)
    pub window_days: i64,           // 允许提前施工的窗口 (天)
}

impl TaskDefinition {
    /// 判断任务卡是否适用于指定飞机 (机型匹配)
    pub fn applies_to(&self, aircraft: &Aircraft) -> bool {
        self.fleet_type == aircraft.fleet_type
    }
}
