// ==========================================
// 机队维修预测排产系统 - 风险登记领域模型
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 8. Risk Classifier
// ==========================================
// 用途: 排产结果的事后风险标记,只读数据源
// 红线: 所有风险必须输出可解释的 notes
// ==========================================

use crate::domain::types::{Criticality, RiskType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RiskEntry - 风险登记条目
// ==========================================
// 同一排产结果可产生多条 (规则互不排斥)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskEntry {
    pub risk_type: RiskType,               // 风险类型
    pub severity: Criticality,             // 严重度 (取自任务卡)
    pub aircraft_id: String,               // 飞机注册号
    pub fleet_type: String,                // 机型
    pub base: String,                      // 基地
    pub task_id: String,                   // 任务卡编号
    pub task_name: String,                 // 任务名称
    pub due_date: NaiveDate,               // 到期日
    pub scheduled_date: Option<NaiveDate>, // 排程日期 (未排上为 None)
    pub days_late: i64,                    // 逾期天数 (未逾期为 0)
    pub notes: String,                     // 风险原因 (可解释性)
}

impl RiskEntry {
    /// 风险登记表排序键: 严重度 rank → 风险类型 → 到期日
    ///
    /// 严重度必须用显式 rank 比较,禁止按标签文本排序
    pub fn sort_key(&self) -> (u8, RiskType, NaiveDate) {
        (self.severity.rank(), self.risk_type, self.due_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(risk_type: RiskType, severity: Criticality, day: u32) -> RiskEntry {
        RiskEntry {
            risk_type,
            severity,
            aircraft_id: "B-1001".to_string(),
            fleet_type: "A320".to_string(),
            base: "PVG".to_string(),
            task_id: "A-CHK".to_string(),
            task_name: "A Check".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            scheduled_date: None,
            days_late: 0,
            notes: String::new(),
        }
    }

    #[test]
    fn test_sort_key_severity_before_type() {
        let mut risks = vec![
            entry(RiskType::CapacityShortfall, Criticality::Low, 1),
            entry(RiskType::Overdue, Criticality::High, 5),
            entry(RiskType::MissedWindow, Criticality::High, 2),
        ];
        risks.sort_by_key(|r| r.sort_key());

        assert_eq!(risks[0].risk_type, RiskType::MissedWindow);
        assert_eq!(risks[1].risk_type, RiskType::Overdue);
        assert_eq!(risks[2].severity, Criticality::Low);
    }
}
