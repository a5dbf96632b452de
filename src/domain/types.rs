// ==========================================
// 机队维修预测排产系统 - 领域类型定义
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 0.2 严重度体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 严重度等级 (Criticality)
// ==========================================
// 红线: 等级制,不是评分制
// 排序: High < Medium < Low < Unknown (rank 0..3)
// 所有排序路径必须使用显式 rank,禁止按标签文本排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criticality {
    High,    // 高 - 安全相关,优先保障
    Medium,  // 中 - 常规重检
    Low,     // 低 - 可延期项目
    Unknown, // 未知标签,排在最后
}

// 序列化走任务卡标签;未识别标签归入 Unknown,不报错
impl Serialize for Criticality {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

impl<'de> Deserialize<'de> for Criticality {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Criticality::from_label(&label))
    }
}

impl Criticality {
    /// 显式严重度序 (0=最紧急)
    pub fn rank(&self) -> u8 {
        match self {
            Criticality::High => 0,
            Criticality::Medium => 1,
            Criticality::Low => 2,
            Criticality::Unknown => 3,
        }
    }

    /// 从任务卡标签解析,未识别标签归入 Unknown
    pub fn from_label(s: &str) -> Self {
        match s.trim() {
            "High" => Criticality::High,
            "Medium" => Criticality::Medium,
            "Low" => Criticality::Low,
            _ => Criticality::Unknown,
        }
    }

    /// 转换为报表输出的标签
    pub fn as_label(&self) -> &'static str {
        match self {
            Criticality::High => "High",
            Criticality::Medium => "Medium",
            Criticality::Low => "Low",
            Criticality::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ==========================================
// 风险类型 (Risk Type)
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 8. Risk Classifier
// 四条规则互不排斥,同一任务可命中多条
// 声明顺序即风险登记表内的次级排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    CapacityShortfall, // 工时缺口 (部分分配)
    LateSchedule,      // 排程晚于到期日
    MissedWindow,      // 窗口内完全未排上
    Overdue,           // 截至基准日已逾期未处置
}

impl RiskType {
    /// 转换为报表存储的字符串
    pub fn as_db_str(&self) -> &'static str {
        match self {
            RiskType::CapacityShortfall => "CAPACITY_SHORTFALL",
            RiskType::LateSchedule => "LATE_SCHEDULE",
            RiskType::MissedWindow => "MISSED_WINDOW",
            RiskType::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_db_str())
    }
}
