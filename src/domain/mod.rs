// ==========================================
// 机队维修预测排产系统 - 领域层
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 1. 实体全集
// ==========================================
// 职责: 实体与类型定义,强类型记录,禁止动态列访问
// ==========================================

pub mod capacity;
pub mod fleet;
pub mod forecast;
pub mod plan;
pub mod risk;
pub mod task;
pub mod types;

// 重导出核心实体
pub use capacity::{CapacityCalendar, CapacitySlot, LaborCapacity};
pub use fleet::{distinct_bases, Aircraft};
pub use forecast::ForecastEntry;
pub use plan::AllocationResult;
pub use risk::RiskEntry;
pub use task::TaskDefinition;
pub use types::{Criticality, RiskType};
