// ==========================================
// 机队维修预测排产系统 - 核心库
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 系统宪法
// 技术栈: Rust + CSV 快照
// 系统定位: 决策支持系统 (排产结果供人工审阅)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 报表层 - 快照输出
pub mod report;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Criticality, RiskType};

// 领域实体
pub use domain::{
    Aircraft, AllocationResult, CapacityCalendar, CapacitySlot, ForecastEntry, LaborCapacity,
    RiskEntry, TaskDefinition,
};

// 引擎
pub use engine::{
    CapacityCalendarBuilder, CapacitySummarizer, CapacitySummaryRow, ForecastBuilder,
    GreedyAllocator, PipelineError, PipelineOutcome, RiskClassifier, ScheduleOrchestrator,
    FULL_ALLOCATION_EPSILON,
};

// 配置
pub use config::{
    CapacityConfig, ForecastConfig, PipelineConfig, BASE_DAILY_LABOR_HOURS, DEFAULT_HORIZON_DAYS,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "机队维修预测排产系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
