// ==========================================
// 机队维修预测排产系统 - 引擎层
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 1.2 模块拆分
// ==========================================
// 职责: 业务规则引擎,数据流向固定:
//   Forecast Builder → Capacity Calendar Builder
//     → Greedy Allocator → {Risk Classifier, Capacity Summarizer}
// 红线: 引擎不做 I/O,所有规则必须输出可解释结果
// ==========================================

pub mod allocator;
pub mod calendar;
pub mod forecast;
pub mod orchestrator;
pub mod risk;
pub mod summary;

// 重导出核心引擎
pub use allocator::{GreedyAllocator, FULL_ALLOCATION_EPSILON};
pub use calendar::CapacityCalendarBuilder;
pub use forecast::ForecastBuilder;
pub use orchestrator::{
    PipelineError, PipelineOutcome, PipelineResult, ScheduleOrchestrator, FLEET_FILE,
    TASK_CARDS_FILE,
};
pub use risk::RiskClassifier;
pub use summary::{CapacitySummarizer, CapacitySummaryRow};
