// ==========================================
// 机队维修预测排产系统 - 管线编排引擎
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 4. 管线编排
// ==========================================
// 职责: 预测 → 工时日历 → 贪心分配 → {风险分类, 利用汇总}
// 全程单线程同步顺序执行,无挂起点,无 I/O 穿插分配循环
// 每次运行在全新日历上进行,禁止跨运行复用状态
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::fleet::{distinct_bases, Aircraft};
use crate::domain::plan::AllocationResult;
use crate::domain::risk::RiskEntry;
use crate::domain::task::TaskDefinition;
use crate::engine::allocator::GreedyAllocator;
use crate::engine::calendar::CapacityCalendarBuilder;
use crate::engine::forecast::ForecastBuilder;
use crate::engine::risk::RiskClassifier;
use crate::engine::summary::{CapacitySummarizer, CapacitySummaryRow};
use crate::importer::{self, ImportError};
use crate::report::{ReportError, ReportPaths, ReportWriter};
use thiserror::Error;
use tracing::{info, instrument};

/// 机队主数据文件名
pub const FLEET_FILE: &str = "fleet.csv";
/// 任务卡主数据文件名
pub const TASK_CARDS_FILE: &str = "task_cards.csv";

/// 管线错误类型
///
/// 仅参考数据与落盘会失败;空预测、分配失败都不是错误
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("参考数据导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("报表输出失败: {0}")]
    Report(#[from] ReportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;

// ==========================================
// PipelineOutcome - 单次运行的全部产出
// ==========================================
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub plan: Vec<AllocationResult>,          // 维修计划
    pub capacity_summary: Vec<CapacitySummaryRow>, // 工时日历汇总
    pub risk_register: Vec<RiskEntry>,        // 风险登记表
    pub report_paths: ReportPaths,            // 报表目标路径 (未落盘时仅指示)
}

// ==========================================
// ScheduleOrchestrator - 管线编排引擎
// ==========================================
pub struct ScheduleOrchestrator {
    config: PipelineConfig,
    forecast_builder: ForecastBuilder,
    calendar_builder: CapacityCalendarBuilder,
    allocator: GreedyAllocator,
    risk_classifier: RiskClassifier,
    summarizer: CapacitySummarizer,
}

impl ScheduleOrchestrator {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            forecast_builder: ForecastBuilder::new(),
            calendar_builder: CapacityCalendarBuilder::new(),
            allocator: GreedyAllocator::new(),
            risk_classifier: RiskClassifier::new(),
            summarizer: CapacitySummarizer::new(),
        }
    }

    /// 从数据目录加载参考数据并运行管线
    ///
    /// 输入文件: data_dir/fleet.csv + data_dir/task_cards.csv
    #[instrument(skip(self))]
    pub fn run_from_dir(&self) -> PipelineResult<PipelineOutcome> {
        let fleet = importer::load_fleet(&self.config.data_dir.join(FLEET_FILE))?;
        let tasks = importer::load_task_definitions(&self.config.data_dir.join(TASK_CARDS_FILE))?;
        self.run(&fleet, &tasks)
    }

    /// 运行管线 (参考数据已在内存)
    ///
    /// 空机队/空任务卡不报错,照常产出三张结构完整的空表
    #[instrument(skip(self, fleet, tasks), fields(
        fleet_count = fleet.len(),
        task_count = tasks.len(),
        forecast_start = %self.config.forecast_start,
        horizon_days = self.config.horizon_days,
        capacity_multiplier = self.config.capacity_multiplier
    ))]
    pub fn run(
        &self,
        fleet: &[Aircraft],
        tasks: &[TaskDefinition],
    ) -> PipelineResult<PipelineOutcome> {
        let forecast_cfg = self.config.forecast_config();
        let capacity_cfg = self.config.capacity_config();

        // 1. 预测生成
        let forecast = self.forecast_builder.build(fleet, tasks, &forecast_cfg);

        // 2. 工时日历 (每轮全新构建,避免陈旧状态污染)
        let bases = distinct_bases(fleet);
        let mut calendar = self.calendar_builder.build(
            &bases,
            forecast_cfg.start_date,
            capacity_cfg.horizon_days,
            capacity_cfg.labor_hours_per_day,
        );

        // 3. 贪心分配 (唯一的可变共享状态是传入的日历)
        let plan = self.allocator.allocate(forecast, &mut calendar);

        // 4. 风险分类 + 利用汇总 (基准日 = 预测起始日)
        let risk_register = self
            .risk_classifier
            .classify(&plan, forecast_cfg.start_date);
        let capacity_summary = self.summarizer.summarize(&calendar);

        info!(
            plan_rows = plan.len(),
            risk_rows = risk_register.len(),
            slot_rows = capacity_summary.len(),
            "管线运行完成"
        );

        // 5. 落盘 (可选);空结果同样写出完整表头
        let writer = ReportWriter::new(&self.config.reports_dir);
        let report_paths = if self.config.write_reports {
            writer.write_all(&plan, &capacity_summary, &risk_register)?
        } else {
            writer.paths()
        };

        Ok(PipelineOutcome {
            plan,
            capacity_summary,
            risk_register,
            report_paths,
        })
    }
}
