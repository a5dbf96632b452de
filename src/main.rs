// ==========================================
// 机队维修预测排产系统 - CLI 主入口
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 系统宪法
// 职责: 解析命令行配置,运行管线,打印报表位置
// ==========================================

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use fleet_maintenance_aps::{logging, PipelineConfig, ScheduleOrchestrator};
use std::path::PathBuf;

/// 机队维修预测排产 - 预测/分配/风险一体管线
#[derive(Parser, Debug)]
#[command(name = "fleet-maintenance-aps", version, about)]
struct Cli {
    /// 预测起始日 (YYYY-MM-DD,默认当日)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// 预测视野 (天)
    #[arg(long, default_value_t = fleet_maintenance_aps::DEFAULT_HORIZON_DAYS)]
    horizon_days: i64,

    /// 容量系数 (缩放单基地单日 160 工时基准)
    #[arg(long, default_value_t = 1.0)]
    capacity_multiplier: f64,

    /// 输入数据目录 (fleet.csv / task_cards.csv)
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// 报表输出目录
    #[arg(long, default_value = "reports")]
    reports_dir: PathBuf,

    /// 只计算不落盘
    #[arg(long)]
    no_write: bool,

    /// 以 JSON 输出运行摘要
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let start = cli
        .start_date
        .unwrap_or_else(|| Local::now().date_naive());

    tracing::info!("==================================================");
    tracing::info!("{}", fleet_maintenance_aps::APP_NAME);
    tracing::info!("系统版本: {}", fleet_maintenance_aps::VERSION);
    tracing::info!("==================================================");

    let mut config = PipelineConfig::new(start);
    config.horizon_days = cli.horizon_days;
    config.capacity_multiplier = cli.capacity_multiplier;
    config.write_reports = !cli.no_write;
    config.data_dir = cli.data_dir;
    config.reports_dir = cli.reports_dir;

    let orchestrator = ScheduleOrchestrator::new(config);
    let outcome = orchestrator.run_from_dir()?;

    if cli.json {
        let summary = serde_json::json!({
            "plan_rows": outcome.plan.len(),
            "risk_rows": outcome.risk_register.len(),
            "capacity_rows": outcome.capacity_summary.len(),
            "reports": outcome.report_paths,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("\n=== 机队维修预测排产 ===");
    println!("维修计划:   {}", outcome.report_paths.maintenance_plan.display());
    println!("工时日历:   {}", outcome.report_paths.capacity_calendar.display());
    println!("风险登记表: {}", outcome.report_paths.risk_register.display());
    println!(
        "计划 {} 行 / 风险 {} 行\n",
        outcome.plan.len(),
        outcome.risk_register.len()
    );

    Ok(())
}
