// ==========================================
// 机队维修预测排产系统 - 配置层
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 11. 配置项全集
// ==========================================
// 职责: 管线入口的全部可调参数,无其他隐藏旋钮
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ==========================================
// 常量定义
// ==========================================

/// 单基地单日基准工时预算 (小时)
pub const BASE_DAILY_LABOR_HOURS: f64 = 160.0;

/// 默认预测视野 (天)
pub const DEFAULT_HORIZON_DAYS: i64 = 120;

// ==========================================
// ForecastConfig - 预测配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    pub start_date: NaiveDate, // 预测起始日
    pub horizon_days: i64,     // 预测视野 (天)
    // 无真实维修履历时置 true,由种子算法推导 last_done
    pub seed_history: bool,
}

impl ForecastConfig {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            horizon_days: DEFAULT_HORIZON_DAYS,
            seed_history: true,
        }
    }

    /// 视野终点 (含当日)
    pub fn horizon_end(&self) -> NaiveDate {
        self.start_date + chrono::Duration::days(self.horizon_days)
    }
}

// ==========================================
// CapacityConfig - 工时容量配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityConfig {
    pub labor_hours_per_day: f64, // 单基地单日工时预算
    pub horizon_days: i64,        // 日历覆盖天数
}

// ==========================================
// PipelineConfig - 管线入口配置
// ==========================================
// 外部可调项仅四个: 起始日 / 视野 / 容量系数 / 是否落盘
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub forecast_start: NaiveDate, // 预测起始日 (默认当日)
    pub horizon_days: i64,         // 预测视野 (天)
    pub capacity_multiplier: f64,  // 容量系数 (压缩/放宽人力)
    pub write_reports: bool,       // 是否写出报表文件
    pub data_dir: PathBuf,         // 输入数据目录
    pub reports_dir: PathBuf,      // 报表输出目录
}

impl PipelineConfig {
    pub fn new(forecast_start: NaiveDate) -> Self {
        Self {
            forecast_start,
            horizon_days: DEFAULT_HORIZON_DAYS,
            capacity_multiplier: 1.0,
            write_reports: true,
            data_dir: PathBuf::from("data"),
            reports_dir: PathBuf::from("reports"),
        }
    }

    /// 单基地单日工时预算 = 基准 × 容量系数
    ///
    /// 系数为零或负时钳制到 1 小时: 零容量是合法的压力场景,
    /// 系统必须照常排产并把一切标记为风险,而不是报错
    pub fn daily_labor_hours(&self) -> f64 {
        let scaled = (BASE_DAILY_LABOR_HOURS * self.capacity_multiplier).floor() as i64;
        scaled.max(1) as f64
    }

    pub fn forecast_config(&self) -> ForecastConfig {
        ForecastConfig {
            start_date: self.forecast_start,
            horizon_days: self.horizon_days,
            seed_history: true,
        }
    }

    pub fn capacity_config(&self) -> CapacityConfig {
        CapacityConfig {
            labor_hours_per_day: self.daily_labor_hours(),
            horizon_days: self.horizon_days,
        }
    }
}
