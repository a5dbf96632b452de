// ==========================================
// 机队维修预测排产系统 - 导入层
// ==========================================
// 依据: Maintenance_Engine_Specs_v1.0.md - 10. 外部接口
// ==========================================
// 职责: 加载机队/任务卡参考数据 (CSV)
// 红线: 文件或必需列缺失为致命错误,不允许部分运行
// ==========================================

pub mod error;

pub use error::{ImportError, ImportResult};

use crate::domain::fleet::Aircraft;
use crate::domain::task::TaskDefinition;
use crate::domain::types::Criticality;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

// ===== 必需列定义 =====
const FLEET_COLUMNS: [&str; 4] = ["aircraft_id", "fleet_type", "base", "in_service_date"];
const TASK_COLUMNS: [&str; 7] = [
    "task_id",
    "task_name",
    "fleet_type",
    "criticality",
    "labor_hours",
    "interval_days",
    "window_days",
];

/// 加载机队主数据
///
/// # 错误
/// 文件不存在、必需列缺失、字段畸形均为致命错误
#[instrument]
pub fn load_fleet(path: &Path) -> ImportResult<Vec<Aircraft>> {
    let (headers, records) = read_csv(path, &FLEET_COLUMNS)?;
    let mut fleet = Vec::with_capacity(records.len());

    for (row, record) in records.iter().enumerate() {
        // 行号按文件计 (表头为第 1 行)
        let row_no = row + 2;
        fleet.push(Aircraft {
            aircraft_id: field(record, &headers, "aircraft_id", row_no)?,
            fleet_type: field(record, &headers, "fleet_type", row_no)?,
            base: field(record, &headers, "base", row_no)?,
            in_service_date: date_field(record, &headers, "in_service_date", row_no)?,
        });
    }

    debug!(count = fleet.len(), "机队主数据加载完成");
    Ok(fleet)
}

/// 加载任务卡主数据
#[instrument]
pub fn load_task_definitions(path: &Path) -> ImportResult<Vec<TaskDefinition>> {
    let (headers, records) = read_csv(path, &TASK_COLUMNS)?;
    let mut tasks = Vec::with_capacity(records.len());

    for (row, record) in records.iter().enumerate() {
        let row_no = row + 2;
        tasks.push(TaskDefinition {
            task_id: field(record, &headers, "task_id", row_no)?,
            task_name: field(record, &headers, "task_name", row_no)?,
            fleet_type: field(record, &headers, "fleet_type", row_no)?,
            // 未识别标签不报错,归入 Unknown,排序时落在最后
            criticality: Criticality::from_label(&field(record, &headers, "criticality", row_no)?),
            labor_hours: f64_field(record, &headers, "labor_hours", row_no)?,
            interval_days: i64_field(record, &headers, "interval_days", row_no)?,
            window_days: i64_field(record, &headers, "window_days", row_no)?,
        });
    }

    debug!(count = tasks.len(), "任务卡主数据加载完成");
    Ok(tasks)
}

// ==========================================
// 内部辅助
// ==========================================

/// 读取 CSV 并校验必需列,返回 (列名→序号, 数据行)
fn read_csv(
    path: &Path,
    required_columns: &[&str],
) -> ImportResult<(HashMap<String, usize>, Vec<StringRecord>)> {
    let file_name = path.display().to_string();
    if !path.exists() {
        return Err(ImportError::FileNotFound(file_name));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| ImportError::CsvParseError {
            file: file_name.clone(),
            message: e.to_string(),
        })?;

    let headers: HashMap<String, usize> = reader
        .headers()
        .map_err(|e| ImportError::CsvParseError {
            file: file_name.clone(),
            message: e.to_string(),
        })?
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_string(), idx))
        .collect();

    for column in required_columns {
        if !headers.contains_key(*column) {
            return Err(ImportError::MissingColumn {
                file: file_name,
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record.map_err(|e| ImportError::CsvParseError {
            file: file_name.clone(),
            message: e.to_string(),
        })?);
    }
    Ok((headers, records))
}

fn field(
    record: &StringRecord,
    headers: &HashMap<String, usize>,
    name: &str,
    row: usize,
) -> ImportResult<String> {
    let value = headers
        .get(name)
        .and_then(|idx| record.get(*idx))
        .unwrap_or("")
        .trim();
    if value.is_empty() {
        return Err(ImportError::EmptyField {
            row,
            field: name.to_string(),
        });
    }
    Ok(value.to_string())
}

fn f64_field(
    record: &StringRecord,
    headers: &HashMap<String, usize>,
    name: &str,
    row: usize,
) -> ImportResult<f64> {
    let raw = field(record, headers, name, row)?;
    raw.parse::<f64>()
        .map_err(|e| ImportError::TypeConversionError {
            row,
            field: name.to_string(),
            message: e.to_string(),
        })
}

fn i64_field(
    record: &StringRecord,
    headers: &HashMap<String, usize>,
    name: &str,
    row: usize,
) -> ImportResult<i64> {
    let raw = field(record, headers, name, row)?;
    raw.parse::<i64>()
        .map_err(|e| ImportError::TypeConversionError {
            row,
            field: name.to_string(),
            message: e.to_string(),
        })
}

fn date_field(
    record: &StringRecord,
    headers: &HashMap<String, usize>,
    name: &str,
    row: usize,
) -> ImportResult<NaiveDate> {
    let raw = field(record, headers, name, row)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| ImportError::DateFormatError {
        row,
        field: name.to_string(),
        value: raw,
    })
}
