// ==========================================
// 机队维修预测排产系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 参考数据缺失/畸形为致命错误,不允许部分运行
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("CSV 解析失败 ({file}): {message}")]
    CsvParseError { file: String, message: String },

    // ===== 表结构错误 =====
    #[error("必需列缺失 ({file}): {column}")]
    MissingColumn { file: String, column: String },

    // ===== 数据映射错误 =====
    #[error("字段为空 (行 {row}, 字段 {field})")]
    EmptyField { row: usize, field: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    #[error("日期格式错误 (行 {row}, 字段 {field}): 期望 YYYY-MM-DD,实际 {value}")]
    DateFormatError {
        row: usize,
        field: String,
        value: String,
    },
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
