// ==========================================
// 生物质能源潜力计算 - 数据获取错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 数据获取错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件读取失败 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("JSON 解析失败 ({path}): {message}")]
    JsonParseError { path: String, message: String },

    #[error("CSV 解析失败 ({path}): {message}")]
    CsvParseError { path: String, message: String },

    // ===== 数据集错误 =====
    #[error("数据集不可用: {dataset}（区域 {region}）")]
    DatasetNotFound { dataset: String, region: String },
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
