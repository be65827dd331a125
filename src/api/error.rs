// ==========================================
// 生物质能源潜力计算 - API 层错误类型
// ==========================================
// 职责: 将计算/数据获取/配置错误转换为调用方可识别的结构化失败
// 红线: 失败即整体失败,不返回部分结果
// ==========================================

use crate::config::ConfigError;
use crate::engine::error::CalculationError;
use crate::importer::error::ImportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("参数格式错误 (key: {key}): {value}")]
    MalformedParameter { key: String, value: String },

    #[error("缺少必需参数: {0}")]
    MissingParameter(String),

    #[error("无法识别的单位 (类别: {category}): '{unit}'")]
    UnknownUnit { category: String, unit: String },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 协作方错误
    // ==========================================
    #[error("数据获取失败: {0}")]
    ImportError(#[from] ImportError),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

// ==========================================
// 从 CalculationError 转换
// ==========================================
impl From<CalculationError> for ApiError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::MalformedParameter { key, value } => {
                ApiError::MalformedParameter { key, value }
            }
            CalculationError::MissingParameter(key) => ApiError::MissingParameter(key),
            CalculationError::UnknownUnit { category, unit } => ApiError::UnknownUnit {
                category: category
                    .map(|c| c.label().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                unit,
            },
            CalculationError::InvalidConfig(msg) => ApiError::ConfigError(msg),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// 错误码（调用方按码分支处理）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MalformedParameter { .. } => "MALFORMED_PARAMETER",
            ApiError::MissingParameter(_) => "MISSING_PARAMETER",
            ApiError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ImportError(_) => "DATA_ACQUISITION_FAILED",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// 结构化失败响应
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// 失败响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ResourceCategory;

    #[test]
    fn test_unknown_unit_conversion() {
        let err: ApiError = CalculationError::UnknownUnit {
            category: Some(ResourceCategory::Agriculture),
            unit: "bushel".to_string(),
        }
        .into();

        assert_eq!(err.code(), "UNKNOWN_UNIT");
        let response = err.to_response();
        assert!(response.message.contains("agriculture residues"));
        assert!(response.message.contains("bushel"));
    }

    #[test]
    fn test_malformed_parameter_conversion() {
        let err: ApiError = CalculationError::MalformedParameter {
            key: "waste_el_eff".to_string(),
            value: "abc".to_string(),
        }
        .into();
        assert_eq!(err.code(), "MALFORMED_PARAMETER");
        assert!(err.to_string().contains("waste_el_eff"));
    }
}
