// ==========================================
// 生物质能源潜力计算 - 计算引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 仅不可恢复问题走错误;越界效率/多单位走告警
// ==========================================

use crate::domain::types::ResourceCategory;
use thiserror::Error;

/// 计算引擎错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    // ===== 参数错误 =====
    #[error("参数无法解析为数值 (key: {key}): {value}")]
    MalformedParameter { key: String, value: String },

    #[error("缺少必需参数: {0}")]
    MissingParameter(String),

    // ===== 单位错误 =====
    #[error(
        "无法识别的单位 (类别: {}): '{unit}'",
        .category.map(|c| c.label()).unwrap_or("-")
    )]
    UnknownUnit {
        category: Option<ResourceCategory>,
        unit: String,
    },

    // ===== 配置错误 =====
    #[error("计算配置无效: {0}")]
    InvalidConfig(String),
}

impl CalculationError {
    /// 无类别上下文的单位错误（配置校验、单位换算工具使用）
    pub fn unknown_unit(unit: &str) -> Self {
        CalculationError::UnknownUnit {
            category: None,
            unit: unit.to_string(),
        }
    }

    /// 补充类别上下文
    pub fn with_category(self, category: ResourceCategory) -> Self {
        match self {
            CalculationError::UnknownUnit { unit, .. } => CalculationError::UnknownUnit {
                category: Some(category),
                unit,
            },
            other => other,
        }
    }
}

/// Result 类型别名
pub type CalcResult<T> = Result<T, CalculationError>;
