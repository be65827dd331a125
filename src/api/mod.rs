// ==========================================
// 生物质能源潜力计算 - API 层
// ==========================================
// 职责: 提供计算接口与模块签名,供请求处理层/命令行调用
// ==========================================

pub mod calculation_api;
pub mod dto;
pub mod error;

// 重导出核心类型
pub use calculation_api::CalculationApi;
pub use dto::ComputeRequest;
pub use error::{ApiError, ApiResult, ErrorResponse};
