// ==========================================
// 生物质能源潜力计算 - 配置层
// ==========================================
// 职责: 计算配置（单位、精度、颜色）+ 模块注册描述
// 覆写: 默认值 → 配置文件 → 环境变量
// ==========================================

pub mod calc_config;
pub mod error;
pub mod module_signature;

// 重导出核心配置
pub use calc_config::CalculationConfig;
pub use error::{ConfigError, ConfigResult};
pub use module_signature::{
    default_parameter_selection, signature, InputParameterSpec, ModuleSignature, CM_ID, CM_NAME,
};
