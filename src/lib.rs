// ==========================================
// 生物质能源潜力计算 - 核心库
// ==========================================
// 资源: 城市固体废弃物 / 农业残余物 / 林业残余物 / 畜禽粪污
// 输出: 热能/电能潜力指标 + 柱状图数据
// 系统定位: 无状态计算模块（单区域、单次调用）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算流程
pub mod engine;

// 数据获取层 - 外部数据
pub mod importer;

// 配置层 - 计算配置与模块签名
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 计算接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CategoryAggregate, EfficiencyParameterSet, EfficiencyTriple, EnergyCarrier, Indicator,
    IndicatorValue, ParameterSelection, ParameterValue, ResourceCategory, ResourceRecord,
    ResultBundle, SplitResult, VectorSelection, Warning,
};

// 引擎
pub use engine::{BiomassPotentialCalculator, CalcResult, CalculationError};

// API
pub use api::{ApiError, CalculationApi, ComputeRequest};

// 配置
pub use config::{CalculationConfig, CM_ID, CM_NAME};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
