// ==========================================
// 生物质能源潜力计算 - 领域模型层
// ==========================================
// 职责: 定义资源记录、效率参数、汇总与结果结构
// 红线: 不含计算逻辑,不含数据获取逻辑
// ==========================================

pub mod resource;
pub mod result;
pub mod types;

// 重导出核心类型
pub use resource::{
    CategoryAggregate, EfficiencyParameterSet, EfficiencyTriple, ParameterSelection,
    ParameterValue, ResourceRecord, SplitResult, VectorSelection, Warning,
};
pub use result::{
    ChartData, ChartDataset, ChartDescriptor, Indicator, IndicatorValue, ResultBundle,
};
pub use types::{EnergyCarrier, ResourceCategory};
