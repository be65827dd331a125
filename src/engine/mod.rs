// ==========================================
// 生物质能源潜力计算 - 计算引擎层
// ==========================================
// 流程: Loader → Validator → Normalizer → Splitter → Rescaler → Assembler
// ==========================================
// 职责: 纯计算,无 I/O,无跨调用状态
// 红线: 越界效率与多单位只告警;参数非数值/单位无法识别才报错
// ==========================================

pub mod efficiency_validator;
pub mod energy_splitter;
pub mod error;
pub mod input_loader;
pub mod orchestrator;
pub mod presentation_rescaler;
pub mod result_assembler;
pub mod unit_normalizer;
pub mod units;

// 重导出核心引擎
pub use efficiency_validator::EfficiencyValidator;
pub use energy_splitter::EnergySplitter;
pub use error::{CalcResult, CalculationError};
pub use input_loader::{CategoryRecords, InputLoader, LoadedInputs};
pub use orchestrator::BiomassPotentialCalculator;
pub use presentation_rescaler::{DisplayScale, PresentationRescaler, RescaledSeries};
pub use result_assembler::{ResultAssembler, TOTAL_ELECTRICITY_INDICATOR, TOTAL_HEAT_INDICATOR};
pub use unit_normalizer::{NormalizedCategory, UnitNormalizer};
pub use units::{registry, UnitDef, UnitRegistry};
