// ==========================================
// 生物质能源潜力计算 - 数据获取层
// ==========================================
// 职责: 将四个数据集标识解析为指定区域的资源记录
// 支持: 请求预选数据、本地缓存（JSON/CSV）、链式回退
// ==========================================

// 模块声明
pub mod chained_source;
pub mod error;
pub mod local_cache_source;
pub mod preselected_source;
pub mod record_source_trait;
pub mod vector_selection_loader;

// 重导出核心类型
pub use chained_source::ChainedSource;
pub use error::{ImportError, ImportResult};
pub use local_cache_source::LocalCacheSource;
pub use preselected_source::PreselectedSource;
pub use record_source_trait::RecordSource;
pub use vector_selection_loader::VectorSelectionLoader;

