// ==========================================
// 生物质能源潜力计算 - 数据来源 Trait
// ==========================================
// 职责: 定义"数据集标识 + 区域 → 资源记录"的获取接口（不包含实现）
// 红线: 计算核心只接收已解析好的记录集合,获取策略全部在此层
// ==========================================

use crate::domain::resource::ResourceRecord;
use crate::importer::error::ImportResult;
use async_trait::async_trait;

// ==========================================
// RecordSource Trait
// ==========================================
// 实现者: PreselectedSource, LocalCacheSource, ChainedSource
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// 来源名称（日志使用）
    fn name(&self) -> &str;

    /// 读取某数据集在指定区域的记录
    ///
    /// # 参数
    /// - dataset: 矢量数据集标识（如 potential_forest）
    /// - region: 区域编码（如 AT111）
    ///
    /// # 返回
    /// - Ok(Some(records)): 本来源提供该数据集（可能为空列表）
    /// - Ok(None): 本来源不提供该数据集
    /// - Err: 读取或解析失败
    async fn load(&self, dataset: &str, region: &str)
        -> ImportResult<Option<Vec<ResourceRecord>>>;
}
