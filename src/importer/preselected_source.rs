// ==========================================
// 生物质能源潜力计算 - 预选数据来源
// ==========================================
// 请求中已附带的矢量数据选择,按区域编码过滤后返回
// ==========================================

use crate::domain::resource::{ResourceRecord, VectorSelection};
use crate::importer::error::ImportResult;
use crate::importer::record_source_trait::RecordSource;
use async_trait::async_trait;

pub struct PreselectedSource {
    selection: VectorSelection,
}

impl PreselectedSource {
    pub fn new(selection: VectorSelection) -> Self {
        Self { selection }
    }
}

#[async_trait]
impl RecordSource for PreselectedSource {
    fn name(&self) -> &str {
        "preselected"
    }

    async fn load(
        &self,
        dataset: &str,
        region: &str,
    ) -> ImportResult<Option<Vec<ResourceRecord>>> {
        Ok(self.selection.get(dataset).map(|records| {
            records
                .iter()
                .filter(|r| r.code == region)
                .cloned()
                .collect()
        }))
    }
}
