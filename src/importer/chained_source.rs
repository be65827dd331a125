// ==========================================
// 生物质能源潜力计算 - 链式数据来源
// ==========================================
// 按顺序尝试各来源,第一个提供该数据集的来源胜出
// 典型顺序: 请求预选数据 → 本地缓存
// ==========================================

use crate::domain::resource::ResourceRecord;
use crate::importer::error::ImportResult;
use crate::importer::record_source_trait::RecordSource;
use async_trait::async_trait;
use tracing::debug;

pub struct ChainedSource {
    sources: Vec<Box<dyn RecordSource>>,
}

impl ChainedSource {
    pub fn new(sources: Vec<Box<dyn RecordSource>>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl RecordSource for ChainedSource {
    fn name(&self) -> &str {
        "chained"
    }

    async fn load(
        &self,
        dataset: &str,
        region: &str,
    ) -> ImportResult<Option<Vec<ResourceRecord>>> {
        for source in &self.sources {
            if let Some(records) = source.load(dataset, region).await? {
                debug!(dataset, region, source = source.name(), "数据集来源命中");
                return Ok(Some(records));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::VectorSelection;
    use crate::importer::preselected_source::PreselectedSource;

    fn source_with(dataset: &str, value: f64) -> Box<dyn RecordSource> {
        let mut selection = VectorSelection::new();
        selection.insert(
            dataset.to_string(),
            vec![ResourceRecord::new("AT111", "test", value, "PJ")],
        );
        Box::new(PreselectedSource::new(selection))
    }

    #[tokio::test]
    async fn test_first_source_wins() {
        let chained = ChainedSource::new(vec![
            source_with("potential_forest", 1.0),
            source_with("potential_forest", 2.0),
        ]);
        let records = chained.load("potential_forest", "AT111").await.unwrap().unwrap();
        assert_eq!(records[0].value, 1.0);
    }

    #[tokio::test]
    async fn test_falls_through_to_later_source() {
        let chained = ChainedSource::new(vec![
            source_with("potential_forest", 1.0),
            source_with("agricultural_residues_view", 3.0),
        ]);
        let records = chained
            .load("agricultural_residues_view", "AT111")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(records[0].value, 3.0);
        assert!(chained.load("potential_forest_x", "AT111").await.unwrap().is_none());
    }
}
