// ==========================================
// 生物质能源潜力计算 - 矢量数据选择加载器
// ==========================================
// 职责: 四个资源数据集并发获取,组装为计算核心需要的 VectorSelection
// 红线: 任一数据集不可用即整体失败
// ==========================================

use crate::domain::resource::VectorSelection;
use crate::domain::types::ResourceCategory;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_source_trait::RecordSource;
use futures::future::try_join_all;
use tracing::{info, instrument};

pub struct VectorSelectionLoader<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> VectorSelectionLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 并发读取全部类别的数据集
    #[instrument(skip(self))]
    pub async fn load_all(&self, region: &str) -> ImportResult<VectorSelection> {
        let loads = ResourceCategory::ALL.into_iter().map(|category| async move {
            let dataset = category.dataset_id();
            let records = self.source.load(dataset, region).await?.ok_or_else(|| {
                ImportError::DatasetNotFound {
                    dataset: dataset.to_string(),
                    region: region.to_string(),
                }
            })?;
            Ok::<_, ImportError>((dataset.to_string(), records))
        });

        let selection: VectorSelection = try_join_all(loads).await?.into_iter().collect();

        info!(
            region,
            records = selection.values().map(Vec::len).sum::<usize>(),
            source = self.source.name(),
            "矢量数据选择加载完成"
        );
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::ResourceRecord;
    use crate::importer::preselected_source::PreselectedSource;

    fn full_selection() -> VectorSelection {
        ResourceCategory::ALL
            .iter()
            .map(|c| {
                (
                    c.dataset_id().to_string(),
                    vec![ResourceRecord::new("AT111", "test", 0.1, "PetaJoule")],
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_all() {
        let loader = VectorSelectionLoader::new(PreselectedSource::new(full_selection()));
        let selection = loader.load_all("AT111").await.unwrap();
        assert_eq!(selection.len(), 4);
        assert!(selection.values().all(|records| records.len() == 1));
    }

    #[tokio::test]
    async fn test_missing_dataset_fails() {
        let mut selection = full_selection();
        selection.remove("livestock_effluents_view");
        let loader = VectorSelectionLoader::new(PreselectedSource::new(selection));

        let err = loader.load_all("AT111").await.unwrap_err();
        match err {
            ImportError::DatasetNotFound { dataset, region } => {
                assert_eq!(dataset, "livestock_effluents_view");
                assert_eq!(region, "AT111");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
