// ==========================================
// 生物质能源潜力计算 - 本地缓存数据来源
// ==========================================
// 目录结构: <cache_dir>/<dataset>.json 或 <cache_dir>/<dataset>.csv
// JSON: 记录数组 [{code, source, value, unit, note}]
// CSV: 表头 code,source,value,unit,note（note 可空）
// 同名 JSON 与 CSV 同时存在时优先 JSON
// ==========================================

use crate::domain::resource::ResourceRecord;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::record_source_trait::RecordSource;
use async_trait::async_trait;
use csv::{ReaderBuilder, Trim};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct LocalCacheSource {
    cache_dir: PathBuf,
}

impl LocalCacheSource {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// 查找数据集缓存文件
    async fn locate(&self, dataset: &str) -> Option<PathBuf> {
        for ext in ["json", "csv"] {
            let path = self.cache_dir.join(format!("{}.{}", dataset, ext));
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                return Some(path);
            }
        }
        None
    }
}

/// 解析 JSON 记录数组
fn parse_json(path: &Path, bytes: &[u8]) -> ImportResult<Vec<ResourceRecord>> {
    serde_json::from_slice(bytes).map_err(|e| ImportError::JsonParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// 解析 CSV 记录
fn parse_csv(path: &Path, bytes: &[u8]) -> ImportResult<Vec<ResourceRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(bytes);

    reader
        .deserialize::<ResourceRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ImportError::CsvParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

#[async_trait]
impl RecordSource for LocalCacheSource {
    fn name(&self) -> &str {
        "local_cache"
    }

    async fn load(
        &self,
        dataset: &str,
        region: &str,
    ) -> ImportResult<Option<Vec<ResourceRecord>>> {
        let Some(path) = self.locate(dataset).await else {
            debug!(dataset, cache_dir = %self.cache_dir.display(), "缓存中无此数据集");
            return Ok(None);
        };

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| ImportError::FileReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let records = match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => parse_csv(&path, &bytes)?,
            _ => parse_json(&path, &bytes)?,
        };

        let total = records.len();
        let selected: Vec<ResourceRecord> =
            records.into_iter().filter(|r| r.code == region).collect();
        debug!(
            dataset,
            region,
            total,
            selected = selected.len(),
            path = %path.display(),
            "已从本地缓存读取数据集"
        );

        Ok(Some(selected))
    }
}
