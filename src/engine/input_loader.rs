// ==========================================
// 生物质能源潜力计算 - 输入加载器
// ==========================================
// 职责: 百分数参数 → 小数 + 按类别整理记录集合
// 输入: 参数选择 (key → 0~100) + 矢量数据选择 (dataset → records)
// 输出: EfficiencyParameterSet + 四个类别的记录视图
// ==========================================

use crate::domain::resource::{
    EfficiencyParameterSet, ParameterSelection, ResourceRecord, VectorSelection,
};
use crate::domain::types::ResourceCategory;
use crate::engine::error::{CalcResult, CalculationError};
use std::collections::HashMap;
use tracing::{debug, warn};

/// 单个类别的记录视图
#[derive(Debug, Clone, Copy)]
pub struct CategoryRecords<'a> {
    pub category: ResourceCategory,
    pub records: &'a [ResourceRecord],
}

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadedInputs<'a> {
    /// 固定类别顺序
    pub categories: Vec<CategoryRecords<'a>>,
    pub parameters: EfficiencyParameterSet,
}

// ==========================================
// InputLoader - 输入加载器
// ==========================================
pub struct InputLoader;

impl InputLoader {
    /// 加载全部输入
    pub fn load<'a>(
        vector_selection: &'a VectorSelection,
        parameter_selection: &ParameterSelection,
    ) -> CalcResult<LoadedInputs<'a>> {
        let parameters = Self::normalize_parameters(parameter_selection)?;
        Self::ensure_required_parameters(&parameters)?;
        let categories = Self::collect_records(vector_selection);

        Ok(LoadedInputs {
            categories,
            parameters,
        })
    }

    /// 参数归一化: fraction = value / 100
    ///
    /// 所有键都会被归一化（包括与本模块无关的附加键）
    /// 按键名顺序处理,保证多个非法值时报错稳定
    pub fn normalize_parameters(
        parameter_selection: &ParameterSelection,
    ) -> CalcResult<EfficiencyParameterSet> {
        let mut keys: Vec<&String> = parameter_selection.keys().collect();
        keys.sort();

        let mut fractions = HashMap::with_capacity(keys.len());
        for key in keys {
            let raw = &parameter_selection[key];
            let value = raw
                .as_f64()
                .ok_or_else(|| CalculationError::MalformedParameter {
                    key: key.clone(),
                    value: raw.to_string(),
                })?;
            fractions.insert(key.clone(), value / 100.0);
        }

        debug!(count = fractions.len(), "参数归一化完成");
        Ok(EfficiencyParameterSet::from_fractions(fractions))
    }

    /// 检查 4 类别 × 3 参数是否齐全
    pub fn ensure_required_parameters(parameters: &EfficiencyParameterSet) -> CalcResult<()> {
        for category in ResourceCategory::ALL {
            for key in [
                category.collection_key(),
                category.heat_key(),
                category.electricity_key(),
            ] {
                if parameters.get(&key).is_none() {
                    return Err(CalculationError::MissingParameter(key));
                }
            }
        }
        Ok(())
    }

    /// 按固定类别顺序整理记录
    ///
    /// 缺失的数据集视为空集合（汇总为 0）
    pub fn collect_records(vector_selection: &VectorSelection) -> Vec<CategoryRecords<'_>> {
        for dataset in vector_selection.keys() {
            if ResourceCategory::from_dataset_id(dataset).is_none() {
                debug!(dataset = %dataset, "忽略未知数据集");
            }
        }

        ResourceCategory::ALL
            .into_iter()
            .map(|category| {
                let records = match vector_selection.get(category.dataset_id()) {
                    Some(records) => records.as_slice(),
                    None => {
                        warn!(
                            category = %category,
                            dataset = category.dataset_id(),
                            "数据集缺失,按空集合处理"
                        );
                        &[]
                    }
                };
                CategoryRecords { category, records }
            })
            .collect()
    }
}
