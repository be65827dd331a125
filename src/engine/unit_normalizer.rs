// ==========================================
// 生物质能源潜力计算 - 单位归一化
// ==========================================
// 职责: 记录求和 → 解析声明单位 → 换算到参考单位
// 红线: 多单位只告警并取首个单位,不做跨单位合并
// ==========================================

use crate::domain::resource::{CategoryAggregate, Warning};
use crate::engine::error::{CalcResult, CalculationError};
use crate::engine::input_loader::CategoryRecords;
use crate::engine::units::UnitRegistry;
use tracing::{debug, warn};

/// 单个类别的归一化结果
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCategory {
    pub aggregate: CategoryAggregate,
    /// 多单位告警（如有）
    pub warning: Option<Warning>,
}

// ==========================================
// UnitNormalizer - 单位归一化器
// ==========================================
pub struct UnitNormalizer<'r> {
    registry: &'r UnitRegistry,
    reference_unit: String,
}

impl<'r> UnitNormalizer<'r> {
    /// 创建归一化器
    ///
    /// reference_unit 需已在配置校验中确认可识别
    pub fn new(registry: &'r UnitRegistry, reference_unit: &str) -> Self {
        Self {
            registry,
            reference_unit: reference_unit.to_string(),
        }
    }

    /// 归一化单个类别
    pub fn normalize(&self, input: &CategoryRecords<'_>) -> CalcResult<NormalizedCategory> {
        let category = input.category;
        let total_raw_value: f64 = input.records.iter().map(|r| r.value).sum();

        let units = distinct_units(input);
        let Some(first_unit) = units.first() else {
            debug!(category = %category, "空类别,汇总为 0");
            return Ok(NormalizedCategory {
                aggregate: CategoryAggregate {
                    category,
                    label: category.label().to_string(),
                    total_raw_value: 0.0,
                    unit: self.reference_unit.clone(),
                    normalized_value: 0.0,
                },
                warning: None,
            });
        };

        let warning = (units.len() > 1).then(|| {
            warn!(category = %category, units = ?units, "同一类别存在多个单位,使用首个单位");
            Warning::new(format!(
                "The {} records declare more than one unit ({}); only '{}' was used",
                category.label(),
                units.join(", "),
                first_unit
            ))
        });

        let resolved = self
            .registry
            .resolve(first_unit)
            .ok_or_else(|| CalculationError::unknown_unit(first_unit).with_category(category))?;

        let normalized_value = self
            .registry
            .convert(total_raw_value, resolved.symbol, &self.reference_unit)
            .map_err(|e| e.with_category(category))?;

        debug!(
            category = %category,
            total_raw_value,
            unit = resolved.symbol,
            normalized_value,
            reference_unit = %self.reference_unit,
            "类别单位归一化完成"
        );

        Ok(NormalizedCategory {
            aggregate: CategoryAggregate {
                category,
                label: category.label().to_string(),
                total_raw_value,
                unit: resolved.symbol.to_string(),
                normalized_value,
            },
            warning,
        })
    }
}

/// 去重单位标签,保持出现顺序
fn distinct_units<'a>(input: &CategoryRecords<'a>) -> Vec<&'a str> {
    let mut units: Vec<&str> = Vec::new();
    for record in input.records {
        if !units.contains(&record.unit.as_str()) {
            units.push(record.unit.as_str());
        }
    }
    units
}
