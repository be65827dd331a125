// ==========================================
// 生物质能源潜力计算 - 展示单位缩放
// ==========================================
// 职责: 根据全部热/电值的中位数选择展示单位,统一线性缩放
// 规则: 0 值不参与统计;各类别保留 3 位小数,合计保留 1 位小数
// 红线: 仅线性缩放,不改变类别之间的大小关系与比例
// ==========================================

use crate::domain::resource::SplitResult;
use crate::engine::error::{CalcResult, CalculationError};
use crate::engine::units::UnitRegistry;
use tracing::debug;

/// 展示单位与缩放系数
///
/// factor 为 1 个展示单位对应的参考单位数量: display = reference / factor
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayScale {
    pub unit: String,
    pub factor: f64,
}

impl DisplayScale {
    pub fn apply(&self, reference_value: f64) -> f64 {
        reference_value / self.factor
    }
}

/// 缩放后的序列
///
/// heat / electricity 已按展示精度舍入,极小值可能舍入为相同数值;
/// 严格大小关系以 scaled_* 为准（同一缩放系数,未舍入）
#[derive(Debug, Clone, PartialEq)]
pub struct RescaledSeries {
    pub scale: DisplayScale,
    pub heat: Vec<f64>,
    pub electricity: Vec<f64>,
    pub scaled_heat: Vec<f64>,
    pub scaled_electricity: Vec<f64>,
    pub total_heat: f64,
    pub total_electricity: f64,
}

// ==========================================
// PresentationRescaler - 展示缩放器
// ==========================================
#[derive(Debug, Clone)]
pub struct PresentationRescaler {
    reference_unit: String,
    /// 按 factor 升序
    ladder: Vec<DisplayScale>,
    category_decimals: u32,
    total_decimals: u32,
}

impl PresentationRescaler {
    /// 创建缩放器
    ///
    /// ladder 中每个单位都换算成参考单位倍数,并按倍数升序排列
    pub fn new(
        registry: &UnitRegistry,
        reference_unit: &str,
        ladder: &[String],
        category_decimals: u32,
        total_decimals: u32,
    ) -> CalcResult<Self> {
        if ladder.is_empty() {
            return Err(CalculationError::InvalidConfig(
                "展示单位阶梯为空".to_string(),
            ));
        }

        let mut rungs = ladder
            .iter()
            .map(|unit| {
                Ok(DisplayScale {
                    unit: unit.clone(),
                    factor: registry.factor(unit, reference_unit)?,
                })
            })
            .collect::<CalcResult<Vec<_>>>()?;
        rungs.sort_by(|a, b| a.factor.total_cmp(&b.factor));

        Ok(Self {
            reference_unit: reference_unit.to_string(),
            ladder: rungs,
            category_decimals,
            total_decimals,
        })
    }

    /// 选择展示单位
    ///
    /// 取不超过中位数的最大档位;中位数低于最小档位时取最小档位;
    /// 全部为 0 时保持参考单位
    pub fn choose_scale(&self, values: &[f64]) -> DisplayScale {
        let Some(median) = median_of_nonzero_abs(values) else {
            return DisplayScale {
                unit: self.reference_unit.clone(),
                factor: 1.0,
            };
        };

        let chosen = self
            .ladder
            .iter()
            .rev()
            .find(|rung| rung.factor <= median)
            .unwrap_or(&self.ladder[0]);

        debug!(median, unit = %chosen.unit, factor = chosen.factor, "选择展示单位");
        chosen.clone()
    }

    /// 缩放全部类别值与合计
    pub fn rescale(&self, splits: &[SplitResult]) -> RescaledSeries {
        let all_values: Vec<f64> = splits
            .iter()
            .flat_map(|s| [s.heat, s.electricity])
            .collect();
        let scale = self.choose_scale(&all_values);

        let total_heat: f64 = splits.iter().map(|s| s.heat).sum();
        let total_electricity: f64 = splits.iter().map(|s| s.electricity).sum();

        let scaled_heat: Vec<f64> = splits.iter().map(|s| scale.apply(s.heat)).collect();
        let scaled_electricity: Vec<f64> =
            splits.iter().map(|s| scale.apply(s.electricity)).collect();

        RescaledSeries {
            heat: scaled_heat
                .iter()
                .map(|v| round_to(*v, self.category_decimals))
                .collect(),
            electricity: scaled_electricity
                .iter()
                .map(|v| round_to(*v, self.category_decimals))
                .collect(),
            scaled_heat,
            scaled_electricity,
            total_heat: round_to(scale.apply(total_heat), self.total_decimals),
            total_electricity: round_to(scale.apply(total_electricity), self.total_decimals),
            scale,
        }
    }
}

/// 非零绝对值的中位数
pub fn median_of_nonzero_abs(values: &[f64]) -> Option<f64> {
    let mut magnitudes: Vec<f64> = values
        .iter()
        .map(|v| v.abs())
        .filter(|v| *v > 0.0 && v.is_finite())
        .collect();
    if magnitudes.is_empty() {
        return None;
    }
    magnitudes.sort_by(|a, b| a.total_cmp(b));

    let mid = magnitudes.len() / 2;
    if magnitudes.len() % 2 == 0 {
        Some((magnitudes[mid - 1] + magnitudes[mid]) / 2.0)
    } else {
        Some(magnitudes[mid])
    }
}

/// 按小数位舍入
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
