// ==========================================
// 生物质能源潜力计算 - 热电拆分
// ==========================================
// heat = V × c × h ; electricity = V × c × e
// 红线: 不校验、不截断,越界效率原样透传
// ==========================================

use crate::domain::resource::{CategoryAggregate, EfficiencyTriple, SplitResult};
use tracing::trace;

pub struct EnergySplitter;

impl EnergySplitter {
    /// 按效率拆分热/电潜力（参考单位）
    pub fn split(normalized_value: f64, triple: &EfficiencyTriple) -> SplitResult {
        let collected = normalized_value * triple.collection;
        SplitResult {
            heat: collected * triple.heat,
            electricity: collected * triple.electricity,
        }
    }

    /// 对类别汇总做拆分
    pub fn split_aggregate(aggregate: &CategoryAggregate, triple: &EfficiencyTriple) -> SplitResult {
        let result = Self::split(aggregate.normalized_value, triple);
        trace!(
            category = %aggregate.category,
            heat = result.heat,
            electricity = result.electricity,
            "热电拆分"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// 热/电均与 V·c 成正比,且互相之比等于 h/e
        #[test]
        fn split_is_linear(
            value in 0.0f64..1e7,
            c in 0.0f64..2.0,
            h in 0.0f64..1.5,
            e in 0.0f64..1.5
        ) {
            let result = EnergySplitter::split(value, &EfficiencyTriple::new(c, h, e));
            let tolerance = 1e-9 * (value * c).max(1.0);
            prop_assert!((result.heat - value * c * h).abs() <= tolerance);
            prop_assert!((result.electricity - value * c * e).abs() <= tolerance);
            prop_assert!(result.heat >= 0.0 && result.electricity >= 0.0);
        }
    }

    #[test]
    fn test_split_reference_example() {
        let value = 0.0355200131152591 * 1e15 / 3.6e9;
        let result = EnergySplitter::split(value, &EfficiencyTriple::new(0.9, 0.5, 0.2));
        assert!((result.heat - 4_440.001_639_407_4).abs() < 1e-6);
        assert!((result.electricity - 1_776.000_655_763).abs() < 1e-6);
    }

    #[test]
    fn test_zero_energy_gives_zero() {
        let result = EnergySplitter::split(0.0, &EfficiencyTriple::new(1.5, 0.9, 0.9));
        assert_eq!(result, SplitResult::default());
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let result = EnergySplitter::split(100.0, &EfficiencyTriple::new(1.5, 0.8, 0.6));
        assert!((result.heat - 120.0).abs() < 1e-9);
        assert!((result.electricity - 90.0).abs() < 1e-9);
    }
}
