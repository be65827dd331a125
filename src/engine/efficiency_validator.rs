// ==========================================
// 生物质能源潜力计算 - 效率参数校验器
// ==========================================
// 职责: 收集率/热电效率合法性校验,生成告警文案
// 红线: 只告警,不截断,不中断流程（观察并报告）
// ==========================================

use crate::domain::resource::{EfficiencyParameterSet, EfficiencyTriple, Warning};
use crate::domain::types::ResourceCategory;
use tracing::warn;

pub struct EfficiencyValidator;

impl EfficiencyValidator {
    /// 校验单个类别
    ///
    /// 规则:
    /// 1) collection ∉ [0,1] → "not between 0 and 100"
    /// 2) heat + electricity > 1 → "exceed 100."
    pub fn check(category: ResourceCategory, triple: &EfficiencyTriple) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let label = category.label();

        if triple.collection < 0.0 || triple.collection > 1.0 {
            warn!(category = %category, collection = triple.collection, "收集率越界");
            warnings.push(Warning::new(format!(
                "The efficiency in collecting {} is not between 0 and 100",
                label
            )));
        }

        if triple.heat + triple.electricity > 1.0 {
            warn!(
                category = %category,
                heat = triple.heat,
                electricity = triple.electricity,
                "热电效率之和超过 100%"
            );
            warnings.push(Warning::new(format!(
                "The sum of the efficiency to generate heat and electricity from {}, exceed 100.",
                label
            )));
        }

        warnings
    }

    /// 按固定类别顺序校验全部类别
    ///
    /// 缺少参数的类别跳过（加载器已保证齐全）
    pub fn validate_all(parameters: &EfficiencyParameterSet) -> Vec<Warning> {
        ResourceCategory::ALL
            .into_iter()
            .filter_map(|category| {
                parameters
                    .triple(category)
                    .map(|triple| Self::check(category, &triple))
            })
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn params_with(overrides: &[(&str, f64)]) -> EfficiencyParameterSet {
        let mut fractions = HashMap::new();
        for category in ResourceCategory::ALL {
            fractions.insert(category.collection_key(), 0.5);
            fractions.insert(category.heat_key(), 0.5);
            fractions.insert(category.electricity_key(), 0.2);
        }
        for (key, value) in overrides {
            fractions.insert(key.to_string(), *value);
        }
        EfficiencyParameterSet::from_fractions(fractions)
    }

    #[test]
    fn test_valid_fractions_no_warning() {
        for (c, h, e) in [(0.0, 0.0, 0.0), (1.0, 0.5, 0.5), (0.3, 1.0, 0.0), (0.9, 0.5, 0.2)] {
            let triple = EfficiencyTriple::new(c, h, e);
            assert!(EfficiencyValidator::check(ResourceCategory::Forest, &triple).is_empty());
        }
    }

    #[test]
    fn test_collection_out_of_range() {
        for c in [-0.01, 1.5] {
            let warnings = EfficiencyValidator::check(
                ResourceCategory::SolidWaste,
                &EfficiencyTriple::new(c, 0.5, 0.2),
            );
            assert_eq!(
                warnings,
                vec![Warning::new(
                    "The efficiency in collecting solid waste is not between 0 and 100"
                )]
            );
        }
    }

    #[test]
    fn test_heat_electricity_sum_exceeds() {
        // 与收集率无关
        for c in [0.5, 2.0] {
            let warnings = EfficiencyValidator::check(
                ResourceCategory::Livestock,
                &EfficiencyTriple::new(c, 0.7, 0.4),
            );
            assert!(warnings.contains(&Warning::new(
                "The sum of the efficiency to generate heat and electricity from livestock effluents, exceed 100."
            )));
        }
    }

    #[test]
    fn test_warnings_isolated_per_category() {
        let params = params_with(&[("agric_coll_perc", 1.2)]);
        let warnings = EfficiencyValidator::validate_all(&params);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("agriculture residues"));
    }

    proptest! {
        /// 收集率告警当且仅当 c ∉ [0,1];热电告警当且仅当 h + e > 1
        #[test]
        fn warnings_match_ranges(
            c in -2.0f64..3.0,
            h in -1.0f64..2.0,
            e in -1.0f64..2.0
        ) {
            let warnings = EfficiencyValidator::check(
                ResourceCategory::Agriculture,
                &EfficiencyTriple::new(c, h, e),
            );
            let collection_warned = warnings
                .iter()
                .any(|w| w.message().contains("not between 0 and 100"));
            let sum_warned = warnings.iter().any(|w| w.message().contains("exceed 100."));

            prop_assert_eq!(collection_warned, !(0.0..=1.0).contains(&c));
            prop_assert_eq!(sum_warned, h + e > 1.0);
            prop_assert!(warnings.len() <= 2);
        }

        /// 合法区间内从不告警
        #[test]
        fn valid_triples_never_warn(
            c in 0.0f64..=1.0,
            h in 0.0f64..=1.0,
            share in 0.0f64..=1.0
        ) {
            let e = (1.0 - h) * share;
            let triple = EfficiencyTriple::new(c, h, e);
            prop_assume!(h + e <= 1.0);
            prop_assert!(EfficiencyValidator::check(ResourceCategory::Forest, &triple).is_empty());
        }
    }

    #[test]
    fn test_encounter_order() {
        let params = params_with(&[
            ("lvstk_coll_perc", -0.1),
            ("waste_heat_eff", 0.9),
            ("forst_coll_perc", 1.1),
        ]);
        let warnings = EfficiencyValidator::validate_all(&params);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message()).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("solid waste"));
        assert!(messages[1].contains("forest residues"));
        assert!(messages[2].contains("livestock effluents"));
    }
}
