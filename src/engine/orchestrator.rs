// ==========================================
// 生物质能源潜力计算 - 计算流程编排
// ==========================================
// 流程: 加载 → 校验 → 单位归一化 → 热电拆分 → 展示缩放 → 组装
// 红线: 单次调用无共享可变状态;不可恢复错误整体失败,不返回部分结果
// ==========================================

use crate::config::{CalculationConfig, CM_NAME};
use crate::domain::resource::{ParameterSelection, SplitResult, VectorSelection, Warning};
use crate::domain::result::ResultBundle;
use crate::domain::types::ResourceCategory;
use crate::engine::efficiency_validator::EfficiencyValidator;
use crate::engine::energy_splitter::EnergySplitter;
use crate::engine::error::{CalcResult, CalculationError};
use crate::engine::input_loader::InputLoader;
use crate::engine::presentation_rescaler::PresentationRescaler;
use crate::engine::result_assembler::ResultAssembler;
use crate::engine::unit_normalizer::UnitNormalizer;
use crate::engine::units::{registry, UnitRegistry};
use tracing::{info, instrument};

// ==========================================
// BiomassPotentialCalculator - 计算编排器
// ==========================================
// 只持有只读配置与换算表引用,可跨线程共享
#[derive(Debug, Clone)]
pub struct BiomassPotentialCalculator {
    config: CalculationConfig,
    registry: &'static UnitRegistry,
    rescaler: PresentationRescaler,
}

impl BiomassPotentialCalculator {
    /// 以配置创建（配置会先校验）
    pub fn new(config: CalculationConfig) -> CalcResult<Self> {
        let registry = registry();
        config.validate(registry)?;
        let rescaler = PresentationRescaler::new(
            registry,
            &config.reference_unit,
            &config.display_ladder,
            config.category_decimals,
            config.total_decimals,
        )?;

        Ok(Self {
            config,
            registry,
            rescaler,
        })
    }

    /// 默认配置
    pub fn with_defaults() -> CalcResult<Self> {
        Self::new(CalculationConfig::default())
    }

    pub fn config(&self) -> &CalculationConfig {
        &self.config
    }

    /// 执行一次计算
    #[instrument(
        skip(self, vector_selection, parameter_selection),
        fields(datasets = vector_selection.len(), parameters = parameter_selection.len())
    )]
    pub fn calculate(
        &self,
        vector_selection: &VectorSelection,
        parameter_selection: &ParameterSelection,
    ) -> CalcResult<ResultBundle> {
        // 1. 输入加载
        let inputs = InputLoader::load(vector_selection, parameter_selection)?;

        // 2. 效率校验（仅告警）
        let mut warnings: Vec<Warning> = EfficiencyValidator::validate_all(&inputs.parameters);

        // 3. 单位归一化 + 4. 热电拆分
        let normalizer = UnitNormalizer::new(self.registry, &self.config.reference_unit);
        let mut categories: Vec<ResourceCategory> = Vec::with_capacity(inputs.categories.len());
        let mut splits: Vec<SplitResult> = Vec::with_capacity(inputs.categories.len());
        let mut unit_warnings: Vec<Warning> = Vec::new();

        for category_records in &inputs.categories {
            let category = category_records.category;
            let normalized = normalizer.normalize(category_records)?;
            let triple = inputs
                .parameters
                .triple(category)
                .ok_or_else(|| CalculationError::MissingParameter(category.collection_key()))?;

            splits.push(EnergySplitter::split_aggregate(&normalized.aggregate, &triple));
            categories.push(category);
            unit_warnings.extend(normalized.warning);
        }
        warnings.extend(unit_warnings);

        // 5. 展示缩放
        let series = self.rescaler.rescale(&splits);

        info!(
            warnings = warnings.len(),
            display_unit = %series.scale.unit,
            total_heat = series.total_heat,
            total_electricity = series.total_electricity,
            "生物质能源潜力计算完成"
        );

        // 6. 结果组装
        let assembler = ResultAssembler::new(&self.config, CM_NAME);
        Ok(assembler.assemble(&categories, &warnings, &series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_parameter_selection;
    use crate::domain::resource::{ParameterValue, ResourceRecord};

    fn reference_vectors() -> VectorSelection {
        let mut vectors = VectorSelection::new();
        let rows = [
            ("potential_municipal_solid_waste", "household_waste", 0.0355200131152591),
            ("agricultural_residues_view", "cereal.straw", 0.110469314079422),
            ("livestock_effluents_view", "livestock.effluents", 0.0058316666697247705),
            ("potential_forest", "forest.residues", 0.49168313648148604),
        ];
        for (dataset, source, value) in rows {
            vectors.insert(
                dataset.to_string(),
                vec![ResourceRecord::new("AT111", source, value, "PetaJoule")],
            );
        }
        vectors
    }

    #[test]
    fn test_reference_region() {
        let calculator = BiomassPotentialCalculator::with_defaults().unwrap();
        let bundle = calculator
            .calculate(&reference_vectors(), &default_parameter_selection())
            .unwrap();

        assert_eq!(bundle.name, CM_NAME);
        assert_eq!(bundle.warnings().count(), 0);
        assert_eq!(bundle.indicator.len(), 2);

        let chart = &bundle.graphics[0];
        assert_eq!(chart.y_label, "GWh");
        assert_eq!(chart.data.datasets[0].data[0], 4.44);
        assert_eq!(chart.data.datasets[1].data[0], 1.776);
    }

    #[test]
    fn test_all_empty_categories() {
        let calculator = BiomassPotentialCalculator::with_defaults().unwrap();
        let bundle = calculator
            .calculate(&VectorSelection::new(), &default_parameter_selection())
            .unwrap();

        let chart = &bundle.graphics[0];
        assert_eq!(chart.y_label, "MWh");
        assert!(chart.data.datasets.iter().all(|d| d.data == vec![0.0; 4]));
        assert_eq!(bundle.indicator[0].value, 0.0);
        assert_eq!(bundle.indicator[1].value, 0.0);
    }

    #[test]
    fn test_unknown_unit_aborts() {
        let mut vectors = reference_vectors();
        vectors.insert(
            "potential_forest".to_string(),
            vec![ResourceRecord::new("AT111", "forest.residues", 1.0, "m3")],
        );
        let calculator = BiomassPotentialCalculator::with_defaults().unwrap();
        let err = calculator
            .calculate(&vectors, &default_parameter_selection())
            .unwrap_err();
        assert_eq!(
            err,
            CalculationError::UnknownUnit {
                category: Some(ResourceCategory::Forest),
                unit: "m3".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_parameter_aborts() {
        let mut params = default_parameter_selection();
        params.insert("agric_el_eff".to_string(), ParameterValue::from("twenty"));
        let calculator = BiomassPotentialCalculator::with_defaults().unwrap();
        let err = calculator
            .calculate(&reference_vectors(), &params)
            .unwrap_err();
        assert!(matches!(err, CalculationError::MalformedParameter { .. }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CalculationConfig {
            reference_unit: "PetaWatt".to_string(),
            ..CalculationConfig::default()
        };
        assert!(BiomassPotentialCalculator::new(config).is_err());
    }
}
