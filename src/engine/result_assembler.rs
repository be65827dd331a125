// ==========================================
// 生物质能源潜力计算 - 结果组装
// ==========================================
// indicator: 告警在前（unit="-", value=0）,两项合计在后
// graphics: 一个柱状图,热/电两组数据,颜色固定
// ==========================================

use crate::config::CalculationConfig;
use crate::domain::resource::Warning;
use crate::domain::result::{
    ChartData, ChartDataset, ChartDescriptor, Indicator, IndicatorValue, ResultBundle,
};
use crate::domain::types::{EnergyCarrier, ResourceCategory};
use crate::engine::presentation_rescaler::RescaledSeries;

pub const TOTAL_HEAT_INDICATOR: &str = "Total biomass heat energy potential";
pub const TOTAL_ELECTRICITY_INDICATOR: &str = "Total biomass electric energy potential";
pub const CHART_X_LABEL: &str = "Biomass resources";

/// 数据序列名称
pub fn dataset_label(carrier: EnergyCarrier) -> &'static str {
    match carrier {
        EnergyCarrier::Heat => "Biomass heat potential",
        EnergyCarrier::Electricity => "Biomass electricity potential",
    }
}

pub struct ResultAssembler<'c> {
    config: &'c CalculationConfig,
    module_name: String,
}

impl<'c> ResultAssembler<'c> {
    pub fn new(config: &'c CalculationConfig, module_name: &str) -> Self {
        Self {
            config,
            module_name: module_name.to_string(),
        }
    }

    /// 组装结果包
    pub fn assemble(
        &self,
        categories: &[ResourceCategory],
        warnings: &[Warning],
        series: &RescaledSeries,
    ) -> ResultBundle {
        let unit = &series.scale.unit;

        let mut indicator: Vec<Indicator> = warnings
            .iter()
            .map(|w| Indicator::warning(w.message()))
            .collect();
        indicator.push(Indicator {
            unit: unit.clone(),
            name: TOTAL_HEAT_INDICATOR.to_string(),
            value: IndicatorValue::Amount(series.total_heat),
        });
        indicator.push(Indicator {
            unit: unit.clone(),
            name: TOTAL_ELECTRICITY_INDICATOR.to_string(),
            value: IndicatorValue::Amount(series.total_electricity),
        });

        let labels: Vec<String> = categories.iter().map(|c| c.label().to_string()).collect();
        let datasets = vec![
            self.dataset(EnergyCarrier::Heat, labels.len(), &series.heat),
            self.dataset(EnergyCarrier::Electricity, labels.len(), &series.electricity),
        ];

        ResultBundle {
            name: self.module_name.clone(),
            indicator,
            graphics: vec![ChartDescriptor {
                chart_type: "bar".to_string(),
                x_label: CHART_X_LABEL.to_string(),
                y_label: unit.clone(),
                data: ChartData { labels, datasets },
            }],
            vector_layers: Vec::new(),
            raster_layers: Vec::new(),
        }
    }

    fn dataset(&self, carrier: EnergyCarrier, bars: usize, data: &[f64]) -> ChartDataset {
        ChartDataset {
            label: dataset_label(carrier).to_string(),
            background_color: vec![self.config.color_for(carrier).to_string(); bars],
            data: data.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::presentation_rescaler::DisplayScale;

    fn series() -> RescaledSeries {
        RescaledSeries {
            scale: DisplayScale {
                unit: "GWh".to_string(),
                factor: 1_000.0,
            },
            heat: vec![4.44, 9.206, 34.145, 0.405],
            electricity: vec![1.776, 3.682, 13.658, 0.162],
            scaled_heat: vec![4.440_001_6, 9.205_776, 34.144_66, 0.404_977],
            scaled_electricity: vec![1.776_000_7, 3.682_31, 13.657_86, 0.161_99],
            total_heat: 48.2,
            total_electricity: 19.3,
        }
    }

    #[test]
    fn test_indicator_order() {
        let config = CalculationConfig::default();
        let assembler = ResultAssembler::new(&config, "CM - Biomass residues potential");
        let warnings = vec![Warning::new("first"), Warning::new("second")];
        let bundle = assembler.assemble(&ResourceCategory::ALL, &warnings, &series());

        let names: Vec<&str> = bundle.indicator.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "first",
                "second",
                TOTAL_HEAT_INDICATOR,
                TOTAL_ELECTRICITY_INDICATOR
            ]
        );
        assert_eq!(bundle.indicator[0].unit, "-");
        assert_eq!(bundle.indicator[2].unit, "GWh");
        assert_eq!(bundle.indicator[2].value, 48.2);
        assert_eq!(bundle.indicator[3].value, 19.3);
    }

    #[test]
    fn test_chart_shape() {
        let config = CalculationConfig::default();
        let assembler = ResultAssembler::new(&config, "CM - Biomass residues potential");
        let bundle = assembler.assemble(&ResourceCategory::ALL, &[], &series());

        assert_eq!(bundle.graphics.len(), 1);
        let chart = &bundle.graphics[0];
        assert_eq!(chart.chart_type, "bar");
        assert_eq!(chart.y_label, "GWh");
        assert_eq!(chart.data.labels.len(), 4);
        assert_eq!(chart.data.datasets[0].label, "Biomass heat potential");
        assert_eq!(chart.data.datasets[0].background_color, vec!["#3e95cd"; 4]);
        assert_eq!(chart.data.datasets[1].background_color, vec!["#8e5ea2"; 4]);
        assert_eq!(chart.data.datasets[1].data, vec![1.776, 3.682, 13.658, 0.162]);
        assert!(bundle.vector_layers.is_empty());
        assert!(bundle.raster_layers.is_empty());
    }
}
