// ==========================================
// 生物质能源潜力计算 - 计算配置
// ==========================================
// 加载顺序: 默认值 → JSON 配置文件（可选）→ 环境变量覆写
// 环境变量:
// - BIOMASS_REFERENCE_UNIT: 参考能量单位（默认 MWh）
// - BIOMASS_DISPLAY_LADDER: 展示单位阶梯,逗号分隔（默认 kWh,MWh,GWh,TWh）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::EnergyCarrier;
use crate::engine::error::{CalcResult, CalculationError};
use crate::engine::units::UnitRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

pub const ENV_REFERENCE_UNIT: &str = "BIOMASS_REFERENCE_UNIT";
pub const ENV_DISPLAY_LADDER: &str = "BIOMASS_DISPLAY_LADDER";

/// 计算配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationConfig {
    /// 参考能量单位（归一化、拆分、求和均在此单位下进行）
    pub reference_unit: String,

    /// 展示单位阶梯
    pub display_ladder: Vec<String>,

    /// 类别值保留小数位
    pub category_decimals: u32,

    /// 合计值保留小数位
    pub total_decimals: u32,

    /// 热能柱颜色
    pub heat_color: String,

    /// 电能柱颜色
    pub electricity_color: String,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            reference_unit: "MWh".to_string(),
            display_ladder: vec![
                "kWh".to_string(),
                "MWh".to_string(),
                "GWh".to_string(),
                "TWh".to_string(),
            ],
            category_decimals: 3,
            total_decimals: 1,
            heat_color: "#3e95cd".to_string(),
            electricity_color: "#8e5ea2".to_string(),
        }
    }
}

impl CalculationConfig {
    /// 从 JSON 文件加载（缺省字段取默认值）
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), "已加载计算配置文件");
        Ok(config)
    }

    /// 读取进程环境变量覆写
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// 按键查找覆写值（便于测试注入）
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(unit) = lookup(ENV_REFERENCE_UNIT) {
            let unit = unit.trim();
            if !unit.is_empty() {
                debug!(reference_unit = unit, "环境变量覆写参考单位");
                self.reference_unit = unit.to_string();
            }
        }

        if let Some(ladder) = lookup(ENV_DISPLAY_LADDER) {
            let rungs: Vec<String> = ladder
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect();
            if !rungs.is_empty() {
                debug!(ladder = ?rungs, "环境变量覆写展示单位阶梯");
                self.display_ladder = rungs;
            }
        }

        self
    }

    /// 校验单位可识别、阶梯非空
    pub fn validate(&self, registry: &UnitRegistry) -> CalcResult<()> {
        if !registry.is_known(&self.reference_unit) {
            return Err(CalculationError::InvalidConfig(format!(
                "参考单位无法识别: {}",
                self.reference_unit
            )));
        }
        if self.display_ladder.is_empty() {
            return Err(CalculationError::InvalidConfig(
                "展示单位阶梯为空".to_string(),
            ));
        }
        if let Some(unit) = self
            .display_ladder
            .iter()
            .find(|unit| !registry.is_known(unit))
        {
            return Err(CalculationError::InvalidConfig(format!(
                "展示单位无法识别: {}",
                unit
            )));
        }
        Ok(())
    }

    /// 能源类型对应的柱颜色
    pub fn color_for(&self, carrier: EnergyCarrier) -> &str {
        match carrier {
            EnergyCarrier::Heat => &self.heat_color,
            EnergyCarrier::Electricity => &self.electricity_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::units::registry;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_valid() {
        let config = CalculationConfig::default();
        assert!(config.validate(registry()).is_ok());
        assert_eq!(config.reference_unit, "MWh");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CalculationConfig =
            serde_json::from_str(r#"{"reference_unit": "GJ", "total_decimals": 2}"#).unwrap();
        assert_eq!(config.reference_unit, "GJ");
        assert_eq!(config.total_decimals, 2);
        assert_eq!(config.category_decimals, 3);
        assert_eq!(config.heat_color, "#3e95cd");
    }

    #[test]
    fn test_apply_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_REFERENCE_UNIT, " GWh "),
            (ENV_DISPLAY_LADDER, "GWh, TWh,,PWh"),
        ]);
        let config = CalculationConfig::default()
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.reference_unit, "GWh");
        assert_eq!(config.display_ladder, vec!["GWh", "TWh", "PWh"]);
    }

    #[test]
    fn test_validate_rejects_unknown_units() {
        let mut config = CalculationConfig::default();
        config.reference_unit = "horsepower".to_string();
        assert!(matches!(
            config.validate(registry()),
            Err(CalculationError::InvalidConfig(_))
        ));

        let mut config = CalculationConfig::default();
        config.display_ladder.push("bananas".to_string());
        assert!(config.validate(registry()).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.json");
        std::fs::write(&path, r##"{"heat_color": "#ff0000"}"##).unwrap();

        let config = CalculationConfig::from_json_file(&path).unwrap();
        assert_eq!(config.color_for(EnergyCarrier::Heat), "#ff0000");
        assert_eq!(config.color_for(EnergyCarrier::Electricity), "#8e5ea2");

        let missing = CalculationConfig::from_json_file(&dir.path().join("none.json"));
        assert!(matches!(missing, Err(ConfigError::FileRead { .. })));
    }
}
