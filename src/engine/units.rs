// ==========================================
// 生物质能源潜力计算 - 能量单位换算表
// ==========================================
// 职责: 单位符号解析 + 别名 + 量纲换算
// 红线: 进程级只读表,首次使用时初始化,运行期不可修改
// ==========================================

use crate::engine::error::{CalcResult, CalculationError};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 单位定义（以焦耳为基准）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub joules: f64,
}

/// 能量单位换算表
#[derive(Debug)]
pub struct UnitRegistry {
    units: HashMap<&'static str, UnitDef>,
    aliases: HashMap<&'static str, &'static str>,
}

const JOULE: f64 = 1.0;
const WATT_HOUR: f64 = 3_600.0;
const TONNE_OIL_EQUIVALENT: f64 = 41.868e9;
const THERMOCHEMICAL_CALORIE: f64 = 4.184;

static UNIT_REGISTRY: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::standard);

/// 全局只读换算表
pub fn registry() -> &'static UnitRegistry {
    &UNIT_REGISTRY
}

impl UnitRegistry {
    /// 标准能量单位表
    pub fn standard() -> Self {
        let definitions = [
            ("J", JOULE),
            ("kJ", 1e3 * JOULE),
            ("MJ", 1e6 * JOULE),
            ("GJ", 1e9 * JOULE),
            ("TJ", 1e12 * JOULE),
            ("PJ", 1e15 * JOULE),
            ("EJ", 1e18 * JOULE),
            ("Wh", WATT_HOUR),
            ("kWh", 1e3 * WATT_HOUR),
            ("MWh", 1e6 * WATT_HOUR),
            ("GWh", 1e9 * WATT_HOUR),
            ("TWh", 1e12 * WATT_HOUR),
            ("PWh", 1e15 * WATT_HOUR),
            ("toe", TONNE_OIL_EQUIVALENT),
            ("ktoe", 1e3 * TONNE_OIL_EQUIVALENT),
            ("Mtoe", 1e6 * TONNE_OIL_EQUIVALENT),
            ("cal", THERMOCHEMICAL_CALORIE),
            ("kcal", 1e3 * THERMOCHEMICAL_CALORIE),
        ];

        let units = definitions
            .into_iter()
            .map(|(symbol, joules)| (symbol, UnitDef { symbol, joules }))
            .collect();

        let aliases = HashMap::from([("PetaJoule", "PJ")]);

        Self { units, aliases }
    }

    /// 解析单位标签（先查别名,再查符号,区分大小写）
    pub fn resolve(&self, label: &str) -> Option<&UnitDef> {
        let symbol = self.aliases.get(label).copied().unwrap_or(label);
        self.units.get(symbol)
    }

    /// 是否可识别
    pub fn is_known(&self, label: &str) -> bool {
        self.resolve(label).is_some()
    }

    /// 换算系数: 1 from = factor × to
    pub fn factor(&self, from: &str, to: &str) -> CalcResult<f64> {
        let from_def = self
            .resolve(from)
            .ok_or_else(|| CalculationError::unknown_unit(from))?;
        let to_def = self
            .resolve(to)
            .ok_or_else(|| CalculationError::unknown_unit(to))?;
        Ok(from_def.joules / to_def.joules)
    }

    /// 数值换算
    pub fn convert(&self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        Ok(value * self.factor(from, to)?)
    }
}
