// ==========================================
// 生物质能源潜力计算 - 资源与效率实体
// ==========================================
// 职责: 资源记录、效率参数、类别汇总、热电拆分结果
// 红线: 单次调用内创建并丢弃,不跨调用共享
// ==========================================

use crate::domain::types::ResourceCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// ResourceRecord - 资源记录
// ==========================================
// 数据集一行: code / source / value / unit / note
// 已由调用方按区域过滤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// 区域编码（如 NUTS 编码 AT111）
    pub code: String,

    /// 子来源标签（如 household_waste / cereal.straw）
    pub source: String,

    /// 数量
    pub value: f64,

    /// 计量单位标签（如 PetaJoule）
    pub unit: String,

    /// 备注（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ResourceRecord {
    pub fn new(code: &str, source: &str, value: f64, unit: &str) -> Self {
        Self {
            code: code.to_string(),
            source: source.to_string(),
            value,
            unit: unit.to_string(),
            note: None,
        }
    }
}

/// 矢量数据选择: 数据集标识 → 记录列表
pub type VectorSelection = HashMap<String, Vec<ResourceRecord>>;

/// 参数选择: 参数键 → 原始值（百分数）
pub type ParameterSelection = HashMap<String, ParameterValue>;

// ==========================================
// ParameterValue - 原始参数值
// ==========================================
// 前端可能传数字,也可能传字符串 "90"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl ParameterValue {
    /// 解析为有限浮点数
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            ParameterValue::Number(n) => *n,
            ParameterValue::Text(s) => s.trim().parse::<f64>().ok()?,
            ParameterValue::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Number(n) => write!(f, "{}", n),
            ParameterValue::Text(s) => write!(f, "{}", s),
            ParameterValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

// ==========================================
// EfficiencyTriple - 单类别效率三元组（小数形式）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyTriple {
    /// 收集率
    pub collection: f64,
    /// 热能转换效率
    pub heat: f64,
    /// 电能转换效率
    pub electricity: f64,
}

impl EfficiencyTriple {
    pub fn new(collection: f64, heat: f64, electricity: f64) -> Self {
        Self {
            collection,
            heat,
            electricity,
        }
    }
}

// ==========================================
// EfficiencyParameterSet - 归一化后的参数集
// ==========================================
// 输入为百分数 [0,100],此处保存 value / 100
// 不做截断,越界值由校验器告警
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EfficiencyParameterSet {
    fractions: HashMap<String, f64>,
}

impl EfficiencyParameterSet {
    pub fn from_fractions(fractions: HashMap<String, f64>) -> Self {
        Self { fractions }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.fractions.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// 读取某类别的效率三元组
    ///
    /// 返回 None 表示至少一个键缺失
    pub fn triple(&self, category: ResourceCategory) -> Option<EfficiencyTriple> {
        Some(EfficiencyTriple {
            collection: self.get(&category.collection_key())?,
            heat: self.get(&category.heat_key())?,
            electricity: self.get(&category.electricity_key())?,
        })
    }
}

// ==========================================
// CategoryAggregate - 类别汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub category: ResourceCategory,

    /// 展示名称
    pub label: String,

    /// 原始值合计
    pub total_raw_value: f64,

    /// 解析后的单位符号（空类别为参考单位）
    pub unit: String,

    /// 换算到参考单位后的值
    pub normalized_value: f64,
}

// ==========================================
// SplitResult - 热电拆分结果（参考单位）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SplitResult {
    pub heat: f64,
    pub electricity: f64,
}

// ==========================================
// Warning - 校验告警（无严重等级）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warning(pub String);

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_lookup() {
        let mut fractions = HashMap::new();
        fractions.insert("waste_coll_perc".to_string(), 0.9);
        fractions.insert("waste_heat_eff".to_string(), 0.5);
        fractions.insert("waste_el_eff".to_string(), 0.2);
        let params = EfficiencyParameterSet::from_fractions(fractions);

        let triple = params.triple(ResourceCategory::SolidWaste).unwrap();
        assert_eq!(triple, EfficiencyTriple::new(0.9, 0.5, 0.2));
        assert!(params.triple(ResourceCategory::Forest).is_none());
    }

    #[test]
    fn test_parameter_value_parsing() {
        let values: ParameterSelection =
            serde_json::from_str(r#"{"a": "90", "b": 50, "c": " 20.5 ", "d": "abc", "e": true}"#)
                .unwrap();
        assert_eq!(values["a"].as_f64(), Some(90.0));
        assert_eq!(values["b"].as_f64(), Some(50.0));
        assert_eq!(values["c"].as_f64(), Some(20.5));
        assert_eq!(values["d"].as_f64(), None);
        assert_eq!(values["e"].as_f64(), None);
        assert_eq!(ParameterValue::from("NaN").as_f64(), None);
    }

    #[test]
    fn test_record_note_is_optional() {
        let json = r#"{"code":"AT111","source":"household_waste","value":0.5,"unit":"PetaJoule"}"#;
        let record: ResourceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.note, None);
        assert_eq!(record.unit, "PetaJoule");
    }
}
