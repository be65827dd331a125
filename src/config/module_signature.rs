// ==========================================
// 生物质能源潜力计算 - 模块注册描述
// ==========================================
// 职责: 向编排层声明模块名称、参数清单（默认值/上下限）与所需矢量数据集
// 红线: 只读静态描述,计算核心不依赖此处的默认值
// ==========================================

use crate::domain::resource::{ParameterSelection, ParameterValue};
use crate::domain::types::ResourceCategory;
use serde::{Deserialize, Serialize};

pub const CM_NAME: &str = "CM - Biomass residues potential";
pub const CM_ID: u64 = 12384384;
pub const CM_CATEGORY: &str = "Supply";
pub const AUTHORIZED_SCALES: [&str; 4] = ["NUTS 3", "NUTS 2", "NUTS 1", "NUTS 0"];

/// 单个输入参数描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputParameterSpec {
    pub input_name: String,
    pub input_type: String,
    pub input_parameter_name: String,
    /// 默认值（字符串形式,与前端约定一致）
    pub input_value: String,
    pub input_priority: u32,
    pub input_unit: String,
    pub input_min: f64,
    pub input_max: f64,
    pub cm_id: u64,
}

/// 模块签名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSignature {
    pub category: String,
    pub authorized_scale: Vec<String>,
    pub cm_name: String,
    pub layers_needed: Vec<String>,
    pub type_layer_needed: Vec<String>,
    pub vectors_needed: Vec<String>,
    pub cm_url: String,
    pub cm_description: String,
    pub cm_id: u64,
    pub inputs_calculation_module: Vec<InputParameterSpec>,
}

/// 各类别默认值: (收集率, 热效率, 电效率)
fn default_percentages(category: ResourceCategory) -> (u32, u32, u32) {
    match category {
        ResourceCategory::SolidWaste => (90, 50, 20),
        ResourceCategory::Agriculture => (60, 50, 20),
        ResourceCategory::Forest => (50, 50, 20),
        ResourceCategory::Livestock => (50, 50, 20),
    }
}

fn percentage_input(name: String, key: String, default: u32) -> InputParameterSpec {
    InputParameterSpec {
        input_name: name,
        input_type: "input".to_string(),
        input_parameter_name: key,
        input_value: default.to_string(),
        input_priority: 0,
        input_unit: "none".to_string(),
        input_min: 0.0,
        input_max: 100.0,
        cm_id: CM_ID,
    }
}

/// 12 个参数描述（注册顺序: 固废、农业、畜禽、林业）
pub fn input_parameters() -> Vec<InputParameterSpec> {
    [
        ResourceCategory::SolidWaste,
        ResourceCategory::Agriculture,
        ResourceCategory::Livestock,
        ResourceCategory::Forest,
    ]
    .into_iter()
    .flat_map(|category| {
        let phrase = category.label();
        let (coll, heat, el) = default_percentages(category);
        [
            percentage_input(
                format!("Percentage of {} collected [%]", phrase),
                category.collection_key(),
                coll,
            ),
            percentage_input(
                format!("Efficiency in transforming {} in thermal energy [%]", phrase),
                category.heat_key(),
                heat,
            ),
            percentage_input(
                format!("Efficiency in transforming {} in electrical energy [%]", phrase),
                category.electricity_key(),
                el,
            ),
        ]
    })
    .collect()
}

/// 模块签名
pub fn signature() -> ModuleSignature {
    ModuleSignature {
        category: CM_CATEGORY.to_string(),
        authorized_scale: AUTHORIZED_SCALES.iter().map(|s| s.to_string()).collect(),
        cm_name: CM_NAME.to_string(),
        layers_needed: Vec::new(),
        type_layer_needed: Vec::new(),
        vectors_needed: ResourceCategory::ALL
            .iter()
            .map(|c| c.dataset_id().to_string())
            .collect(),
        cm_url: "Do not add something".to_string(),
        cm_description: "Heat and electricity potential from biomass residues".to_string(),
        cm_id: CM_ID,
        inputs_calculation_module: input_parameters(),
    }
}

/// 以默认值构造参数选择
pub fn default_parameter_selection() -> ParameterSelection {
    input_parameters()
        .into_iter()
        .map(|spec| {
            (
                spec.input_parameter_name,
                ParameterValue::Text(spec.input_value),
            )
        })
        .collect()
}
