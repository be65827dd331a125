// ==========================================
// 生物质能源潜力计算 - 领域类型定义
// ==========================================
// 资源类别: 城市固体废弃物 / 农业残余物 / 林业残余物 / 畜禽粪污
// 红线: 类别顺序固定,告警与图表均按此顺序输出
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 资源类别 (Resource Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceCategory {
    SolidWaste,  // 城市固体废弃物
    Agriculture, // 农业残余物
    Forest,      // 林业残余物
    Livestock,   // 畜禽粪污
}

impl ResourceCategory {
    /// 固定处理顺序
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::SolidWaste,
        ResourceCategory::Agriculture,
        ResourceCategory::Forest,
        ResourceCategory::Livestock,
    ];

    /// 展示名称（告警文案、图表横轴）
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::SolidWaste => "solid waste",
            ResourceCategory::Agriculture => "agriculture residues",
            ResourceCategory::Forest => "forest residues",
            ResourceCategory::Livestock => "livestock effluents",
        }
    }

    /// 矢量数据集标识（数据获取协作方使用）
    pub fn dataset_id(&self) -> &'static str {
        match self {
            ResourceCategory::SolidWaste => "potential_municipal_solid_waste",
            ResourceCategory::Agriculture => "agricultural_residues_view",
            ResourceCategory::Forest => "potential_forest",
            ResourceCategory::Livestock => "livestock_effluents_view",
        }
    }

    /// 参数键前缀
    pub fn parameter_prefix(&self) -> &'static str {
        match self {
            ResourceCategory::SolidWaste => "waste",
            ResourceCategory::Agriculture => "agric",
            ResourceCategory::Forest => "forst",
            ResourceCategory::Livestock => "lvstk",
        }
    }

    /// 收集率参数键
    pub fn collection_key(&self) -> String {
        format!("{}_coll_perc", self.parameter_prefix())
    }

    /// 热能转换效率参数键
    pub fn heat_key(&self) -> String {
        format!("{}_heat_eff", self.parameter_prefix())
    }

    /// 电能转换效率参数键
    pub fn electricity_key(&self) -> String {
        format!("{}_el_eff", self.parameter_prefix())
    }

    /// 按数据集标识反查类别
    pub fn from_dataset_id(dataset_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.dataset_id() == dataset_id)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 能源输出类型 (Energy Carrier)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyCarrier {
    Heat,        // 热能
    Electricity, // 电能
}
