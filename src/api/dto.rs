// ==========================================
// 生物质能源潜力计算 - 请求 DTO
// ==========================================
// 与计算模块服务约定的请求信封一致
// ==========================================

use crate::domain::resource::{ParameterSelection, VectorSelection};
use serde::{Deserialize, Serialize};

/// 计算请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// 栅格图层选择（本模块不使用）
    #[serde(default)]
    pub inputs_raster_selection: serde_json::Map<String, serde_json::Value>,

    /// 参数选择（百分数,数字或字符串）
    #[serde(default)]
    pub inputs_parameter_selection: ParameterSelection,

    /// 矢量数据选择（数据集标识 → 已按区域过滤的记录）
    #[serde(default)]
    pub inputs_vector_selection: VectorSelection,
}
