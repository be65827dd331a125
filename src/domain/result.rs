// ==========================================
// 生物质能源潜力计算 - 结果结构
// ==========================================
// 输出形状: {name, indicator, graphics, vector_layers, raster_layers}
// 字段命名与前端图表约定一致（xLabel / backgroundColor 等）
// ==========================================

use serde::{Deserialize, Serialize};

/// 指标数值
///
/// 告警指标输出整数 0,合计值输出浮点数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Flag(i64),
    Amount(f64),
}

impl IndicatorValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            IndicatorValue::Flag(n) => *n as f64,
            IndicatorValue::Amount(v) => *v,
        }
    }
}

impl PartialEq<f64> for IndicatorValue {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

impl From<f64> for IndicatorValue {
    fn from(value: f64) -> Self {
        IndicatorValue::Amount(value)
    }
}

/// 指标条目（告警或合计值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub unit: String,
    pub name: String,
    pub value: IndicatorValue,
}

impl Indicator {
    /// 告警指标: unit = "-", value = 0
    pub fn warning(message: &str) -> Self {
        Self {
            unit: "-".to_string(),
            name: message.to_string(),
            value: IndicatorValue::Flag(0),
        }
    }
}

/// 图表数据序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,

    /// 每个柱一个颜色
    pub background_color: Vec<String>,

    pub data: Vec<f64>,
}

/// 图表数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// 图表描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescriptor {
    /// 图表类型（固定 "bar"）
    #[serde(rename = "type")]
    pub chart_type: String,

    pub x_label: String,

    pub y_label: String,

    pub data: ChartData,
}

/// 计算结果包
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    /// 计算模块名称
    pub name: String,

    /// 告警在前,合计在后
    pub indicator: Vec<Indicator>,

    pub graphics: Vec<ChartDescriptor>,

    /// 本模块不生成矢量/栅格文件,恒为空
    #[serde(default)]
    pub vector_layers: Vec<serde_json::Value>,

    #[serde(default)]
    pub raster_layers: Vec<serde_json::Value>,
}

impl ResultBundle {
    /// 告警指标（unit 为 "-"）
    pub fn warnings(&self) -> impl Iterator<Item = &Indicator> {
        self.indicator.iter().filter(|i| i.unit == "-")
    }

    /// 按名称查找指标
    pub fn find_indicator(&self, name: &str) -> Option<&Indicator> {
        self.indicator.iter().find(|i| i.name == name)
    }
}
