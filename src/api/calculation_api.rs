// ==========================================
// 生物质能源潜力计算 - 计算 API
// ==========================================
// 职责: 请求信封 → 计算核心 → 结果包;模块签名查询
// 说明: 计算核心为同步纯计算,可被多个请求并发共享
// ==========================================

use crate::api::dto::ComputeRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::config::{signature, CalculationConfig, ModuleSignature};
use crate::domain::resource::ParameterSelection;
use crate::domain::result::ResultBundle;
use crate::engine::BiomassPotentialCalculator;
use crate::importer::{RecordSource, VectorSelectionLoader};
use std::sync::Arc;
use tracing::{error, info};

// ==========================================
// CalculationApi - 计算 API
// ==========================================
#[derive(Debug, Clone)]
pub struct CalculationApi {
    calculator: Arc<BiomassPotentialCalculator>,
}

impl CalculationApi {
    /// 以配置创建
    pub fn new(config: CalculationConfig) -> ApiResult<Self> {
        Ok(Self {
            calculator: Arc::new(BiomassPotentialCalculator::new(config)?),
        })
    }

    /// 默认配置 + 环境变量覆写
    pub fn from_env() -> ApiResult<Self> {
        Self::new(CalculationConfig::default().with_env_overrides())
    }

    /// 执行计算（请求已附带矢量数据）
    pub fn compute(&self, request: &ComputeRequest) -> ApiResult<ResultBundle> {
        info!(
            datasets = request.inputs_vector_selection.len(),
            parameters = request.inputs_parameter_selection.len(),
            "收到计算请求"
        );

        self.calculator
            .calculate(
                &request.inputs_vector_selection,
                &request.inputs_parameter_selection,
            )
            .map_err(|e| {
                let err = ApiError::from(e);
                error!(code = err.code(), error = %err, "计算失败");
                err
            })
    }

    /// 先经数据来源获取区域数据,再执行计算
    pub async fn compute_for_region<S: RecordSource>(
        &self,
        source: S,
        region: &str,
        parameters: &ParameterSelection,
    ) -> ApiResult<ResultBundle> {
        let region = region.trim();
        if region.is_empty() {
            return Err(ApiError::InvalidInput("区域编码为空".to_string()));
        }

        let vector_selection = VectorSelectionLoader::new(source).load_all(region).await?;
        let request = ComputeRequest {
            inputs_parameter_selection: parameters.clone(),
            inputs_vector_selection: vector_selection,
            ..ComputeRequest::default()
        };
        self.compute(&request)
    }

    /// 模块签名
    pub fn signature(&self) -> ModuleSignature {
        signature()
    }
}
