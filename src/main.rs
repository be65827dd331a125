// ==========================================
// 生物质能源潜力计算 - 命令行入口
// ==========================================
// compute: 读取请求 JSON（或按区域从本地缓存取数）,输出结果 JSON
// signature: 输出模块注册描述
// ==========================================

use anyhow::{Context, Result};
use biomass_potential::api::{CalculationApi, ComputeRequest};
use biomass_potential::config::CalculationConfig;
use biomass_potential::importer::{ChainedSource, LocalCacheSource, PreselectedSource, RecordSource};
use biomass_potential::logging::{self, LogFormat};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "biomass-potential", version, about = "生物质残余物热能/电能潜力计算")]
struct Cli {
    /// 以 JSON 格式输出日志
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 执行一次计算
    Compute {
        /// 请求 JSON 文件（inputs_parameter_selection / inputs_vector_selection）
        #[arg(long)]
        payload: Option<PathBuf>,

        /// 本地缓存目录（<dataset>.json / <dataset>.csv）
        #[arg(long, env = "BIOMASS_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// 区域编码（使用本地缓存时必填,如 AT111）
        #[arg(long)]
        region: Option<String>,

        /// 计算配置 JSON 文件
        #[arg(long)]
        config: Option<PathBuf>,

        /// 美化输出
        #[arg(long)]
        pretty: bool,
    },

    /// 输出模块签名
    Signature {
        #[arg(long)]
        pretty: bool,
    },
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CalculationConfig> {
    let config = match path {
        Some(path) => CalculationConfig::from_json_file(path)?,
        None => CalculationConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn read_payload(path: Option<&PathBuf>) -> Result<ComputeRequest> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("无法读取请求文件: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("请求文件格式错误: {}", path.display()))
        }
        None => Ok(ComputeRequest {
            inputs_parameter_selection: biomass_potential::config::default_parameter_selection(),
            ..ComputeRequest::default()
        }),
    }
}

/// 数据来源模式
#[derive(Debug, PartialEq)]
enum DataMode {
    /// 仅使用请求中附带的数据
    Payload,
    /// 请求数据优先,其余从本地缓存读取
    Cache { dir: PathBuf, region: String },
}

/// --data-dir 与 --region 必须同时出现
fn data_mode(data_dir: Option<PathBuf>, region: Option<String>) -> Result<DataMode> {
    match (data_dir, region) {
        (Some(dir), Some(region)) => Ok(DataMode::Cache { dir, region }),
        (None, None) => Ok(DataMode::Payload),
        (Some(_), None) => anyhow::bail!("使用 --data-dir 时必须指定 --region"),
        (None, Some(_)) => anyhow::bail!("使用 --region 时必须指定 --data-dir"),
    }
}

async fn run_compute(
    payload: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    region: Option<String>,
    config: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let mode = data_mode(data_dir, region)?;
    let api = CalculationApi::new(load_config(config.as_ref())?)?;
    let request = read_payload(payload.as_ref())?;

    let bundle = match mode {
        DataMode::Cache { dir, region } => {
            // 请求中已附带的数据优先,其余从本地缓存读取
            let sources: Vec<Box<dyn RecordSource>> = vec![
                Box::new(PreselectedSource::new(request.inputs_vector_selection.clone())),
                Box::new(LocalCacheSource::new(dir)),
            ];
            api.compute_for_region(
                ChainedSource::new(sources),
                &region,
                &request.inputs_parameter_selection,
            )
            .await?
        }
        DataMode::Payload => api.compute(&request)?,
    };

    print_json(&bundle, pretty)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    tracing::info!("生物质能源潜力计算模块 版本: {}", biomass_potential::VERSION);

    match cli.command {
        Command::Compute {
            payload,
            data_dir,
            region,
            config,
            pretty,
        } => run_compute(payload, data_dir, region, config, pretty).await,
        Command::Signature { pretty } => print_json(&biomass_potential::config::signature(), pretty),
    }
}
