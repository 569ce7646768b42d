use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

use crate::config::{self, Config, OutputFormat};
use crate::form::{fixed, EquipmentSheet};
use crate::load::{self, DISCRETE_FALLBACK_COEFFICIENT, RANGED_FALLBACK_COEFFICIENT};
use crate::report;
use crate::scenario;
use crate::ui_cli;

/// 전기 부하 계산 도구 명령줄 인자.
#[derive(Debug, Parser)]
#[command(name = "electrical_load_toolbox", version, about = "설비 그룹/공장 전기 부하 계산기")]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// TOML 설비 목록 파일로 계산한다
    Calc {
        file: PathBuf,
        /// 출력 형식 (생략 시 설정값)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// 대화형으로 설비를 입력하고 계산한다 (기본)
    Interactive {
        /// 시작 시 불러올 TOML 설비 목록
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// 계수표를 직접 조회한다. 이용률은 0.1 단위로 반올림된다
    Lookup {
        n: u32,
        rate: f64,
        /// 표 6.4(모선용 구간표)를 조회한다
        #[arg(long)]
        ranged: bool,
    },
    /// 계수표 6.3/6.4를 출력한다
    Tables,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 설비 목록 파일 오류
    #[error("설비 목록 오류: {0}")]
    Scenario(#[from] scenario::ScenarioError),
    /// 보고서 직렬화 오류
    #[error("보고서 생성 오류: {0}")]
    Report(#[from] serde_json::Error),
}

/// 설정 파일을 로드한다. 없으면 기본 설정으로 만든다.
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    Ok(config::load_from(path)?)
}

/// 선택된 명령을 실행한다.
pub fn run(command: Option<Command>, cfg: &Config) -> Result<(), AppError> {
    match command.unwrap_or(Command::Interactive { file: None }) {
        Command::Calc { file, format } => calc(&file, format.unwrap_or(cfg.output), cfg),
        Command::Interactive { file } => {
            let sheet = match file {
                Some(path) => EquipmentSheet::from_records(scenario::load_equipment(&path)?),
                None => EquipmentSheet::with_blank_rows(cfg.rows),
            };
            ui_cli::run_sheet(sheet, cfg)
        }
        Command::Lookup { n, rate, ranged } => {
            lookup(n, rate, ranged);
            Ok(())
        }
        Command::Tables => {
            ui_cli::print_tables();
            Ok(())
        }
    }
}

fn calc(file: &Path, format: OutputFormat, cfg: &Config) -> Result<(), AppError> {
    let records = scenario::load_equipment(file)?;
    info!(file = %file.display(), rows = records.len(), "설비 목록 로드");
    let results = load::calculate_workshop_results_with(&records, &cfg.reference_workshop);
    match format {
        OutputFormat::Text => print!("{}", report::render_text(&records, &results)),
        OutputFormat::Json => println!(
            "{}",
            report::render_json(&records, &cfg.reference_workshop, &results)?
        ),
    }
    Ok(())
}

fn lookup(n: u32, rate: f64, ranged: bool) {
    let rate_key = load::round_rate_key(rate);
    let (found, fallback, table) = if ranged {
        (load::lookup_ranged(n, rate_key), RANGED_FALLBACK_COEFFICIENT, "6.4")
    } else {
        (load::lookup_discrete(n, rate_key), DISCRETE_FALLBACK_COEFFICIENT, "6.3")
    };
    match found {
        Some(k) => println!("표 {table}: n={n}, Kв={rate_key:.2} → Kp = {}", fixed(k, 2)),
        None => println!(
            "표 {table}: n={n}, Kв={rate_key:.2} 항목 없음 → 기본값 Kp = {}",
            fixed(fallback, 2)
        ),
    }
}
