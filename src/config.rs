use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::load::ReferenceWorkshop;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 사람이 읽는 표 형식
    Text,
    /// JSON
    Json,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 로그 필터 (`RUST_LOG`가 있으면 그쪽이 우선)
    pub log_level: String,
    pub output: OutputFormat,
    /// 대화형 시트의 초기 빈 행 수
    pub rows: usize,
    /// 공장 전체 계산용 참조 사례
    pub reference_workshop: ReferenceWorkshop,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
            rows: 8,
            reference_workshop: ReferenceWorkshop::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}
