//! TOML 설비 목록 파일 읽기.
//!
//! ```toml
//! [[equipment]]
//! name = "연삭기"
//! efficiency_factor = 0.92
//! load_power_factor = 0.9
//! load_voltage_kv = 0.38
//! quantity = 4
//! rated_power_kw = 20
//! utilization_rate = 0.15
//! reactive_power_factor = 1.33
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::load::{calculate_equipment_values, EquipmentRecord};

/// 설비 목록 파일 로드 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("설비 목록 파일을 읽을 수 없음 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("설비 목록 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EquipmentFile {
    #[serde(default)]
    equipment: Vec<EquipmentRecord>,
}

/// TOML 문자열에서 설비 목록을 읽고 각 행의 중간값을 계산한다.
pub fn parse_equipment(content: &str) -> Result<Vec<EquipmentRecord>, ScenarioError> {
    let file: EquipmentFile = toml::from_str(content)?;
    Ok(file
        .equipment
        .iter()
        .map(calculate_equipment_values)
        .collect())
}

/// 파일에서 설비 목록을 읽는다.
pub fn load_equipment(path: &Path) -> Result<Vec<EquipmentRecord>, ScenarioError> {
    let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_equipment(&content)
}
