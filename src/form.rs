//! 입력 폼 규칙: 텍스트 입력을 숫자 필드로 바꾸고, 결과를 고정 소수점 문자열로 표시한다.
//! 계산 코어는 문자열을 다루지 않으므로 파싱/표시 규칙은 이 모듈에만 둔다.

use crate::load::{
    calculate_equipment_values, calculate_workshop_results_with, EquipmentRecord,
    ReferenceWorkshop, WorkshopResults,
};

/// 설비 행에서 편집 가능한 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentField {
    Name,
    EfficiencyFactor,
    LoadPowerFactor,
    LoadVoltage,
    Quantity,
    RatedPower,
    UtilizationRate,
    ReactivePowerFactor,
}

impl EquipmentField {
    /// 입력 순서대로 나열한 전체 필드.
    pub const ALL: [EquipmentField; 8] = [
        EquipmentField::Name,
        EquipmentField::EfficiencyFactor,
        EquipmentField::LoadPowerFactor,
        EquipmentField::LoadVoltage,
        EquipmentField::Quantity,
        EquipmentField::RatedPower,
        EquipmentField::UtilizationRate,
        EquipmentField::ReactivePowerFactor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentField::Name => "설비 명칭",
            EquipmentField::EfficiencyFactor => "정격 효율 ηн",
            EquipmentField::LoadPowerFactor => "부하 역률 cos φ",
            EquipmentField::LoadVoltage => "부하 전압 Uн [kV]",
            EquipmentField::Quantity => "설비 대수 n",
            EquipmentField::RatedPower => "정격 출력 Pн [kW]",
            EquipmentField::UtilizationRate => "이용률 Kв",
            EquipmentField::ReactivePowerFactor => "무효전력 계수 tg φ",
        }
    }
}

fn parse_f64(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    t.parse::<f64>().ok()
}

fn parse_u32(text: &str) -> Option<u32> {
    let t = text.trim();
    if t.is_empty() {
        return Some(0);
    }
    t.parse::<u32>().ok()
}

/// 한 필드의 텍스트 입력을 반영한 새 레코드를 돌려준다.
///
/// 빈 문자열은 0으로 간주한다. 숫자로 읽을 수 없으면 `None`을 반환하며
/// 호출 측은 편집을 무시해야 한다. 적용된 경우 중간값까지 다시 계산된다.
pub fn apply_field_edit(
    record: &EquipmentRecord,
    field: EquipmentField,
    text: &str,
) -> Option<EquipmentRecord> {
    let mut next = record.clone();
    match field {
        EquipmentField::Name => next.name = text.to_string(),
        EquipmentField::EfficiencyFactor => next.efficiency_factor = parse_f64(text)?,
        EquipmentField::LoadPowerFactor => next.load_power_factor = parse_f64(text)?,
        EquipmentField::LoadVoltage => next.load_voltage_kv = parse_f64(text)?,
        EquipmentField::Quantity => next.quantity = parse_u32(text)?,
        EquipmentField::RatedPower => next.rated_power_kw = parse_u32(text)?,
        EquipmentField::UtilizationRate => next.utilization_rate = parse_f64(text)?,
        EquipmentField::ReactivePowerFactor => next.reactive_power_factor = parse_f64(text)?,
    }
    Some(calculate_equipment_values(&next))
}

fn number_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

/// 입력 칸에 보여줄 텍스트. 0인 숫자 필드는 빈 칸으로 보인다.
pub fn field_text(record: &EquipmentRecord, field: EquipmentField) -> String {
    match field {
        EquipmentField::Name => record.name.clone(),
        EquipmentField::EfficiencyFactor => number_text(record.efficiency_factor),
        EquipmentField::LoadPowerFactor => number_text(record.load_power_factor),
        EquipmentField::LoadVoltage => number_text(record.load_voltage_kv),
        EquipmentField::Quantity => number_text(f64::from(record.quantity)),
        EquipmentField::RatedPower => number_text(f64::from(record.rated_power_kw)),
        EquipmentField::UtilizationRate => number_text(record.utilization_rate),
        EquipmentField::ReactivePowerFactor => number_text(record.reactive_power_factor),
    }
}

/// 고정 소수점 표시. NaN/∞는 계산 불가로 표시한다.
pub fn fixed(value: f64, places: usize) -> String {
    if value.is_finite() {
        format!("{value:.places$}")
    } else {
        "n/a".to_string()
    }
}

/// 편집 중인 설비 목록. 행은 삭제하지 않고 추가만 한다.
#[derive(Debug, Clone, Default)]
pub struct EquipmentSheet {
    rows: Vec<EquipmentRecord>,
}

impl EquipmentSheet {
    /// 빈 행 `count`개로 시작한다.
    pub fn with_blank_rows(count: usize) -> Self {
        Self {
            rows: vec![EquipmentRecord::default(); count],
        }
    }

    /// 기존 레코드로 시트를 만든다. 중간값은 다시 계산한다.
    pub fn from_records(records: Vec<EquipmentRecord>) -> Self {
        Self {
            rows: records.iter().map(calculate_equipment_values).collect(),
        }
    }

    pub fn rows(&self) -> &[EquipmentRecord] {
        &self.rows
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.push(EquipmentRecord::default());
        self.rows.len() - 1
    }

    /// `index` 행의 필드를 편집한다. 행이 없거나 입력이 무시되면 `false`.
    pub fn edit(&mut self, index: usize, field: EquipmentField, text: &str) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };
        match apply_field_edit(row, field, text) {
            Some(next) => {
                *row = next;
                true
            }
            None => false,
        }
    }

    pub fn results(&self, reference: &ReferenceWorkshop) -> WorkshopResults {
        calculate_workshop_results_with(&self.rows, reference)
    }
}
