use serde::{Deserialize, Serialize};

/// 전기수용설비(동일 설비 그룹) 한 행의 명판 입력값.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentRecord {
    /// 설비 명칭. 계산에는 쓰이지 않는다.
    pub name: String,
    /// 정격 효율 ηн (0~1)
    pub efficiency_factor: f64,
    /// 부하 역률 cos φ (0~1)
    pub load_power_factor: f64,
    /// 부하 전압 Uн [kV]
    pub load_voltage_kv: f64,
    /// 설비 대수 n
    pub quantity: u32,
    /// 대당 정격 출력 Pн [kW]
    pub rated_power_kw: u32,
    /// 이용률 Kв (0~1)
    pub utilization_rate: f64,
    /// 무효전력 계수 tg φ
    pub reactive_power_factor: f64,
    /// 계산된 중간값. 입력 필드가 바뀔 때마다 다시 계산한다.
    #[serde(skip_deserializing)]
    pub derived: DerivedValues,
}

/// 설비 행별 중간 계산값.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedValues {
    /// n × Pн [kW]
    pub power_total: f64,
    /// n × Pн × Kв [kW]
    pub utilization_power: f64,
    /// n × Pн × Kв × tg φ [kvar]
    pub reactive_power: f64,
    /// n × Pн²
    pub squared_power: f64,
    /// 계산 전류 Ip [A], 0.1 단위 내림
    pub current: f64,
}

/// 값을 0.1 단위로 내림한다. 비유한값은 그대로 통과한다.
pub fn floor_to_tenth(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}

/// 입력 필드로부터 중간값을 다시 계산한 레코드를 반환한다.
///
/// 전압, 역률, 효율 중 하나라도 0이면 전류는 0으로 나누게 되며,
/// 결과는 막지 않고 IEEE 754 규칙대로 ∞ 또는 NaN이 된다.
pub fn calculate_equipment_values(record: &EquipmentRecord) -> EquipmentRecord {
    let quantity = f64::from(record.quantity);
    let rated_power = f64::from(record.rated_power_kw);

    let power_total = quantity * rated_power;
    let utilization_power = power_total * record.utilization_rate;
    let reactive_power = utilization_power * record.reactive_power_factor;
    let squared_power = quantity * rated_power.powi(2);

    // Ip = n·Pн / (√3 · Uн · cos φ · ηн)
    let current = power_total
        / (3f64.sqrt()
            * record.load_voltage_kv
            * record.load_power_factor
            * record.efficiency_factor);

    EquipmentRecord {
        derived: DerivedValues {
            power_total,
            utilization_power,
            reactive_power,
            squared_power,
            current: floor_to_tenth(current),
        },
        ..record.clone()
    }
}
