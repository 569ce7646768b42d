//! 전기 부하 계산 모듈 모음.
//! 설비별 중간값 계산, 그룹 집계, 계수표(6.3/6.4) 조회로 구성한다.

pub mod coefficient_tables;
pub mod equipment;
pub mod workshop;

pub use coefficient_tables::*;
pub use equipment::*;
pub use workshop::*;
