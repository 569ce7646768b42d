//! 전기 부하 계산 로직을 라이브러리로 분리하여 CLI 외의 화면 계층에서도 그대로 호출할 수 있게 한다.

pub mod app;
pub mod config;
pub mod form;
pub mod load;
pub mod logging;
pub mod report;
pub mod scenario;
pub mod ui_cli;
