pub mod constants;
pub mod errors;
pub mod logging;
pub mod static_data;
pub mod storage;

pub mod hooks;
pub mod services;
pub mod state;
