use napi::Result as NapiResult;
use napi_derive::napi;

use tao_model_core::config::{ConfigUpdate, ModelConfig};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// The reference configuration as JSON. The dashboard seeds its state from
/// this on first load.
#[napi]
pub fn model_defaults() -> NapiResult<String> {
    serde_json::to_string(&ModelConfig::default()).map_err(to_napi_error)
}

/// Apply one tagged update to a configuration and return the updated
/// configuration. Every dashboard edit routes through here.
#[napi]
pub fn apply_config_update(config_json: String, update_json: String) -> NapiResult<String> {
    let mut config: ModelConfig = serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let update: ConfigUpdate = serde_json::from_str(&update_json).map_err(to_napi_error)?;
    config.apply(update).map_err(to_napi_error)?;
    serde_json::to_string(&config).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Analyses
// ---------------------------------------------------------------------------

#[napi]
pub fn build_annual_pnl(config_json: String) -> NapiResult<String> {
    let config: ModelConfig = serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let output = tao_model_core::pnl::build_annual_pnl(&config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_sensitivity(config_json: String) -> NapiResult<String> {
    let config: ModelConfig = serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let output =
        tao_model_core::sensitivity::build_sensitivity(&config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_cash_trajectory(config_json: String) -> NapiResult<String> {
    let config: ModelConfig = serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let output = tao_model_core::cash::build_cash_trajectory(&config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// All three analyses in one call.
#[napi]
pub fn evaluate_model(config_json: String) -> NapiResult<String> {
    let config: ModelConfig = serde_json::from_str(&config_json).map_err(to_napi_error)?;
    let output = tao_model_core::engine::evaluate_model(&config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
