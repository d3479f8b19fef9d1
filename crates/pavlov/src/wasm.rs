//! WASM bindings for frontend match replay

#![cfg(feature = "wasm")]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    render_history as render, simulate_match, MatchConfig, NamedStrategy, RoundResult,
    StrategySpec,
};

/// Full replay of one match, as handed to the frontend.
#[derive(Serialize)]
struct MatchReplay {
    score_a: i32,
    score_b: i32,
    /// Packed history as a decimal string; JS numbers cannot hold 64 bits.
    history_bits: String,
    history: String,
    rounds: Vec<RoundResult>,
}

/// Replay a match with full round-by-round details
///
/// # Arguments
/// * `config_json` - JSON serialized `MatchConfig`
///
/// # Returns
/// JSON serialized replay: scores, packed and rendered history, per-round rows
#[wasm_bindgen]
pub fn replay_match(config_json: &str) -> Result<JsValue, JsError> {
    let game = MatchConfig::from_json(config_json)
        .and_then(|config| config.to_game())
        .map_err(|e| JsError::new(&e.to_string()))?;

    let result = simulate_match(&game);
    let replay = MatchReplay {
        score_a: result.score_a,
        score_b: result.score_b,
        history_bits: result.history.bits().to_string(),
        history: result.history.to_string(),
        rounds: result.rounds(&game.payoffs),
    };

    serde_wasm_bindgen::to_value(&replay)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
///
/// Catalogue strategies get their description; custom tables get their
/// memory depth and bit tables.
#[wasm_bindgen]
pub fn describe_strategy(strategy_json: &str) -> Result<String, JsError> {
    let spec: StrategySpec = serde_json::from_str(strategy_json)
        .map_err(|e| JsError::new(&format!("Invalid strategy: {}", e)))?;
    let strategy = spec.resolve().map_err(|e| JsError::new(&e.to_string()))?;

    Ok(match NamedStrategy::identify(&strategy) {
        Some(named) => named.description().to_string(),
        None => format!("Custom strategy with {} round(s) of memory: {}", strategy.memory_depth(), strategy),
    })
}

/// Get all catalogue strategies, tables included
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<_> = NamedStrategy::ALL.into_iter().map(NamedStrategy::info).collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Catalogue ids only, for dropdowns
#[wasm_bindgen]
pub fn get_strategy_ids() -> js_sys::Array {
    NamedStrategy::ALL
        .into_iter()
        .map(|named| JsValue::from_str(named.name()))
        .collect()
}

/// Create a strategy JSON (full tables) from a catalogue id or alias
#[wasm_bindgen]
pub fn create_strategy(name: &str) -> Result<String, JsError> {
    let named: NamedStrategy = name.parse().map_err(|e: crate::GameError| JsError::new(&e.to_string()))?;

    serde_json::to_string(&named.strategy())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Render a packed history, e.g. `C/D -> D -> D`
#[wasm_bindgen]
pub fn render_history(history_bits: u64, rounds: u8) -> String {
    render(history_bits, rounds)
}
