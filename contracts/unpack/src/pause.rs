use soroban_sdk::{Address, Env};

use crate::{
    errors::TokenError,
    events::TokenEvents,
    storage::{require_config, set_config, TokenConfig},
};

/// Loads the config, failing with `Paused` while token movement is halted.
pub fn require_active(env: &Env) -> Result<TokenConfig, TokenError> {
    let config = require_config(env)?;
    if config.paused {
        return Err(TokenError::Paused);
    }
    Ok(config)
}

/// Sets the pause flag. Only the configured pauser may call it.
pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), TokenError> {
    let mut config = require_config(env)?;
    if *caller != config.pauser {
        return Err(TokenError::Unauthorized);
    }
    caller.require_auth();

    match (config.paused, paused) {
        (true, true) => return Err(TokenError::Paused),
        (false, false) => return Err(TokenError::NotPaused),
        _ => {}
    }

    config.paused = paused;
    set_config(env, &config);

    if paused {
        TokenEvents::paused(env, caller);
    } else {
        TokenEvents::unpaused(env, caller);
    }
    Ok(())
}
