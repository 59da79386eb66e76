use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub struct TokenEvents;

impl TokenEvents {
    /// Emits an `init` event once the supply has been distributed.
    ///
    /// Topics: `("init", owner)`
    /// Data:   `(total_supply, tax_bps, tax_recipient)`
    pub fn initialized(
        env: &Env,
        owner: &Address,
        total_supply: i128,
        tax_bps: u32,
        tax_recipient: &Address,
    ) {
        env.events().publish(
            (symbol_short!("init"), owner),
            (total_supply, tax_bps, tax_recipient),
        );
    }

    /// Emits a `tax` event for every transfer that collected a non-zero tax,
    /// alongside the standard `transfer` events.
    ///
    /// Topics: `("tax", from)`
    /// Data:   `(to, amount, tax, recipient)`
    pub fn tax_collected(
        env: &Env,
        from: &Address,
        to: &Address,
        amount: i128,
        tax: i128,
        recipient: &Address,
    ) {
        env.events().publish((symbol_short!("tax"), from), (to, amount, tax, recipient));
    }

    pub fn paused(env: &Env, pauser: &Address) {
        env.events().publish((symbol_short!("paused"),), pauser);
    }

    pub fn unpaused(env: &Env, pauser: &Address) {
        env.events().publish((symbol_short!("unpaused"),), pauser);
    }

    pub fn owner_changed(env: &Env, previous: &Address, new_owner: &Address) {
        env.events().publish((symbol_short!("owner_set"), previous), new_owner);
    }

    /// "pauser_set" = 10 chars → exceeds the symbol_short! limit.
    pub fn pauser_changed(env: &Env, previous: &Address, new_pauser: &Address) {
        env.events().publish((Symbol::new(env, "pauser_set"), previous), new_pauser);
    }
}
