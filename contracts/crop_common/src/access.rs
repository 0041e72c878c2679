use soroban_sdk::{contracttype, log, Address, Env, Map, Vec};

use crate::errors::InsuranceError;

/// Identity configuration a contract is constructed with.
///
/// Guards never read global state on their own; the owning contract loads
/// its `Authority` from storage and hands it to [`require_owner`] or
/// [`require_authorized_provider`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Authority {
    pub owner: Address,
    pub providers: Map<Address, bool>,
}

impl Authority {
    pub fn new(env: &Env, owner: Address) -> Self {
        Self {
            owner,
            providers: Map::new(env),
        }
    }

    pub fn with_providers(env: &Env, owner: Address, providers: &Vec<Address>) -> Self {
        let mut authority = Self::new(env, owner);
        for provider in providers.iter() {
            authority.providers.set(provider, true);
        }
        authority
    }

    pub fn is_owner(&self, caller: &Address) -> bool {
        self.owner == *caller
    }

    pub fn is_authorized_provider(&self, caller: &Address) -> bool {
        self.providers.get(caller.clone()).unwrap_or(false)
    }

    pub fn authorize_provider(&mut self, provider: Address) {
        self.providers.set(provider, true);
    }

    /// Drops the entry so authorize/revoke churn does not grow the config.
    pub fn revoke_provider(&mut self, provider: Address) {
        self.providers.remove(provider);
    }
}

pub fn require_owner(
    env: &Env,
    authority: &Authority,
    caller: &Address,
) -> Result<(), InsuranceError> {
    caller.require_auth();

    if !authority.is_owner(caller) {
        log!(env, "rejected non-owner caller", caller.clone());
        return Err(InsuranceError::Unauthorized);
    }
    Ok(())
}

pub fn require_authorized_provider(
    env: &Env,
    authority: &Authority,
    caller: &Address,
) -> Result<(), InsuranceError> {
    caller.require_auth();

    if !authority.is_authorized_provider(caller) {
        log!(env, "rejected unauthorized provider", caller.clone());
        return Err(InsuranceError::Unauthorized);
    }
    Ok(())
}
