use crate::error::ContractError;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{attr, ensure, Addr, Api, DepsMut, Env, MessageInfo, Response, Storage};
use cw_storage_plus::Item;

#[cw_serde]
pub enum OwnershipMessage {
    /// Offers ownership to `new_owner`, optionally expiring at the given UNIX time in seconds
    UpdateOwner {
        new_owner: String,
        expiration: Option<u64>,
    },
    RevokeOwnershipOffer {},
    AcceptOwnership {},
    /// Permanently removes the owner. No privileged operation can run afterwards.
    Disown {},
}

#[cw_serde]
pub struct ContractOwnerResponse {
    /// `None` once the contract has been disowned
    pub owner: Option<String>,
}

#[cw_serde]
pub struct ContractPotentialOwnerResponse {
    pub potential_owner: Option<Addr>,
    pub expiration: Option<u64>,
}

/// Proof that the sender of the current message is the contract owner.
///
/// Can only be obtained through [`Ownership::assert_owner`], so any handler taking an
/// `OwnerCap` is unreachable without the ownership check.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerCap {
    owner: Addr,
}

impl OwnerCap {
    pub fn owner(&self) -> &Addr {
        &self.owner
    }
}

pub struct Ownership {
    owner: Item<Addr>,
    potential_owner: Item<Addr>,
    potential_owner_expiration: Item<u64>,
}

impl Default for Ownership {
    fn default() -> Self {
        Ownership {
            owner: Item::new("owner"),
            potential_owner: Item::new("potential_owner"),
            potential_owner_expiration: Item::new("potential_owner_expiration"),
        }
    }
}

impl Ownership {
    pub fn initialize(&self, storage: &mut dyn Storage, owner: &Addr) -> Result<(), ContractError> {
        self.owner.save(storage, owner)?;
        Ok(())
    }

    pub fn owner(&self, storage: &dyn Storage) -> Result<Option<Addr>, ContractError> {
        Ok(self.owner.may_load(storage)?)
    }

    /// Helper function to query if a given address is the current contract owner.
    pub fn is_contract_owner(
        &self,
        storage: &dyn Storage,
        addr: &Addr,
    ) -> Result<bool, ContractError> {
        Ok(self.owner(storage)?.as_ref() == Some(addr))
    }

    /// Checks that `sender` is the owner and hands out the capability used by privileged handlers.
    pub fn assert_owner(
        &self,
        storage: &dyn Storage,
        sender: &Addr,
    ) -> Result<OwnerCap, ContractError> {
        ensure!(
            self.is_contract_owner(storage, sender)?,
            ContractError::Unauthorized {}
        );
        Ok(OwnerCap {
            owner: sender.clone(),
        })
    }

    pub fn execute(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: OwnershipMessage,
    ) -> Result<Response, ContractError> {
        match msg {
            OwnershipMessage::UpdateOwner {
                new_owner,
                expiration,
            } => {
                let cap = self.assert_owner(deps.storage, &info.sender)?;
                self.update_owner(deps.storage, deps.api, &env, cap, new_owner, expiration)
            }
            OwnershipMessage::RevokeOwnershipOffer {} => {
                let cap = self.assert_owner(deps.storage, &info.sender)?;
                self.revoke_ownership_offer(deps.storage, cap)
            }
            OwnershipMessage::AcceptOwnership {} => {
                self.accept_ownership(deps.storage, &env, &info.sender)
            }
            OwnershipMessage::Disown {} => {
                let cap = self.assert_owner(deps.storage, &info.sender)?;
                self.disown(deps.storage, cap)
            }
        }
    }

    /// Offers ownership to a new address. **Only executable by the current contract owner.**
    pub fn update_owner(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        env: &Env,
        cap: OwnerCap,
        new_owner: String,
        expiration: Option<u64>,
    ) -> Result<Response, ContractError> {
        let new_owner = api.addr_validate(&new_owner)?;
        ensure!(new_owner != cap.owner, ContractError::Unauthorized {});
        if let Some(exp) = expiration {
            ensure!(
                exp > env.block.time.seconds(),
                ContractError::InvalidExpiration {}
            );
        }

        self.potential_owner.save(storage, &new_owner)?;
        match expiration {
            Some(exp) => self.potential_owner_expiration.save(storage, &exp)?,
            // In case an offer is already pending
            None => self.potential_owner_expiration.remove(storage),
        }

        Ok(Response::new().add_attributes(vec![
            attr("action", "update_owner"),
            attr("value", new_owner),
        ]))
    }

    /// Revokes the ownership offer. **Only executable by the current contract owner.**
    pub fn revoke_ownership_offer(
        &self,
        storage: &mut dyn Storage,
        _cap: OwnerCap,
    ) -> Result<Response, ContractError> {
        self.potential_owner.remove(storage);
        self.potential_owner_expiration.remove(storage);
        Ok(Response::new().add_attributes(vec![attr("action", "revoke_ownership_offer")]))
    }

    /// Accepts the ownership of the contract. **Only executable by the offered address.**
    pub fn accept_ownership(
        &self,
        storage: &mut dyn Storage,
        env: &Env,
        sender: &Addr,
    ) -> Result<Response, ContractError> {
        let potential_owner = self.potential_owner.may_load(storage)?;
        ensure!(
            potential_owner.as_ref() == Some(sender),
            ContractError::Unauthorized {}
        );
        if let Some(exp) = self.potential_owner_expiration.may_load(storage)? {
            ensure!(
                env.block.time.seconds() < exp,
                ContractError::Unauthorized {}
            );
        }

        self.owner.save(storage, sender)?;
        self.potential_owner.remove(storage);
        self.potential_owner_expiration.remove(storage);
        Ok(Response::new().add_attributes(vec![
            attr("action", "accept_ownership"),
            attr("value", sender.to_string()),
        ]))
    }

    /// Disowns the contract. **Only executable by the current contract owner.**
    pub fn disown(
        &self,
        storage: &mut dyn Storage,
        _cap: OwnerCap,
    ) -> Result<Response, ContractError> {
        self.owner.remove(storage);
        self.potential_owner.remove(storage);
        self.potential_owner_expiration.remove(storage);
        Ok(Response::new().add_attributes(vec![attr("action", "disown")]))
    }

    pub fn query_owner(&self, storage: &dyn Storage) -> Result<ContractOwnerResponse, ContractError> {
        Ok(ContractOwnerResponse {
            owner: self.owner(storage)?.map(|owner| owner.to_string()),
        })
    }

    pub fn ownership_request(
        &self,
        storage: &dyn Storage,
    ) -> Result<ContractPotentialOwnerResponse, ContractError> {
        Ok(ContractPotentialOwnerResponse {
            potential_owner: self.potential_owner.may_load(storage)?,
            expiration: self.potential_owner_expiration.may_load(storage)?,
        })
    }
}
