use crate::{
    error::ContractError,
    ownership::{OwnerCap, Ownership},
};
use cosmwasm_std::{DepsMut, Env, MessageInfo};

pub struct ExecuteContext<'a> {
    pub deps: DepsMut<'a>,
    pub info: MessageInfo,
    pub env: Env,
}

impl<'a> ExecuteContext<'a> {
    #[inline]
    pub fn new(deps: DepsMut<'a>, info: MessageInfo, env: Env) -> ExecuteContext<'a> {
        ExecuteContext { deps, info, env }
    }

    /// Checks the sender against the stored owner
    pub fn assert_owner(&self) -> Result<OwnerCap, ContractError> {
        Ownership::default().assert_owner(self.deps.storage, &self.info.sender)
    }
}
