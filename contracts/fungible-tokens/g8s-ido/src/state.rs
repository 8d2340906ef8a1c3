use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use g8s_fungible_tokens::ido::{SaleConfig, SaleState};

pub const CONFIG: Item<SaleConfig> = Item::new("config");
pub const STATE: Item<SaleState> = Item::new("state");
/// Sale tokens bought per buyer
pub const PURCHASES: Map<&Addr, Uint128> = Map::new("purchases");
