pub mod cw20;
pub mod ido;
