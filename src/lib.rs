// src/lib.rs
use ethers::contract::abigen;

abigen!(ERC20, r#"[
    function totalSupply() external view returns (uint256)
]"#);

pub mod chains;
pub mod config;
pub mod error;
pub mod page;
pub mod server;
pub mod supply;
pub mod utils;
