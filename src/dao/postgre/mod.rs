pub use self::{
    path::get_path,
    types::{DBRow, DataBase, PoolOption, PoolType, QueryResult},
};

mod block;
mod bond;
mod inner_transaction;
mod path;
mod pos_reward;
mod total_stake;
mod types;
mod unbond;
mod validator;
mod wrapper_transaction;
