pub use self::{database::DatabasePool, node::NodeApi};

mod database;
mod node;
