mod connection;
mod extract;
mod neo;
mod record;

pub use connection::Neo4jConnection;
pub use extract::{Bindings, Projection};
pub use neo::Neo4j;
pub use record::Record;
