pub use document::GraphDocument;
pub use edge::Edge;
pub use entity::Entity;
pub use node::Node;
pub use value::Value;

mod conversion;
mod document;
pub mod edge;
mod entity;
pub mod node;
pub(crate) mod value;
