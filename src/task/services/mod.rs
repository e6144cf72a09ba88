//! Store and access services for the task collection.

mod scope;
mod store;

pub use scope::{StoreAccessError, StoreContext, StoreHandle, StoreScope};
pub use store::TaskStore;
