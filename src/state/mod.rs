mod persistence;
mod session;

pub use persistence::{JsonFileOrderStore, MemoryOrderStore, OrderStore, LATEST_ORDER_KEY};
pub use session::PlannerSession;
