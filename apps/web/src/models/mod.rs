pub mod category;
pub mod persona;
pub mod record;

pub use category::Category;
pub use persona::Persona;
pub use record::{find_record, Record};
