pub mod driver;

pub use driver::{Db, Table};
