pub mod batch;
pub mod search;

pub use batch::run_batch;
pub use search::run_search;
