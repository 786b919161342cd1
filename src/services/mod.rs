pub mod lookup;
pub mod search;
