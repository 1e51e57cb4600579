pub mod coin_record;

pub use coin_record::*;
