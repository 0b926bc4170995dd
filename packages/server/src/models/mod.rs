pub mod lookup;
pub mod pokemon;
