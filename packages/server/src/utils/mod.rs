pub mod html;
pub mod identifier;
