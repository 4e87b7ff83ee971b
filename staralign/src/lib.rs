pub mod align;
pub mod matrix;
