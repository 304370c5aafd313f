pub mod field;
pub mod normalize;
pub mod sections;
