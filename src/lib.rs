pub mod github;
pub mod padding;
pub mod utils;
