pub mod catcher;
pub mod quote;
