mod about;
mod reader;

pub use about::About;
pub use reader::Reader;
