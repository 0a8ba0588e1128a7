pub mod header;
pub mod search_box;

pub use header::Header;
pub use search_box::SearchBox;
