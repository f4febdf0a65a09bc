pub mod text_wrap;

pub use text_wrap::wrap;
