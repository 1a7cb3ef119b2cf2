pub mod lockup;
pub mod mark;
