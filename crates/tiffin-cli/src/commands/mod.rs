pub mod bookmark;
pub mod carousel;
pub mod pay;
pub mod restaurant;
