pub mod button;
pub mod checkbox;
pub mod label;
pub mod list;
pub mod scrollbar;
pub mod slider;
