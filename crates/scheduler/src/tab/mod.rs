pub mod section;
pub mod track;
