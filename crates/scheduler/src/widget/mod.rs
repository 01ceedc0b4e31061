mod editable_label;
pub use editable_label::EditableLabel;
