mod base;
mod checkbox;

pub use base::{InlineButton, Keyboard, KeyboardMarkup, PAYLOAD_SEPARATOR, WhenPredicate};
pub use checkbox::{
    CHECKED_PAYLOAD, Checkbox, ManagedCheckbox, Toggle, UNCHECKED_PAYLOAD, decode_checked,
    encode_checked,
};
