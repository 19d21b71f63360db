//! Field-level rules for items.
//!
//! Uniqueness of name and serial number needs the store and is checked by the
//! item service; the message constants for it still live here so every
//! user-facing rejection text has one home.

use barang_core::{DomainError, DomainResult, ItemId};

use crate::item::{ItemDraft, ItemFields};

pub const NAME_REQUIRED: &str = "name must not be empty.";
pub const SERIAL_REQUIRED: &str = "serial number must not be empty.";
pub const QUANTITY_INVALID: &str =
    "quantity must not be empty and must be a number greater than 0.";
pub const NAME_INVALID: &str = "name must be text only, no digits or special characters.";
pub const SERIAL_INVALID: &str = "serial number must be text only, no special characters.";
pub const NAME_IN_USE: &str = "name already in use.";
pub const SERIAL_IN_USE: &str = "serial number already in use.";

/// Message for an identifier lookup that found nothing.
pub fn not_found_message(id: ItemId) -> String {
    format!("Barang dengan ID {id} tidak ditemukan.")
}

/// `^[a-zA-Z ]+$`
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// `^[a-zA-Z0-9]+$`
pub fn is_valid_serial_number(serial: &str) -> bool {
    !serial.is_empty() && serial.chars().all(|c| c.is_ascii_alphanumeric())
}

pub(crate) fn check_fields(draft: &ItemDraft) -> DomainResult<ItemFields> {
    // Emptiness is checked on the raw value; whitespace is not trimmed.
    let name = match draft.name.as_deref() {
        Some(n) if !n.is_empty() => n,
        _ => return Err(DomainError::validation(NAME_REQUIRED)),
    };

    let serial_number = match draft.serial_number.as_deref() {
        Some(s) if !s.is_empty() => s,
        _ => return Err(DomainError::validation(SERIAL_REQUIRED)),
    };

    let quantity = match draft.quantity {
        Some(q) if q >= 1 => q,
        _ => return Err(DomainError::validation(QUANTITY_INVALID)),
    };

    if !is_valid_name(name) {
        return Err(DomainError::validation(NAME_INVALID));
    }

    if !is_valid_serial_number(serial_number) {
        return Err(DomainError::validation(SERIAL_INVALID));
    }

    Ok(ItemFields {
        name: name.to_string(),
        quantity,
        serial_number: serial_number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(draft: ItemDraft) -> String {
        match draft.validate().unwrap_err() {
            DomainError::Validation(msg) => msg,
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_draft() {
        let fields = ItemDraft::new("Barang A", 10, "123ABC").validate().unwrap();
        assert_eq!(fields.name, "Barang A");
        assert_eq!(fields.quantity, 10);
        assert_eq!(fields.serial_number, "123ABC");
    }

    #[test]
    fn rejects_empty_or_missing_name() {
        assert_eq!(rejection(ItemDraft::new("", 10, "123ABC")), NAME_REQUIRED);
        let missing = ItemDraft {
            name: None,
            ..ItemDraft::new("x", 10, "123ABC")
        };
        assert_eq!(rejection(missing), NAME_REQUIRED);
    }

    #[test]
    fn rejects_empty_serial_number() {
        assert_eq!(rejection(ItemDraft::new("Barang A", 10, "")), SERIAL_REQUIRED);
    }

    #[test]
    fn rejects_non_positive_or_missing_quantity() {
        assert_eq!(rejection(ItemDraft::new("Barang A", 0, "123ABC")), QUANTITY_INVALID);
        assert_eq!(rejection(ItemDraft::new("Barang A", -4, "123ABC")), QUANTITY_INVALID);
        let missing = ItemDraft {
            quantity: None,
            ..ItemDraft::new("Barang A", 1, "123ABC")
        };
        assert_eq!(rejection(missing), QUANTITY_INVALID);
    }

    #[test]
    fn rejects_special_characters_in_name() {
        assert_eq!(rejection(ItemDraft::new("Barang @A", 10, "123ABC")), NAME_INVALID);
        assert_eq!(rejection(ItemDraft::new("Barang 2", 10, "123ABC")), NAME_INVALID);
    }

    #[test]
    fn rejects_special_characters_in_serial_number() {
        assert_eq!(rejection(ItemDraft::new("Barang A", 10, "123-ABC")), SERIAL_INVALID);
        assert_eq!(rejection(ItemDraft::new("Barang A", 10, "123 ABC")), SERIAL_INVALID);
    }

    #[test]
    fn first_failure_wins() {
        // Empty serial and bad quantity: the serial check runs first.
        assert_eq!(rejection(ItemDraft::new("Barang A", 0, "")), SERIAL_REQUIRED);
        // Bad name characters and bad quantity: quantity runs first.
        assert_eq!(rejection(ItemDraft::new("B@rang", 0, "123ABC")), QUANTITY_INVALID);
    }

    #[test]
    fn whitespace_only_name_is_accepted() {
        let fields = ItemDraft::new("   ", 1, "A1").validate().unwrap();
        assert_eq!(fields.name, "   ");
    }

    #[test]
    fn non_ascii_letters_are_rejected() {
        assert_eq!(rejection(ItemDraft::new("Bárang", 1, "A1")), NAME_INVALID);
        assert_eq!(rejection(ItemDraft::new("Barang", 1, "A١")), SERIAL_INVALID);
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(
            not_found_message(ItemId::new(999)),
            "Barang dengan ID 999 tidak ditemukan."
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: every draft matching both patterns with a positive quantity passes unchanged.
            #[test]
            fn well_formed_drafts_pass(
                name in "[a-zA-Z ]{1,40}",
                serial in "[a-zA-Z0-9]{1,20}",
                quantity in 1i32..=i32::MAX
            ) {
                let fields = ItemDraft::new(name.clone(), quantity, serial.clone()).validate().unwrap();
                prop_assert_eq!(fields.name, name);
                prop_assert_eq!(fields.serial_number, serial);
                prop_assert_eq!(fields.quantity, quantity);
            }

            /// Property: a digit anywhere in the name is rejected with the name-format message.
            #[test]
            fn digits_in_name_are_rejected(
                prefix in "[a-zA-Z ]{0,10}",
                digit in "[0-9]",
                suffix in "[a-zA-Z ]{0,10}"
            ) {
                let name = format!("{prefix}{digit}{suffix}");
                let err = ItemDraft::new(name, 1, "ABC1").validate().unwrap_err();
                prop_assert_eq!(err, DomainError::validation(NAME_INVALID));
            }

            /// Property: quantities below one never validate.
            #[test]
            fn non_positive_quantity_is_rejected(quantity in i32::MIN..=0) {
                let err = ItemDraft::new("Barang", quantity, "ABC1").validate().unwrap_err();
                prop_assert_eq!(err, DomainError::validation(QUANTITY_INVALID));
            }
        }
    }
}
