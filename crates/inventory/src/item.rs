use serde::{Deserialize, Serialize};

use barang_core::{DomainResult, Entity, ItemId};

use crate::validation;

/// A persisted inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
    pub serial_number: String,
}

impl Item {
    /// Attach an identifier to fields that already passed validation.
    pub fn from_fields(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.name,
            quantity: fields.quantity,
            serial_number: fields.serial_number,
        }
    }

    /// Replace the mutable fields, keeping the identifier.
    pub fn apply(&mut self, fields: ItemFields) {
        self.name = fields.name;
        self.quantity = fields.quantity;
        self.serial_number = fields.serial_number;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Unvalidated create/update input. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub serial_number: Option<String>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, quantity: i32, serial_number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            serial_number: Some(serial_number.into()),
        }
    }

    /// Run the field-level rules in order; the first failure wins.
    pub fn validate(&self) -> DomainResult<ItemFields> {
        validation::check_fields(self)
    }
}

/// Field values that passed every field-level rule.
///
/// Uniqueness is not part of this guarantee; it needs the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub quantity: i32,
    pub serial_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_with_camel_case_serial() {
        let item = Item {
            id: ItemId::new(1),
            name: "Barang A".to_string(),
            quantity: 10,
            serial_number: "123ABC".to_string(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Barang A", "quantity": 10, "serialNumber": "123ABC"})
        );
    }

    #[test]
    fn apply_keeps_identifier() {
        let mut item = Item {
            id: ItemId::new(3),
            name: "Barang A".to_string(),
            quantity: 10,
            serial_number: "123ABC".to_string(),
        };
        item.apply(ItemFields {
            name: "Barang A Updated".to_string(),
            quantity: 15,
            serial_number: "123XYZ".to_string(),
        });
        assert_eq!(item.id, ItemId::new(3));
        assert_eq!(item.name, "Barang A Updated");
        assert_eq!(item.quantity, 15);
        assert_eq!(item.serial_number, "123XYZ");
    }

    #[test]
    fn entity_identity_excludes_only_itself() {
        let item = Item::from_fields(
            ItemId::new(4),
            ItemFields {
                name: "Meja".to_string(),
                quantity: 1,
                serial_number: "M1".to_string(),
            },
        );
        assert!(!item.is_other_than(Some(ItemId::new(4))));
        assert!(item.is_other_than(Some(ItemId::new(5))));
        assert!(item.is_other_than(None));
    }
}
