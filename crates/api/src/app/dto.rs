use axum::http::StatusCode;
use serde::Deserialize;

use barang_core::ItemId;
use barang_inventory::ItemDraft;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// Missing fields are kept as `None` so the service can report them with its
/// own messages. Unknown keys, including `id`, are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub serial_number: Option<String>,
}

impl From<ItemRequest> for ItemDraft {
    fn from(req: ItemRequest) -> Self {
        ItemDraft {
            name: req.name,
            quantity: req.quantity,
            serial_number: req.serial_number,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

// -------------------------
// Parsing helpers
// -------------------------

pub fn parse_item_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse::<ItemId>()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_maps_camel_case_and_ignores_id() {
        let req: ItemRequest = serde_json::from_str(
            r#"{"id": 5, "name": "Barang A", "quantity": 10, "serialNumber": "123ABC"}"#,
        )
        .unwrap();
        let draft: ItemDraft = req.into();
        assert_eq!(draft, ItemDraft::new("Barang A", 10, "123ABC"));
    }

    #[test]
    fn missing_fields_stay_empty() {
        let req: ItemRequest = serde_json::from_str(r#"{"name": "Barang A"}"#).unwrap();
        let draft: ItemDraft = req.into();
        assert_eq!(draft.quantity, None);
        assert_eq!(draft.serial_number, None);
    }

    #[test]
    fn explicit_nulls_are_missing_fields() {
        let req: ItemRequest =
            serde_json::from_str(r#"{"name": null, "quantity": null, "serialNumber": null}"#).unwrap();
        let draft: ItemDraft = req.into();
        assert_eq!(draft, ItemDraft::default());
    }

    #[test]
    fn item_id_parsing() {
        assert_eq!(parse_item_id("12").unwrap(), ItemId::new(12));
        let res = parse_item_id("twelve").unwrap_err();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
