//! Item entity model and DTOs.

use exampulumi_core::patch::Patch;
use exampulumi_core::schema::{fields_are_camel_case, WireField, WireSchema};
use exampulumi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::gateway::{CreateInput, Entity, Gateway, PgQueryAs, UpdateInput};

/// Gateway instantiated for items.
pub type ItemGateway = Gateway<Item, CreateItem, UpdateItem>;

/// Column list shared across queries. `seq` is bookkeeping and never selected.
const COLUMNS: &str = "id, created, updated, is_active, title, description";

/// A row from the `item` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub is_active: bool,
    pub created: Timestamp,
    pub updated: Timestamp,
}

impl WireSchema for Item {
    const FIELDS: &'static [WireField] = &[
        WireField::new("id", "id"),
        WireField::new("title", "title"),
        WireField::new("description", "description"),
        WireField::new("is_active", "isActive"),
        WireField::new("created", "created"),
        WireField::new("updated", "updated"),
    ];
}

impl Entity for Item {
    const NAME: &'static str = "Item";
    const TABLE: &'static str = "item";
    const COLUMNS: &'static str = COLUMNS;
    const ORDER_COLUMN: &'static str = "seq";

    fn id(&self) -> DbId {
        self.id
    }
}

/// DTO for creating a new item. `isActive` always starts `true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub title: String,
    pub description: String,
}

impl WireSchema for CreateItem {
    const FIELDS: &'static [WireField] = &[
        WireField::new("title", "title"),
        WireField::new("description", "description"),
    ];
}

impl CreateInput<Item> for CreateItem {
    const COLUMNS: &'static [&'static str] = &["title", "description"];

    fn bind<'q>(&'q self, query: PgQueryAs<'q, Item>) -> PgQueryAs<'q, Item> {
        query.bind(&self.title).bind(&self.description)
    }
}

/// DTO for partially updating an item.
///
/// Only `Patch::Value` fields are written. An explicit `null` is treated the
/// same as a missing key and leaves the column unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub is_active: Patch<bool>,
}

impl WireSchema for UpdateItem {
    const FIELDS: &'static [WireField] = &[
        WireField::new("title", "title"),
        WireField::new("description", "description"),
        WireField::new("is_active", "isActive"),
    ];
}

impl UpdateInput<Item> for UpdateItem {
    fn columns(&self) -> Vec<&'static str> {
        let provided = [
            ("title", self.title.as_value().is_some()),
            ("description", self.description.as_value().is_some()),
            ("is_active", self.is_active.as_value().is_some()),
        ];
        provided
            .into_iter()
            .filter_map(|(column, present)| present.then_some(column))
            .collect()
    }

    fn bind<'q>(&'q self, mut query: PgQueryAs<'q, Item>) -> PgQueryAs<'q, Item> {
        if let Some(title) = self.title.as_value() {
            query = query.bind(title);
        }
        if let Some(description) = self.description.as_value() {
            query = query.bind(description);
        }
        if let Some(is_active) = self.is_active.as_value() {
            query = query.bind(*is_active);
        }
        query
    }
}

const _: () = assert!(fields_are_camel_case(<Item as WireSchema>::FIELDS));
const _: () = assert!(fields_are_camel_case(<CreateItem as WireSchema>::FIELDS));
const _: () = assert!(fields_are_camel_case(<UpdateItem as WireSchema>::FIELDS));
