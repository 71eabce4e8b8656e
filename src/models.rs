use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ApiError;

pub const MISSING_FIELDS: &str = "Name and price are required";

/// A named, priced entry in the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    /// Overwrite only the fields present in the patch
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Validated partial update for an item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Request body for POST /items
///
/// Fields stay loosely typed on the wire; `into_item` validates and coerces
/// them. A JSON `null` deserializes to `None`, same as an absent field.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateItemRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<JsonValue>,
    /// A number, or a string holding a number
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<JsonValue>,
}

impl CreateItemRequest {
    pub fn into_item(self) -> Result<Item, ApiError> {
        // An empty name counts as missing
        let name = match self.name {
            Some(JsonValue::String(s)) if s.is_empty() => None,
            other => other,
        };
        let (Some(name), Some(price)) = (name, self.price) else {
            return Err(ApiError::Validation(MISSING_FIELDS.to_string()));
        };

        Ok(Item {
            name: parse_name(name)?,
            price: parse_price(&price)?,
        })
    }
}

/// Request body for PATCH /items/{name}
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<JsonValue>,
    /// A number, or a string holding a number
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<JsonValue>,
}

impl UpdateItemRequest {
    pub fn into_patch(self) -> Result<ItemPatch, ApiError> {
        let name = match self.name {
            Some(value) => {
                let name = parse_name(value)?;
                if name.is_empty() {
                    return Err(ApiError::Validation("Name must not be empty".to_string()));
                }
                Some(name)
            }
            None => None,
        };
        let price = self.price.as_ref().map(parse_price).transpose()?;

        Ok(ItemPatch { name, price })
    }
}

/// Decode a request body into one of the loosely typed request structs
///
/// A body that is not declared as JSON, or is empty, reads as `{}` so field
/// validation reports what is missing. A JSON array also reads as `{}`.
/// Unparseable JSON and top-level scalars are internal errors; the parser
/// detail is logged, not returned.
pub fn decode_body<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if !is_json_content_type(headers) {
        tracing::debug!("Request body is not JSON, treating it as empty");
        return Ok(T::default());
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match serde_json::from_slice::<JsonValue>(body)? {
        value @ JsonValue::Object(_) => Ok(serde_json::from_value(value)?),
        JsonValue::Array(_) => Ok(T::default()),
        other => Err(ApiError::Internal(anyhow::anyhow!(
            "request body must be a JSON object, got {}",
            other
        ))),
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn parse_name(value: JsonValue) -> Result<String, ApiError> {
    match value {
        JsonValue::String(name) => Ok(name),
        other => Err(ApiError::Validation(format!(
            "Name must be a string, got {}",
            other
        ))),
    }
}

/// Coerce a JSON number or numeric string into a finite price
fn parse_price(value: &JsonValue) -> Result<f64, ApiError> {
    let price = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match price {
        Some(p) if p.is_finite() => Ok(p),
        _ => Err(ApiError::Validation(format!(
            "Price must be a number, got {}",
            value
        ))),
    }
}

/// Response type for successful POST operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddedResponse {
    pub added: Item,
}

/// Response type for successful PATCH operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatedResponse {
    pub updated: Item,
}

/// Response type for successful DELETE operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
}
