use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult, Outcome};
use crate::store::ProductStore;

/// Inventory record. `id` is assigned by the store on insert and is absent
/// on incoming drafts; any extra caller-supplied fields are preserved
/// verbatim through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub nome: String,

    #[serde(rename = "codigoBarra")]
    pub codigo_barra: i64,

    pub serie: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Validate an incoming JSON object and build the typed record from it.
    ///
    /// Required-field rules: `nome` must be a non-blank string, and both
    /// `codigoBarra` and `serie` must be integers greater than zero. A field
    /// of the wrong JSON type counts as missing. Validation never touches
    /// the store; the duplicate check is a separate step so that a draft
    /// failing here is never compared against existing records.
    pub fn from_draft(draft: &Map<String, Value>) -> ApiResult<Self> {
        let nome = draft
            .get("nome")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty());
        let codigo_barra = draft
            .get("codigoBarra")
            .and_then(Value::as_i64)
            .filter(|v| *v > 0);
        let serie = draft.get("serie").and_then(Value::as_i64).filter(|v| *v > 0);

        let (nome, codigo_barra, serie) = match (nome, codigo_barra, serie) {
            (Some(n), Some(c), Some(s)) => (n.to_string(), c, s),
            _ => return Err(ApiError(Outcome::RequiredFieldsMissing)),
        };

        let extra: Map<String, Value> = draft
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "id" | "nome" | "codigoBarra" | "serie"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Product {
            id: None,
            nome,
            codigo_barra,
            serie,
            extra,
        })
    }
}

/// Reject a draft whose `(serie, codigoBarra)` pair already exists in the
/// store. Runs only after required-field validation succeeded.
pub fn validate_not_duplicate(store: &ProductStore, product: &Product) -> ApiResult<()> {
    if store
        .find_duplicate(product.serie, product.codigo_barra)
        .is_some()
    {
        return Err(ApiError(Outcome::DuplicateProduct));
    }

    Ok(())
}

/// Parse a path identifier. Blank input maps to `SerialNull`, non-numeric
/// input to `SerialInvalid`.
pub fn parse_id(raw: &str) -> ApiResult<u64> {
    if raw.trim().is_empty() {
        return Err(ApiError(Outcome::SerialNull));
    }

    raw.trim()
        .parse::<u64>()
        .map_err(|_| ApiError(Outcome::SerialInvalid))
}
