use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub type ApiResult<T> = Result<T, ApiError>;

/// Closed set of request outcomes, each bound to one HTTP status and one
/// message. Mirrors the response table the API documents: success variants
/// drive the happy-path status lines, failure variants become plain-text
/// error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    ProductCreated,
    ProductUpdated,
    ProductRemoved,
    RequiredFieldsMissing,
    ProductNotProvided,
    SerialNull,
    SerialInvalid,
    NotFound,
    DuplicateProduct,
}

impl Outcome {
    /// HTTP status code for this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::Success | Outcome::ProductUpdated => StatusCode::OK,
            Outcome::ProductCreated => StatusCode::CREATED,
            Outcome::ProductRemoved => StatusCode::NO_CONTENT,
            Outcome::RequiredFieldsMissing
            | Outcome::ProductNotProvided
            | Outcome::SerialNull
            | Outcome::SerialInvalid => StatusCode::BAD_REQUEST,
            Outcome::NotFound => StatusCode::NOT_FOUND,
            Outcome::DuplicateProduct => StatusCode::CONFLICT,
        }
    }

    /// Human-readable message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Success => "Sucesso",
            Outcome::ProductCreated => "Produto criado com sucesso",
            Outcome::ProductUpdated => "Produto atualizado com sucesso",
            Outcome::ProductRemoved => "Baixa de produto realizada com sucesso",
            Outcome::RequiredFieldsMissing => "Campos obrigatórios não informados",
            Outcome::ProductNotProvided => "Produto não foi informado",
            Outcome::SerialNull => "O número de série do produto não foi informado",
            Outcome::SerialInvalid => "Número de série inválido",
            Outcome::NotFound => "Nenhum resultado encontrado",
            Outcome::DuplicateProduct => "Produto já cadastrado",
        }
    }
}

/// Request failure carrying the outcome it maps to.
///
/// Handlers return `ApiResult<T>` and propagate failures with `?`; the
/// `IntoResponse` impl below is the single place the `(status, message)`
/// pair is written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .0.message())]
pub struct ApiError(pub Outcome);

impl ApiError {
    pub fn outcome(&self) -> Outcome {
        self.0
    }
}

impl From<Outcome> for ApiError {
    fn from(outcome: Outcome) -> Self {
        ApiError(outcome)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.message();

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_table_is_fixed() {
        let table = [
            (Outcome::Success, 200, "Sucesso"),
            (Outcome::ProductCreated, 201, "Produto criado com sucesso"),
            (Outcome::ProductUpdated, 200, "Produto atualizado com sucesso"),
            (
                Outcome::ProductRemoved,
                204,
                "Baixa de produto realizada com sucesso",
            ),
            (
                Outcome::RequiredFieldsMissing,
                400,
                "Campos obrigatórios não informados",
            ),
            (Outcome::ProductNotProvided, 400, "Produto não foi informado"),
            (
                Outcome::SerialNull,
                400,
                "O número de série do produto não foi informado",
            ),
            (Outcome::SerialInvalid, 400, "Número de série inválido"),
            (Outcome::NotFound, 404, "Nenhum resultado encontrado"),
            (Outcome::DuplicateProduct, 409, "Produto já cadastrado"),
        ];

        for (outcome, status, message) in table {
            assert_eq!(outcome.status().as_u16(), status);
            assert_eq!(outcome.message(), message);
        }
    }

    #[test]
    fn api_error_display_uses_outcome_message() {
        let err = ApiError(Outcome::DuplicateProduct);
        assert_eq!(err.to_string(), "Produto já cadastrado");
    }
}
