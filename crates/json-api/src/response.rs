//! Response envelope
//!
//! Every body this server writes has the shape `{success, message, data?}`.
//! Successful handlers return [`ApiResponse`] or [`ApiMessage`]; failures
//! return [`ApiError`]. Errors raised before a handler runs (unmatched
//! routes, rejected extractors) are rewritten by [`envelope_catcher`].

use salvo::{
    http::ResBody,
    oapi::{Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body shape shared by every response.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Successful response carrying a payload.
#[derive(Debug)]
pub(crate) struct ApiResponse<T> {
    status: StatusCode,
    message: String,
    data: T,
}

impl<T> ApiResponse<T> {
    pub(crate) fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data,
        }
    }

    pub(crate) fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: message.into(),
            data,
        }
    }
}

impl<T> Scribe for ApiResponse<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope {
            success: true,
            message: self.message,
            data: Some(self.data),
        }));
    }
}

impl<T> EndpointOutRegister for ApiResponse<T>
where
    T: ToSchema,
{
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            "200",
            salvo::oapi::Response::new("Success envelope, payload under `data`")
                .add_content("application/json", T::to_schema(components)),
        );
    }
}

/// Successful response with nothing but a message.
#[derive(Debug)]
pub(crate) struct ApiMessage(pub String);

impl Scribe for ApiMessage {
    fn render(self, res: &mut Response) {
        res.status_code(StatusCode::OK);
        res.render(Json(Envelope::<()> {
            success: true,
            message: self.0,
            data: None,
        }));
    }
}

impl EndpointOutRegister for ApiMessage {
    fn register(_components: &mut Components, operation: &mut Operation) {
        operation
            .responses
            .insert("200", salvo::oapi::Response::new("Success envelope"));
    }
}

/// Failed request, rendered as `{success: false, message}`.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Generic 500. The cause is logged by the caller, never sent.
    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope::<()> {
            success: false,
            message: self.message,
            data: None,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(_components: &mut Components, _operation: &mut Operation) {}
}

/// Catcher hoop that wraps framework errors in the envelope.
#[handler]
pub(crate) async fn envelope_catcher(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let message = match res.replace_body(ResBody::None) {
        ResBody::Error(error) if !error.brief.is_empty() => error.brief,
        ResBody::Error(_) | ResBody::None => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
        body => {
            res.replace_body(body);

            return;
        }
    };

    res.render(ApiError::new(status, message));
    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::{
        catcher::Catcher,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn conflict() -> Result<ApiMessage, ApiError> {
        Err(ApiError::conflict("already there"))
    }

    #[handler]
    async fn greeting() -> ApiResponse<Vec<&'static str>> {
        ApiResponse::created("greeted", vec!["hello"])
    }

    fn make_service() -> Service {
        let router = Router::new()
            .push(Router::with_path("conflict").get(conflict))
            .push(Router::with_path("greeting").post(greeting));

        Service::new(router).catcher(Catcher::default().hoop(envelope_catcher))
    }

    #[tokio::test]
    async fn success_wraps_data() -> TestResult {
        let mut res = TestClient::post("http://example.com/greeting")
            .send(&make_service())
            .await;

        let body: Envelope<Vec<String>> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert!(body.success, "expected success flag");
        assert_eq!(body.message, "greeted");
        assert_eq!(body.data, Some(vec!["hello".to_string()]));

        Ok(())
    }

    #[tokio::test]
    async fn error_omits_data() -> TestResult {
        let mut res = TestClient::get("http://example.com/conflict")
            .send(&make_service())
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "already there");
        assert!(body.get("data").is_none(), "error bodies carry no data");

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_route_is_enveloped() -> TestResult {
        let mut res = TestClient::get("http://example.com/missing")
            .send(&make_service())
            .await;

        let body: Envelope<Value> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(!body.success, "expected failure flag");
        assert!(body.data.is_none(), "error bodies carry no data");

        Ok(())
    }
}
