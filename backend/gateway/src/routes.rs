//! The scan handler and its response shapes.
//!
//! Header behavior differs per branch and is part of the contract: the
//! preflight carries both permissive CORS headers, the success path
//! carries `Access-Control-Allow-Origin` plus a content-type, and both
//! error paths carry a content-type only. Responses are built by hand
//! rather than through a CORS layer so the branches stay distinct.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        HeaderValue, Method,
    },
    response::Response,
};
use slipscan_analysis::{analyze_slip, extract_slip, generate_safer_accumulator};
use slipscan_core::{ErrorBody, ScanError, ScanRequest, ScanResponse};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::server::AppState;

const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Catch-all handler for every method and path.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4(), method = %request.method()))]
pub async fn scan(State(state): State<AppState>, request: Request) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight_response();
    }

    let body = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "failed to read request body");
            return error_response(&format!("request body error: {err}"));
        }
    };

    match process(&state, &body).await {
        Ok(scan) => {
            info!(
                score = scan.risk.score,
                level = ?scan.risk.level,
                legs = scan.slip.leg_count,
                "slip scanned"
            );
            success_response(&scan)
        }
        Err(err) => {
            warn!(error = %err, "scan failed");
            error_response(&err.to_string())
        }
    }
}

/// Decode → extract → analyze, behind the single error boundary.
async fn process(state: &AppState, body: &[u8]) -> Result<ScanResponse, ScanError> {
    let request: ScanRequest =
        serde_json::from_slice(body).map_err(|err| ScanError::Other(err.into()))?;

    let image = request
        .image_base64
        .filter(|image| !image.is_empty())
        .ok_or(ScanError::MissingImage)?;

    let raw_text = state.extractor.extract(&image).await?;
    let slip = extract_slip(&raw_text);
    let risk = analyze_slip(&slip);
    let safer = generate_safer_accumulator();

    Ok(ScanResponse {
        raw_text,
        slip,
        risk,
        safer,
    })
}

/// OPTIONS preflight: empty body, permissive CORS, no content-type.
fn preflight_response() -> Response {
    let mut response = Response::new(Body::empty());
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
    response
}

fn success_response(scan: &ScanResponse) -> Response {
    match serde_json::to_string(scan) {
        Ok(json) => {
            let mut response = Response::new(Body::from(json));
            let headers = response.headers_mut();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            response
        }
        Err(err) => error_response(&err.to_string()),
    }
}

/// Error body with a content-type header only. Both the missing-image and
/// catch-all branches use this shape; neither carries a CORS header.
fn error_response(message: &str) -> Response {
    let body = serde_json::to_string(&ErrorBody {
        error: message.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"internal serialization failure"}"#.to_string());

    let mut response = Response::new(Body::from(body));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};
    use slipscan_ocr::SampledDecodeExtractor;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(SampledDecodeExtractor::new()))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), MAX_BODY_BYTES).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_json(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Data-URL payload whose decoded bytes subsample back to `text`.
    fn payload_for(text: &str) -> String {
        let mut bytes = Vec::new();
        for ch in text.bytes() {
            bytes.push(ch);
            bytes.extend(std::iter::repeat(b'.').take(49));
        }
        format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&bytes)
        )
    }

    #[tokio::test]
    async fn options_gets_empty_body_and_both_cors_headers() {
        let request = axum::http::Request::builder()
            .method("OPTIONS")
            .uri("/")
            .body(Body::from("ignored"))
            .unwrap();
        let response = scan(State(state()), request).await;

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "*"
        );
        assert!(response.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn missing_image_field_yields_exact_error_body() {
        let response = scan(State(state()), post_json("{}")).await;

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        assert_eq!(body_text(response).await, r#"{"error":"No image provided"}"#);
    }

    #[tokio::test]
    async fn empty_image_field_counts_as_missing() {
        let response = scan(State(state()), post_json(r#"{"imageBase64":""}"#)).await;
        assert_eq!(body_text(response).await, r#"{"error":"No image provided"}"#);
    }

    #[tokio::test]
    async fn malformed_json_surfaces_through_catch_all_without_cors() {
        let response = scan(State(state()), post_json("not json")).await;

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        let body = body_text(response).await;
        assert!(body.starts_with(r#"{"error":"#), "unexpected body: {body}");
    }

    #[tokio::test]
    async fn payload_without_data_url_comma_is_an_error() {
        let response = scan(
            State(state()),
            post_json(r#"{"imageBase64":"bm8gY29tbWEgaGVyZQ=="}"#),
        )
        .await;

        assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        let body = body_text(response).await;
        assert!(body.contains("no data-url separator"), "unexpected body: {body}");
    }

    #[tokio::test]
    async fn valid_slip_image_returns_full_scan_payload() {
        let payload = payload_for("Team A vs Team B\n3.5 1.1");
        let body = format!(r#"{{"imageBase64":"{payload}"}}"#);
        let response = scan(State(state()), post_json(&body)).await;

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["rawText"], "Team A vs Team B\n3.5 1.1");
        assert_eq!(json["slip"]["fixtures"][0], "Team A vs Team B");
        assert_eq!(json["slip"]["odds"][0], "3.5");
        assert_eq!(json["slip"]["odds"][1], "1.1");
        assert_eq!(json["slip"]["legCount"], 2);
        // 3.5 > 2.5 adds 10, 1.1 < 1.2 adds 5.
        assert_eq!(json["risk"]["score"], 15);
        assert_eq!(json["risk"]["level"], "LOW");
        assert_eq!(json["risk"]["comments"][0], "This slip looks relatively safe.");
        assert_eq!(json["safer"]["legs"].as_array().unwrap().len(), 5);
        assert_eq!(json["safer"]["totalOdds"], "4.20 – 6.00");
    }

    #[tokio::test]
    async fn get_requests_run_the_same_pipeline() {
        // The contract keys only on OPTIONS; every other method is handled.
        let request = axum::http::Request::builder()
            .method("GET")
            .uri("/anything")
            .body(Body::from("{}"))
            .unwrap();
        let response = scan(State(state()), request).await;
        assert_eq!(body_text(response).await, r#"{"error":"No image provided"}"#);
    }
}
