//! The boundary to the server. The page payload is embedded by the
//! server as a `window.__PAGE_DATA__` global at navigation time; the
//! two POST helpers below are the only calls this app ever makes on its
//! own.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::PagePayload;

const PAGE_DATA_GLOBAL: &str = "__PAGE_DATA__";

#[derive(Serialize)]
struct RatingBody {
    course_id: u32,
    stars: u8,
    comment: String,
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Read and deserialize the server-embedded page payload.
pub fn page_payload() -> Result<PagePayload, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(PAGE_DATA_GLOBAL))
        .map_err(js_error)?;
    if value.is_undefined() || value.is_null() {
        return Err(format!("{PAGE_DATA_GLOBAL} is not set"));
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

async fn post(path: &str, json_body: Option<String>) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    let has_body = json_body.is_some();
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("{} {}", response.status(), response.status_text()));
    }
    Ok(())
}

/// Fire-and-forget lesson completion signal. The caller flips local
/// state on success and logs on failure; there is no retry.
pub async fn complete_lesson(lesson_id: u32) -> Result<(), String> {
    post(&format!("/lesson/{lesson_id}/complete"), None).await
}

/// Submit a course rating. Success closes the dialog; failure is shown
/// inline by the dialog.
pub async fn submit_rating(course_id: u32, stars: u8, comment: &str) -> Result<(), String> {
    let body = serde_json::to_string(&RatingBody {
        course_id,
        stars,
        comment: comment.to_string(),
    })
    .map_err(|e| e.to_string())?;
    post("/ratings", Some(body)).await
}
