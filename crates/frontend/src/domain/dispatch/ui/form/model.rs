//! Submission endpoint access for dispatch records.

use contracts::domain::dispatch::DispatchRecord;

/// Deployed Apps Script endpoint that appends records to the dispatch sheet.
const WEB_APP_URL: &str = "https://script.google.com/macros/s/AKfycbyLKbDI-rxSchN4ngz1ATW6F6lTHeaBAoxnXtoOrMsznknMZaROin3C7PdS9CzkfV-FOg/exec";

/// Outcome of a best-effort submission.
///
/// The endpoint is called in opaque-response mode: `Sent` means the request
/// left the browser without a local error. Remote acceptance is not
/// observable.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Sent,
    LocalFailure(String),
}

pub async fn submit_record(record: &DispatchRecord) -> SubmitOutcome {
    match try_submit(record).await {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => SubmitOutcome::LocalFailure(e),
    }
}

async fn try_submit(record: &DispatchRecord) -> Result<(), String> {
    use web_sys::{Request, RequestInit, RequestMode};

    let json_data = serde_json::to_string(record).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // Apps Script web apps only accept no-cors POSTs from the browser.
    opts.set_mode(RequestMode::NoCors);
    let body = wasm_bindgen::JsValue::from_str(&json_data);
    opts.set_body(&body);

    let request =
        Request::new_with_str_and_init(WEB_APP_URL, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;

    // Opaque response: status and body are unreadable, nothing left to check.
    Ok(())
}
