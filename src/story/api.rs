use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::AbortController;

use super::error::{classify_js_error, StoryError};
use super::models::{PdfExportRequest, StoryRequest, StoryResult};
use super::progress::ProgressTicker;

/// Verdict of the startup health probe. A failed probe is not retried.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConnectionStatus {
    Checking,
    Connected,
    Disconnected,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn classify_transport(err: gloo_net::Error, base_url: &str) -> StoryError {
    match err {
        gloo_net::Error::JsError(js) => classify_js_error(&js.name, &js.message, base_url),
        other => StoryError::Unknown {
            detail: other.to_string(),
        },
    }
}

async fn server_detail(response: Response, fallback: String) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => fallback,
    }
}

/// Submits one generation job. The cancellation timer aborts the fetch
/// through its signal once `timeout_ms` elapses; `notify` receives the
/// cosmetic progress lines until then. Both handles are plain values owned
/// by this function, so any exit path drops them and nothing fires after a
/// terminal transition.
pub async fn generate_story<F>(
    base_url: &str,
    timeout_ms: u32,
    request: &StoryRequest,
    notify: F,
) -> Result<StoryResult, StoryError>
where
    F: Fn(&'static str) + Clone + 'static,
{
    let controller = AbortController::new().map_err(|_| StoryError::Unknown {
        detail: "failed to create abort controller".to_string(),
    })?;
    let signal = controller.signal();

    let abort_timer = Timeout::new(timeout_ms, move || controller.abort());
    let ticker = ProgressTicker::start(notify);

    let response = Request::post(&format!("{}/generate", base_url))
        .abort_signal(Some(&signal))
        .json(request)
        .map_err(|e| StoryError::Unknown {
            detail: e.to_string(),
        })?
        .send()
        .await
        .map_err(|e| classify_transport(e, base_url))?;

    // Headers are in; neither timer has a job left to do.
    drop(abort_timer);
    drop(ticker);

    if !response.ok() {
        let fallback = format!("HTTP {}", response.status());
        let detail = server_detail(response, fallback).await;
        return Err(StoryError::Server { detail });
    }

    let result = response
        .json::<StoryResult>()
        .await
        .map_err(|e| StoryError::Unknown {
            detail: e.to_string(),
        })?;

    if !result.success {
        let detail = result
            .error
            .clone()
            .unwrap_or_else(|| "Failed to generate story".to_string());
        return Err(StoryError::Server { detail });
    }

    Ok(result)
}

/// Requests a rendered document for `result` and triggers a local save. Runs
/// under its own timeout, independent of the generation window.
pub async fn export_pdf(
    base_url: &str,
    timeout_ms: u32,
    result: &StoryResult,
    request: &StoryRequest,
) -> Result<(), StoryError> {
    let payload = PdfExportRequest::new(result, request);

    let controller = AbortController::new().map_err(|_| StoryError::Unknown {
        detail: "failed to create abort controller".to_string(),
    })?;
    let signal = controller.signal();
    let abort_timer = Timeout::new(timeout_ms, move || controller.abort());

    let response = Request::post(&format!("{}/download-pdf", base_url))
        .abort_signal(Some(&signal))
        .json(&payload)
        .map_err(|e| StoryError::Unknown {
            detail: e.to_string(),
        })?
        .send()
        .await
        .map_err(|e| classify_transport(e, base_url))?;

    drop(abort_timer);

    if !response.ok() {
        let fallback = format!("HTTP {}", response.status());
        let detail = server_detail(response, fallback).await;
        return Err(StoryError::Server { detail });
    }

    let bytes = response.binary().await.map_err(|e| StoryError::Unknown {
        detail: e.to_string(),
    })?;

    let filename = pdf_filename(result.title(), &request.story_idea);
    save_document(&bytes, &filename)
}

/// One lightweight `GET /health` with a short timeout. Any transport error
/// or non-2xx status counts as disconnected.
pub async fn probe_health(base_url: &str, timeout_ms: u32) -> bool {
    let controller = match AbortController::new() {
        Ok(controller) => controller,
        Err(_) => return false,
    };
    let signal = controller.signal();
    let _abort_timer = Timeout::new(timeout_ms, move || controller.abort());

    match Request::get(&format!("{}/health", base_url))
        .abort_signal(Some(&signal))
        .send()
        .await
    {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

/// Derives the download name from the story title, falling back to the idea
/// text and finally a fixed default. Runs of characters outside
/// `[A-Za-z0-9]` collapse to a single underscore.
pub fn pdf_filename(title: Option<&str>, idea: &str) -> String {
    let source = match title {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => {
            let idea = idea.trim();
            if idea.is_empty() {
                "My_Story".to_string()
            } else {
                idea.to_string()
            }
        }
    };

    let mut stem = String::with_capacity(source.len());
    for c in source.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
        } else if !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_matches('_');

    if stem.is_empty() {
        "My_Story.pdf".to_string()
    } else {
        format!("{}.pdf", stem)
    }
}

/// Wraps the returned bytes in a Blob and clicks a temporary object-URL
/// anchor, the browser equivalent of "save file as".
fn save_document(bytes: &[u8], filename: &str) -> Result<(), StoryError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| save_failed())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| save_failed())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(save_failed)?;
    let body = document.body().ok_or_else(save_failed)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| save_failed())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor).map_err(|_| save_failed())?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}

fn save_failed() -> StoryError {
    StoryError::Unknown {
        detail: "Could not save the PDF file".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_runs_collapse_to_one_underscore() {
        assert_eq!(
            pdf_filename(Some("My, Dragon! Tale"), "ignored"),
            "My_Dragon_Tale.pdf"
        );
    }

    #[test]
    fn missing_title_falls_back_to_the_idea() {
        assert_eq!(
            pdf_filename(None, "A dragon learns to paint"),
            "A_dragon_learns_to_paint.pdf"
        );
        assert_eq!(pdf_filename(Some("   "), "A brave owl"), "A_brave_owl.pdf");
    }

    #[test]
    fn no_title_and_no_idea_uses_the_default() {
        assert_eq!(pdf_filename(None, "   "), "My_Story.pdf");
        assert_eq!(pdf_filename(Some("!!!"), ""), "My_Story.pdf");
    }

    #[test]
    fn edge_punctuation_is_trimmed() {
        assert_eq!(pdf_filename(Some("...The End?"), ""), "The_End.pdf");
    }
}
