use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use tracing::warn;

use shared_config::AppConfig;

use crate::error::SpeechError;
use crate::models::TtsRequest;
use crate::services::synth::TranslateTtsClient;

/// The /say page gives up and navigates onward after this long, covering
/// stalled downloads and browsers that never fire `ended`.
const SAY_REDIRECT_MS: u32 = 15_000;

#[derive(Debug, Deserialize)]
pub struct SayParams {
    pub text: Option<String>,
    #[serde(rename = "return")]
    pub return_url: Option<String>,
}

/// POST /tts. Speaks the request text and streams the MPEG bytes back for
/// in-page playback.
#[axum::debug_handler]
pub async fn tts(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<TtsRequest>,
) -> Result<Response, SpeechError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(SpeechError::EmptyText);
    }

    let synth = TranslateTtsClient::new(&state)?;
    let audio = synth.synthesize(text).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"speech.mp3\""),
        ],
        audio,
    )
        .into_response())
}

/// GET /say?text=..&return=.. renders a self-contained page that speaks the
/// text, then navigates to the return URL. Any failure to produce audio
/// degrades to an immediate redirect; this endpoint must never strand the
/// kiosk.
#[axum::debug_handler]
pub async fn say(State(state): State<Arc<AppConfig>>, Query(params): Query<SayParams>) -> Response {
    let return_url = params
        .return_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| "/".to_string());

    let synth = match TranslateTtsClient::new(&state) {
        Ok(synth) => synth,
        Err(_) => return Redirect::to(&return_url).into_response(),
    };

    let text = params.text.as_deref().unwrap_or("").trim().to_string();
    if text.is_empty() {
        return Redirect::to(&return_url).into_response();
    }

    match synth.synthesize(&text).await {
        Ok(audio) => {
            let encoded = general_purpose::STANDARD.encode(audio);
            Html(say_page(&encoded, &return_url)).into_response()
        }
        Err(e) => {
            warn!("Falling back to silent redirect: {}", e);
            Redirect::to(&return_url).into_response()
        }
    }
}

const SAY_STYLE: &str = "body{margin:0;font-family:sans-serif;background:#000;color:#fff;\
display:flex;align-items:center;justify-content:center;height:100vh}\
.btn{font-size:22px;padding:16px 24px;background:#06c;color:#fff;border:none;border-radius:8px}\
.row{display:flex;gap:12px;flex-direction:column;align-items:center;font-size:20px}";

/// Build the playback page. The audio rides along as a base64 data URI so
/// the page needs no second round trip, and the return target is embedded
/// as a JSON string literal to survive quoting inside the script.
fn say_page(audio_b64: &str, return_url: &str) -> String {
    let target =
        serde_json::to_string(return_url).unwrap_or_else(|_| "\"/\"".to_string());

    let mut page = String::with_capacity(audio_b64.len() + 1536);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Say</title>\n<style>");
    page.push_str(SAY_STYLE);
    page.push_str("</style>\n</head>\n<body>\n<audio id=\"au\" autoplay playsinline src=\"data:audio/mpeg;base64,");
    page.push_str(audio_b64);
    page.push_str("\"></audio>\n<div id=\"ui\" class=\"row\" style=\"display:none\">\n<div>ప్లే నొక్కి ప్లే చేయండి.</div>\n<button id=\"playBtn\" class=\"btn\">ప్లే చేయండి</button>\n<button id=\"skipBtn\" class=\"btn\" style=\"background:#444\">వద్దులు</button>\n</div>\n<script>\nconst go=()=>window.location.href=");
    page.push_str(&target);
    page.push_str(";\nconst a=document.getElementById('au');\nconst ui=document.getElementById('ui');\nconst pb=document.getElementById('playBtn');\nconst sb=document.getElementById('skipBtn');\nfunction showUI(){if(ui)ui.style.display='flex';}\nif(a){a.addEventListener('ended',go);a.addEventListener('error',showUI);}\nif(sb)sb.addEventListener('click',go);\nif(pb)pb.addEventListener('click',()=>{try{a&&a.play&&a.play().then(()=>{ui.style.display='none';}).catch(showUI)}catch(e){showUI()}});\ntry{a&&a.play&&a.play().catch(()=>{showUI()})}catch(e){showUI()}\ntry{history.replaceState(null,'',");
    page.push_str(&target);
    page.push_str(")}catch(e){}\nsetTimeout(go,");
    page.push_str(&SAY_REDIRECT_MS.to_string());
    page.push_str(");\n</script>\n</body>\n</html>\n");
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_page_embeds_audio_and_target() {
        let page = say_page("QUJD", "/print_slip/7");

        assert!(page.contains("data:audio/mpeg;base64,QUJD"));
        assert!(page.contains("window.location.href=\"/print_slip/7\""));
        assert!(page.contains("history.replaceState(null,'',\"/print_slip/7\")"));
        assert!(page.contains("setTimeout(go,15000)"));
        assert!(page.contains("వద్దులు"));
    }

    #[test]
    fn say_page_escapes_quotes_in_the_target() {
        let page = say_page("QUJD", "/x\"y");

        assert!(page.contains("window.location.href=\"/x\\\"y\""));
    }
}
