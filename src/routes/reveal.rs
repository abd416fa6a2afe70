use std::time::Duration;

use actix_web::{get, web, HttpResponse};
use futures_util::StreamExt;

use crate::types::feed::RevealStatusRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::reveal::RevealClock;

const TICK: Duration = Duration::from_secs(1);

#[get("")]
async fn status(
    gate: web::Data<RevealClock>,
) -> ApiResult<RevealStatusRes> {
    Ok(ApiResponse::Ok(RevealStatusRes {
        revealed: gate.is_revealed(),
        reveal_at: gate.reveal_at(),
        countdown: gate.time_until_reveal(),
    }))
}

/// Server-sent events: one countdown per second, closed once the gate opens.
#[get("/stream")]
async fn stream(
    gate: web::Data<RevealClock>,
) -> HttpResponse {
    let events = gate.ticks(TICK).map(|countdown| {
        serde_json::to_string(&countdown).map(|json| web::Bytes::from(format!("data: {json}\n\n")))
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(events)
}
