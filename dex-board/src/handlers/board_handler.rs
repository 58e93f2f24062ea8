use crate::board::render_board;
use crate::render::{escape, page, RecordShape};
use crate::utils::app_config::AppConfig;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use dex_screener::{BoostRecord, JsonSource, ProfileRecord};

const INDEX_TITLE: &str = "DexScreener Board";

/// Serves one board. A failed upstream fetch is still a `200`: the page
/// itself carries the failure message.
pub async fn get_board<R, S>(source: web::Data<S>, config: web::Data<AppConfig>) -> HttpResponse
where
    R: RecordShape,
    S: JsonSource + 'static,
{
    let html = render_board::<R, S>(source.into_inner(), &config.api_base_url).await;
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html)
}

pub async fn index() -> HttpResponse {
    let boards = [
        ("/boosts", BoostRecord::TITLE),
        ("/profiles", ProfileRecord::TITLE),
    ];
    let items: String = boards
        .iter()
        .map(|(path, title)| format!("<li><a href=\"{}\">{}</a></li>", path, escape(title)))
        .collect();

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page(
            INDEX_TITLE,
            &format!("<h1>{}</h1>\n<ul>{}</ul>", INDEX_TITLE, items),
        ))
}
