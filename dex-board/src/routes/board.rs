use actix_web::web;
use dex_screener::{BoostRecord, JsonSource, ProfileRecord};

use crate::handlers::board_handler;

pub fn config<S: JsonSource + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/boosts",
        web::get().to(board_handler::get_board::<BoostRecord, S>),
    );
    cfg.route(
        "/profiles",
        web::get().to(board_handler::get_board::<ProfileRecord, S>),
    );
    cfg.route("/", web::get().to(board_handler::index));
}
