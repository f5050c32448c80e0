use actix_web::{HttpResponse, web};

use crate::models::page::PageView;
use crate::store::PortfolioStore;

/// GET /api/portfolio: the whole document.
pub async fn get_portfolio(store: web::Data<PortfolioStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.load().await)
}

/// GET /api/page: what the site renders. Enabled sections in display order,
/// skills grouped by category.
pub async fn get_page(store: web::Data<PortfolioStore>) -> HttpResponse {
    HttpResponse::Ok().json(PageView::from(store.load().await))
}
