use crate::site::config::SiteConfig;
use crate::web::pages;
use crate::web::view::View;
use log::info;
use mineralcore::catalog::{Catalog, DescriptionTable};
use mineralcore::telemetry::ViewMetrics;
use serde::Deserialize;
use serde_json::json;
use std::{net::SocketAddr, path::PathBuf, sync::Arc, thread};
use tokio::runtime::Builder;
use warp::Filter;

/// Read-only state shared by every request handler.
#[derive(Clone)]
pub struct PageContext {
    pub catalog: Arc<Catalog>,
    pub descriptions: Arc<DescriptionTable>,
    pub metrics: Arc<ViewMetrics>,
}

/// The one user-facing control, carried in the URL query string.
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    mineral: Option<String>,
}

/// Hosts the gallery and map views over the loaded tables.
pub struct WebServer {
    context: PageContext,
    bind: SocketAddr,
    assets_dir: PathBuf,
}

impl WebServer {
    pub fn new(
        config: &SiteConfig,
        catalog: Arc<Catalog>,
        descriptions: Arc<DescriptionTable>,
        metrics: Arc<ViewMetrics>,
    ) -> Self {
        Self {
            context: PageContext {
                catalog,
                descriptions,
                metrics,
            },
            bind: SocketAddr::from(([127, 0, 0, 1], config.port)),
            assets_dir: config.assets_dir.clone(),
        }
    }

    /// Runs warp on a dedicated thread with a current-thread runtime so the
    /// caller keeps the main thread for shutdown signalling.
    pub fn spawn(&self) {
        let ctx = self.context.clone();
        let assets_dir = self.assets_dir.clone();
        let bind = self.bind;
        thread::spawn(move || {
            info!("web server listening on http://{bind}/");
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes(ctx, assets_dir)).run(bind).await;
            });
        });
    }
}

fn routes(
    ctx: PageContext,
    assets_dir: PathBuf,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let ctx_filter = warp::any().map(move || ctx.clone());

    let records = warp::path!("api" / "records")
        .and(warp::get())
        .and(warp::query::<SelectionQuery>())
        .and(ctx_filter.clone())
        .map(|query: SelectionQuery, ctx: PageContext| {
            let selected =
                pages::selected_mineral(&ctx.catalog, query.mineral.as_deref()).to_string();
            let rows = ctx.catalog.filter_by_mineral(&selected);
            warp::reply::json(&json!({
                "mineral": selected,
                "count": rows.len(),
                "records": rows,
            }))
        });

    let metrics = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .and(ctx_filter.clone())
        .map(|ctx: PageContext| warp::reply::json(&ctx.metrics.snapshot()));

    let assets = warp::path("assets").and(warp::fs::dir(assets_dir));

    // Every remaining GET path is a page request; `View::from_path` decides
    // the layout, with Home as the fallback for unrecognized paths.
    let pages = warp::get()
        .and(warp::path::full())
        .and(warp::query::<SelectionQuery>())
        .and(ctx_filter)
        .map(
            |path: warp::path::FullPath, query: SelectionQuery, ctx: PageContext| {
                render(View::from_path(path.as_str()), &ctx, &query)
            },
        );

    records.or(metrics).or(assets).or(pages)
}

fn render(view: View, ctx: &PageContext, query: &SelectionQuery) -> impl warp::Reply {
    match view {
        View::Home => ctx.metrics.record_gallery_view(),
        View::Map => ctx.metrics.record_map_view(),
    }
    let selected = pages::selected_mineral(&ctx.catalog, query.mineral.as_deref());
    if ctx.catalog.filter_by_mineral(selected).is_empty() {
        ctx.metrics.record_empty_result();
    }
    warp::reply::html(pages::render_page(
        view,
        &ctx.catalog,
        &ctx.descriptions,
        query.mineral.as_deref(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mineralcore::catalog::ImageRecord;

    fn test_context() -> PageContext {
        let catalog = Catalog::new(
            vec!["Olivine".to_string(), "Gypsum".to_string()],
            vec![ImageRecord {
                id: "img-001".to_string(),
                region: "Jezero Crater".to_string(),
                filename: "img-001.jpg".to_string(),
                latitude: 18.44,
                longitude: 77.45,
                flags: vec![true, false],
            }],
        );
        PageContext {
            catalog: Arc::new(catalog),
            descriptions: Arc::new(DescriptionTable::default()),
            metrics: Arc::new(ViewMetrics::new()),
        }
    }

    #[test]
    fn rendering_updates_view_metrics() {
        let ctx = test_context();
        let _ = render(
            View::Home,
            &ctx,
            &SelectionQuery {
                mineral: None,
            },
        );
        let _ = render(
            View::Map,
            &ctx,
            &SelectionQuery {
                mineral: Some("Nonesuch".to_string()),
            },
        );

        let snapshot = ctx.metrics.snapshot();
        assert_eq!(snapshot.gallery_views, 1);
        assert_eq!(snapshot.map_views, 1);
        assert_eq!(snapshot.empty_results, 1);
    }

    #[tokio::test]
    async fn map_path_serves_the_map_view() {
        let routes = routes(test_context(), PathBuf::from("assets"));
        let response = warp::test::request()
            .path("/map?mineral=Olivine")
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 200);
        let body = String::from_utf8_lossy(response.body());
        assert!(body.contains("leaflet"));
        assert!(body.contains("L.marker([18.44, 77.45])"));
    }

    #[tokio::test]
    async fn unrecognized_paths_serve_the_gallery_view() {
        let routes = routes(test_context(), PathBuf::from("assets"));
        let response = warp::test::request()
            .path("/definitely-not-a-view")
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 200);
        let body = String::from_utf8_lossy(response.body());
        assert!(body.contains("Choose a Mineral"));
        assert!(!body.contains("L.marker("));
    }

    #[tokio::test]
    async fn metrics_route_reports_counters_as_json() {
        let ctx = test_context();
        let routes = routes(ctx.clone(), PathBuf::from("assets"));
        let _ = warp::test::request().path("/").reply(&routes).await;
        let response = warp::test::request().path("/metrics").reply(&routes).await;
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["gallery_views"], 1);
    }
}
