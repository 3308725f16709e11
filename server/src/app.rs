use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Method, header},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::routes;
use crate::state::AppState;

pub(crate) fn build_app(state: AppState) -> Router {
    let static_assets = Router::new()
        .fallback_service(
            ServeDir::new(&state.static_dir)
                .precompressed_br()
                .precompressed_gzip(),
        )
        .layer(middleware::from_fn(set_static_cache_control));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let api = Router::new()
        .route("/api/districts", get(routes::api::get_districts))
        .route("/api/news", get(routes::api::get_news))
        .route("/api/health", get(routes::api::health))
        .route("/api/metrics", get(routes::api::metrics))
        .layer(cors);

    api.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .with_state(state)
}

/// Trunk fingerprints every emitted bundle file, so those names never change content.
const FINGERPRINTED_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";
/// Trunk's default `filehash` length.
const TRUNK_HASH_LEN: usize = 16;

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let fingerprinted = is_fingerprinted_bundle_file(request.uri().path());
    let mut response = next.run(request).await;

    if fingerprinted && response.status().is_success() {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(FINGERPRINTED_CACHE_CONTROL),
        );
    }
    response
}

/// Matches `<name>-<hash>.js`, `<name>-<hash>_bg.wasm` and `<name>-<hash>.css`
/// as written to `client/dist`. `index.html` keeps the default revalidation.
fn is_fingerprinted_bundle_file(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let Some((stem, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    let stem = match ext {
        "wasm" => stem.strip_suffix("_bg").unwrap_or(stem),
        "js" | "css" => stem,
        _ => return false,
    };

    stem.rsplit_once('-').is_some_and(|(name, hash)| {
        !name.is_empty()
            && hash.len() == TRUNK_HASH_LEN
            && hash.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    const WASM: &str = "flood-watch-client-71578f6b278221f3_bg.wasm";
    const JS: &str = "flood-watch-client-71578f6b278221f3.js";
    const CSS: &str = "style-a93762ff3bf6d63a.css";

    #[test]
    fn trunk_output_names_are_fingerprinted() {
        for name in [WASM, JS, CSS] {
            assert!(is_fingerprinted_bundle_file(&format!("/{name}")), "{name}");
        }
    }

    #[test]
    fn html_and_unhashed_sources_are_not_fingerprinted() {
        for path in [
            "/",
            "/index.html",
            "/style.css",
            "/flood-watch-client.js",
            "/flood-watch-client-71578f6b_bg.wasm",
            "/flood-watch-client-71578f6b278221fz.js",
            "/71578f6b278221f3.js",
            "/flood-watch-client-71578f6b278221f3.html",
        ] {
            assert!(!is_fingerprinted_bundle_file(path), "{path}");
        }
    }

    fn dist_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "flood-watch-dist-{tag}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create dist dir");
        for name in [WASM, JS, CSS] {
            fs::write(dir.join(name), b"bundle").expect("write bundle file");
        }
        fs::write(dir.join("index.html"), b"<!doctype html>").expect("write index");
        dir
    }

    async fn cache_control(app: Router, uri: &str) -> (StatusCode, Option<String>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let value = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        (response.status(), value)
    }

    #[tokio::test]
    async fn served_bundle_gets_immutable_cache_and_index_does_not() {
        let dir = dist_dir("served");
        let state = AppState::new(dir.to_string_lossy().into_owned()).expect("state");
        let app = build_app(state);

        for name in [WASM, JS, CSS] {
            let (status, value) = cache_control(app.clone(), &format!("/{name}")).await;
            assert_eq!(status, StatusCode::OK, "{name}");
            assert_eq!(value.as_deref(), Some(FINGERPRINTED_CACHE_CONTROL), "{name}");
        }

        let (status, value) = cache_control(app.clone(), "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, None);

        let _ = fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn missing_fingerprinted_file_is_not_marked_immutable() {
        let dir = dist_dir("missing");
        let app = build_app(AppState::new(dir.to_string_lossy().into_owned()).expect("state"));

        let (status, value) =
            cache_control(app, "/flood-watch-client-0000000000000000_bg.wasm").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, None);

        let _ = fs::remove_dir_all(dir);
    }
}
