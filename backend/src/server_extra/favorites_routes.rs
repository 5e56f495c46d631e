use axum::{
    Json,
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::property::FavoriteRequest;

use crate::api::favorites::{self, UnknownProperty};

fn favorite_response(action: &str, result: anyhow::Result<()>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) if e.downcast_ref::<UnknownProperty>().is_some() => {
            tracing::info!("{}: {}", action, e);
            (StatusCode::NOT_FOUND, Body::from(e.to_string())).into_response()
        }
        Err(e) => {
            tracing::error!("{}: request failed: {:#?}", action, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

pub async fn add_favorite(Json(request): Json<FavoriteRequest>) -> Response {
    let result = favorites::add_favorite(&request.user_id, &request.property_id).await;
    favorite_response("add_favorite", result)
}

pub async fn remove_favorite(Json(request): Json<FavoriteRequest>) -> Response {
    let result = favorites::remove_favorite(&request.user_id, &request.property_id).await;
    favorite_response("remove_favorite", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(property_id: &str) -> Json<FavoriteRequest> {
        Json(FavoriteRequest { user_id: "routes-user".into(), property_id: property_id.into() })
    }

    #[tokio::test]
    async fn known_property_gives_no_content() {
        assert_eq!(add_favorite(request("imv-0005")).await.status(), StatusCode::NO_CONTENT);
        assert_eq!(remove_favorite(request("imv-0005")).await.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn unknown_property_gives_not_found() {
        assert_eq!(add_favorite(request("nope")).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(remove_favorite(request("nope")).await.status(), StatusCode::NOT_FOUND);
    }
}
