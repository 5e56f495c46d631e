use axum::{
    Json,
    body::Body,
    extract::RawQuery,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use common::listing_const::{ANONYMOUS_USER_ID, USER_ID_HEADER};
use tracing::info;

use crate::api::properties::{get_filter_schema, list_properties as list_properties_op};

/// `x-user-id`, or the anonymous id when missing or blank.
pub fn user_id_from_headers(headers: &HeaderMap) -> String {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(ANONYMOUS_USER_ID)
        .to_string()
}

async fn _list_properties(headers: HeaderMap, RawQuery(query): RawQuery) -> anyhow::Result<impl IntoResponse> {
    let user_id = user_id_from_headers(&headers);
    let query = query.unwrap_or_default();
    info!("GET /api/properties?{} as {}", query, user_id);
    let page = list_properties_op(&query, &user_id).await?;
    Ok(Json(page))
}

pub async fn list_properties(headers: HeaderMap, query: RawQuery) -> Response {
    match _list_properties(headers, query).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("list_properties: request failed: {:#?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response();
        }
    }
}

pub async fn filter_schema() -> Response {
    match get_filter_schema().await {
        Ok(schema) => Json(schema).into_response(),
        Err(e) => {
            tracing::error!("filter_schema: request failed: {:#?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response();
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use common::filter_schema::FilterSchema;
    use common::property::PropertyPage;

    use super::*;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn blank_user_header_is_anonymous() {
        let mut headers = HeaderMap::new();
        assert_eq!(user_id_from_headers(&headers), "anon");
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("  "));
        assert_eq!(user_id_from_headers(&headers), "anon");
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("u-42"));
        assert_eq!(user_id_from_headers(&headers), "u-42");
    }

    #[tokio::test]
    async fn listing_route_returns_data_and_meta() {
        let query = RawQuery(Some("page=2&limit=10&propertyType=Terreno,Loja".to_string()));
        let response = list_properties(HeaderMap::new(), query).await;
        assert_eq!(response.status(), StatusCode::OK);
        let page: PropertyPage = body_json(response).await;
        assert_eq!(page.meta.total, 6);
        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn schema_route_serves_location_tree() {
        let response = filter_schema().await;
        assert_eq!(response.status(), StatusCode::OK);
        let schema: FilterSchema = body_json(response).await;
        schema.validate().unwrap();
        assert_eq!(schema.filters().last().unwrap().key, "location");
    }
}
