//! Create Promotion Handler

use salvo::{http::header::LOCATION, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    promotions::{
        errors::{into_status_error, validation_error},
        responses::PromotionResponse,
    },
};

use super::read_payload;

/// Create Promotion Handler
///
/// Expects a JSON object with `title`, `promotion_type`, `start_date`,
/// `end_date` and an optional `active` flag (default `false`).
#[endpoint(
    tags("promotions"),
    summary = "Create Promotion",
    responses(
        (status_code = StatusCode::CREATED, description = "Promotion created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid promotion payload"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Body is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "promotions.create", skip(req, depot, res), err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PromotionResponse>, StatusError> {
    let promotions = depot.promotions_or_500()?;

    req.require_json()?;

    let new_promotion = read_payload(req)
        .await?
        .into_new_promotion()
        .map_err(validation_error)?;

    let promotion = promotions
        .create_promotion(new_promotion)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/promotions/{}", promotion.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    info!(promotion_id = %promotion.id, "created promotion");

    Ok(Json(promotion.into()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use promotions_app::domain::promotions::{
        MockPromotionsService, PromotionsServiceError, data::NewPromotion,
    };

    use crate::test_helpers::{make_promotion, promotions_service, winter_sale_body};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(promotions, Router::with_path("promotions").post(handler))
    }

    fn winter_sale(active: bool) -> NewPromotion {
        NewPromotion {
            title: "Winter Sale".to_string(),
            promotion_type: "30%OFF".to_string(),
            start_date: date(2021, 11, 1).at(0, 0, 0, 0),
            end_date: date(2021, 12, 24).at(0, 0, 0, 0),
            active,
        }
    }

    fn expect_no_calls(promotions: &mut MockPromotionsService) {
        promotions.expect_list_promotions().never();
        promotions.expect_find_promotion().never();
        promotions.expect_get_promotion().never();
        promotions.expect_update_promotion().never();
        promotions.expect_delete_promotion().never();
    }

    #[tokio::test]
    async fn test_create_promotion_success() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .withf(|new| *new == winter_sale(false))
            .return_once(|_| Ok(make_promotion(1, false)));

        expect_no_calls(&mut promotions);

        let mut res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "application/json", true)
            .body(winter_sale_body().to_string())
            .send(&make_service(promotions))
            .await;

        let body: PromotionResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/promotions/1"));
        assert_eq!(body.id, 1);
        assert!(!body.active, "active defaults to false");
        assert_eq!(body.start_date, "2021-11-01T00:00:00");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_promotion_honours_active_and_ignores_id() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .withf(|new| *new == winter_sale(true))
            .return_once(|_| Ok(make_promotion(2, true)));

        expect_no_calls(&mut promotions);

        let mut res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "application/json", true)
            .body(json!({
                "id": 99,
                "title": "Winter Sale",
                "promotion_type": "30%OFF",
                "start_date": "2021-11-01",
                "end_date": "2021-12-24",
                "active": true,
            }).to_string())
            .send(&make_service(promotions))
            .await;

        let body: PromotionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, 2);
        assert!(body.active, "active passed through");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_empty_object_returns_400() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "application/json", true)
            .body(json!({}).to_string())
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_missing_field_returns_400() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "application/json", true)
            .body(json!({
                "title": "Winter Sale",
                "start_date": "2021-11-01",
                "end_date": "2021-12-24",
            }).to_string())
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_malformed_json_returns_400() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "application/json", true)
            .body("{\"title\": ".to_string())
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_without_content_type_returns_415() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .body(winter_sale_body().to_string())
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_wrong_content_type_returns_415() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "text/html", true)
            .body(winter_sale_body().to_string())
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_json_with_charset_returns_415() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .json(&winter_sale_body())
            .add_header(CONTENT_TYPE, "application/json; charset=utf-8", true)
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_uppercase_json_returns_415() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_create_promotion().never();

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "APPLICATION/JSON", true)
            .body(winter_sale_body().to_string())
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_constraint_violation_returns_400() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_create_promotion()
            .once()
            .return_once(|_| Err(PromotionsServiceError::InvalidData));

        expect_no_calls(&mut promotions);

        let res = TestClient::post("http://example.com/promotions")
            .add_header(CONTENT_TYPE, "application/json", true)
            .body(winter_sale_body().to_string())
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
