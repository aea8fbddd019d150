//! Activate Promotion Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use promotions_app::domain::promotions::records::PromotionId;

use crate::{extensions::*, promotions::responses::PromotionResponse};

use super::set_active;

/// Activate Promotion Handler
#[endpoint(
    tags("promotions"),
    summary = "Activate Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion activated"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Content-Type is not JSON"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    req.require_json()?;

    let promotion = set_active(depot, PromotionId::from_i64(id.into_inner()), true).await?;

    Ok(Json(promotion.into()))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::CONTENT_TYPE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use promotions_app::domain::promotions::{
        MockPromotionsService, PromotionsServiceError, data::PromotionUpdate,
    };

    use crate::test_helpers::{make_promotion, promotions_service};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(
            promotions,
            Router::with_path("promotions/{id}/activate").put(handler),
        )
    }

    fn expect_no_other_calls(promotions: &mut MockPromotionsService) {
        promotions.expect_list_promotions().never();
        promotions.expect_find_promotion().never();
        promotions.expect_create_promotion().never();
        promotions.expect_delete_promotion().never();
    }

    #[tokio::test]
    async fn test_activate_inactive_promotion() -> TestResult {
        let id = PromotionId::from_i64(4);
        let expected = PromotionUpdate::from(make_promotion(4, true));

        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_get_promotion()
            .once()
            .withf(move |requested| *requested == id)
            .return_once(|_| Ok(make_promotion(4, false)));

        promotions
            .expect_update_promotion()
            .once()
            .withf(move |requested, update| *requested == id && *update == expected)
            .return_once(|_, _| Ok(make_promotion(4, true)));

        expect_no_other_calls(&mut promotions);

        let mut res = TestClient::put("http://example.com/promotions/4/activate")
            .add_header(CONTENT_TYPE, "application/json", true)
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PromotionResponse = res.take_json().await?;

        assert_eq!(body.id, 4);
        assert!(body.active, "promotion should be active");

        Ok(())
    }

    #[tokio::test]
    async fn test_activate_missing_promotion_returns_404() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_get_promotion()
            .once()
            .withf(|requested| *requested == PromotionId::from_i64(5))
            .return_once(|_| Err(PromotionsServiceError::NotFound));

        promotions.expect_update_promotion().never();

        expect_no_other_calls(&mut promotions);

        let res = TestClient::put("http://example.com/promotions/5/activate")
            .add_header(CONTENT_TYPE, "application/json", true)
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_activate_without_content_type_returns_415() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_get_promotion().never();
        promotions.expect_update_promotion().never();

        expect_no_other_calls(&mut promotions);

        let res = TestClient::put("http://example.com/promotions/4/activate")
            .send(&make_service(promotions))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNSUPPORTED_MEDIA_TYPE));

        Ok(())
    }
}
