use super::*;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reviews/")
            .route(web::post().to(create))
            .route(web::get().to(list))
            .default_service(web::to(method_not_allowed)),
    );
}

async fn create(
    Valid(review): Valid<ReviewCreate>,
    session: DbSession,
) -> Result<Json<ReviewResponse>, ApiError> {
    let rating = Rating::try_from(review.rating).map_err(ApiError::invalid_input)?;

    let review = session
        .reviews()
        .insert(rating)
        .await
        .map_err(ApiError::internal)?;
    session.commit().await.map_err(ApiError::internal)?;

    trace!("review created: {review}");

    Ok(Json(review.into()))
}

async fn list(session: DbSession) -> Result<Json<Vec<ReviewResponse>>, ApiError> {
    let reviews = session
        .reviews()
        .list_all()
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}
