use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityRegistry;
use crate::error::SignupError;
use crate::models::{Activity, MessageResponse};
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(registry): State<ActivityRegistry>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&registry).await)
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<MessageResponse>, SignupError> {
    let message =
        activities_service::signup_for_activity(&registry, &activity_name, &query.email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn activity_unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<MessageResponse>, SignupError> {
    let message =
        activities_service::unregister_from_activity(&registry, &activity_name, &query.email)
            .await?;
    Ok(Json(MessageResponse { message }))
}
