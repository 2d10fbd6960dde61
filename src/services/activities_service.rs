use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::error::SignupError;
use crate::models::Activity;

pub async fn list_activities(registry: &ActivityRegistry) -> BTreeMap<String, Activity> {
    registry.snapshot().await
}

pub async fn signup_for_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    match registry.signup(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup_ok");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "signup_rejected");
            Err(e)
        }
    }
}

pub async fn unregister_from_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    match registry.unregister(activity_name, email).await {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister_ok");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, error = %e, "unregister_rejected");
            Err(e)
        }
    }
}
