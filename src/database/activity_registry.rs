use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed_activities::seed_activities;
use crate::error::SignupError;
use crate::models::Activity;

/// In-memory store of every activity, keyed by name.
///
/// Cloning is cheap and yields a handle to the same map, so one registry can be
/// handed to the router as state. Each check-then-mutate step runs under a single
/// write-lock acquisition.
#[derive(Clone)]
pub struct ActivityRegistry {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityRegistry {
    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub fn from_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        Self {
            activities: Arc::new(RwLock::new(activities.into_iter().collect())),
        }
    }

    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    #[cfg(test)]
    pub(crate) async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    /// Appends `email` to the activity's participants.
    ///
    /// A duplicate is reported before a full activity, so re-sending a signup that
    /// already went through never reads as a capacity problem.
    pub async fn signup(&self, name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(SignupError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub async fn unregister(&self, name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(SignupError::NotSignedUp);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}
