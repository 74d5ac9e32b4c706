use crate::app::ports::IdentityPort;
use crate::config::UserConfig;
use crate::domain::UserProfile;

/// Identity adapter holding the resolved profile of the signed-in user,
/// if any.
///
/// Stands in for a real authentication provider: the host resolves the
/// session up front and hands the profile over, so nothing downstream
/// ever reads ambient authentication state.
pub struct StaticIdentityProvider {
    user: Option<UserProfile>,
}

impl StaticIdentityProvider {
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }

    /// Build a provider from the optional `[user]` config section
    pub fn from_config(user: Option<UserConfig>) -> Self {
        Self {
            user: user.map(|u| UserProfile {
                name: u.name,
                avatar: u.avatar,
                uid: u.uid,
            }),
        }
    }
}

impl IdentityPort for StaticIdentityProvider {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_yields_no_user() {
        let provider = StaticIdentityProvider::signed_out();
        assert!(provider.current_user().is_none());
    }

    #[test]
    fn test_from_config_maps_profile_fields() {
        let provider = StaticIdentityProvider::from_config(Some(UserConfig {
            uid: "local-user-1".to_string(),
            name: Some("Demo User".to_string()),
            avatar: None,
        }));

        let user = provider.current_user().unwrap();
        assert_eq!(user.uid, "local-user-1");
        assert_eq!(user.name.as_deref(), Some("Demo User"));
        assert_eq!(user.avatar, None);
    }
}
