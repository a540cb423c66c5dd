use crate::record::Profile;
use crate::role::{Role, UnknownRole};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Roles admitted on a protected view. Empty means any logged-in user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    allowed: Vec<Role>,
}

impl RouteRequirement {
    pub fn any_authenticated() -> Self {
        Self::default()
    }

    pub fn only(role: Role) -> Self {
        Self {
            allowed: vec![role],
        }
    }

    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut allowed: Vec<Role> = Vec::new();
        for role in roles {
            if !allowed.contains(&role) {
                allowed.push(role);
            }
        }
        Self { allowed }
    }

    /// Builds a requirement from raw tags, in any casing.
    pub fn from_tags<I, T>(tags: I) -> Result<Self, UnknownRole>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let roles = tags
            .into_iter()
            .map(|t| t.as_ref().parse::<Role>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::any_of(roles))
    }

    pub fn roles(&self) -> &[Role] {
        &self.allowed
    }

    pub fn admits(&self, role: Role) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&role)
    }
}

/// Outcome of a navigation attempt on a guarded view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    Granted,
    /// Nobody logged in.
    Login,
    /// Logged in with a role the view does not admit.
    Unauthorized,
}

impl Access {
    /// Where to send the user (replacing the history entry), if anywhere.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Access::Granted => None,
            Access::Login => Some(LOGIN_PATH),
            Access::Unauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

pub fn check(profile: Option<&Profile>, requirement: &RouteRequirement) -> Access {
    match profile {
        None => Access::Login,
        Some(p) if requirement.admits(p.role) => Access::Granted,
        Some(_) => Access::Unauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: Role) -> Profile {
        Profile {
            id: None,
            username: "u".into(),
            email: None,
            role,
        }
    }

    fn mixed_case(tag: &str, variant: usize) -> String {
        match variant % 3 {
            0 => tag.to_string(),
            1 => tag.to_lowercase(),
            _ => {
                let mut chars = tag.chars();
                let first = chars.next().map(|c| c.to_string()).unwrap_or_default();
                first + &chars.as_str().to_lowercase()
            }
        }
    }

    #[test]
    fn granted_iff_role_in_requirement_whatever_the_casing() {
        // every non-empty subset of the known roles, spelled in three casings
        for mask in 1u8..(1 << Role::ALL.len()) {
            let subset: Vec<Role> = Role::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, r)| *r)
                .collect();

            for variant in 0..3 {
                let tags: Vec<String> = subset.iter().map(|r| mixed_case(r.as_tag(), variant)).collect();
                let requirement = RouteRequirement::from_tags(&tags).unwrap();

                for role in Role::ALL {
                    let expected = if subset.contains(&role) {
                        Access::Granted
                    } else {
                        Access::Unauthorized
                    };
                    assert_eq!(check(Some(&profile(role)), &requirement), expected, "{role} vs {tags:?}");
                }
                assert_eq!(check(None, &requirement), Access::Login);
            }
        }
    }

    #[test]
    fn anonymous_is_sent_to_login() {
        let requirement = RouteRequirement::only(Role::Admin);
        let access = check(None, &requirement);
        assert_eq!(access, Access::Login);
        assert_eq!(access.redirect_path(), Some("/login"));
    }

    #[test]
    fn wrong_role_is_sent_to_unauthorized() {
        let access = check(Some(&profile(Role::Formateur)), &RouteRequirement::only(Role::Admin));
        assert_eq!(access, Access::Unauthorized);
        assert_eq!(access.redirect_path(), Some("/unauthorized"));
    }

    #[test]
    fn empty_requirement_admits_any_logged_in_user() {
        let requirement = RouteRequirement::any_authenticated();
        for role in Role::ALL {
            assert_eq!(check(Some(&profile(role)), &requirement), Access::Granted);
        }
        assert_eq!(check(None, &requirement), Access::Login);
        assert_eq!(Access::Granted.redirect_path(), None);
    }

    #[test]
    fn unknown_tag_in_requirement_is_an_error() {
        assert!(RouteRequirement::from_tags(["ADMIN", "ROOT"]).is_err());
    }

    #[test]
    fn duplicate_roles_collapse() {
        let requirement = RouteRequirement::from_tags(["admin", "ADMIN", "Admin"]).unwrap();
        assert_eq!(requirement.roles(), &[Role::Admin]);
    }
}
