use super::{AccessClaims, AuthError};

/// Confirms the required permission is present in the decoded claim set.
///
/// A claim set with no permissions field at all is a claims error, not a
/// denial; an empty or non-matching list is a denial.
pub(crate) fn check_permission(claims: &AccessClaims, required: &str) -> Result<(), AuthError> {
    match claims.has_permission(required) {
        None => Err(AuthError::PermissionsClaimMissing),
        Some(false) => Err(AuthError::PermissionDenied),
        Some(true) => Ok(()),
    }
}

/// A permission required by a protected operation, named at the type level
/// so the guard can be parameterized per route.
pub(crate) trait RequiredPermission: Send + Sync + 'static {
    const NAME: &'static str;
}

pub(crate) struct ReadDrinkDetails;
impl RequiredPermission for ReadDrinkDetails {
    const NAME: &'static str = "read:details";
}

pub(crate) struct CreateDrinks;
impl RequiredPermission for CreateDrinks {
    const NAME: &'static str = "write:create";
}

pub(crate) struct UpdateDrinks;
impl RequiredPermission for UpdateDrinks {
    const NAME: &'static str = "write:update";
}

pub(crate) struct DeleteDrinks;
impl RequiredPermission for DeleteDrinks {
    const NAME: &'static str = "write:delete";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with(permissions: Option<Vec<&str>>) -> AccessClaims {
        AccessClaims {
            sub: Some("auth0|test".to_string()),
            permissions: permissions
                .map(|list| list.into_iter().map(String::from).collect()),
            exp: 0,
        }
    }

    #[test]
    fn test_missing_claim_is_not_a_denial() {
        let result = check_permission(&claims_with(None), "read:details");
        assert_eq!(result, Err(AuthError::PermissionsClaimMissing));
    }

    #[test]
    fn test_empty_list_is_denied() {
        let result = check_permission(&claims_with(Some(vec![])), "read:details");
        assert_eq!(result, Err(AuthError::PermissionDenied));
    }

    #[test]
    fn test_superset_without_required_is_denied() {
        let claims = claims_with(Some(vec!["write:create", "write:update", "write:delete"]));
        let result = check_permission(&claims, "read:details");
        assert_eq!(result, Err(AuthError::PermissionDenied));
    }

    #[test]
    fn test_exact_match_passes() {
        let claims = claims_with(Some(vec!["write:create", "read:details"]));
        assert_eq!(check_permission(&claims, "read:details"), Ok(()));
    }

    #[test]
    fn test_no_prefix_matching() {
        let claims = claims_with(Some(vec!["read:details:extra"]));
        let result = check_permission(&claims, "read:details");
        assert_eq!(result, Err(AuthError::PermissionDenied));
    }
}
