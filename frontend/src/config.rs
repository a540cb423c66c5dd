//! Réglages fixés à la compilation.

/// Utilisée quand `API_URL` n'est pas défini au moment du build.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// URL de base de l'API (`API_URL=https://… trunk build`).
pub fn api_url() -> &'static str {
    option_env!("API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

pub fn endpoint(path: &str) -> String {
    join(api_url(), path)
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_keeps_a_single_slash() {
        assert_eq!(join("http://localhost:5000/api", "/auth/login"), "http://localhost:5000/api/auth/login");
        assert_eq!(join("http://localhost:5000/api/", "/auth/login"), "http://localhost:5000/api/auth/login");
        assert_eq!(join("http://localhost:5000/api", "formations"), "http://localhost:5000/api/formations");
    }

    #[test]
    fn api_url_is_never_empty() {
        assert!(!api_url().is_empty());
        assert!(endpoint("/auth/login").ends_with("/auth/login"));
    }
}
