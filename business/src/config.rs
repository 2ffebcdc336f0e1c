use std::any::Any;

use roster_states::State;
use ustr::Ustr;

/// Where the directory data comes from. One read-only endpoint, no
/// authentication.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub api_base_url: String,
}

impl DirectoryConfig {
    /// Points the directory at a different base URL; tests pass a mock
    /// server's address here.
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    pub fn users_url(&self) -> Ustr {
        Ustr::from(&format!("{}/users", self.api_base_url))
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://dummyjson.com".to_owned(),
        }
    }
}

impl State for DirectoryConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_public_source() {
        let config = DirectoryConfig::default();
        assert_eq!(config.users_url(), Ustr::from("https://dummyjson.com/users"));
    }

    #[test]
    fn custom_base_url_is_respected() {
        let config = DirectoryConfig::new("http://127.0.0.1:4545".to_owned());
        assert_eq!(
            config.users_url(),
            Ustr::from("http://127.0.0.1:4545/users")
        );
    }
}
