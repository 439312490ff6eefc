//! Credential strategies and OAuth2 grant requests

use reqwest::RequestBuilder;

use crate::context::UaaContext;
use crate::error::ValidationError;

/// How a single request authenticates itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Public endpoints such as `/info`
    None,
    /// `Authorization: <token_type> <token>`
    Bearer { token_type: String, token: String },
    /// Client credentials as HTTP basic auth
    Basic {
        client_id: String,
        client_secret: String,
    },
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer {
            token_type: "bearer".to_string(),
            token: token.into(),
        }
    }

    pub fn basic(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials::Basic {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Client credentials on the context win over its stored token.
    pub fn for_context(context: &UaaContext) -> Self {
        if !context.client_id.is_empty() && !context.client_secret.is_empty() {
            return Self::basic(&context.client_id, &context.client_secret);
        }

        if context.has_access_token() {
            let token_type = if context.token_type.is_empty() {
                "bearer".to_string()
            } else {
                context.token_type.clone()
            };
            return Credentials::Bearer {
                token_type,
                token: context.access_token.clone(),
            };
        }

        Credentials::None
    }

    /// Attach the matching `Authorization` header, if any.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::None => builder,
            Credentials::Bearer { token_type, token } => {
                builder.header(reqwest::header::AUTHORIZATION, format!("{token_type} {token}"))
            }
            Credentials::Basic {
                client_id,
                client_secret,
            } => builder.basic_auth(client_id, Some(client_secret)),
        }
    }
}

/// An OAuth2 token request against `/oauth/token`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrantRequest {
    Password {
        client_id: String,
        client_secret: String,
        username: String,
        password: String,
    },
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
    RefreshToken {
        client_id: String,
        client_secret: String,
        refresh_token: String,
    },
}

impl GrantRequest {
    pub fn grant_type(&self) -> &'static str {
        match self {
            GrantRequest::Password { .. } => "password",
            GrantRequest::ClientCredentials { .. } => "client_credentials",
            GrantRequest::RefreshToken { .. } => "refresh_token",
        }
    }

    pub fn client_id(&self) -> &str {
        match self {
            GrantRequest::Password { client_id, .. }
            | GrantRequest::ClientCredentials { client_id, .. }
            | GrantRequest::RefreshToken { client_id, .. } => client_id,
        }
    }

    /// Username for password grants, empty otherwise
    pub fn username(&self) -> &str {
        match self {
            GrantRequest::Password { username, .. } => username,
            _ => "",
        }
    }

    /// Required fields in the order they are reported when missing.
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            GrantRequest::Password {
                client_id,
                client_secret,
                username,
                password,
            } => vec![
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
                ("username", username.as_str()),
                ("password", password.as_str()),
            ],
            GrantRequest::ClientCredentials {
                client_id,
                client_secret,
            } => vec![
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
            ],
            GrantRequest::RefreshToken {
                client_id,
                client_secret,
                refresh_token,
            } => vec![
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
                ("refresh_token", refresh_token.as_str()),
            ],
        }
    }

    /// Fail on the first empty required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self
            .required_fields()
            .into_iter()
            .find(|(_, value)| value.is_empty())
        {
            // comes from the stored context, not from an argument
            Some(("refresh_token", _)) => Err(ValidationError::NoRefreshToken),
            Some((name, _)) => Err(ValidationError::MissingArgument(name)),
            None => Ok(()),
        }
    }

    /// Form body for the token endpoint, `grant_type` first.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("grant_type", self.grant_type().to_string())];
        fields.extend(
            self.required_fields()
                .into_iter()
                .map(|(name, value)| (name, value.to_string())),
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password_grant() -> GrantRequest {
        GrantRequest::Password {
            client_id: "admin".to_string(),
            client_secret: "adminsecret".to_string(),
            username: "woodstock".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_password_grant_validation_order() {
        assert!(password_grant().validate().is_ok());

        let missing = GrantRequest::Password {
            client_id: String::new(),
            client_secret: String::new(),
            username: String::new(),
            password: String::new(),
        };
        assert_eq!(
            missing.validate(),
            Err(ValidationError::MissingArgument("client_id"))
        );

        let missing = GrantRequest::Password {
            client_id: "admin".to_string(),
            client_secret: "adminsecret".to_string(),
            username: "woodstock".to_string(),
            password: String::new(),
        };
        assert_eq!(
            missing.validate(),
            Err(ValidationError::MissingArgument("password"))
        );
    }

    #[test]
    fn test_client_credentials_validation() {
        let grant = GrantRequest::ClientCredentials {
            client_id: "admin".to_string(),
            client_secret: String::new(),
        };
        assert_eq!(
            grant.validate(),
            Err(ValidationError::MissingArgument("client_secret"))
        );
    }

    #[test]
    fn test_refresh_grant_without_token() {
        let grant = GrantRequest::RefreshToken {
            client_id: "admin".to_string(),
            client_secret: "adminsecret".to_string(),
            refresh_token: String::new(),
        };
        assert_eq!(grant.validate(), Err(ValidationError::NoRefreshToken));
    }

    #[test]
    fn test_form_fields() {
        let fields = password_grant().form_fields();
        assert_eq!(fields[0], ("grant_type", "password".to_string()));
        assert!(fields.contains(&("client_id", "admin".to_string())));
        assert!(fields.contains(&("client_secret", "adminsecret".to_string())));
        assert!(fields.contains(&("username", "woodstock".to_string())));
        assert!(fields.contains(&("password", "secret".to_string())));
        assert_eq!(password_grant().username(), "woodstock");
    }

    #[test]
    fn test_credentials_for_context() {
        let mut ctx = UaaContext::new("https://uaa.example.com");
        assert_eq!(Credentials::for_context(&ctx), Credentials::None);

        ctx.access_token = "abc".to_string();
        assert_eq!(Credentials::for_context(&ctx), Credentials::bearer("abc"));

        ctx.client_id = "admin".to_string();
        ctx.client_secret = "adminsecret".to_string();
        assert_eq!(
            Credentials::for_context(&ctx),
            Credentials::basic("admin", "adminsecret")
        );
    }
}
