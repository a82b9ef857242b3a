use std::rc::Rc;

use gloo_net::http::Request;
use navigation::SessionClient;
use serde::Serialize;
use web_sys::window;

use crate::settings::{self, AppSettings};

#[derive(Debug, Serialize)]
struct LogoutRequest<'a> {
    scope: &'a str,
}

/// Session client that revokes the token over HTTP, then drops it locally
/// and sends the browser to the login page.
#[derive(Debug, Clone)]
pub struct HttpSessionClient {
    logout_url: String,
    login_path: String,
    token_storage_key: String,
}

impl HttpSessionClient {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            logout_url: settings.auth_url("/logout"),
            login_path: settings.login_path.clone(),
            token_storage_key: settings.token_storage_key.clone(),
        }
    }

    fn stored_token(&self) -> Option<String> {
        window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(&self.token_storage_key)
            .ok()
            .flatten()
    }

    fn clear_token(&self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            if let Err(e) = storage.remove_item(&self.token_storage_key) {
                log::error!("Failed to clear stored token: {:?}", e);
            }
        }
    }

    fn redirect_to_login(&self) {
        let Some(window) = window() else {
            return;
        };
        if let Err(e) = window.location().set_href(&self.login_path) {
            log::error!("Failed to redirect to {}: {:?}", self.login_path, e);
        }
    }

    async fn revoke(url: String, token: Option<String>) -> Result<(), String> {
        log::debug!("POST request to: {}", url);

        let mut request = Request::post(&url);
        if let Some(token) = token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let body = serde_json::to_string(&LogoutRequest { scope: "local" })
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        let response = request
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        Ok(())
    }
}

impl SessionClient for HttpSessionClient {
    fn logout(&self) {
        let client = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let token = client.stored_token();
            if let Err(e) = Self::revoke(client.logout_url.clone(), token).await {
                log::error!("Logout - {}", e);
            }
            client.clear_token();
            client.redirect_to_login();
        });
    }
}

/// Session client shared through Yew context.
#[derive(Clone)]
pub struct SessionContext {
    pub client: Rc<dyn SessionClient>,
}

impl SessionContext {
    pub fn new(client: Rc<dyn SessionClient>) -> Self {
        Self { client }
    }

    pub fn from_settings() -> Self {
        let settings = settings::get_settings();
        log::debug!("Session service URL: {}", settings.auth_base_url());
        Self::new(Rc::new(HttpSessionClient::from_settings(&settings)))
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_settings() {
        let mut settings = AppSettings::default();
        settings.auth_host = "auth.alma.com".to_string();
        settings.login_path = "/signin".to_string();

        let client = HttpSessionClient::from_settings(&settings);
        assert_eq!(client.logout_url, "http://auth.alma.com:3000/api/auth/logout");
        assert_eq!(client.login_path, "/signin");
        assert_eq!(client.token_storage_key, "alma_access_token");
    }

    #[test]
    fn test_context_equality_is_by_client() {
        let shared = SessionContext::new(Rc::new(HttpSessionClient::from_settings(
            &AppSettings::default(),
        )));
        let other = SessionContext::new(Rc::new(HttpSessionClient::from_settings(
            &AppSettings::default(),
        )));

        assert!(shared == shared.clone());
        assert!(shared != other);
    }
}
