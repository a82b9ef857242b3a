use tracing::info;

/// External authentication/session service.
///
/// `logout` is fire-and-forget: implementations own their network calls,
/// redirects and failure reporting.
pub trait SessionClient {
    fn logout(&self);
}

/// Handler behind the sidebar's logout button.
pub fn request_logout(client: &dyn SessionClient) {
    info!("Logout requested from navigation shell");
    client.logout();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingClient {
        calls: Cell<u32>,
    }

    impl SessionClient for CountingClient {
        fn logout(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn test_logout_calls_client_once_per_request() {
        let client = CountingClient::default();

        request_logout(&client);
        assert_eq!(client.calls.get(), 1);

        request_logout(&client);
        assert_eq!(client.calls.get(), 2);
    }
}
