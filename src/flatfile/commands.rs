//! Command orchestration
//!
//! One pipeline per run: validate credentials, exchange them for a token,
//! derive the authenticated environment, then issue the requested listing
//! call. Any failing step aborts the steps after it and surfaces its error
//! kind unchanged.

use log::debug;

use crate::cli::{Cli, Command, GetResource};
use crate::error::Result;
use crate::flatfile::auth::{create_token, Credentials};
use crate::flatfile::client::ApiEnv;
use crate::flatfile::{environments, spaces, users, workbooks};
use crate::output::{output_environments, output_spaces, output_users, output_workbooks};
use crate::ui::{create_spinner, finish_spinner};

/// Run the get command end to end
pub async fn run_get_command(env: &ApiEnv, creds: &Credentials, cli: &Cli) -> Result<()> {
    // Reject empty credentials before any network call is attempted
    creds.validate()?;

    let spinner = create_spinner("Authenticating...", cli.batch);
    let token = create_token(env, creds).await;
    finish_spinner(spinner);
    let env = env.with_token(token?);
    debug!("Authenticated");

    let Command::Get { resource } = &cli.command;
    match resource {
        GetResource::Wb(args) => {
            let spinner = create_spinner("Fetching workbooks...", cli.batch);
            let result = workbooks::list_workbooks(&env, &args.space).await;
            finish_spinner(spinner);
            output_workbooks(&result?, args.output, cli.no_header);
        }
        GetResource::User(args) => {
            let spinner = create_spinner("Fetching users...", cli.batch);
            let result = users::list_users(&env).await;
            finish_spinner(spinner);
            output_users(&result?, args.output, cli.no_header);
        }
        GetResource::Env(args) => {
            let spinner = create_spinner("Fetching environments...", cli.batch);
            let result = environments::list_environments(&env).await;
            finish_spinner(spinner);
            output_environments(&result?, args.output, cli.no_header);
        }
        GetResource::Space(args) => {
            let spinner = create_spinner("Fetching spaces...", cli.batch);
            let result = spaces::list_spaces(&env).await;
            finish_spinner(spinner);
            output_spaces(&result?, args.output, cli.no_header);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlatfileError;
    use crate::flatfile::client::{HttpRequest, HttpTransport, RawResponse};
    use async_trait::async_trait;
    use clap::Parser;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    type Responder = Box<dyn Fn(&HttpRequest) -> crate::error::Result<RawResponse> + Send + Sync>;

    /// Transport double that counts calls and answers from a closure
    struct SpyTransport {
        calls: AtomicUsize,
        respond: Responder,
    }

    impl SpyTransport {
        fn new(respond: Responder) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                respond,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpTransport for SpyTransport {
        async fn send(&self, req: HttpRequest) -> crate::error::Result<RawResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.respond)(&req)
        }
    }

    fn json_ok(body: serde_json::Value) -> crate::error::Result<RawResponse> {
        Ok(RawResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: serde_json::to_vec(&body).unwrap(),
        })
    }

    fn wb_cli() -> Cli {
        Cli::parse_from([
            "flatctl",
            "-H",
            "mock.flatfile.com",
            "--batch",
            "get",
            "wb",
            "-s",
            "dev_sp_dPDmdbu2",
        ])
    }

    fn creds() -> Credentials {
        Credentials {
            client_id: "id-1".to_string(),
            secret: "sec-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_credentials_prevent_any_network_call() {
        let transport = Arc::new(SpyTransport::new(Box::new(|_| {
            panic!("transport must not be called")
        })));
        let env = ApiEnv::new(Arc::clone(&transport) as Arc<dyn HttpTransport>);

        let empty = Credentials {
            client_id: String::new(),
            secret: "sec-1".to_string(),
        };
        let err = run_get_command(&env, &empty, &wb_cli()).await.unwrap_err();

        assert!(matches!(err, FlatfileError::Config(_)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_auth_failure_short_circuits_listing() {
        // Every call fails; the listing step must never run
        let transport = Arc::new(SpyTransport::new(Box::new(|_| {
            Ok(RawResponse {
                status: 500,
                content_type: Some("application/json".to_string()),
                body: b"{}".to_vec(),
            })
        })));
        let env = ApiEnv::new(Arc::clone(&transport) as Arc<dyn HttpTransport>);

        let err = run_get_command(&env, &creds(), &wb_cli()).await.unwrap_err();

        assert_eq!(
            err,
            FlatfileError::Status {
                status: 500,
                min_inclusive: 200,
                max_exclusive: 300,
            }
        );
        // Only the token exchange was attempted
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_unchanged() {
        let transport = Arc::new(SpyTransport::new(Box::new(|_| {
            Err(FlatfileError::Request {
                reason: "dns failure".to_string(),
            })
        })));
        let env = ApiEnv::new(Arc::clone(&transport) as Arc<dyn HttpTransport>);

        let err = run_get_command(&env, &creds(), &wb_cli()).await.unwrap_err();

        assert_eq!(
            err,
            FlatfileError::Request {
                reason: "dns failure".to_string(),
            }
        );
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_full_pipeline_authenticates_then_lists() {
        let transport = Arc::new(SpyTransport::new(Box::new(|req| {
            if req.endpoint.starts_with("auth/") {
                json_ok(serde_json::json!({"data": {"accessToken": "tok-xyz"}}))
            } else {
                // The listing call must carry the token from the exchange
                assert_eq!(
                    req.headers,
                    vec![("Authorization".to_string(), "Bearer tok-xyz".to_string())]
                );
                json_ok(serde_json::json!({"data": [
                    {"id": "wb-1", "name": "Contacts", "records": []}
                ]}))
            }
        })));
        let env = ApiEnv::new(Arc::clone(&transport) as Arc<dyn HttpTransport>);

        run_get_command(&env, &creds(), &wb_cli()).await.unwrap();

        assert_eq!(transport.call_count(), 2);
    }
}
