use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    agent::{request::Request, response::Response},
    config::Config,
    eligibility::PolicyEngine,
    error::Result,
};
use tracing::{error, info};

/// Request boundary in front of the policy engine.
///
/// Every request produces a response; faults are logged and returned as
/// error envelopes. The engine sits behind one mutex so adding a scheme is a
/// single critical section.
pub struct SchemeSetuAgent {
    name: String,
    engine: Arc<Mutex<PolicyEngine>>,
}

impl SchemeSetuAgent {
    pub fn new(name: impl Into<String>, engine: PolicyEngine) -> Self {
        Self {
            name: name.into(),
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.agent.name.clone(),
            PolicyEngine::open(&config.storage.path),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> &Arc<Mutex<PolicyEngine>> {
        &self.engine
    }

    /// Handle one JSON request and return the JSON response
    pub async fn listen(&self, message: &str) -> String {
        let response = match self.process(message).await {
            Ok(response) => response,
            Err(e) => {
                error!("[Agent Error] {}", e);
                Response::error(e.to_string())
            }
        };

        response.to_json()
    }

    pub async fn process(&self, message: &str) -> Result<Response> {
        let request = Request::parse(message)?;
        info!("Received {} request", request.kind());
        self.handle(request).await
    }

    pub async fn handle(&self, request: Request) -> Result<Response> {
        match request {
            Request::CheckEligibility(profile) => {
                let engine = self.engine.lock().await;
                let schemes = engine.check_eligibility(&profile);
                Ok(Response::eligible(&self.name, schemes))
            }
            Request::LearnNewScheme(scheme) => {
                // The store writes with blocking std::fs; keep it off the runtime threads
                let mut engine = Arc::clone(&self.engine).lock_owned().await;
                let scheme_id =
                    tokio::task::spawn_blocking(move || engine.add_scheme(scheme)).await?;
                info!("New scheme learned: {}", scheme_id);
                Ok(Response::learned(&self.name, scheme_id))
            }
        }
    }
}
