use crate::config::AssistantConfig;
use crate::error::AssistantError;
use futures::FutureExt;
use futures::future::BoxFuture;
use ollama_rs::Ollama;
use ollama_rs::generation::completion::request::GenerationRequest;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

/// A text-in, text-out generative model.
pub trait CompletionClient: Send + Sync {
    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AssistantError>>;
}

pub struct OllamaClient {
    ollama: Ollama,
    model: String,
}

impl OllamaClient {
    pub fn from_config(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or(AssistantError::MissingCredential)?;

        reqwest::Url::parse(&config.host)
            .map_err(|e| AssistantError::InvalidEndpoint(format!("{}: {}", config.host, e)))?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| AssistantError::InvalidCredential)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        Ok(OllamaClient {
            ollama: Ollama::new_with_client(config.host.clone(), config.port, http),
            model: config.model.clone(),
        })
    }
}

impl CompletionClient for OllamaClient {
    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AssistantError>> {
        async move {
            let request = GenerationRequest::new(self.model.clone(), prompt.to_string());

            let response = self
                .ollama
                .generate(request)
                .await
                .map_err(|e| AssistantError::Transport(e.to_string()))?;

            if response.response.trim().is_empty() {
                return Err(AssistantError::EmptyResponse);
            }

            Ok(response.response)
        }
        .boxed()
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replies with a fixed answer and records every prompt it was sent.
    pub struct ScriptedClient {
        reply: Result<String, AssistantError>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        pub fn replying(text: &str) -> Self {
            Self::with(Ok(text.to_string()))
        }

        pub fn failing(error: AssistantError) -> Self {
            Self::with(Err(error))
        }

        fn with(reply: Result<String, AssistantError>) -> Self {
            ScriptedClient {
                reply,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    impl CompletionClient for ScriptedClient {
        fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, AssistantError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            futures::future::ready(self.reply.clone()).boxed()
        }
    }
}
