//! Gemini REST client.
//!
//! Thin wrapper over the `generateContent` endpoint. A client without an API
//! key is "disabled": the natural-language parse path goes straight to the
//! deterministic fallback and the generation features return
//! [`Error::AiService`].

use crate::{
    ai::{
        fallback, prompts,
        types::{DietPlan, DietProfile, ParsedInput, ReceiptItem, RecipeSuggestion,
            strip_code_fences},
    },
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Fast model for parsing and receipt extraction
const FLASH_MODEL: &str = "gemini-1.5-flash";
/// Larger model for recipe and diet-plan generation
const PRO_MODEL: &str = "gemini-1.5-pro";

/// Client for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Part {
    Text(String),
    InlineData(InlineData),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Creates a client; `None` api key means disabled.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Builds a client from the `GEMINI_API_KEY` environment variable.
    /// A missing or empty variable yields a disabled client.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY not set; natural-language parsing uses the fallback");
        }
        Self::new(api_key)
    }

    /// Overrides the API base URL. Used by tests.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether an API key is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, model: &str, parts: Vec<Part>) -> Result<String> {
        let Some(api_key) = &self.api_key else {
            return Err(Error::AiService {
                message: "Gemini API key is not configured".to_string(),
            });
        };

        let url = format!(
            "{}/models/{model}:generateContent?key={api_key}",
            self.base_url
        );
        let request = GenerateRequest {
            contents: vec![Content { parts }],
        };

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(Error::AiService {
                message: format!("Gemini returned HTTP {}", response.status()),
            });
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| Error::AiService {
                message: "Gemini response contained no candidates".to_string(),
            })?;

        Ok(text)
    }

    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String> {
        self.generate(model, vec![Part::Text(prompt.to_string())])
            .await
    }

    /// Parses free text into structured foods and actions.
    ///
    /// Never fails: a disabled client, service error, or undecodable
    /// response all degrade to the deterministic fallback parser.
    pub async fn parse_natural_language(&self, input: &str) -> ParsedInput {
        if !self.is_enabled() {
            return fallback::parse(input);
        }

        match self.try_parse(input).await {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "Gemini parse failed, using fallback");
                fallback::parse(input)
            }
        }
    }

    async fn try_parse(&self, input: &str) -> Result<ParsedInput> {
        let text = self
            .generate_text(FLASH_MODEL, &prompts::parse_prompt(input))
            .await?;
        Ok(serde_json::from_str(strip_code_fences(&text))?)
    }

    /// Suggests recipes for the given ingredients. Surfaces errors; there is
    /// no deterministic fallback for generation.
    pub async fn generate_recipes(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSuggestion>> {
        let text = self
            .generate_text(PRO_MODEL, &prompts::recipes_prompt(ingredients))
            .await?;
        Ok(serde_json::from_str(strip_code_fences(&text))?)
    }

    /// Generates a personalized diet plan from a profile.
    pub async fn generate_diet_plan(&self, profile: &DietProfile) -> Result<DietPlan> {
        let text = self
            .generate_text(PRO_MODEL, &prompts::diet_plan_prompt(profile))
            .await?;
        Ok(serde_json::from_str(strip_code_fences(&text))?)
    }

    /// Extracts line items from a base64-encoded JPEG receipt image.
    /// Malformed items in the decoded array are dropped.
    pub async fn analyze_receipt(&self, image_base64: &str) -> Result<Vec<ReceiptItem>> {
        let parts = vec![
            Part::Text(prompts::receipt_prompt().to_string()),
            Part::InlineData(InlineData {
                mime_type: "image/jpeg".to_string(),
                data: image_base64.to_string(),
            }),
        ];
        let text = self.generate(FLASH_MODEL, parts).await?;

        let items: Vec<ReceiptItem> = serde_json::from_str(strip_code_fences(&text))?;
        Ok(items.into_iter().filter(ReceiptItem::is_well_formed).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::types::ParsedAction;

    #[test]
    fn test_from_missing_env_is_disabled() {
        let client = GeminiClient::new(None);
        assert!(!client.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_client_parses_with_fallback() {
        let client = GeminiClient::new(None);

        let parsed = client.parse_natural_language("Add 250ml of water").await;
        assert_eq!(parsed, fallback::parse("Add 250ml of water"));
        assert_eq!(
            parsed.actions,
            vec![ParsedAction::LogWater { amount_ml: 250.0 }]
        );
    }

    #[tokio::test]
    async fn test_disabled_client_generation_errors() {
        let client = GeminiClient::new(None);

        let result = client.generate_recipes(&["eggs".to_string()]).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AiService { message: _ }
        ));
    }

    #[tokio::test]
    async fn test_disabled_client_diet_plan_and_receipt_error() {
        let client = GeminiClient::new(None);

        let profile = DietProfile {
            age: 30,
            gender: "male".to_string(),
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level: "moderate".to_string(),
            dietary_restrictions: vec![],
            goals: "maintain".to_string(),
        };
        assert!(matches!(
            client.generate_diet_plan(&profile).await.unwrap_err(),
            Error::AiService { message: _ }
        ));
        assert!(matches!(
            client.analyze_receipt("aGVsbG8=").await.unwrap_err(),
            Error::AiService { message: _ }
        ));
    }

    #[tokio::test]
    async fn test_unreachable_service_degrades_to_fallback() {
        // Enabled client pointed at a closed port: the HTTP error must not
        // escape the parse path.
        let client = GeminiClient::new(Some("test-key".to_string()))
            .with_base_url("http://127.0.0.1:9");

        let parsed = client.parse_natural_language("Add 250ml of water").await;
        assert_eq!(parsed, fallback::parse("Add 250ml of water"));
    }
}
