//! The analysis operations.
//!
//! Every operation makes exactly one model call and always resolves: a
//! transport error, an empty body or an unparseable document is logged and
//! replaced by the payload's fallback. Only `identify_location` returns the
//! error, because the session picks the fallback text for it.

use rentshield_core::{
    Artifact, BiddingVerdict, ContractVerdict, EpcVerdict, HazardAssessment, Judgment,
    RentVerdict, ScanKind, ScanOutcome, Tone, Translation,
};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::prompts;
use crate::{AiError, Analyst, GenerateRequest, ModelTier};

/// Draft returned when the model answers with nothing.
pub const EMPTY_DRAFT: &str = "Could not generate response.";
/// Draft returned when the call fails.
pub const FAILED_DRAFT: &str = "Error generating response. Please try again.";

/// Call the model and parse its reply as `T`.
async fn structured<T: DeserializeOwned>(
    analyst: &dyn Analyst,
    request: &GenerateRequest<'_>,
) -> Result<T, AiError> {
    let text = analyst.generate(request).await?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(serde_json::from_str(strip_fences(trimmed))?)
}

/// Tolerate a reply wrapped in a ```json fence.
fn strip_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

async fn judge<T: DeserializeOwned>(
    operation: &'static str,
    analyst: &dyn Analyst,
    request: GenerateRequest<'_>,
    fallback: fn() -> T,
) -> Judgment<T> {
    match structured(analyst, &request).await {
        Ok(value) => {
            info!(operation, "analysis complete");
            Judgment::model(value)
        }
        Err(e) => {
            warn!(operation, error = %e, "analysis failed, using fallback");
            Judgment::fallback(fallback())
        }
    }
}

// ── Image operations ──

pub async fn analyze_contract(
    analyst: &dyn Analyst,
    image: &Artifact,
) -> Judgment<ContractVerdict> {
    let request = GenerateRequest::text(ModelTier::Pro, prompts::CONTRACT_PROMPT.to_string())
        .with_image(image)
        .with_schema(prompts::contract_schema());
    judge("contract", analyst, request, ContractVerdict::fallback).await
}

pub async fn analyze_hazard(analyst: &dyn Analyst, image: &Artifact) -> Judgment<HazardAssessment> {
    let request = GenerateRequest::text(ModelTier::Flash, prompts::HAZARD_PROMPT.to_string())
        .with_image(image)
        .with_schema(prompts::hazard_schema());
    judge("hazard", analyst, request, HazardAssessment::fallback).await
}

pub async fn detect_bidding_war(
    analyst: &dyn Analyst,
    image: &Artifact,
) -> Judgment<BiddingVerdict> {
    let request = GenerateRequest::text(ModelTier::Flash, prompts::BIDDING_PROMPT.to_string())
        .with_image(image)
        .with_schema(prompts::bidding_schema());
    judge("bidding", analyst, request, BiddingVerdict::fallback).await
}

pub async fn analyze_epc(analyst: &dyn Analyst, image: &Artifact) -> Judgment<EpcVerdict> {
    let request = GenerateRequest::text(ModelTier::Flash, prompts::EPC_PROMPT.to_string())
        .with_image(image)
        .with_schema(prompts::epc_schema());
    judge("epc", analyst, request, EpcVerdict::fallback).await
}

/// Dispatch a document scan to the operation for its mode.
pub async fn scan_document(
    analyst: &dyn Analyst,
    kind: ScanKind,
    image: &Artifact,
) -> Judgment<ScanOutcome> {
    match kind {
        ScanKind::Contract => analyze_contract(analyst, image)
            .await
            .map(ScanOutcome::Contract),
        ScanKind::Bidding => detect_bidding_war(analyst, image)
            .await
            .map(ScanOutcome::Bidding),
        ScanKind::Epc => analyze_epc(analyst, image).await.map(ScanOutcome::Epc),
    }
}

// ── Text operations ──

pub async fn analyze_rent_increase(
    analyst: &dyn Analyst,
    current_rent: f64,
    new_rent: f64,
    location: &str,
) -> Judgment<RentVerdict> {
    let request = GenerateRequest::text(
        ModelTier::Flash,
        prompts::rent_increase_prompt(current_rent, new_rent, location),
    )
    .with_schema(prompts::rent_increase_schema());
    judge("rent-increase", analyst, request, RentVerdict::fallback).await
}

pub async fn translate_landlord_speak(analyst: &dyn Analyst, text: &str) -> Judgment<Translation> {
    let request = GenerateRequest::text(ModelTier::Flash, prompts::translate_prompt(text))
        .with_schema(prompts::translation_schema());
    judge("translate", analyst, request, Translation::fallback).await
}

/// Draft a reply letter. Plain text, no schema.
pub async fn generate_response(
    analyst: &dyn Analyst,
    tone: Tone,
    context: &str,
) -> Judgment<String> {
    let request = GenerateRequest::text(ModelTier::Flash, prompts::response_prompt(tone, context));
    match analyst.generate(&request).await {
        Ok(text) if text.trim().is_empty() => {
            warn!(operation = "draft-response", "model returned an empty draft");
            Judgment::fallback(EMPTY_DRAFT.to_string())
        }
        Ok(text) => {
            info!(operation = "draft-response", %tone, "draft generated");
            Judgment::model(text)
        }
        Err(e) => {
            warn!(operation = "draft-response", error = %e, "draft generation failed");
            Judgment::fallback(FAILED_DRAFT.to_string())
        }
    }
}

/// Reverse-lookup a human-readable place name for a position.
pub async fn identify_location(
    analyst: &dyn Analyst,
    latitude: f64,
    longitude: f64,
) -> Result<String, AiError> {
    let request = GenerateRequest::text(
        ModelTier::Flash,
        prompts::location_prompt(latitude, longitude),
    );
    let text = analyst.generate(&request).await?;
    let place = text.trim();
    if place.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(place.to_string())
}
