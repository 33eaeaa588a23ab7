//! Prompt templates and response schemas.
//!
//! Schemas use the Gemini `Schema` subset (`OBJECT`, `STRING`, `NUMBER`,
//! `BOOLEAN`, `ARRAY`). Field names match the camelCase payloads in
//! `rentshield_core::verdict`.

use rentshield_core::Tone;
use serde_json::{Value, json};

// ── Image prompts ──

pub const CONTRACT_PROMPT: &str = "\
You are an expert UK housing lawyer in 2026. The Renters' Rights Act 2026 is in effect.
Analyze this tenancy agreement image.

Determine a 'Tenant Health Score' from 0 to 100.
- 100 = Perfectly compliant, tenant-friendly.
- < 50 = Illegal clauses or high risk.

Look specifically for:
1. Section 21 clauses (Illegal).
2. Fixed terms longer than allowed (Illegal).
3. Excessive rent review clauses.
4. Illegal fees.

Return a JSON object with:
- isSafe: boolean
- score: number (0-100)
- summary: string (short analysis)
- issues: string[] (list of specific illegal clauses found)";

pub const HAZARD_PROMPT: &str = "\
Analyze this image of a potential housing hazard in the UK.
Under Awaab's Law (2026), categorize this hazard.
Return JSON with:
- type: string (e.g., \"Black Mould\", \"Structural Leak\", \"Broken Boiler\")
- severity: \"Low\" | \"Medium\" | \"High\" | \"Critical\"
- description: string (brief assessment of the risk to health)";

pub const BIDDING_PROMPT: &str = "\
Analyze this screenshot (WhatsApp, Email, or SMS).
Does this show a landlord or agent encouraging a \"Bidding War\" (asking for more rent than advertised) or pitting tenants against each other?
This is illegal under the 2026 Renters' Rights Act.
Return JSON:
- isIllegal: boolean
- evidence: string (quote the specific text that proves the violation)";

pub const EPC_PROMPT: &str = "\
Analyze this image of a home interior (radiator, window, insulation) or an EPC document.
Estimate the 'Comfort Level' (0-100) based on visible insulation, glazing, or heating quality.
Determine if it likely meets the 2026 UK EPC 'C' rating mandate.

Return JSON:
- score: string (estimated EPC rating A-G, or 'Unknown')
- comfort: number (0-100)
- compliance: boolean (true if likely C or above)
- summary: string (brief explanation of the thermal efficiency observed)";

// ── Text prompts ──

pub fn rent_increase_prompt(current_rent: f64, new_rent: f64, location: &str) -> String {
    format!(
        "Current Rent: £{current_rent}.\n\
         Proposed Rent: £{new_rent}.\n\
         Location: {location}.\n\
         \n\
         Task:\n\
         1. Calculate the percentage increase.\n\
         2. Based on general UK inflation/market trends for 2026, is this excessive?\n\
         3. Draft a \"Section 13 Rejection Letter\" if it's too high, or a negotiation letter if moderate.\n\
         \n\
         Return JSON:\n\
         {{\n  \"isFair\": boolean,\n  \"advice\": string (short advice),\n  \"letter\": string (the draft letter)\n}}"
    )
}

pub fn translate_prompt(text: &str) -> String {
    format!(
        "Analyze this text from a landlord: \"{text}\".\n\
         \n\
         1. Translate it into plain English/Real meaning (cynical but accurate).\n\
         2. Assess the legal standing under UK Renters Rights Act 2026.\n\
         \n\
         Return JSON:\n\
         {{\n  \"translation\": string,\n  \"legalStanding\": string\n}}"
    )
}

pub fn response_prompt(tone: Tone, context: &str) -> String {
    format!(
        "Draft an email response to a landlord in a {tone} tone.\n\
         Context: {context}.\n\
         Cite the UK Renters' Rights Act 2026 or Awaab's Law where appropriate.\n\
         Keep it concise and professional."
    )
}

pub fn location_prompt(latitude: f64, longitude: f64) -> String {
    format!(
        "I am at latitude {latitude}, longitude {longitude}.\n\
         Identify the neighborhood and city (e.g. \"Shoreditch, London\").\n\
         Return ONLY the location name in a short format, nothing else."
    )
}

// ── Response schemas ──

pub fn contract_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isSafe": { "type": "BOOLEAN" },
            "score": { "type": "NUMBER" },
            "summary": { "type": "STRING" },
            "issues": { "type": "ARRAY", "items": { "type": "STRING" } }
        }
    })
}

pub fn hazard_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "type": { "type": "STRING" },
            "severity": { "type": "STRING", "enum": ["Low", "Medium", "High", "Critical"] },
            "description": { "type": "STRING" }
        }
    })
}

pub fn bidding_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isIllegal": { "type": "BOOLEAN" },
            "evidence": { "type": "STRING" }
        }
    })
}

pub fn epc_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "STRING" },
            "comfort": { "type": "NUMBER" },
            "compliance": { "type": "BOOLEAN" },
            "summary": { "type": "STRING" }
        }
    })
}

pub fn rent_increase_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isFair": { "type": "BOOLEAN" },
            "advice": { "type": "STRING" },
            "letter": { "type": "STRING" }
        }
    })
}

pub fn translation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "translation": { "type": "STRING" },
            "legalStanding": { "type": "STRING" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_prompt_names_tone() {
        let p = response_prompt(Tone::StrictlyLegal, "Boiler broken for 3 days");
        assert!(p.contains("in a Strictly Legal tone"));
        assert!(p.contains("Context: Boiler broken for 3 days."));
    }

    #[test]
    fn rent_prompt_includes_figures() {
        let p = rent_increase_prompt(1500.0, 1850.0, "Hackney, London");
        assert!(p.contains("Current Rent: £1500."));
        assert!(p.contains("Proposed Rent: £1850."));
        assert!(p.contains("Location: Hackney, London."));
        assert!(p.contains("\"isFair\": boolean"));
    }

    #[test]
    fn translate_prompt_quotes_input() {
        let p = translate_prompt("We need to adjust rent due to market forces");
        assert!(p.contains("\"We need to adjust rent due to market forces\""));
    }

    #[test]
    fn schemas_declare_payload_fields() {
        let s = contract_schema();
        for field in ["isSafe", "score", "summary", "issues"] {
            assert!(s["properties"].get(field).is_some(), "missing {field}");
        }
        assert_eq!(
            hazard_schema()["properties"]["severity"]["enum"],
            json!(["Low", "Medium", "High", "Critical"])
        );
        assert!(translation_schema()["properties"].get("legalStanding").is_some());
    }
}
