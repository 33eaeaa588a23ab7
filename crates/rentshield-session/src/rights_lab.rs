//! Rights lab: translate landlord messages or draft a reply from one input buffer.

use std::fmt;
use std::str::FromStr;

use rentshield_ai::{Analyst, analysis};
use rentshield_core::{Judgment, ParseError, Tone, Translation};
use tracing::{debug, info};

use crate::inflight::Inflight;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Translate,
    DraftResponse,
}

impl Tool {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::DraftResponse => "draft",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "translate" => Ok(Self::Translate),
            "draft" | "draft-response" | "reply" => Ok(Self::DraftResponse),
            _ => Err(ParseError::UnknownTool(s.to_string())),
        }
    }
}

/// The shared result slot. Shape depends on the tool that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum LabResult {
    Translation(Judgment<Translation>),
    Draft(Judgment<String>),
}

impl LabResult {
    pub fn tool(&self) -> Tool {
        match self {
            Self::Translation(_) => Tool::Translate,
            Self::Draft(_) => Tool::DraftResponse,
        }
    }

    pub fn is_fallback(&self) -> bool {
        match self {
            Self::Translation(j) => j.is_fallback(),
            Self::Draft(j) => j.is_fallback(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RightsLab {
    tool: Tool,
    input: String,
    tone: Tone,
    result: Option<LabResult>,
    inflight: Inflight,
}

#[derive(Debug)]
pub struct LabTicket {
    generation: u64,
    tool: Tool,
    tone: Tone,
    input: String,
}

#[derive(Debug)]
pub struct LabResolution {
    generation: u64,
    result: LabResult,
}

impl LabTicket {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub async fn run(self, analyst: &dyn Analyst) -> LabResolution {
        let result = match self.tool {
            Tool::Translate => {
                LabResult::Translation(
                    analysis::translate_landlord_speak(analyst, &self.input).await,
                )
            }
            Tool::DraftResponse => {
                LabResult::Draft(analysis::generate_response(analyst, self.tone, &self.input).await)
            }
        };
        LabResolution {
            generation: self.generation,
            result,
        }
    }
}

impl LabResolution {
    pub fn result(&self) -> &LabResult {
        &self.result
    }
}

impl RightsLab {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn result(&self) -> Option<&LabResult> {
        self.result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.inflight.is_busy()
    }

    pub(crate) fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Clears the result and stops waiting for a pending run. Input survives.
    pub(crate) fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.result = None;
        self.inflight.invalidate();
    }

    pub(crate) fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub(crate) fn begin(&mut self) -> Option<LabTicket> {
        if self.input.trim().is_empty() {
            debug!(tool = %self.tool, "empty input, nothing to run");
            return None;
        }
        let Some(generation) = self.inflight.start() else {
            debug!(tool = %self.tool, "run already in progress");
            return None;
        };
        self.result = None;
        Some(LabTicket {
            generation,
            tool: self.tool,
            tone: self.tone,
            input: self.input.clone(),
        })
    }

    pub(crate) fn settle(&mut self, resolution: LabResolution) -> Option<&LabResult> {
        if !self.inflight.settle(resolution.generation) {
            debug!(tool = %resolution.result.tool(), "stale rights lab result discarded");
            return None;
        }
        let result = resolution.result;
        info!(
            tool = %result.tool(),
            fallback = result.is_fallback(),
            "rights lab result ready"
        );
        self.result = Some(result);
        self.result.as_ref()
    }

    /// The view was left: back to a blank translate form.
    pub(crate) fn reset(&mut self) {
        self.inflight.invalidate();
        self.tool = Tool::default();
        self.input.clear();
        self.result = None;
        self.tone = Tone::default();
    }
}
