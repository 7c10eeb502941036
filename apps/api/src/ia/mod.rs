// AI-assisted estimating: APU matrix generation and price quoting.
// Every call goes through llm_client; this module only builds prompts and
// cleans up what comes back.

pub mod handlers;
pub mod normalizer;
pub mod service;
