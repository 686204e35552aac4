//! Meeting brief generation over the OpenRouter API.
//!
//! Given a topic, a duration and both participants' preformatted views of
//! the meeting instant, asks a chat model for an agenda plus an etiquette
//! tip about the hour. The crate owns the prompt, the request wiring and
//! the strict parse of the structured response; zone math stays out of it.
//!
//! # Example
//!
//! ```ignore
//! use isochron_briefing::{BriefingClient, BriefingRequest, MeetingBrief};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = BriefingClient::new("your-api-key");
//!
//!     let request = BriefingRequest {
//!         topic: "Quarterly sync".to_string(),
//!         duration_minutes: 30,
//!         user_time: "7:00 PM Sat, Jun 1".to_string(),
//!         user_zone: "Asia/Kolkata".to_string(),
//!         counterpart_time: "9:30 AM Sat, Jun 1".to_string(),
//!         counterpart_zone: "America/New_York".to_string(),
//!     };
//!
//!     let brief = client
//!         .generate(&request)
//!         .await
//!         .unwrap_or_else(|_| MeetingBrief::fallback());
//!     println!("{}", brief.agenda);
//! }
//! ```

mod client;
mod convert;
mod error;
mod types;

pub use client::{BriefingClient, DEFAULT_MODEL};
pub use convert::{build_request_body, parse_brief};
pub use error::BriefingError;
pub use types::{BriefingRequest, MeetingBrief};
