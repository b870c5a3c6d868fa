//! UI Module - terminal output concerns
//!
//! ```text
//! ┌─────────────┐
//! │   Commands  │  (check, clear, menu)
//! └──────┬──────┘
//!        │ uses
//!        ▼
//! ┌─────────────┐
//! │   Output    │  Sequential writer, prompts, status block
//! └──────┬──────┘
//!        │ styles with
//!        ▼
//! ┌─────────────┐
//! │    Theme    │  Colors, icons, constants
//! └─────────────┘
//! ```

pub mod output;
pub mod prompt;
pub mod status;
pub mod theme;

pub use output::Output;
pub use theme::Theme;
