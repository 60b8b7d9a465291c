//! End-to-end suite for the BoxCommerce dashboard sign-up flow.
//!
//! Drives the hosted UAT environment through headless Chromium (Chrome
//! DevTools Protocol) and asserts on the text the application renders:
//! sign-up options, manual registration validation, coupon validation, and
//! the social-provider hand-offs.
//!
//! ```text
//! ┌───────────┐     ┌────────────┐     ┌───────────────┐
//! │ Scenario  │────►│ SignUpPage │────►│ Chromium (CDP)│──► UAT
//! │ (tests/)  │     │ + fixtures │     │ browser glue  │
//! └───────────┘     └────────────┘     └───────────────┘
//! ```
//!
//! The live scenarios live in `tests/signup.rs` and are gated on
//! `SIGNUP_E2E=1`; everything in this library carries unit tests that run
//! without a browser.

#![warn(missing_docs)]

pub mod browser;
pub mod fixtures;
pub mod generators;
pub mod result;
pub mod selector;
pub mod signup;
pub mod wait;

pub use result::{SuiteError, SuiteResult};

/// Common imports for scenario code
pub mod prelude {
    pub use crate::browser::{Browser, BrowserOptions, Page};
    pub use crate::fixtures::SignUpFixtures;
    pub use crate::generators::{unique_email, unique_phone_number, UniqueSignUpData};
    pub use crate::result::{SuiteError, SuiteResult};
    pub use crate::selector::Selector;
    pub use crate::signup::{SignUpPage, SocialProvider};
    pub use crate::wait::{poll_until, WaitOptions, WaitResult};
}
