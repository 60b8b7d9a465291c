//! Page object for the hosted sign-up flow.
//!
//! Encapsulates the sign-up page's structure behind intent-level operations
//! so scenarios read as user journeys: open the page, pick an entry option,
//! fill the form, submit, and wait for the application's feedback text.

use std::time::Duration;
use tracing::info;

use crate::browser::Page;
use crate::fixtures::SignUpFixtures;
use crate::result::SuiteResult;
use crate::selector::Selector;
use crate::wait::{WaitOptions, WaitResult};

/// Social sign-up providers offered on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    /// Facebook OAuth
    Facebook,
    /// Google OAuth
    Google,
    /// X OAuth
    X,
}

impl SocialProvider {
    /// Provider name as shown on its entry button
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Google => "Google",
            Self::X => "X",
        }
    }
}

impl std::fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The sign-up page, bound to one browser page and a fixture table
#[derive(Debug)]
pub struct SignUpPage<'a> {
    page: Page,
    fixtures: &'a SignUpFixtures,
}

impl<'a> SignUpPage<'a> {
    /// Bind a page object to a browser page
    #[must_use]
    pub fn new(page: Page, fixtures: &'a SignUpFixtures) -> Self {
        Self { page, fixtures }
    }

    /// The underlying browser page
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate to the sign-up page and wait for the manual entry button
    pub async fn open(&mut self) -> SuiteResult<()> {
        info!(url = %self.fixtures.urls.sign_up, "opening sign-up page");
        let url = self.fixtures.urls.sign_up.clone();
        self.page.goto(&url).await?;
        self.page
            .wait_for_visible(
                &self.fixtures.selectors.sign_up_manual_button,
                &self.poll_options(self.fixtures.timeouts.short()),
            )
            .await?;
        Ok(())
    }

    /// Locators for the four entry buttons, manual first
    #[must_use]
    pub fn entry_buttons(&self) -> [&Selector; 4] {
        let selectors = &self.fixtures.selectors;
        [
            &selectors.sign_up_manual_button,
            &selectors.facebook_sign_up_button,
            &selectors.google_sign_up_button,
            &selectors.x_sign_up_button,
        ]
    }

    /// Locators for the seven manual-form fields
    #[must_use]
    pub fn form_fields(&self) -> [&Selector; 7] {
        let selectors = &self.fixtures.selectors;
        [
            &selectors.first_name,
            &selectors.last_name,
            &selectors.phone_number,
            &selectors.email,
            &selectors.password,
            &selectors.confirm_password,
            &selectors.coupon_code,
        ]
    }

    /// Choose manual email/phone registration and let the form render
    pub async fn start_manual_signup(&self) -> SuiteResult<()> {
        info!("choosing manual sign-up");
        self.page
            .click(&self.fixtures.selectors.sign_up_manual_button)
            .await?;
        self.page.settle(self.fixtures.timeouts.medium()).await;
        Ok(())
    }

    /// Fill the first name field
    pub async fn fill_first_name(&self, value: &str) -> SuiteResult<()> {
        self.page
            .fill(&self.fixtures.selectors.first_name, value)
            .await
    }

    /// Fill the last name field
    pub async fn fill_last_name(&self, value: &str) -> SuiteResult<()> {
        self.page
            .fill(&self.fixtures.selectors.last_name, value)
            .await
    }

    /// Fill the email field
    pub async fn fill_email(&self, value: &str) -> SuiteResult<()> {
        self.page.fill(&self.fixtures.selectors.email, value).await
    }

    /// Fill the phone number field
    pub async fn fill_phone_number(&self, value: &str) -> SuiteResult<()> {
        self.page
            .fill(&self.fixtures.selectors.phone_number, value)
            .await
    }

    /// Fill the password field
    pub async fn fill_password(&self, value: &str) -> SuiteResult<()> {
        self.page
            .fill(&self.fixtures.selectors.password, value)
            .await
    }

    /// Fill the confirm password field
    pub async fn fill_confirm_password(&self, value: &str) -> SuiteResult<()> {
        self.page
            .fill(&self.fixtures.selectors.confirm_password, value)
            .await
    }

    /// Fill the coupon code field
    pub async fn fill_coupon_code(&self, value: &str) -> SuiteResult<()> {
        self.page
            .fill(&self.fixtures.selectors.coupon_code, value)
            .await
    }

    /// Move focus to the next field, firing blur validation
    pub async fn press_tab(&self) -> SuiteResult<()> {
        self.page.press_tab().await
    }

    /// Submit the form
    pub async fn submit(&self) -> SuiteResult<()> {
        info!("submitting sign-up form");
        self.page
            .click(&self.fixtures.selectors.sign_up_button)
            .await
    }

    /// Current value of a form input
    pub async fn field_value(&self, selector: &Selector) -> SuiteResult<Option<String>> {
        self.page.input_value(selector).await
    }

    /// Wait for feedback text at the default cadence (auto-wait equivalent)
    pub async fn expect_text(&self, fragment: &str) -> SuiteResult<WaitResult> {
        self.page
            .wait_for_text(fragment, &WaitOptions::cadence(self.fixtures.timeouts.short()))
            .await
    }

    /// Wait for feedback text at an explicit cadence from the fixture table
    pub async fn wait_for_text(
        &self,
        fragment: &str,
        poll_interval: Duration,
    ) -> SuiteResult<WaitResult> {
        self.page
            .wait_for_text(fragment, &self.poll_options(poll_interval))
            .await
    }

    /// Click a provider's entry button and wait for its authorization page
    pub async fn social_signup(&self, provider: SocialProvider) -> SuiteResult<WaitResult> {
        info!(%provider, "following social sign-up link");
        let selectors = &self.fixtures.selectors;
        let button = match provider {
            SocialProvider::Facebook => &selectors.facebook_sign_up_button,
            SocialProvider::Google => &selectors.google_sign_up_button,
            SocialProvider::X => &selectors.x_sign_up_button,
        };
        self.page.click(button).await?;

        let social = &self.fixtures.social_media;
        let expected = match provider {
            SocialProvider::Facebook => &social.facebook_login,
            SocialProvider::Google => &social.google_sign_in,
            SocialProvider::X => &social.x_sign_up,
        };
        self.wait_for_text(expected, self.fixtures.timeouts.medium())
            .await
    }

    fn poll_options(&self, poll_interval: Duration) -> WaitOptions {
        WaitOptions::cadence(poll_interval)
    }
}
