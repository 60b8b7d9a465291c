//! Live scenarios for the hosted sign-up flow.
//!
//! These drive the UAT environment through headless Chromium and need both a
//! Chromium install and network access, so they are gated on `SIGNUP_E2E=1`:
//!
//! ```bash
//! SIGNUP_E2E=1 cargo test --test signup -- --nocapture
//! ```
//!
//! `SIGNUP_E2E_NO_SANDBOX=1` disables the Chromium sandbox for CI
//! containers; `SIGNUP_E2E_SIGNUP_URL` points the suite at another
//! deployment. Scenarios are independent and safe to run concurrently: each
//! gets its own browser session, and registrations use generated
//! unique emails and phone numbers.

use signup_e2e::prelude::*;
use std::sync::Once;

fn live_e2e_enabled() -> bool {
    std::env::var("SIGNUP_E2E").is_ok()
}

macro_rules! require_live_e2e {
    () => {
        if !live_e2e_enabled() {
            eprintln!(
                "[SKIP] {} requires SIGNUP_E2E=1 (Chromium + UAT network access)",
                module_path!()
            );
            return;
        }
        init_tracing();
    };
}

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

fn browser_options() -> BrowserOptions {
    let mut options = BrowserOptions::default();
    if std::env::var("SIGNUP_E2E_NO_SANDBOX").is_ok() {
        options = options.with_no_sandbox();
    }
    options
}

/// Launch a session and land on the sign-up page (every scenario's preamble)
async fn open_signup(fixtures: &SignUpFixtures) -> (Browser, SignUpPage<'_>) {
    let browser = Browser::launch(browser_options())
        .await
        .expect("browser should launch");
    let page = browser.new_page().await.expect("page should open");
    let mut signup = SignUpPage::new(page, fixtures);
    signup.open().await.expect("sign-up page should load");
    (browser, signup)
}

// ───────────────────────────────────────────────────────────────────────────
// Initial page elements
// ───────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn shows_all_signup_options() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;

    for selector in signup.entry_buttons() {
        signup
            .page()
            .wait_for_visible(selector, &WaitOptions::default())
            .await
            .unwrap_or_else(|e| panic!("{selector} should be visible: {e}"));
    }

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn shows_all_required_form_fields() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    for selector in signup.form_fields() {
        signup
            .page()
            .wait_for_visible(selector, &WaitOptions::default())
            .await
            .unwrap_or_else(|e| panic!("{selector} should be visible: {e}"));
    }

    browser.close().await.expect("browser should close");
}

// ───────────────────────────────────────────────────────────────────────────
// Manual sign-up form
// ───────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn happy_path_completes_signup() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    signup.fill_first_name("John").await.expect("first name");
    signup.fill_last_name("Smith").await.expect("last name");

    let data = UniqueSignUpData::generate(&fixtures);
    signup.fill_email(&data.email).await.expect("email");
    signup
        .fill_phone_number(&data.phone_number)
        .await
        .expect("phone number");

    let password = &fixtures.credentials.correct_password;
    signup.fill_password(password).await.expect("password");
    signup
        .fill_confirm_password(password)
        .await
        .expect("confirm password");

    signup.submit().await.expect("submit");

    let outcome = signup
        .wait_for_text(&fixtures.error_messages.welcome, fixtures.timeouts.long())
        .await
        .expect("welcome message should appear before the deadline");
    eprintln!(
        "registered {} after {:?} ({} checks)",
        data.email, outcome.elapsed, outcome.checks
    );

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn rejects_existing_email_and_phone() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    signup.fill_first_name("John").await.expect("first name");
    signup.fill_last_name("Smith").await.expect("last name");
    signup
        .fill_email(&fixtures.credentials.valid_email)
        .await
        .expect("email");
    signup
        .fill_phone_number(&fixtures.phone_numbers.existing)
        .await
        .expect("phone number");
    signup
        .fill_password(&fixtures.credentials.correct_password)
        .await
        .expect("password");
    signup
        .fill_confirm_password(&fixtures.credentials.correct_password)
        .await
        .expect("confirm password");

    signup.submit().await.expect("submit");

    signup
        .expect_text(&fixtures.error_messages.existing_account)
        .await
        .expect("duplicate-account message should appear");

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn flags_invalid_email_format() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    signup
        .fill_email(&fixtures.emails.invalid)
        .await
        .expect("email");
    signup.press_tab().await.expect("tab off email");
    assert_eq!(
        signup
            .field_value(&fixtures.selectors.email)
            .await
            .expect("email value read")
            .as_deref(),
        Some(fixtures.emails.invalid.as_str()),
        "email field should keep the rejected input"
    );

    let phone = unique_phone_number(&fixtures.phone_numbers.valid_prefix);
    signup.fill_phone_number(&phone).await.expect("phone number");
    signup.press_tab().await.expect("tab off phone");

    signup
        .fill_password(&fixtures.credentials.correct_password)
        .await
        .expect("password");
    signup.press_tab().await.expect("tab off password");
    assert_eq!(
        signup
            .field_value(&fixtures.selectors.password)
            .await
            .expect("password value read")
            .as_deref(),
        Some(fixtures.credentials.correct_password.as_str()),
    );

    signup
        .expect_text(&fixtures.error_messages.invalid_email)
        .await
        .expect("invalid-email message should appear");
    assert_eq!(
        signup
            .field_value(&fixtures.selectors.email)
            .await
            .expect("email value re-read")
            .as_deref(),
        Some(fixtures.emails.invalid.as_str()),
        "rejected input should survive the validation message"
    );

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn flags_weak_password() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    signup
        .fill_password(&fixtures.passwords.weak)
        .await
        .expect("password");
    signup.press_tab().await.expect("tab off password");

    signup
        .expect_text(&fixtures.error_messages.invalid_password)
        .await
        .expect("password-policy message should appear");

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn flags_too_long_password() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    // 160 characters draws the same policy message as the weak password.
    signup
        .fill_password(&fixtures.passwords.too_long)
        .await
        .expect("password");
    signup.press_tab().await.expect("tab off password");

    signup
        .expect_text(&fixtures.error_messages.invalid_password)
        .await
        .expect("password-policy message should appear");

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn flags_password_mismatch() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    signup
        .fill_password(&fixtures.passwords.strong)
        .await
        .expect("password");
    signup
        .fill_confirm_password(&fixtures.passwords.medium)
        .await
        .expect("confirm password");
    signup.press_tab().await.expect("tab off confirm");

    signup
        .expect_text(&fixtures.error_messages.password_mismatch)
        .await
        .expect("mismatch message should appear");

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn rejects_invalid_coupon_code() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;
    signup
        .start_manual_signup()
        .await
        .expect("manual form should open");

    signup.fill_first_name("John").await.expect("first name");
    signup.fill_last_name("Smith").await.expect("last name");

    let data = UniqueSignUpData::generate(&fixtures);
    signup.fill_email(&data.email).await.expect("email");
    signup
        .fill_phone_number(&data.phone_number)
        .await
        .expect("phone number");

    let password = &fixtures.credentials.correct_password;
    signup.fill_password(password).await.expect("password");
    signup
        .fill_confirm_password(password)
        .await
        .expect("confirm password");

    signup
        .fill_coupon_code(&fixtures.coupon_codes.invalid)
        .await
        .expect("coupon code");
    signup.press_tab().await.expect("tab off coupon");

    signup.submit().await.expect("submit");

    // The page renders "CouponCode" in its rejection text; the fixture sheet
    // says "CoupenCode". Polling for the rendered spelling here — see
    // DESIGN.md for the open question.
    signup
        .wait_for_text("CouponCode", fixtures.timeouts.medium())
        .await
        .expect("coupon rejection should appear before the deadline");

    browser.close().await.expect("browser should close");
}

// ───────────────────────────────────────────────────────────────────────────
// Social sign-up links
// ───────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn facebook_signup_link_reaches_facebook() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;

    signup
        .social_signup(SocialProvider::Facebook)
        .await
        .expect("Facebook login page should render");

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn google_signup_link_reaches_google() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;

    signup
        .social_signup(SocialProvider::Google)
        .await
        .expect("Google sign-in page should render");

    browser.close().await.expect("browser should close");
}

#[tokio::test(flavor = "multi_thread")]
async fn x_signup_link_reaches_x() {
    require_live_e2e!();
    let fixtures = SignUpFixtures::from_env();
    let (browser, signup) = open_signup(&fixtures).await;

    signup
        .social_signup(SocialProvider::X)
        .await
        .expect("X authorization page should render");

    browser.close().await.expect("browser should close");
}
