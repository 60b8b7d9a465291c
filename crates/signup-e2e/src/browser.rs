//! Headless Chromium control over the DevTools protocol.
//!
//! Thin ownership of a browser session: navigation, element interaction,
//! keyboard input, and text-visibility probes. Locators that CSS cannot
//! express (buttons matched by rendered text) are resolved by evaluating the
//! query in the page, the same way value reads and visibility probes are.

use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::cdp::browser_protocol::input::{
    DispatchKeyEventParams, DispatchKeyEventType,
};
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

use crate::result::{SuiteError, SuiteResult};
use crate::selector::{visible_text_query, Selector};
use crate::wait::{poll_until, WaitOptions, WaitResult};

/// Browser session options
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// Run without a visible window
    pub headless: bool,
    /// Chromium sandbox (disable in CI containers)
    pub sandbox: bool,
    /// Path to the Chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: true,
            chromium_path: None,
        }
    }
}

impl BrowserOptions {
    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Disable the sandbox (CI containers)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }

    /// Set the Chromium binary path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }
}

/// A running browser session
#[derive(Debug)]
pub struct Browser {
    options: BrowserOptions,
    inner: Arc<Mutex<CdpBrowser>>,
    handle: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Launch a browser session.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::BrowserLaunch`] if Chromium cannot be started.
    pub async fn launch(options: BrowserOptions) -> SuiteResult<Self> {
        let mut builder = CdpConfig::builder();

        if !options.headless {
            builder = builder.with_head();
        }
        if !options.sandbox {
            builder = builder.no_sandbox();
        }
        if let Some(ref path) = options.chromium_path {
            builder = builder.chrome_executable(path);
        }

        let config = builder.build().map_err(|e| SuiteError::BrowserLaunch {
            message: e.to_string(),
        })?;

        let (browser, mut handler) =
            CdpBrowser::launch(config)
                .await
                .map_err(|e| SuiteError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        // Drive CDP messages until the session ends.
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!(headless = options.headless, "browser launched");
        Ok(Self {
            options,
            inner: Arc::new(Mutex::new(browser)),
            handle,
        })
    }

    /// Open a new blank page
    pub async fn new_page(&self) -> SuiteResult<Page> {
        let browser = self.inner.lock().await;
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;
        Ok(Page {
            url: String::from("about:blank"),
            inner: Arc::new(Mutex::new(page)),
        })
    }

    /// Session options
    #[must_use]
    pub const fn options(&self) -> &BrowserOptions {
        &self.options
    }

    /// Close the session
    pub async fn close(self) -> SuiteResult<()> {
        {
            let mut browser = self.inner.lock().await;
            browser.close().await.map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;
        }
        self.handle.abort();
        Ok(())
    }
}

/// A browser page
#[derive(Debug)]
pub struct Page {
    url: String,
    inner: Arc<Mutex<CdpPage>>,
}

impl Page {
    /// Navigate and wait for the load to complete
    pub async fn goto(&mut self, url: &str) -> SuiteResult<()> {
        debug!(url, "navigating");
        let page = self.inner.lock().await;
        page.goto(url).await.map_err(|e| SuiteError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        page.wait_for_navigation()
            .await
            .map_err(|e| SuiteError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        self.url = url.to_string();
        Ok(())
    }

    /// Last URL this page navigated to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Evaluate an expression in the page
    pub async fn eval<T: serde::de::DeserializeOwned>(&self, expr: &str) -> SuiteResult<T> {
        let page = self.inner.lock().await;
        let result = page
            .evaluate(expr)
            .await
            .map_err(|e| SuiteError::Evaluation {
                message: e.to_string(),
            })?;
        result.into_value().map_err(|e| SuiteError::Evaluation {
            message: e.to_string(),
        })
    }

    /// Click the element the locator resolves to.
    ///
    /// CSS locators click through CDP input events; text-filtered locators
    /// resolve and click inside the page.
    pub async fn click(&self, selector: &Selector) -> SuiteResult<()> {
        debug!(%selector, "click");
        match selector {
            Selector::Css(css) => {
                let page = self.inner.lock().await;
                let element = page.find_element(css.as_str()).await.map_err(|_| {
                    SuiteError::ElementNotFound {
                        selector: selector.to_string(),
                    }
                })?;
                element.click().await.map_err(|e| SuiteError::Input {
                    message: e.to_string(),
                })?;
                Ok(())
            }
            _ => {
                let clicked: bool = self
                    .eval(&format!(
                        "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
                        selector.to_query()
                    ))
                    .await?;
                if clicked {
                    Ok(())
                } else {
                    Err(SuiteError::ElementNotFound {
                        selector: selector.to_string(),
                    })
                }
            }
        }
    }

    /// Click a form input and type into it.
    ///
    /// Keystrokes go through CDP so the application's input and blur
    /// validation fires the way it does for a user.
    pub async fn fill(&self, selector: &Selector, text: &str) -> SuiteResult<()> {
        debug!(%selector, chars = text.len(), "fill");
        let Selector::Css(css) = selector else {
            return Err(SuiteError::Input {
                message: format!("fill needs a CSS locator, got {selector}"),
            });
        };
        let page = self.inner.lock().await;
        let element = page
            .find_element(css.as_str())
            .await
            .map_err(|_| SuiteError::ElementNotFound {
                selector: selector.to_string(),
            })?;
        element.click().await.map_err(|e| SuiteError::Input {
            message: e.to_string(),
        })?;
        element.type_str(text).await.map_err(|e| SuiteError::Input {
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Press the Tab key (moves focus, triggers blur validation)
    pub async fn press_tab(&self) -> SuiteResult<()> {
        debug!("press Tab");
        let page = self.inner.lock().await;
        for event_type in [DispatchKeyEventType::RawKeyDown, DispatchKeyEventType::KeyUp] {
            let params = DispatchKeyEventParams::builder()
                .r#type(event_type)
                .key("Tab")
                .code("Tab")
                .windows_virtual_key_code(9)
                .native_virtual_key_code(9)
                .build()
                .map_err(|e| SuiteError::Input {
                    message: e.to_string(),
                })?;
            page.execute(params).await.map_err(|e| SuiteError::Input {
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Is text containing `fragment` currently visible?
    pub async fn text_visible(&self, fragment: &str) -> SuiteResult<bool> {
        self.eval(&visible_text_query(fragment)).await
    }

    /// Does the locator resolve to an element occupying layout space?
    pub async fn is_visible(&self, selector: &Selector) -> SuiteResult<bool> {
        self.eval(&selector.to_visible_query()).await
    }

    /// Current value of the input the locator resolves to
    pub async fn input_value(&self, selector: &Selector) -> SuiteResult<Option<String>> {
        self.eval(&format!(
            "(() => {{ const el = {}; return el && ('value' in el) ? el.value : null; }})()",
            selector.to_query()
        ))
        .await
    }

    /// Poll until text containing `fragment` is visible
    pub async fn wait_for_text(
        &self,
        fragment: &str,
        options: &WaitOptions,
    ) -> SuiteResult<WaitResult> {
        let description = format!("text \"{fragment}\" visible");
        poll_until(&description, options, move || async move {
            self.text_visible(fragment).await
        })
        .await
    }

    /// Poll until the locator resolves to a visible element
    pub async fn wait_for_visible(
        &self,
        selector: &Selector,
        options: &WaitOptions,
    ) -> SuiteResult<WaitResult> {
        let description = format!("{selector} visible");
        poll_until(&description, options, move || async move {
            self.is_visible(selector).await
        })
        .await
    }

    /// Let the page settle for a fixed duration.
    ///
    /// Only for interactions with no observable completion signal; prefer
    /// [`Page::wait_for_text`].
    pub async fn settle(&self, duration: Duration) {
        debug!(ms = duration.as_millis() as u64, "settle");
        tokio::time::sleep(duration).await;
    }
}
