//! Browser session control.
//!
//! A [`Session`] is one live Chromium instance plus the page it drives, owned
//! by exactly one scenario. Lookups go through a bounded-polling wait so a
//! slow page load is tolerated up to the configured budget and nothing more.

use std::fmt;
use std::time::Instant;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element as CdpElement;
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::locator::Role;
use crate::result::{E2eError, E2eResult};
use crate::wait::WaitOptions;

/// Chromium switches applied to every session
const CHROME_ARGS: [&str; 2] = ["--mute-audio", "--start-maximized"];

/// One live browser session, exclusively owned by the scenario that
/// created it.
///
/// Prefer [`Session::close`] for graceful shutdown; if a scenario body fails
/// first, dropping the session still kills the browser process, so creation
/// and destruction stay paired on every path.
pub struct Session {
    browser: Browser,
    page: CdpPage,
    config: SuiteConfig,
    handler: JoinHandle<()>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("home_url", &self.config.home_url)
            .field("wait", &self.config.wait)
            .finish()
    }
}

impl Session {
    /// Launch Chromium with the suite's fixed options (muted audio,
    /// maximized window) and open a blank page.
    ///
    /// # Errors
    ///
    /// Returns [`E2eError::BrowserLaunch`] if the browser cannot be started.
    pub async fn launch(config: &SuiteConfig) -> E2eResult<Self> {
        let mut builder = BrowserConfig::builder();
        for arg in CHROME_ARGS {
            builder = builder.arg(arg);
        }
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder
            .build()
            .map_err(|e| E2eError::BrowserLaunch {
                message: e.to_string(),
            })?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| E2eError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        // CDP events must be drained for the connection to make progress.
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| E2eError::Page {
                message: e.to_string(),
            })?;

        info!(headless = config.headless, "browser session started");

        Ok(Self {
            browser,
            page,
            config: config.clone(),
            handler,
        })
    }

    /// The configuration this session was launched with
    #[must_use]
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Home URL of the application under test
    #[must_use]
    pub fn home_url(&self) -> &str {
        &self.config.home_url
    }

    /// The wait budget applied to every lookup
    #[must_use]
    pub fn wait(&self) -> WaitOptions {
        self.config.wait
    }

    /// Navigate the page to a URL.
    ///
    /// Invalidates every previously fetched [`Element`] handle.
    pub async fn navigate(&self, url: &str) -> E2eResult<()> {
        debug!(url, "navigate");
        self.page
            .goto(url)
            .await
            .map_err(|e| E2eError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Find the element for a role, polling until the wait budget elapses.
    pub async fn find<R: Role>(&self, role: R) -> E2eResult<Element> {
        let wait = self.config.wait;
        let deadline = Instant::now() + wait.timeout();
        loop {
            match self.page.find_element(role.selector()).await {
                Ok(el) => return Ok(Element { inner: el }),
                Err(_) if Instant::now() < deadline => sleep(wait.poll_interval()).await,
                Err(_) => {
                    return Err(E2eError::ElementNotFound {
                        role: role.name(),
                        selector: role.selector(),
                        waited_ms: wait.timeout_ms,
                    })
                }
            }
        }
    }

    /// Find every element for a role, polling until at least one matches.
    pub async fn find_all<R: Role>(&self, role: R) -> E2eResult<Vec<Element>> {
        let wait = self.config.wait;
        let deadline = Instant::now() + wait.timeout();
        loop {
            match self.page.find_elements(role.selector()).await {
                Ok(els) if !els.is_empty() => {
                    return Ok(els.into_iter().map(|inner| Element { inner }).collect())
                }
                Ok(_) | Err(_) if Instant::now() < deadline => {
                    sleep(wait.poll_interval()).await;
                }
                _ => {
                    return Err(E2eError::ElementNotFound {
                        role: role.name(),
                        selector: role.selector(),
                        waited_ms: wait.timeout_ms,
                    })
                }
            }
        }
    }

    /// The document title of the current page
    pub async fn title(&self) -> E2eResult<String> {
        let title = self
            .page
            .get_title()
            .await
            .map_err(|e| E2eError::Page {
                message: e.to_string(),
            })?;
        Ok(title.unwrap_or_default())
    }

    /// Shut the browser down gracefully and stop the event-handler task.
    pub async fn close(mut self) -> E2eResult<()> {
        info!("closing browser session");
        self.browser.close().await.map_err(|e| E2eError::Page {
            message: e.to_string(),
        })?;
        self.handler.abort();
        Ok(())
    }
}

/// Handle to a live DOM element.
///
/// Valid only for the page state it was fetched from; navigation invalidates
/// it. Callers re-fetch instead of caching.
pub struct Element {
    inner: CdpElement,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element").finish_non_exhaustive()
    }
}

impl Element {
    /// Click the element
    pub async fn click(&self) -> E2eResult<()> {
        self.inner.click().await.map_err(|e| E2eError::Page {
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Rendered inner text, empty when the node has none
    pub async fn text(&self) -> E2eResult<String> {
        let text = self.inner.inner_text().await.map_err(|e| E2eError::Page {
            message: e.to_string(),
        })?;
        Ok(text.unwrap_or_default())
    }

    /// Focus the element and type text into it
    pub async fn type_text(&self, text: &str) -> E2eResult<()> {
        self.inner.click().await.map_err(|e| E2eError::Page {
            message: e.to_string(),
        })?;
        self.inner.type_str(text).await.map_err(|e| E2eError::Page {
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_chrome_switches() {
        assert!(CHROME_ARGS.contains(&"--mute-audio"));
        assert!(CHROME_ARGS.contains(&"--start-maximized"));
    }
}
