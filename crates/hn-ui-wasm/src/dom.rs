// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `web-sys` implementations of the core ports.

use hn_ui_core::{ClassList, HttpPort, HttpResponse, Navigator, RefreshPage, SiteConfig, UiError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Document, DomTokenList, Element, HtmlElement, Response, Window};

fn dom_error(value: &JsValue) -> UiError {
    UiError::Dom(describe(value))
}

fn transport_error(value: &JsValue) -> UiError {
    UiError::Transport(describe(value))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::MissingElement("window".into()))
}

pub(crate) fn document() -> Result<Document, UiError> {
    window()?
        .document()
        .ok_or_else(|| UiError::MissingElement("document".into()))
}

/// Find `#id` among the descendants of `element`'s parent.
pub(crate) fn sibling(element: &Element, id: &str) -> Result<Element, UiError> {
    let parent = element
        .parent_element()
        .ok_or_else(|| UiError::MissingElement(format!("parent of #{id}")))?;
    parent
        .query_selector(&format!("#{id}"))
        .map_err(|e| dom_error(&e))?
        .ok_or_else(|| UiError::MissingElement(format!("#{id}")))
}

/// `Element.classList`.
pub(crate) struct Classes(DomTokenList);

impl Classes {
    pub(crate) fn of(element: &Element) -> Self {
        Self(element.class_list())
    }
}

impl ClassList for Classes {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    // DOMTokenList only throws on empty or whitespace tokens.
    fn add(&mut self, class: &str) {
        if let Err(err) = self.0.add_1(class) {
            console::error_1(&err);
        }
    }

    fn remove(&mut self, class: &str) {
        if let Err(err) = self.0.remove_1(class) {
            console::error_1(&err);
        }
    }
}

/// `window.location`.
pub(crate) struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn replace(&self, url: &str) -> Result<(), UiError> {
        window()?
            .location()
            .replace(url)
            .map_err(|e| dom_error(&e))
    }
}

/// `window.fetch`.
pub(crate) struct FetchClient;

impl FetchClient {
    /// Resolves once headers arrive; the body is still streaming.
    #[allow(clippy::future_not_send)]
    async fn fetch(path: &str) -> Result<Response, UiError> {
        let pending = window()?.fetch_with_str(path);
        JsFuture::from(pending)
            .await
            .map_err(|e| transport_error(&e))?
            .dyn_into()
            .map_err(|e| transport_error(&e))
    }
}

impl HttpPort for FetchClient {
    #[allow(clippy::future_not_send)]
    async fn get(&self, path: &str) -> Result<HttpResponse, UiError> {
        let response = Self::fetch(path).await?;
        let text = response.text().map_err(|e| transport_error(&e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| transport_error(&e))?
            .as_string()
            .unwrap_or_default();
        Ok(HttpResponse {
            url: response.url(),
            body,
        })
    }

    #[allow(clippy::future_not_send)]
    async fn final_url(&self, path: &str) -> Result<String, UiError> {
        Ok(Self::fetch(path).await?.url())
    }
}

/// Refresh indicator and elapsed-time elements, looked up by id on each use.
pub(crate) struct BrowserPage<'a> {
    document: Document,
    config: &'a SiteConfig,
}

impl<'a> BrowserPage<'a> {
    pub(crate) fn new(config: &'a SiteConfig) -> Result<Self, UiError> {
        Ok(Self {
            document: document()?,
            config,
        })
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, UiError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| UiError::MissingElement(format!("#{id}")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::Dom(format!("#{id} is not an HTML element")))
    }
}

fn set_displayed(element: &HtmlElement, displayed: bool) -> Result<(), UiError> {
    let value = if displayed { "" } else { "none" };
    element
        .style()
        .set_property("display", value)
        .map_err(|e| dom_error(&e))
}

impl RefreshPage for BrowserPage<'_> {
    fn indicator_visible(&self) -> Result<bool, UiError> {
        let display = self
            .html_element(&self.config.refresh_icon_id)?
            .style()
            .get_property_value("display")
            .map_err(|e| dom_error(&e))?;
        Ok(display != "none")
    }

    fn set_indicator_visible(&self, visible: bool) -> Result<(), UiError> {
        set_displayed(&self.html_element(&self.config.refresh_icon_id)?, visible)
    }

    fn show_elapsed(&self, text: &str) -> Result<(), UiError> {
        let block = self.html_element(&self.config.update_time_block_id)?;
        let time = self.html_element(&self.config.update_time_id)?;
        set_displayed(&block, true)?;
        time.set_text_content(Some(text));
        Ok(())
    }
}
