// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code, missing_docs)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use hn_ui_core::{ClassList, HttpPort, HttpResponse, Navigator, RefreshPage, UiError};

pub const ORIGIN: &str = "https://news.example";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classes(pub BTreeSet<String>);

impl Classes {
    pub fn with(classes: &[&str]) -> Self {
        Self(classes.iter().map(|c| (*c).to_owned()).collect())
    }
}

impl ClassList for Classes {
    fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }
    fn add(&mut self, class: &str) {
        self.0.insert(class.to_owned());
    }
    fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }
}

/// Answers every path at `ORIGIN + path` unless a redirect or body is scripted.
#[derive(Default)]
pub struct FakeHttp {
    pub redirects: HashMap<String, String>,
    pub bodies: HashMap<String, String>,
    pub offline: bool,
    /// Headers arrive but reading the body fails.
    pub body_aborts: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeHttp {
    pub fn redirect(mut self, path: &str, to: &str) -> Self {
        self.redirects.insert(path.to_owned(), to.to_owned());
        self
    }

    fn resolve(&self, path: &str) -> Result<String, UiError> {
        self.calls.borrow_mut().push(path.to_owned());
        if self.offline {
            return Err(UiError::Transport("offline".into()));
        }
        Ok(self
            .redirects
            .get(path)
            .cloned()
            .unwrap_or_else(|| format!("{ORIGIN}{path}")))
    }

    pub fn body(mut self, path: &str, body: &str) -> Self {
        self.bodies.insert(path.to_owned(), body.to_owned());
        self
    }
}

impl HttpPort for FakeHttp {
    async fn get(&self, path: &str) -> Result<HttpResponse, UiError> {
        let url = self.resolve(path)?;
        if self.body_aborts {
            return Err(UiError::Transport("body stream aborted".into()));
        }
        let body = self.bodies.get(path).cloned().unwrap_or_default();
        Ok(HttpResponse { url, body })
    }

    async fn final_url(&self, path: &str) -> Result<String, UiError> {
        self.resolve(path)
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn replace(&self, url: &str) -> Result<(), UiError> {
        self.visits.borrow_mut().push(url.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Indicator(bool),
    Elapsed(String),
}

#[derive(Default)]
pub struct FakePage {
    pub visible: Cell<bool>,
    pub events: RefCell<Vec<PageEvent>>,
}

impl RefreshPage for FakePage {
    fn indicator_visible(&self) -> Result<bool, UiError> {
        Ok(self.visible.get())
    }
    fn set_indicator_visible(&self, visible: bool) -> Result<(), UiError> {
        self.visible.set(visible);
        self.events.borrow_mut().push(PageEvent::Indicator(visible));
        Ok(())
    }
    fn show_elapsed(&self, text: &str) -> Result<(), UiError> {
        self.events.borrow_mut().push(PageEvent::Elapsed(text.to_owned()));
        Ok(())
    }
}
