//! Page elements the handler reads from and writes into.

use crate::error::{FormError, Result};
use std::collections::HashMap;

pub const TICKER_ID: &str = "stock";
pub const START_DATE_ID: &str = "start_date_picker";
pub const RESULT_ID: &str = "result";

/// The three elements of the prediction form.
pub trait FormView {
    /// Value of the ticker input, or `MissingElement` when it is absent.
    fn ticker(&self) -> Result<String>;

    /// Value of the start date picker. `None` when the picker is absent.
    fn start_date(&self) -> Option<String>;

    /// Replace the content of the result container.
    fn render_result(&mut self, content: &str) -> Result<()>;
}

/// In-memory page: element id -> current value / content.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<String, String>,
}

impl Page {
    /// A page holding the ticker input, the start date picker and an empty result container.
    pub fn with_form(ticker: &str, start_date: &str) -> Self {
        Page::default()
            .with_element(TICKER_ID, ticker)
            .with_element(START_DATE_ID, start_date)
            .with_element(RESULT_ID, "")
    }

    pub fn with_element(mut self, id: &str, value: &str) -> Self {
        self.elements.insert(id.to_string(), value.to_string());
        self
    }

    pub fn without_element(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self
    }

    pub fn element(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    pub fn result(&self) -> Option<&str> {
        self.element(RESULT_ID)
    }
}

impl FormView for Page {
    fn ticker(&self) -> Result<String> {
        self.element(TICKER_ID)
            .map(str::to_string)
            .ok_or_else(|| FormError::missing(TICKER_ID))
    }

    fn start_date(&self) -> Option<String> {
        self.element(START_DATE_ID).map(str::to_string)
    }

    fn render_result(&mut self, content: &str) -> Result<()> {
        match self.elements.get_mut(RESULT_ID) {
            Some(slot) => {
                *slot = content.to_string();
                Ok(())
            }
            None => Err(FormError::missing(RESULT_ID)),
        }
    }
}
