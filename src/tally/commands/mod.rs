use crate::config::TallyConfig;

pub mod add;
pub mod config;
pub mod load;
pub mod low;
pub mod query;
pub mod remove;
pub mod report;
pub mod save;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One item of the report payload: display name plus quantity on hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub name: String,
    pub qty: u64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Items touched by a mutation, with their post-operation quantities.
    /// Empty when the operation was rejected or purely read-only.
    pub affected: Vec<StockLine>,
    pub quantity: Option<u64>,
    pub low_items: Vec<String>,
    pub stock: Vec<StockLine>,
    pub config: Option<TallyConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, affected: Vec<StockLine>) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_low_items(mut self, low_items: Vec<String>) -> Self {
        self.low_items = low_items;
        self
    }

    pub fn with_stock(mut self, stock: Vec<StockLine>) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_config(mut self, config: TallyConfig) -> Self {
        self.config = Some(config);
        self
    }
}
