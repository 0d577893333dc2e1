//! Per-run state shared by every operation

use std::collections::HashMap;

use papersync_domain::{CategoryKey, RunMode, RunReport};

use crate::platform::ports::{BotIdentity, CategoryInfo};

/// Everything one process run accumulates.
///
/// Built once after the connection check and threaded through the selected
/// operation. The category memo never outlives the run.
#[derive(Debug)]
pub struct RunContext {
    pub bot: BotIdentity,
    pub report: RunReport,
    categories: HashMap<CategoryKey, CategoryInfo>,
}

impl RunContext {
    pub fn new(bot: BotIdentity, mode: RunMode) -> Self {
        Self { bot, report: RunReport::new(mode), categories: HashMap::new() }
    }

    /// Category resolved earlier in this run, if any.
    pub fn category(&self, key: &CategoryKey) -> Option<&CategoryInfo> {
        self.categories.get(key)
    }

    pub fn remember_category(&mut self, key: CategoryKey, category: CategoryInfo) {
        self.categories.insert(key, category);
    }

    pub fn is_bot(&self, author_id: u64) -> bool {
        self.bot.id == author_id
    }

    pub fn into_report(self) -> RunReport {
        self.report
    }
}
