//! 控制台运行时配置
//!
//! 所有字段都有默认值，部分 JSON 文档只覆盖出现的字段。

use ordermate_shared::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// REST API 根地址，不带结尾的 `/`
    pub api_base_url: String,
    /// 分类列表每页条数
    pub page_size: u32,
    /// 搜索输入的防抖时长（毫秒）
    pub search_debounce_ms: u64,
    /// 提示消息的自动关闭时长（毫秒）
    pub toast_duration_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl ConsoleConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.to_string();
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self.page_size = self.page_size.max(1);
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
