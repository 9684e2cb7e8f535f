//! 分页视图模型

/// 页内行号换算为全局序号（从 1 开始）
pub fn row_number(current_page: u32, page_size: u32, row_index: usize) -> u32 {
    current_page.saturating_sub(1) * page_size + row_index as u32 + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub page: u32,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: u32,
    pub total: u32,
}

impl Pagination {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current,
            total: total.max(1),
        }
    }

    /// 只有一页时不渲染分页条
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total).contains(&page)
    }

    pub fn prev_disabled(&self) -> bool {
        self.current <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.total
    }

    pub fn controls(&self) -> Vec<PageControl> {
        (1..=self.total)
            .map(|page| PageControl {
                page,
                active: page == self.current,
            })
            .collect()
    }
}
