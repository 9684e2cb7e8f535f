//! 分类列表页逻辑
//!
//! 负责：
//! - 分页查询与名称过滤（搜索输入经防抖后触发）
//! - 新增 / 修改 / 删除弹窗的状态机
//! - 变更成功后重新拉取当前页
//!
//! 状态变更后会把快照推送给订阅者，由 UI 层负责渲染。

use crate::api::ConsoleApi;
use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, RequestError};
use crate::notify::Notifier;
use crate::pagination::{Pagination, row_number};
use crate::request::HttpClient;
use crate::schedule::{Clock, Debouncer};
use ordermate_shared::{Category, CategoryId, CategoryPayload, ValidationError};
use std::cell::{Cell, RefCell};

pub const FETCH_FAILURE: &str = "Failed to load categories. Please try again.";
pub const CREATE_SUCCESS: &str = "Category added successfully";
pub const CREATE_FAILURE: &str = "Failed to add category";
pub const UPDATE_SUCCESS: &str = "Category updated successfully";
pub const UPDATE_FAILURE: &str = "Failed to update category";
pub const DELETE_SUCCESS: &str = "Category deleted successfully";
pub const DELETE_FAILURE: &str = "Failed to delete category";

// =========================================================
// 状态模型
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_term: String,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            total_pages: 1,
        }
    }
}

/// 弹窗状态机：`Closed -> (Add | Update | Delete) -> Closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Add,
    Update(CategoryId),
    Delete(CategoryId),
}

impl Modal {
    /// 新增 / 修改共用同一个表单弹窗
    pub fn shows_form(&self) -> bool {
        matches!(self, Modal::Add | Modal::Update(_))
    }

    pub fn shows_delete_confirmation(&self) -> bool {
        matches!(self, Modal::Delete(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Update(_) => "Update Category",
            _ => "Add New Category",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Modal::Update(_) => "Update Category",
            _ => "Save Category",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub error: Option<ValidationError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub number: u32,
    pub category: Category,
}

/// 列表区域的渲染形态
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Loading,
    /// 无数据占位
    Empty,
    Table {
        rows: Vec<CategoryRow>,
        pagination: Pagination,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryListState {
    pub categories: Vec<Category>,
    pub query: QueryState,
    pub page_size: u32,
    pub loading: bool,
    pub modal: Modal,
    pub form: CategoryForm,
}

impl CategoryListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            categories: Vec::new(),
            query: QueryState::default(),
            page_size,
            loading: false,
            modal: Modal::Closed,
            form: CategoryForm::default(),
        }
    }

    pub fn find(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.query.current_page, self.query.total_pages)
    }

    pub fn rows(&self) -> Vec<CategoryRow> {
        self.categories
            .iter()
            .enumerate()
            .map(|(index, category)| CategoryRow {
                number: row_number(self.query.current_page, self.page_size, index),
                category: category.clone(),
            })
            .collect()
    }

    pub fn body(&self) -> ListBody {
        if self.loading {
            ListBody::Loading
        } else if self.categories.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Table {
                rows: self.rows(),
                pagination: self.pagination(),
            }
        }
    }
}

// =========================================================
// 页面控制器
// =========================================================

type Watcher = Box<dyn Fn(&CategoryListState)>;

enum FetchOutcome {
    Applied,
    /// 服务端总页数缩小，当前页被收回到新的末页
    Clamped(u32),
    /// 已有更新的请求发出，本次响应被丢弃
    Stale,
}

pub struct CategoryList<C: HttpClient, N: Notifier, K: Clock> {
    api: ConsoleApi<C>,
    notifier: N,
    clock: K,
    state: RefCell<CategoryListState>,
    /// 最近一次发出的查询序号
    fetch_seq: Cell<u64>,
    search: Debouncer,
    watchers: RefCell<Vec<Watcher>>,
}

impl<C: HttpClient, N: Notifier, K: Clock> CategoryList<C, N, K> {
    pub fn new(api: ConsoleApi<C>, notifier: N, clock: K, config: &ConsoleConfig) -> Self {
        Self {
            api,
            notifier,
            clock,
            state: RefCell::new(CategoryListState::new(config.page_size)),
            fetch_seq: Cell::new(0),
            search: Debouncer::new(config.search_debounce()),
            watchers: RefCell::new(Vec::new()),
        }
    }

    /// 当前状态快照
    pub fn state(&self) -> CategoryListState {
        self.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&CategoryListState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// 订阅状态变更
    ///
    /// 回调中可以读取状态，但不能再修改控制器。
    pub fn subscribe(&self, watcher: impl Fn(&CategoryListState) + 'static) {
        self.watchers.borrow_mut().push(Box::new(watcher));
    }

    fn update(&self, f: impl FnOnce(&mut CategoryListState)) {
        f(&mut self.state.borrow_mut());
        let state = self.state.borrow();
        for watcher in self.watchers.borrow().iter() {
            watcher(&state);
        }
    }

    fn query(&self) -> (u32, String) {
        self.with_state(|s| (s.query.current_page, s.query.search_term.clone()))
    }

    // -----------------------------------------------------
    // 查询
    // -----------------------------------------------------

    /// 拉取一页分类
    ///
    /// 失败时保留原有数据；过期响应直接丢弃。
    pub async fn fetch_categories(&self, page: u32, name_filter: &str) -> Result<(), RequestError> {
        let mut page = page;
        loop {
            match self.fetch_once(page, name_filter).await? {
                FetchOutcome::Clamped(last) => page = last,
                FetchOutcome::Applied | FetchOutcome::Stale => return Ok(()),
            }
        }
    }

    async fn fetch_once(&self, page: u32, name_filter: &str) -> Result<FetchOutcome, RequestError> {
        let seq = self.fetch_seq.get() + 1;
        self.fetch_seq.set(seq);
        self.update(|s| s.loading = true);

        let page_size = self.with_state(|s| s.page_size);
        log::debug!(
            "[categories] fetch #{} page={} filter={:?}",
            seq,
            page,
            name_filter
        );
        let result = self.api.list_categories(page, page_size, name_filter).await;

        if seq != self.fetch_seq.get() {
            log::debug!("[categories] discarding stale response #{}", seq);
            return Ok(FetchOutcome::Stale);
        }

        match result {
            Ok(resp) => {
                let total = resp.total_pages();
                let mut outcome = FetchOutcome::Applied;
                self.update(|s| {
                    s.categories = resp.data;
                    s.query.total_pages = total;
                    if s.query.current_page > total {
                        s.query.current_page = total;
                        outcome = FetchOutcome::Clamped(total);
                    } else {
                        s.loading = false;
                    }
                });
                Ok(outcome)
            }
            Err(e) => {
                log::error!("[categories] fetch failed: {}", e);
                self.update(|s| s.loading = false);
                self.notifier.error(FETCH_FAILURE);
                Err(e)
            }
        }
    }

    /// 按当前页码与搜索词重新拉取
    pub async fn reload(&self) -> Result<(), RequestError> {
        let (page, term) = self.query();
        self.fetch_categories(page, &term).await
    }

    /// 更新搜索词，并在防抖静默期后拉取
    ///
    /// 返回本次调用是否真正触发了请求（被后续输入取消时为 `false`）。
    pub async fn set_search_term(&self, term: impl Into<String>) -> bool {
        let term = term.into();
        self.update(|s| s.query.search_term = term);

        let fetch = async {
            // 请求开始时再读取状态，保证使用的是最后一次输入
            let _ = self.reload().await;
        };
        self.search.schedule(&self.clock, fetch).await.is_some()
    }

    /// 切换页码，立即拉取
    ///
    /// 页码越界或与当前页相同时忽略，返回 `false`。
    pub async fn change_page(&self, page: u32) -> bool {
        let (current, pagination) = self.with_state(|s| (s.query.current_page, s.pagination()));
        if !pagination.contains(page) || page == current {
            log::debug!("[categories] ignoring page change to {}", page);
            return false;
        }

        // 页码请求已经带上最新的搜索词，挂起的搜索请求不再需要
        self.search.cancel();
        self.update(|s| s.query.current_page = page);
        let _ = self.reload().await;
        true
    }

    // -----------------------------------------------------
    // 弹窗与表单
    // -----------------------------------------------------

    pub fn open_modal(&self, modal: Modal) {
        self.update(|s| {
            let name = match modal {
                // 仅使用本地缓存，不单独请求
                Modal::Update(id) => s.find(id).map(|c| c.name.clone()).unwrap_or_default(),
                _ => String::new(),
            };
            s.form = CategoryForm { name, error: None };
            s.modal = modal;
        });
    }

    pub fn close_modal(&self) {
        self.open_modal(Modal::Closed);
    }

    /// 编辑名称；已经提交失败过的表单在输入时重新校验
    pub fn set_form_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|s| {
            if s.form.error.is_some() {
                s.form.error = CategoryPayload::new(name.as_str()).validate().err();
            }
            s.form.name = name;
        });
    }

    /// 提交新增 / 修改表单
    pub async fn submit_form(&self) -> Result<(), ConsoleError> {
        let (modal, name) = self.with_state(|s| (s.modal, s.form.name.clone()));
        let payload = CategoryPayload::new(name);

        if let Err(e) = payload.validate() {
            self.update(|s| s.form.error = Some(e.clone()));
            return Err(e.into());
        }

        match modal {
            Modal::Add => self.create_category(payload).await,
            Modal::Update(id) => self.update_category(id, payload).await,
            Modal::Delete(_) | Modal::Closed => Err(ConsoleError::NoTarget),
        }
    }

    /// 确认删除弹窗中选中的分类
    pub async fn confirm_delete(&self) -> Result<(), ConsoleError> {
        match self.with_state(|s| s.modal) {
            Modal::Delete(id) => self.delete_category(id).await,
            _ => Err(ConsoleError::NoTarget),
        }
    }

    // -----------------------------------------------------
    // 变更操作
    // -----------------------------------------------------

    pub async fn create_category(&self, payload: CategoryPayload) -> Result<(), ConsoleError> {
        let result = self.api.create_category(payload).await;
        self.finish_mutation(result.map(drop), CREATE_SUCCESS, CREATE_FAILURE)
            .await
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        payload: CategoryPayload,
    ) -> Result<(), ConsoleError> {
        let result = self.api.update_category(id, payload).await;
        self.finish_mutation(result.map(drop), UPDATE_SUCCESS, UPDATE_FAILURE)
            .await
    }

    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ConsoleError> {
        let result = self.api.delete_category(id).await;
        self.finish_mutation(result.map(drop), DELETE_SUCCESS, DELETE_FAILURE)
            .await
    }

    /// 变更完成后的统一处理
    ///
    /// 成功：提示、关闭弹窗、重新拉取当前页。
    /// 失败：提示，弹窗保持打开以便重试或取消。
    async fn finish_mutation(
        &self,
        result: Result<(), RequestError>,
        success: &str,
        fallback: &str,
    ) -> Result<(), ConsoleError> {
        match result {
            Ok(()) => {
                log::info!("[categories] {}", success);
                self.notifier.success(success);
                self.close_modal();
                // 刷新失败已单独提示，不影响变更本身的结果
                let _ = self.reload().await;
                Ok(())
            }
            Err(e) => {
                log::warn!("[categories] {}: {}", fallback, e);
                self.notifier.error(&e.user_message(fallback));
                Err(e.into())
            }
        }
    }
}
