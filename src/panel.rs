//! Remote Data Panel State
//!
//! Per-tab `idle -> loading -> success | error` state machine for the API
//! panel. Requests are described as values: the component calls `begin`,
//! runs [`execute`] in a local task, then hands the result to `finish`.
//! Nothing is cancelled, so whichever response resolves last wins.

use log::{debug, error};

use crate::api::{ApiResult, RemoteSource};
use crate::config::{PAGE_SIZE, PHOTOS_LIMIT, POSTS_LIMIT};
use crate::models::{Photo, Post};
use crate::pagination::{clamp_page, page_slice, total_pages};

/// Panel tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Posts,
    Photos,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Posts, Tab::Photos];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Posts => "Posts",
            Tab::Photos => "Photos",
        }
    }

    /// Lowercase plural used in messages
    pub fn noun(&self) -> &'static str {
        match self {
            Tab::Posts => "posts",
            Tab::Photos => "photos",
        }
    }
}

/// Request lifecycle of the active tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

/// A fetch the panel wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRequest {
    Posts,
    Photos { album_id: Option<u32> },
    Search(String),
}

impl PanelRequest {
    pub fn tab(&self) -> Tab {
        match self {
            PanelRequest::Posts | PanelRequest::Search(_) => Tab::Posts,
            PanelRequest::Photos { .. } => Tab::Photos,
        }
    }

    /// User-facing message when this request fails
    pub fn error_message(&self) -> String {
        match self {
            PanelRequest::Search(_) => "Search failed. Please try again.".to_string(),
            other => format!("Failed to fetch {}. Please try again.", other.tab().noun()),
        }
    }
}

/// Result set delivered for a request
#[derive(Debug, Clone, PartialEq)]
pub enum PanelResponse {
    Posts(Vec<Post>),
    Photos(Vec<Photo>),
}

/// Run `request` against `source`
pub async fn execute<R>(source: &R, request: &PanelRequest) -> ApiResult<PanelResponse>
where
    R: RemoteSource + ?Sized,
{
    match request {
        PanelRequest::Posts => source.posts(Some(POSTS_LIMIT)).await.map(PanelResponse::Posts),
        PanelRequest::Photos { album_id } => source
            .photos(*album_id, Some(PHOTOS_LIMIT))
            .await
            .map(PanelResponse::Photos),
        PanelRequest::Search(query) => source.search(query).await.map(PanelResponse::Posts),
    }
}

/// Everything the panel renders
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub tab: Tab,
    pub phase: Phase,
    pub posts: Vec<Post>,
    pub photos: Vec<Photo>,
    /// Raw search box contents
    pub query: String,
    /// Album filter for the photos tab
    pub album_id: Option<u32>,
    /// 1-based
    pub page: usize,
    last_request: Option<PanelRequest>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            tab: Tab::Posts,
            phase: Phase::Idle,
            posts: Vec::new(),
            photos: Vec::new(),
            query: String::new(),
            album_id: None,
            page: 1,
            last_request: None,
        }
    }

    /// Unfiltered load for the active tab
    pub fn load_request(&self) -> PanelRequest {
        match self.tab {
            Tab::Posts => PanelRequest::Posts,
            Tab::Photos => PanelRequest::Photos { album_id: self.album_id },
        }
    }

    /// Move to `tab`, back to page 1, and start loading it
    pub fn switch_tab(&mut self, tab: Tab) -> PanelRequest {
        self.tab = tab;
        self.page = 1;
        self.query.clear();
        let request = self.load_request();
        self.begin(request.clone());
        request
    }

    /// Filter the photos tab by album and reload it
    pub fn set_album(&mut self, album_id: Option<u32>) -> PanelRequest {
        self.tab = Tab::Photos;
        self.album_id = album_id;
        self.page = 1;
        let request = self.load_request();
        self.begin(request.clone());
        request
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Request for the current search box contents. Search only applies to
    /// posts; a blank query reloads the unfiltered posts.
    pub fn search_request(&self) -> Option<PanelRequest> {
        if self.tab != Tab::Posts {
            return None;
        }
        let query = self.query.trim();
        if query.is_empty() {
            Some(PanelRequest::Posts)
        } else {
            Some(PanelRequest::Search(query.to_string()))
        }
    }

    /// Take a settled search box value and start the request it calls for.
    /// `None` when the trimmed query is unchanged or the tab has no search.
    pub fn apply_search(&mut self, query: &str) -> Option<PanelRequest> {
        if query.trim() == self.query.trim() {
            return None;
        }
        self.set_query(query);
        let request = self.search_request()?;
        self.begin(request.clone());
        Some(request)
    }

    /// Enter `Loading` for `request`, remembering it for retry
    pub fn begin(&mut self, request: PanelRequest) {
        debug!("[Panel] Loading {:?}", request);
        self.phase = Phase::Loading;
        self.last_request = Some(request);
    }

    /// Apply the outcome of `request`
    pub fn finish(&mut self, request: &PanelRequest, result: ApiResult<PanelResponse>) {
        match result {
            Ok(PanelResponse::Posts(posts)) => {
                debug!("[Panel] Loaded {} posts", posts.len());
                self.posts = posts;
                if matches!(request, PanelRequest::Search(_)) {
                    self.page = 1;
                }
                self.phase = Phase::Success;
            }
            Ok(PanelResponse::Photos(photos)) => {
                debug!("[Panel] Loaded {} photos", photos.len());
                self.photos = photos;
                self.phase = Phase::Success;
            }
            Err(e) => {
                error!("[Panel] Error fetching {}: {}", request.tab().noun(), e);
                self.phase = Phase::Error(request.error_message());
            }
        }
        self.page = clamp_page(self.page, self.total_pages());
    }

    /// Re-issue the request that failed. `None` unless in the error state.
    pub fn retry(&mut self) -> Option<PanelRequest> {
        if !matches!(self.phase, Phase::Error(_)) {
            return None;
        }
        let request = self.last_request.clone().unwrap_or_else(|| self.load_request());
        self.begin(request.clone());
        Some(request)
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Size of the active tab's result set
    pub fn item_count(&self) -> usize {
        self.count_for(self.tab)
    }

    pub fn count_for(&self, tab: Tab) -> usize {
        match tab {
            Tab::Posts => self.posts.len(),
            Tab::Photos => self.photos.len(),
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.item_count(), PAGE_SIZE)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    pub fn page_posts(&self) -> &[Post] {
        page_slice(&self.posts, self.page, PAGE_SIZE)
    }

    pub fn page_photos(&self) -> &[Photo] {
        page_slice(&self.photos, self.page, PAGE_SIZE)
    }

    fn page_len(&self) -> usize {
        match self.tab {
            Tab::Posts => self.page_posts().len(),
            Tab::Photos => self.page_photos().len(),
        }
    }

    /// "Showing 6 of 50 posts", plus the active query
    pub fn summary(&self) -> String {
        let mut text = format!("Showing {} of {} {}", self.page_len(), self.item_count(), self.tab.noun());
        let query = self.query.trim();
        if self.tab == Tab::Posts && !query.is_empty() {
            text.push_str(&format!(" (filtered by \"{}\")", query));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    fn post(id: u32, title: &str) -> Post {
        Post {
            user_id: 1,
            id,
            title: title.to_string(),
            body: format!("body of {}", id),
        }
    }

    fn photo(id: u32) -> Photo {
        Photo {
            album_id: 1,
            id,
            title: format!("photo {}", id),
            url: format!("https://img.test/{}", id),
            thumbnail_url: format!("https://img.test/t/{}", id),
        }
    }

    /// Serves canned data, failing the first `failures` calls
    struct FakeSource {
        posts: Vec<Post>,
        photos: Vec<Photo>,
        failures: Cell<usize>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeSource {
        fn new(post_count: u32) -> Self {
            Self {
                posts: (1..=post_count).map(|i| post(i, &format!("post {}", i))).collect(),
                photos: (1..=24).map(photo).collect(),
                failures: Cell::new(0),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(mut self, failures: usize) -> Self {
            self.failures = Cell::new(failures);
            self
        }

        fn check(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            if self.failures.get() > 0 {
                self.failures.set(self.failures.get() - 1);
                return Err(ApiError::Status {
                    status: 503,
                    url: "https://api.test".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl RemoteSource for FakeSource {
        async fn posts(&self, limit: Option<u32>) -> ApiResult<Vec<Post>> {
            self.check(format!("posts {:?}", limit))?;
            let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);
            Ok(self.posts.iter().take(limit).cloned().collect())
        }

        async fn photos(&self, album_id: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<Photo>> {
            self.check(format!("photos {:?} {:?}", album_id, limit))?;
            Ok(self.photos.clone())
        }
    }

    async fn run(state: &mut PanelState, source: &FakeSource, request: PanelRequest) {
        state.begin(request.clone());
        let result = execute(source, &request).await;
        state.finish(&request, result);
    }

    #[test]
    fn test_starts_idle_on_first_page() {
        let state = PanelState::new();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.tab, Tab::Posts);
        assert_eq!(state.page, 1);
    }

    #[tokio::test]
    async fn test_load_posts_succeeds() {
        let source = FakeSource::new(80);
        let mut state = PanelState::new();

        run(&mut state, &source, PanelRequest::Posts).await;

        assert_eq!(state.phase, Phase::Success);
        assert_eq!(state.posts.len(), POSTS_LIMIT as usize);
        assert_eq!(state.total_pages(), 9);
        assert_eq!(state.page_posts().len(), PAGE_SIZE);
        assert_eq!(source.calls.borrow().as_slice(), ["posts Some(50)"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_then_retry_recovers() {
        let source = FakeSource::new(50).failing(1);
        let mut state = PanelState::new();

        run(&mut state, &source, PanelRequest::Posts).await;
        assert_eq!(state.error(), Some("Failed to fetch posts. Please try again."));
        assert!(state.posts.is_empty());

        let retry = state.retry().expect("retry from error state");
        assert_eq!(retry, PanelRequest::Posts);
        assert!(state.is_loading());

        let result = execute(&source, &retry).await;
        state.finish(&retry, result);
        assert_eq!(state.phase, Phase::Success);
        assert_eq!(state.posts.len(), 50);
    }

    #[tokio::test]
    async fn test_retry_repeats_failed_search() {
        let source = FakeSource::new(100).failing(1);
        let mut state = PanelState::new();
        state.set_query("post 1");

        let request = state.search_request().unwrap();
        run(&mut state, &source, request).await;
        assert_eq!(state.error(), Some("Search failed. Please try again."));

        let retry = state.retry().unwrap();
        assert_eq!(retry, PanelRequest::Search("post 1".to_string()));
        let result = execute(&source, &retry).await;
        state.finish(&retry, result);

        // "post 1", "post 10".."post 19", "post 100"
        assert_eq!(state.posts.len(), 12);
        assert_eq!(state.summary(), "Showing 6 of 12 posts (filtered by \"post 1\")");
    }

    #[test]
    fn test_retry_only_from_error() {
        let mut state = PanelState::new();
        assert!(state.retry().is_none());

        state.begin(PanelRequest::Posts);
        assert!(state.retry().is_none());
    }

    #[tokio::test]
    async fn test_search_resets_page() {
        let source = FakeSource::new(100);
        let mut state = PanelState::new();
        run(&mut state, &source, PanelRequest::Posts).await;
        state.set_page(4);
        assert_eq!(state.page, 4);

        state.set_query("  post 2 ");
        let request = state.search_request().unwrap();
        assert_eq!(request, PanelRequest::Search("post 2".to_string()));
        run(&mut state, &source, request).await;
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_blank_query_reloads_posts() {
        let mut state = PanelState::new();
        state.set_query("   ");
        assert_eq!(state.search_request(), Some(PanelRequest::Posts));
    }

    #[test]
    fn test_search_ignored_on_photos_tab() {
        let mut state = PanelState::new();
        state.switch_tab(Tab::Photos);
        state.set_query("anything");
        assert_eq!(state.search_request(), None);
    }

    #[tokio::test]
    async fn test_switch_tab_resets_page_and_loads() {
        let source = FakeSource::new(50);
        let mut state = PanelState::new();
        run(&mut state, &source, PanelRequest::Posts).await;
        state.set_page(3);

        let request = state.switch_tab(Tab::Photos);
        assert_eq!(request, PanelRequest::Photos { album_id: None });
        assert_eq!(state.page, 1);
        assert!(state.is_loading());

        let result = execute(&source, &request).await;
        state.finish(&request, result);
        assert_eq!(state.item_count(), 24);
        assert_eq!(state.total_pages(), 4);
        assert_eq!(state.summary(), "Showing 6 of 24 photos");
        assert_eq!(state.count_for(Tab::Posts), 50);
    }

    #[tokio::test]
    async fn test_album_filter_is_passed_through() {
        let source = FakeSource::new(0);
        let mut state = PanelState::new();
        let request = state.set_album(Some(3));
        assert_eq!(request, PanelRequest::Photos { album_id: Some(3) });

        let result = execute(&source, &request).await;
        state.finish(&request, result);
        assert_eq!(source.calls.borrow().as_slice(), ["photos Some(3) Some(24)"]);
    }

    #[tokio::test]
    async fn test_last_resolved_response_wins() {
        let source = FakeSource::new(100);
        let mut state = PanelState::new();

        let first = PanelRequest::Search("post 5".to_string());
        let second = PanelRequest::Search("post 7".to_string());
        state.begin(first.clone());
        state.begin(second.clone());

        let second_result = execute(&source, &second).await;
        let first_result = execute(&source, &first).await;
        state.finish(&second, second_result);
        state.finish(&first, first_result);

        assert!(state.posts.iter().all(|p| p.title.contains("post 5")));
    }

    #[tokio::test]
    async fn test_switch_to_posts_loads_once() {
        let source = FakeSource::new(50);
        let mut state = PanelState::new();
        state.switch_tab(Tab::Photos);
        state.set_query("post 3");

        let request = state.switch_tab(Tab::Posts);
        run(&mut state, &source, request).await;

        // The cleared search box settles on "" after the tab switch
        assert_eq!(state.apply_search(""), None);
        assert_eq!(state.phase, Phase::Success);
        assert_eq!(source.calls.borrow().as_slice(), ["posts Some(50)"]);
    }

    #[tokio::test]
    async fn test_apply_search_then_clear_reloads() {
        let source = FakeSource::new(100);
        let mut state = PanelState::new();

        let request = state.apply_search("post 7").unwrap();
        assert_eq!(request, PanelRequest::Search("post 7".to_string()));
        assert!(state.is_loading());
        run(&mut state, &source, request).await;

        assert_eq!(state.apply_search(" post 7 "), None);

        let request = state.apply_search("").unwrap();
        assert_eq!(request, PanelRequest::Posts);
        run(&mut state, &source, request).await;
        assert_eq!(state.posts.len(), 50);
    }

    #[test]
    fn test_apply_search_on_photos_only_records_query() {
        let mut state = PanelState::new();
        state.switch_tab(Tab::Photos);
        assert_eq!(state.apply_search("cats"), None);
        assert_eq!(state.query, "cats");
    }

    #[tokio::test]
    async fn test_search_filters_the_post_pool() {
        let source = FakeSource::new(100);
        let mut state = PanelState::new();
        run(&mut state, &source, PanelRequest::Search("POST 9".to_string())).await;

        assert_eq!(source.calls.borrow().as_slice(), ["posts Some(100)"]);
        // "post 9", "post 90".."post 99"
        assert_eq!(state.posts.len(), 11);
    }

    #[tokio::test]
    async fn test_page_navigation_clamps() {
        let source = FakeSource::new(50);
        let mut state = PanelState::new();
        run(&mut state, &source, PanelRequest::Posts).await;

        state.prev_page();
        assert_eq!(state.page, 1);

        state.set_page(9);
        assert_eq!(state.page_posts().len(), 2);
        state.next_page();
        assert_eq!(state.page, 9);

        state.set_page(100);
        assert_eq!(state.page, 9);
    }
}
