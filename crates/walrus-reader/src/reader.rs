//! Router/navigator.
//!
//! [`Reader`] turns navigation events (initial load, back/forward, in-app
//! links) into screens. Every URL goes through the same steps:
//!
//! 1. parse it into a [`Route`]; no route shows the index
//! 2. same subject and article as the current page: scroll only
//! 3. resolve the subject (and article) case-insensitively; a miss shows 404
//! 4. subjects show their listing; articles are fetched, transformed and shown
//! 5. push a history entry when the page differs from the current entry
//!
//! Article fetches are split into two phases so callers can run them however
//! they like. [`Reader::begin`] returns an [`ArticleRequest`] tagged with a
//! [`Ticket`]; [`Reader::complete`] accepts the result and discards it when a
//! newer navigation has started since. [`Reader::navigate`] does both in one
//! call using the reader's own [`ContentSource`].

use std::borrow::Cow;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use walrus_config::{Article, DisplayMode};
use walrus_renderer::render_article;
use walrus_site::{Lookup, Route, Site, SubjectListing, pages_differ, parse_route};
use walrus_storage::{ContentSource, PreferenceStore, StorageError, StorageErrorKind};

use crate::history::History;
use crate::mode::{load_mode, save_mode};
use crate::view::{Screen, ScreenBody, View};

/// Tag identifying the navigation an article fetch belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// An article fetch the caller must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArticleRequest {
    pub ticket: Ticket,
    /// Full URL of the article's text file.
    pub url: String,
}

/// Result of the synchronous part of a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Navigation finished.
    Done(Outcome),
    /// An article is loading; pass the fetch result to [`Reader::complete`].
    Fetch(ArticleRequest),
}

/// What a navigation ended up showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The index page.
    Index,
    /// A subject listing.
    Subject,
    /// A rendered article.
    Article,
    /// Same page as before; at most a scroll happened.
    SamePage,
    /// No matching subject or article.
    NotFound,
    /// The article text could not be fetched.
    LoadFailed(StorageErrorKind),
    /// The fetch result belonged to an older navigation and was dropped.
    Stale,
    /// Reload mode: the caller should load this URL as a new page.
    Reload(String),
}

/// Article navigation waiting for its text.
#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    route: Route,
    article: Article,
}

/// Reader session state.
pub struct Reader<V, H> {
    site: Site,
    source: Arc<dyn ContentSource>,
    prefs: Arc<dyn PreferenceStore>,
    view: V,
    history: H,
    current: Option<Route>,
    generation: u64,
    pending: Option<Pending>,
    math_loaded: bool,
    mode: DisplayMode,
}

impl<V: View, H: History> Reader<V, H> {
    /// Start a session and apply the persisted display mode to the view.
    pub fn new(
        site: Site,
        source: Arc<dyn ContentSource>,
        prefs: Arc<dyn PreferenceStore>,
        mut view: V,
        history: H,
    ) -> Self {
        let mode = load_mode(prefs.as_ref(), site.config().default_mode);
        view.apply_mode(mode);
        Self {
            site,
            source,
            prefs,
            view,
            history,
            current: None,
            generation: 0,
            pending: None,
            math_loaded: false,
            mode,
        }
    }

    /// The site being read.
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The history.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Route of the page on screen, `None` on the index.
    pub fn current_route(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    /// Current display mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Switch and persist the display mode.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        tracing::debug!(%mode, "display mode changed");
        self.mode = mode;
        save_mode(self.prefs.as_ref(), mode);
        self.view.apply_mode(mode);
    }

    /// Flip between light and dark.
    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        };
        self.set_mode(next);
    }

    /// Navigate to `url`, fetching article text from the reader's source.
    pub fn navigate(&mut self, url: &str) -> Outcome {
        match self.begin(url) {
            Step::Done(outcome) => outcome,
            Step::Fetch(request) => {
                let result = self.source.fetch(&request.url);
                self.complete(request.ticket, result)
            }
        }
    }

    /// Follow an in-app link to a site-relative `path` (`subject/article#section`).
    ///
    /// In reload mode nothing changes and the full URL is returned for a page
    /// load instead.
    pub fn follow_link(&mut self, path: &str) -> Outcome {
        let url = self.site.config().page_url(path.trim_start_matches('/'));
        if self.site.config().reload {
            tracing::debug!(%url, "reload mode, leaving page");
            return Outcome::Reload(url);
        }
        self.navigate(&url)
    }

    /// Go back one history entry.
    pub fn back(&mut self) -> Option<Outcome> {
        let url = self.history.back()?;
        Some(self.navigate(&url))
    }

    /// Go forward one history entry.
    pub fn forward(&mut self) -> Option<Outcome> {
        let url = self.history.forward()?;
        Some(self.navigate(&url))
    }

    /// Run the synchronous part of a navigation to `url`.
    pub fn begin(&mut self, url: &str) -> Step {
        let candidate = parse_route(url, &self.site.config().base_url);

        if let (Some(current), Some(next)) = (&self.current, &candidate)
            && current.same_page(next)
        {
            tracing::debug!(section = %next.section, "same page");
            if !next.section.is_empty() {
                self.view.scroll_to(&section_anchor(&next.section));
            }
            self.current = candidate;
            return Step::Done(Outcome::SamePage);
        }

        self.generation += 1;
        self.pending = None;

        let Some(route) = candidate else {
            tracing::debug!("index");
            let config = self.site.config();
            let screen = Screen {
                title: String::new(),
                direction: config.direction,
                body: ScreenBody::Index(self.site.index()),
            };
            self.finish(None, screen);
            return Step::Done(Outcome::Index);
        };

        if route.article.is_empty() {
            return Step::Done(self.show_subject(route));
        }

        let found = self
            .site
            .article_by_subject_and_slug(&route.subject, &route.article);
        let Lookup::Found(found) = found else {
            return Step::Done(self.show_not_found(route));
        };

        let article = found.article.clone();
        let url = self.site.config().article_url(&article);
        let ticket = Ticket(self.generation);
        tracing::info!(%url, "loading article");

        self.view.show(Screen {
            title: article.title.clone(),
            direction: article.direction,
            body: ScreenBody::Loading,
        });
        self.current = Some(route.clone());
        self.pending = Some(Pending {
            ticket,
            route,
            article,
        });
        Step::Fetch(ArticleRequest { ticket, url })
    }

    /// Finish an article navigation with the fetched text.
    pub fn complete(&mut self, ticket: Ticket, result: Result<String, StorageError>) -> Outcome {
        let Some(pending) = self.pending.take_if(|p| p.ticket == ticket) else {
            tracing::warn!(?ticket, "discarding stale article response");
            return Outcome::Stale;
        };
        let Pending { route, article, .. } = pending;

        match result {
            Ok(text) => {
                let rendered = render_article(&text);
                tracing::info!(
                    article = %article.title,
                    sections = rendered.sections.len(),
                    "article loaded"
                );
                let screen = Screen {
                    title: article.title.clone(),
                    direction: article.direction,
                    body: ScreenBody::Article {
                        toc: rendered.toc_html,
                        html: rendered.body,
                    },
                };
                self.finish(Some(route.clone()), screen);
                if article.math {
                    self.enable_math();
                }
                if !route.section.is_empty() {
                    self.view.scroll_to(&section_anchor(&route.section));
                }
                Outcome::Article
            }
            Err(e) => {
                tracing::warn!(article = %article.title, "failed to load article: {e}");
                let kind = e.kind;
                let screen = Screen {
                    title: article.title,
                    direction: article.direction,
                    body: ScreenBody::LoadFailed {
                        message: e.to_string(),
                    },
                };
                self.push_history(Some(&route), &screen.title);
                self.view.show(screen);
                // Forget the page so the same URL fetches again.
                self.current = None;
                Outcome::LoadFailed(kind)
            }
        }
    }

    fn show_subject(&mut self, route: Route) -> Outcome {
        let Lookup::Found(subject) = self.site.subject_by_slug(&route.subject) else {
            return self.show_not_found(route);
        };
        tracing::debug!(subject = %subject.title, "subject page");
        let screen = Screen {
            title: subject.title.clone(),
            direction: subject.direction,
            body: ScreenBody::Subject(SubjectListing::new(subject)),
        };
        self.finish(Some(route), screen);
        Outcome::Subject
    }

    fn show_not_found(&mut self, route: Route) -> Outcome {
        tracing::debug!(subject = %route.subject, article = %route.article, "not found");
        let screen = Screen::not_found(self.site.config().direction);
        self.finish(Some(route), screen);
        Outcome::NotFound
    }

    /// Show a resolved page, record it as current and push history.
    fn finish(&mut self, route: Option<Route>, screen: Screen) {
        self.push_history(route.as_ref(), &screen.title);
        self.view.show(screen);
        self.current = route;
    }

    fn push_history(&mut self, route: Option<&Route>, title: &str) {
        let base_url = &self.site.config().base_url;
        let on_entry = self
            .history
            .current_url()
            .map(|url| parse_route(url, base_url));
        let differs = match on_entry {
            Some(entry) => pages_differ(route, entry.as_ref()),
            None => true,
        };
        if !differs {
            return;
        }

        let config = self.site.config();
        let mut url = config.page_url(&route.map(Route::page_path).unwrap_or_default());
        if let Some(route) = route.filter(|r| !r.section.is_empty()) {
            url.push('#');
            url.push_str(&route.section);
        }
        let title = crate::view::document_title(title, &config.title);
        tracing::debug!(%url, "history push");
        self.history.push(&url, &title);
    }

    fn enable_math(&mut self) {
        if self.math_loaded {
            self.view.typeset_math();
        } else {
            tracing::info!("loading math typesetter");
            self.view.load_math(&self.site.config().math_config);
            self.math_loaded = true;
        }
    }
}

/// Heading anchor named by a URL fragment. Fragments arrive percent-encoded,
/// anchors do not.
fn section_anchor(section: &str) -> Cow<'_, str> {
    percent_decode_str(section).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use walrus_config::{Config, Direction};
    use walrus_storage::{MemoryPreferences, MockSource};

    use super::*;
    use crate::history::MemoryHistory;
    use crate::mode::DISPLAY_MODE_KEY;
    use crate::view::HtmlView;

    static_assertions::assert_impl_all!(Reader<HtmlView, MemoryHistory>: Send, Sync);

    /// View that records every call.
    #[derive(Debug, Default)]
    struct RecordingView {
        calls: Vec<Call>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Show(Screen),
        Scroll(String),
        Mode(DisplayMode),
        LoadMath,
        Typeset,
    }

    impl RecordingView {
        fn screens(&self) -> Vec<&Screen> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Show(s) => Some(s),
                    _ => None,
                })
                .collect()
        }

        fn last_screen(&self) -> &Screen {
            self.screens().last().copied().unwrap()
        }

        fn count(&self, wanted: &Call) -> usize {
            self.calls.iter().filter(|c| *c == wanted).count()
        }
    }

    impl View for RecordingView {
        fn show(&mut self, screen: Screen) {
            self.calls.push(Call::Show(screen));
        }

        fn scroll_to(&mut self, anchor: &str) {
            self.calls.push(Call::Scroll(anchor.to_owned()));
        }

        fn apply_mode(&mut self, mode: DisplayMode) {
            self.calls.push(Call::Mode(mode));
        }

        fn load_math(&mut self, _config: &serde_json::Value) {
            self.calls.push(Call::LoadMath);
        }

        fn typeset_math(&mut self) {
            self.calls.push(Call::Typeset);
        }
    }

    const ROOT: &str = "http://example.com/";
    const COSETS: &str = "http://example.com/./Group Theory/Cosets.tex";
    const SYLOW: &str = "http://example.com/./Group Theory/Sylow.tex";
    const PROSE: &str = "http://example.com/./Writing/Style.tex";

    fn config() -> Config {
        Config::from_json_str(
            r#"{
                "Title": "Notes",
                "BaseURL": "example.com",
                "Direction": "RTL",
                "Subjects": [
                    {"Title": "Group Theory", "Math": true, "Direction": "LTR", "Articles": [
                        {"Title": "Cosets"},
                        {"Title": "Sylow"}
                    ]},
                    {"Title": "Writing", "Articles": [{"Title": "Style"}]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn source() -> Arc<MockSource> {
        Arc::new(
            MockSource::new()
                .with_content(COSETS, "# Cosets\nLeft cosets.\n### Index\n## Lagrange\n")
                .with_content(SYLOW, "# Sylow\ntext\n")
                .with_content(PROSE, "# Style\nplain\n"),
        )
    }

    type TestReader = Reader<RecordingView, MemoryHistory>;

    fn reader_with(source: Arc<MockSource>, config: Config) -> TestReader {
        Reader::new(
            Site::new(config),
            source,
            Arc::new(MemoryPreferences::new()),
            RecordingView::default(),
            MemoryHistory::starting_at(ROOT),
        )
    }

    fn reader(source: Arc<MockSource>) -> TestReader {
        reader_with(source, config())
    }

    fn history_urls(reader: &TestReader) -> Vec<String> {
        reader
            .history()
            .entries()
            .iter()
            .map(|e| e.url.clone())
            .collect()
    }

    #[test]
    fn test_index() {
        let mut reader = reader(source());
        assert_eq!(reader.navigate(ROOT), Outcome::Index);

        let screen = reader.view().last_screen();
        assert_eq!(screen.title, "");
        assert_eq!(screen.direction, Direction::Rtl);
        let ScreenBody::Index(listings) = &screen.body else {
            panic!("expected index, got {screen:?}");
        };
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].items.len(), 2);
        // Initial entry is already the index.
        assert_eq!(reader.history().len(), 1);
        assert_eq!(reader.current_route(), None);
    }

    #[test]
    fn test_subject_page() {
        let mut reader = reader(source());
        assert_eq!(
            reader.navigate("http://example.com/group-theory"),
            Outcome::Subject
        );
        let screen = reader.view().last_screen();
        assert_eq!(screen.title, "Group Theory");
        assert!(matches!(&screen.body, ScreenBody::Subject(l) if l.items.len() == 2));
        assert_eq!(
            history_urls(&reader),
            vec![ROOT, "http://example.com/group-theory"]
        );
    }

    #[test]
    fn test_article_load() {
        let source = source();
        let mut reader = reader(Arc::clone(&source));
        let outcome = reader.navigate("http://example.com/Group-Theory/Cosets");
        assert_eq!(outcome, Outcome::Article);
        assert_eq!(source.fetches(), vec![COSETS]);

        let screens = reader.view().screens();
        assert_eq!(screens.len(), 2);
        assert_eq!(screens[0].body, ScreenBody::Loading);
        assert_eq!(screens[0].title, "Cosets");

        let screen = screens[1];
        assert_eq!(screen.title, "Cosets");
        assert_eq!(screen.direction, Direction::Ltr);
        let ScreenBody::Article { toc, html } = &screen.body else {
            panic!("expected article, got {screen:?}");
        };
        assert!(html.contains("<a name=\"Lagrange\"><h2>Lagrange</h2></a>"));
        assert!(toc.contains("<span class=\"num\">1.1</span><a href=\"#Index\">Index</a>"));
        assert!(toc.contains("<span class=\"num\">2</span><a href=\"#Lagrange\">Lagrange</a>"));

        assert_eq!(
            reader.current_route(),
            Some(&Route::new("Group-Theory", "Cosets", ""))
        );
    }

    #[test]
    fn test_section_change_scrolls_without_refetch() {
        let source = source();
        let mut reader = reader(Arc::clone(&source));
        reader.navigate("http://example.com/Group-Theory/Cosets");
        let shown = reader.view().screens().len();

        let outcome = reader.navigate("http://example.com/Group-Theory/Cosets#Lagrange");
        assert_eq!(outcome, Outcome::SamePage);
        assert_eq!(source.fetch_count(COSETS), 1);
        assert_eq!(reader.view().screens().len(), shown);
        assert_eq!(
            reader.view().calls.last(),
            Some(&Call::Scroll("Lagrange".to_owned()))
        );
        // No history entry for a section change.
        assert_eq!(reader.history().len(), 2);
    }

    #[test]
    fn test_same_page_without_section_does_nothing() {
        let source = source();
        let mut reader = reader(Arc::clone(&source));
        reader.navigate("http://example.com/Group-Theory/Cosets");
        let calls = reader.view().calls.len();

        assert_eq!(
            reader.navigate("http://example.com/Group-Theory/Cosets"),
            Outcome::SamePage
        );
        assert_eq!(reader.view().calls.len(), calls);
    }

    #[test]
    fn test_article_with_section_scrolls_after_render() {
        let mut reader = reader(source());
        reader.navigate("http://example.com/Group-Theory/Cosets#Index");
        let calls = &reader.view().calls;
        assert_eq!(calls.last(), Some(&Call::Scroll("Index".to_owned())));
        assert_eq!(
            history_urls(&reader),
            vec![ROOT, "http://example.com/Group-Theory/Cosets#Index"]
        );
    }

    #[test]
    fn test_encoded_fragment_scrolls_to_decoded_anchor() {
        const GROUPS: &str = "http://example.com/./Group Theory/Sylow.tex";
        let source = Arc::new(
            MockSource::new().with_content(GROUPS, "# Théorie des groupes\n## Sous-groupes\n"),
        );
        let mut reader = reader(source);

        reader.navigate("http://example.com/Group-Theory/Sylow#Th%C3%A9orie-des-groupes");
        let ScreenBody::Article { html, .. } = &reader.view().last_screen().body else {
            panic!("expected article");
        };
        assert!(html.contains("<a name=\"Théorie-des-groupes\">"));
        assert_eq!(
            reader.view().calls.last(),
            Some(&Call::Scroll("Théorie-des-groupes".to_owned()))
        );

        reader.navigate("http://example.com/Group-Theory/Sylow#Sous-groupes");
        reader.navigate("http://example.com/Group-Theory/Sylow#Th%C3%A9orie-des-groupes");
        assert_eq!(
            reader.view().calls.last(),
            Some(&Call::Scroll("Théorie-des-groupes".to_owned()))
        );
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(section_anchor("Th%C3%A9orie"), "Théorie");
        assert_eq!(section_anchor("Plain-Name"), "Plain-Name");
        assert_eq!(section_anchor("100%"), "100%");
    }

    #[test]
    fn test_article_not_found() {
        let source = source();
        let mut reader = reader(Arc::clone(&source));
        assert_eq!(
            reader.navigate("http://example.com/Group-Theory/Rings"),
            Outcome::NotFound
        );
        let screen = reader.view().last_screen();
        assert_eq!(*screen, Screen::not_found(Direction::Rtl));
        assert!(source.fetches().is_empty());
    }

    #[test]
    fn test_subject_not_found() {
        let mut reader = reader(source());
        assert_eq!(
            reader.navigate("http://example.com/Analysis"),
            Outcome::NotFound
        );
        assert_eq!(
            reader.navigate("http://example.com/Analysis/Limits"),
            Outcome::NotFound
        );
        assert_eq!(reader.view().last_screen().title, "404 Not Found");
    }

    #[test]
    fn test_load_failed_is_distinct_and_retryable() {
        let source = Arc::new(MockSource::new().with_status(COSETS, 503));
        let mut reader = reader(Arc::clone(&source));

        let outcome = reader.navigate("http://example.com/Group-Theory/Cosets");
        assert_eq!(outcome, Outcome::LoadFailed(StorageErrorKind::Unavailable));
        let screen = reader.view().last_screen();
        assert_eq!(screen.title, "Cosets");
        assert!(matches!(
            &screen.body,
            ScreenBody::LoadFailed { message } if message.contains("503")
        ));
        assert_eq!(reader.current_route(), None);

        source.set_content(COSETS, "# Cosets\n");
        assert_eq!(
            reader.navigate("http://example.com/Group-Theory/Cosets"),
            Outcome::Article
        );
        assert_eq!(source.fetch_count(COSETS), 2);
        // The retry does not add a second entry for the same page.
        assert_eq!(reader.history().len(), 2);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut reader = reader(source());
        let Step::Fetch(first) = reader.begin("http://example.com/Group-Theory/Cosets") else {
            panic!("expected fetch");
        };
        let Step::Fetch(second) = reader.begin("http://example.com/Group-Theory/Sylow") else {
            panic!("expected fetch");
        };
        assert_ne!(first.ticket, second.ticket);

        let shown = reader.view().screens().len();
        assert_eq!(
            reader.complete(first.ticket, Ok("# Cosets\n".to_owned())),
            Outcome::Stale
        );
        assert_eq!(reader.view().screens().len(), shown);

        assert_eq!(
            reader.complete(second.ticket, Ok("# Sylow\n".to_owned())),
            Outcome::Article
        );
        assert_eq!(reader.view().last_screen().title, "Sylow");
        assert_eq!(
            history_urls(&reader),
            vec![ROOT, "http://example.com/Group-Theory/Sylow"]
        );
    }

    #[test]
    fn test_stale_after_leaving_for_index() {
        let mut reader = reader(source());
        let Step::Fetch(request) = reader.begin("http://example.com/Group-Theory/Cosets") else {
            panic!("expected fetch");
        };
        assert_eq!(reader.begin(ROOT), Step::Done(Outcome::Index));
        assert_eq!(
            reader.complete(request.ticket, Ok(String::new())),
            Outcome::Stale
        );
        assert!(matches!(
            reader.view().last_screen().body,
            ScreenBody::Index(_)
        ));
    }

    #[test]
    fn test_completed_ticket_cannot_complete_twice() {
        let mut reader = reader(source());
        let Step::Fetch(request) = reader.begin("http://example.com/Group-Theory/Cosets") else {
            panic!("expected fetch");
        };
        assert_eq!(
            reader.complete(request.ticket, Ok(String::new())),
            Outcome::Article
        );
        assert_eq!(
            reader.complete(request.ticket, Ok(String::new())),
            Outcome::Stale
        );
    }

    #[test]
    fn test_math_loaded_once_then_typeset() {
        let mut reader = reader(source());
        reader.navigate("http://example.com/Group-Theory/Cosets");
        reader.navigate("http://example.com/Writing/Style");
        reader.navigate("http://example.com/Group-Theory/Sylow");

        assert_eq!(reader.view().count(&Call::LoadMath), 1);
        assert_eq!(reader.view().count(&Call::Typeset), 1);
    }

    #[test]
    fn test_non_math_article_does_not_load_math() {
        let mut reader = reader(source());
        reader.navigate("http://example.com/Writing/Style");
        assert_eq!(reader.view().count(&Call::LoadMath), 0);
        assert_eq!(reader.view().count(&Call::Typeset), 0);
    }

    #[test]
    fn test_history_push_only_on_page_change() {
        let mut reader = reader(source());
        reader.navigate("http://example.com/Group-Theory");
        reader.navigate("http://example.com/Group-Theory/Cosets");
        reader.navigate("http://example.com/Group-Theory/Cosets#Index");
        reader.navigate(ROOT);
        assert_eq!(
            history_urls(&reader),
            vec![
                ROOT,
                "http://example.com/Group-Theory",
                "http://example.com/Group-Theory/Cosets",
                ROOT,
            ]
        );
    }

    #[test]
    fn test_back_and_forward() {
        let source = source();
        let mut reader = reader(Arc::clone(&source));
        reader.navigate("http://example.com/Group-Theory/Cosets");
        reader.navigate("http://example.com/Writing/Style");

        assert_eq!(reader.back(), Some(Outcome::Article));
        assert_eq!(reader.view().last_screen().title, "Cosets");
        assert_eq!(reader.back(), Some(Outcome::Index));
        assert_eq!(reader.back(), None);
        assert_eq!(reader.forward(), Some(Outcome::Article));
        // Walking history never adds entries.
        assert_eq!(reader.history().len(), 3);
        assert_eq!(source.fetch_count(COSETS), 3);
    }

    #[test]
    fn test_follow_link_in_place() {
        let mut reader = reader(source());
        assert_eq!(reader.follow_link("/Writing/Style"), Outcome::Article);
        assert_eq!(reader.view().last_screen().title, "Style");
    }

    #[test]
    fn test_follow_link_reload_mode() {
        let mut config = config();
        config.reload = true;
        let source = source();
        let mut reader = reader_with(Arc::clone(&source), config);
        assert_eq!(
            reader.follow_link("Writing/Style#Top"),
            Outcome::Reload("http://example.com/Writing/Style#Top".to_owned())
        );
        assert!(source.fetches().is_empty());
        assert!(reader.view().screens().is_empty());
    }

    #[test]
    fn test_mode_seeded_and_toggled() {
        let prefs = Arc::new(MemoryPreferences::new());
        let mut reader = Reader::new(
            Site::new(config()),
            source(),
            Arc::clone(&prefs) as Arc<dyn PreferenceStore>,
            RecordingView::default(),
            MemoryHistory::new(),
        );
        assert_eq!(reader.mode(), DisplayMode::Dark);
        assert_eq!(prefs.get(DISPLAY_MODE_KEY).as_deref(), Some("dark"));
        assert_eq!(reader.view().calls, vec![Call::Mode(DisplayMode::Dark)]);

        reader.toggle_mode();
        assert_eq!(reader.mode(), DisplayMode::Light);
        assert_eq!(prefs.get(DISPLAY_MODE_KEY).as_deref(), Some("light"));
        assert_eq!(
            reader.view().calls.last(),
            Some(&Call::Mode(DisplayMode::Light))
        );
    }

    #[test]
    fn test_persisted_mode_applied_on_start() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set(DISPLAY_MODE_KEY, "light");
        let reader = Reader::new(
            Site::new(config()),
            source(),
            prefs,
            RecordingView::default(),
            MemoryHistory::new(),
        );
        assert_eq!(reader.mode(), DisplayMode::Light);
    }

    #[test]
    fn test_empty_history_gets_first_entry() {
        let mut reader = Reader::new(
            Site::new(config()),
            source(),
            Arc::new(MemoryPreferences::new()),
            RecordingView::default(),
            MemoryHistory::new(),
        );
        reader.navigate(ROOT);
        assert_eq!(reader.history().len(), 1);
        assert_eq!(reader.history().current_url(), Some(ROOT));
    }
}
