//! Reader views.
//!
//! The navigator never touches markup directly. It hands complete [`Screen`]s
//! to a [`View`], so a view always shows a title together with the body that
//! belongs to it. [`HtmlView`] turns the latest screen into a standalone HTML
//! document whose element ids (`menu`, `reader`, `title`, `article`, `toc`,
//! `light`, `dark`, `site_title`) match the reader's stylesheet and scripts.

use std::fmt::Write;

use walrus_config::{Config, Direction, DisplayMode, Protocol};
use walrus_renderer::escape_html;
use walrus_site::{MenuItem, SubjectListing, build_menu};

/// Math typesetter loaded on the first math article.
pub const MATHJAX_URL: &str = "https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-svg.js";

/// Title shown on the not-found screen.
pub const NOT_FOUND_TITLE: &str = "404 Not Found";

/// Everything the reader pane shows for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    /// Page title; empty on the index page.
    pub title: String,
    /// Direction of the page.
    pub direction: Direction,
    pub body: ScreenBody,
}

/// Reader pane content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenBody {
    /// Every subject with its articles.
    Index(Vec<SubjectListing>),
    /// One subject's articles.
    Subject(SubjectListing),
    /// Article text is being fetched.
    Loading,
    /// A rendered article.
    Article {
        /// Markup for the `toc` element.
        toc: String,
        /// Article body with anchored headings.
        html: String,
    },
    /// No subject or article matches the URL.
    NotFound,
    /// The article exists but its text could not be fetched.
    LoadFailed {
        /// Human-readable failure description.
        message: String,
    },
}

impl Screen {
    /// The not-found screen, in the site direction.
    #[must_use]
    pub fn not_found(direction: Direction) -> Self {
        Self {
            title: NOT_FOUND_TITLE.to_owned(),
            direction,
            body: ScreenBody::NotFound,
        }
    }
}

/// Document title: `"<title> :: <site title>"`, or the site title alone.
#[must_use]
pub fn document_title(title: &str, site_title: &str) -> String {
    if title.is_empty() {
        site_title.to_owned()
    } else {
        format!("{title} :: {site_title}")
    }
}

/// Display surface driven by the reader.
pub trait View {
    /// Replace the reader pane and document title.
    fn show(&mut self, screen: Screen);

    /// Scroll to the heading anchor `anchor`.
    fn scroll_to(&mut self, anchor: &str);

    /// Switch the colour scheme.
    fn apply_mode(&mut self, mode: DisplayMode);

    /// Load the math typesetter with its configuration object.
    fn load_math(&mut self, config: &serde_json::Value);

    /// Ask the already loaded typesetter to process the current page.
    fn typeset_math(&mut self);
}

/// View rendering a complete HTML document.
#[derive(Debug)]
pub struct HtmlView {
    site_title: String,
    site_direction: Direction,
    protocol: Protocol,
    base_url: String,
    menu: Vec<MenuItem>,
    screen: Option<Screen>,
    mode: DisplayMode,
    math_config: Option<serde_json::Value>,
    typeset_requests: usize,
    scroll_target: Option<String>,
}

impl HtmlView {
    /// Create a view for a site.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            site_title: config.title.clone(),
            site_direction: config.direction,
            protocol: config.protocol,
            base_url: config.base_url.clone(),
            menu: build_menu(&config.subjects),
            screen: None,
            mode: config.default_mode,
            math_config: None,
            typeset_requests: 0,
            scroll_target: None,
        }
    }

    /// Latest screen shown.
    #[must_use]
    pub fn screen(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    /// Current colour scheme.
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Whether the math typesetter has been loaded.
    #[must_use]
    pub fn math_loaded(&self) -> bool {
        self.math_config.is_some()
    }

    /// Number of re-typeset requests since the typesetter was loaded.
    #[must_use]
    pub fn typeset_requests(&self) -> usize {
        self.typeset_requests
    }

    /// Anchor of the last scroll request on the current screen.
    #[must_use]
    pub fn scroll_target(&self) -> Option<&str> {
        self.scroll_target.as_deref()
    }

    /// Title of the document in its current state.
    #[must_use]
    pub fn title(&self) -> String {
        let title = self.screen.as_ref().map_or("", |s| s.title.as_str());
        document_title(title, &self.site_title)
    }

    /// Render the current state as an HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(8192);
        let direction = self
            .screen
            .as_ref()
            .map_or(self.site_direction, |s| s.direction);

        html.push_str("<!DOCTYPE html>\n");
        let _ = writeln!(html, "<html lang=\"en\" class=\"{}\">", self.mode);
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.title()));
        if let Some(config) = &self.math_config {
            let _ = writeln!(html, "<script>window.MathJax = {config};</script>");
            let _ = writeln!(
                html,
                "<script id=\"MathJax-script\" async src=\"{MATHJAX_URL}\"></script>"
            );
        }
        html.push_str("</head>\n<body>\n");
        let _ = writeln!(html, "<span id=\"Walrus\" class=\"{direction}\">");

        self.render_menu(&mut html);
        self.render_reader(&mut html);

        html.push_str("</span>\n");
        if let Some(anchor) = &self.scroll_target {
            let literal = script_string(anchor);
            let _ = writeln!(
                html,
                "<script>document.getElementsByName({literal})[0]?.scrollIntoView();</script>"
            );
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    fn url(&self, path: &str) -> String {
        format!("{}://{}/{}", self.protocol, self.base_url, path)
    }

    fn render_menu(&self, html: &mut String) {
        html.push_str("<div id=\"menu\">\n");
        let _ = writeln!(
            html,
            "<a id=\"site_title\" href=\"{}\">{}</a>",
            escape_html(&self.url("")),
            escape_html(&self.site_title)
        );
        html.push_str("<ul>\n");
        for item in &self.menu {
            let _ = writeln!(
                html,
                "<li><a href=\"{}\">{}</a></li>",
                escape_html(&self.url(&item.path)),
                escape_html(&item.title)
            );
        }
        html.push_str("</ul>\n");
        for mode in [DisplayMode::Light, DisplayMode::Dark] {
            let active = if mode == self.mode { " active" } else { "" };
            let _ = writeln!(html, "<span id=\"{mode}\" class=\"mode{active}\">{mode}</span>");
        }
        html.push_str("</div>\n");
    }

    fn render_reader(&self, html: &mut String) {
        html.push_str("<div id=\"reader\">\n");
        let Some(screen) = &self.screen else {
            html.push_str("<h1 id=\"title\"></h1>\n<div id=\"toc\"></div>\n<div id=\"article\"></div>\n</div>\n");
            return;
        };

        let _ = writeln!(html, "<h1 id=\"title\">{}</h1>", escape_html(&screen.title));
        match &screen.body {
            ScreenBody::Article { toc, html: body } => {
                html.push_str(toc);
                html.push('\n');
                let _ = writeln!(html, "<div id=\"article\">{body}</div>");
            }
            ScreenBody::Index(listings) => {
                html.push_str("<div id=\"toc\"></div>\n<div id=\"article\" class=\"index\">\n");
                for listing in listings {
                    self.render_listing(html, listing, true);
                }
                html.push_str("</div>\n");
            }
            ScreenBody::Subject(listing) => {
                html.push_str("<div id=\"toc\"></div>\n<div id=\"article\" class=\"subject\">\n");
                self.render_listing(html, listing, false);
                html.push_str("</div>\n");
            }
            ScreenBody::Loading => {
                html.push_str("<div id=\"toc\"></div>\n<div id=\"article\" class=\"loading\"></div>\n");
            }
            ScreenBody::NotFound => {
                html.push_str("<div id=\"toc\"></div>\n<div id=\"article\" class=\"not_found\"></div>\n");
            }
            ScreenBody::LoadFailed { message } => {
                html.push_str("<div id=\"toc\"></div>\n<div id=\"article\" class=\"load_failed\">");
                let _ = write!(html, "<p>{}</p>", escape_html(message));
                html.push_str("</div>\n");
            }
        }
        html.push_str("</div>\n");
    }

    fn render_listing(&self, html: &mut String, listing: &SubjectListing, with_heading: bool) {
        let _ = writeln!(html, "<div class=\"listing {}\">", listing.direction);
        if with_heading {
            let _ = writeln!(
                html,
                "<h2><a href=\"{}\">{}</a></h2>",
                escape_html(&self.url(&listing.path)),
                escape_html(&listing.title)
            );
        }
        html.push_str("<ol>\n");
        for item in &listing.items {
            let _ = writeln!(
                html,
                "<li><span class=\"num\">{}</span><a href=\"{}\">{}</a></li>",
                item.number,
                escape_html(&self.url(&item.path)),
                escape_html(&item.title)
            );
        }
        html.push_str("</ol>\n</div>\n");
    }
}

/// Quote `value` as a JS string literal that is safe inside an inline `<script>`.
fn script_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

impl View for HtmlView {
    fn show(&mut self, screen: Screen) {
        self.scroll_target = None;
        self.screen = Some(screen);
    }

    fn scroll_to(&mut self, anchor: &str) {
        self.scroll_target = Some(anchor.to_owned());
    }

    fn apply_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    fn load_math(&mut self, config: &serde_json::Value) {
        self.math_config = Some(config.clone());
    }

    fn typeset_math(&mut self) {
        self.typeset_requests += 1;
    }
}
