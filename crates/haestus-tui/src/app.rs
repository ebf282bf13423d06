//! Application state for the haestus TUI.

use std::time::Instant;

use chrono::Local;
use haestus_engine::gradient::CHANNELS;
use haestus_engine::{
    share_or_copy, ArticleReader, Carousel, CarouselError, Channel, Clipboard, ComparisonSlider,
    Customizer, CustomizerTab, DemoTable, Direction, EditableTimeline, Rgb, ShareOutcome,
    ShareRequest, SiteCatalog, SiteConfig, SlidingWindow, ViewMode, ViewportClass, WindowSizes,
};
use ratatui::layout::Rect;
use tracing::debug;

use crate::event::Action;
use crate::screens::{blog, compare, projects};
use crate::text::render_article;
use crate::theme::Theme;
use crate::ui::main_layout;

/// Cards stacked in a carousel.
pub const CARD_STACK: usize = 3;

/// Ticks a notification stays visible.
const NOTIFICATION_TICKS: usize = 30;

/// Percentage points the comparison divider moves per key press.
const SLIDER_STEP: f32 = 5.0;

/// Reader lines scrolled per wheel notch.
const WHEEL_LINES: isize = 3;

/// Sections of the showcase, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Projects,
    Process,
    Timeline,
    Compare,
    Customize,
    Blog,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Projects,
        Self::Process,
        Self::Timeline,
        Self::Compare,
        Self::Customize,
        Self::Blog,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Projects => "Work",
            Self::Process => "Process",
            Self::Timeline => "Timeline",
            Self::Compare => "Compare",
            Self::Customize => "Customize",
            Self::Blog => "Blog",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn offset(self, forward: bool) -> Self {
        let len = Self::ALL.len();
        let step = if forward { 1 } else { len - 1 };
        Self::ALL[(self.index() + step) % len]
    }
}

/// What the customizer's text input writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    Channel(Channel),
    Heading,
    Subheading,
}

/// A single-line text input in the customizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    pub target: InputTarget,
    pub buffer: String,
}

/// Application state.
pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub section: Section,

    pub catalog: SiteCatalog,
    pub config: SiteConfig,
    pub theme: Theme,

    /// Terminal area as last reported.
    pub area: Rect,
    pub class: ViewportClass,

    pub projects: Carousel,
    /// Scroll offset of the project detail modal.
    pub detail_scroll: usize,
    pub posts: Carousel,
    pub process: SlidingWindow,

    pub timeline: EditableTimeline,
    /// Highlighted step, as an offset into the visible window.
    pub timeline_cursor: usize,
    pub table: DemoTable,
    /// Focused table column, as an index into the shown columns.
    pub table_focus: usize,

    pub slider: ComparisonSlider,
    pub customizer: Customizer,
    pub input: Option<TextInput>,

    /// Open article, present while a post is selected.
    pub reader: Option<ArticleReader>,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<String>,
    notification_ttl: usize,

    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Build the showcase over a catalog. Fails only for a catalog the
    /// carousels cannot rotate over.
    pub fn new(
        config: SiteConfig,
        catalog: SiteCatalog,
        clipboard: Box<dyn Clipboard>,
    ) -> Result<Self, CarouselError> {
        let class = ViewportClass::default();
        let timing = config.timing.carousel();

        Ok(Self {
            should_quit: false,
            show_help: false,
            section: Section::default(),
            projects: Carousel::new(catalog.projects.len(), CARD_STACK, timing)?,
            detail_scroll: 0,
            posts: Carousel::new(catalog.posts.len(), CARD_STACK, timing)?,
            process: SlidingWindow::with_sizes(
                catalog.process_steps.len(),
                class,
                WindowSizes::PROCESS,
            ),
            timeline: EditableTimeline::new(catalog.timeline.clone(), class),
            timeline_cursor: 0,
            table: DemoTable::new(catalog.table_rows.clone(), class),
            table_focus: 0,
            slider: ComparisonSlider::default(),
            customizer: Customizer::new(&catalog.presets, &catalog.fonts),
            input: None,
            reader: None,
            notification: None,
            notification_ttl: 0,
            area: Rect::default(),
            class,
            theme: Theme::default(),
            catalog,
            config,
            clipboard,
        })
    }

    /// App over the bundled catalog, sized to the test terminal.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        use crate::test_utils::{MemoryClipboard, TEST_HEIGHT, TEST_WIDTH};

        let catalog = SiteCatalog::builtin().expect("bundled catalog");
        let mut app = Self::new(
            SiteConfig::default(),
            catalog,
            Box::new(MemoryClipboard::default()),
        )
        .expect("bundled catalog has projects and posts");
        app.resize(TEST_WIDTH, TEST_HEIGHT);
        app
    }

    /// Set a notification message to display temporarily.
    pub fn set_notification(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Expire carousel cooldowns and notifications.
    pub fn tick(&mut self, now: Instant) {
        self.projects.tick(now);
        self.posts.tick(now);

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Track the terminal size. Crossing a breakpoint resets the pagers
    /// and the table's column order.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);

        let class = self.config.breakpoints.classify(width);
        if class != self.class {
            debug!(?class, width, "viewport class changed");
            self.class = class;
            self.process.set_class(class);
            self.timeline.set_viewport(class);
            self.table.set_class(class);
            self.timeline_cursor = 0;
            self.table_focus = 0;
        }

        self.layout_reader();
    }

    fn layout_reader(&mut self) {
        let Some(post) = self.posts.selected().and_then(|i| self.catalog.posts.get(i)) else {
            return;
        };
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        let body = blog::reader_body(self.area);
        let article = render_article(&post.content, usize::from(body.width), &self.theme);
        reader.set_layout(article.lines.len(), &article.anchors);
        reader.set_viewport(usize::from(body.height));
    }

    /// Handle an action at the current time.
    pub fn handle_action(&mut self, action: Action) {
        self.handle_action_at(action, Instant::now());
    }

    /// Handle an action as if it happened at `now`.
    pub fn handle_action_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.reader.is_some() {
            self.handle_reader_action(action);
            return;
        }

        match action {
            Action::NextTab => self.section = self.section.offset(true),
            Action::PrevTab => self.section = self.section.offset(false),
            Action::Tab(i) => {
                if let Some(section) = Section::ALL.get(i) {
                    self.section = *section;
                }
            }
            _ => match self.section {
                Section::Projects => self.handle_projects_action(action, now),
                Section::Process => self.handle_process_action(action),
                Section::Timeline => self.handle_timeline_action(action),
                Section::Compare => self.handle_compare_action(action),
                Section::Customize => self.handle_customize_action(action),
                Section::Blog => self.handle_blog_action(action, now),
            },
        }
    }

    fn handle_projects_action(&mut self, action: Action, now: Instant) {
        if let Some(index) = self.projects.selected() {
            let (_, content, _) = main_layout(self.area);
            let max = self
                .catalog
                .projects
                .get(index)
                .map_or(0, |project| projects::detail_max_scroll(project, content));
            let page = usize::from(projects::detail_body(content).height.max(1));
            match action {
                Action::Back | Action::Select => {
                    self.projects.close();
                    self.detail_scroll = 0;
                }
                Action::Up => self.detail_scroll = self.detail_scroll.saturating_sub(1),
                Action::Down => self.detail_scroll = (self.detail_scroll + 1).min(max),
                Action::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(page),
                Action::PageDown => self.detail_scroll = (self.detail_scroll + page).min(max),
                Action::Top => self.detail_scroll = 0,
                _ => {}
            }
            return;
        }
        if let Some(index) = browse(&mut self.projects, action, now) {
            self.projects.open(index);
            self.detail_scroll = 0;
        }
    }

    fn handle_blog_action(&mut self, action: Action, now: Instant) {
        if let Some(index) = browse(&mut self.posts, action, now) {
            self.open_post(index);
        }
    }

    /// Open the reader on a post.
    pub fn open_post(&mut self, index: usize) {
        self.posts.open(index);
        self.reader = self
            .posts
            .selected()
            .and_then(|i| self.catalog.posts.get(i))
            .map(|post| ArticleReader::new(&post.content));
        self.layout_reader();
    }

    pub fn close_post(&mut self) {
        self.posts.close();
        self.reader = None;
    }

    fn handle_reader_action(&mut self, action: Action) {
        let page = isize::try_from(blog::reader_body(self.area).height.max(1)).unwrap_or(1);
        let Some(reader) = self.reader.as_mut() else {
            return;
        };
        match action {
            Action::Back => self.close_post(),
            Action::Up => reader.scroll_by(-1),
            Action::Down => reader.scroll_by(1),
            Action::PageUp => reader.scroll_by(-page),
            Action::PageDown | Action::Select => reader.scroll_by(page),
            Action::Top => reader.scroll_to_top(),
            Action::Tab(i) => {
                let title = reader.toc().get(i).map(|(_, h)| h.title.clone());
                if let Some(title) = title {
                    reader.scroll_to_heading(&title);
                }
            }
            Action::Share => self.share_open_post(),
            _ => {}
        }
    }

    /// Share the open article, copying its link when there is no native
    /// share facility.
    pub fn share_open_post(&mut self) {
        let Some(post) = self.posts.selected().and_then(|i| self.catalog.posts.get(i)) else {
            return;
        };
        let request = ShareRequest::for_post(&self.config.base_url, post);
        let outcome = share_or_copy(None, self.clipboard.as_mut(), &request);
        match outcome.message() {
            Some(message) => self.set_notification(message),
            None if outcome == ShareOutcome::Failed => {
                self.set_notification("Could not copy link");
            }
            None => {}
        }
    }

    fn handle_process_action(&mut self, action: Action) {
        match action {
            Action::Left => {
                self.process.navigate(Direction::Prev);
            }
            Action::Right => {
                self.process.navigate(Direction::Next);
            }
            _ => {}
        }
    }

    /// Id of the highlighted timeline step.
    pub fn focused_step(&self) -> Option<u64> {
        self.timeline
            .visible()
            .get(self.timeline_cursor)
            .map(|item| item.id)
    }

    /// Whether the expanded step embeds the demo table.
    pub fn table_visible(&self) -> bool {
        self.timeline
            .active()
            .and_then(|id| self.timeline.get(id))
            .is_some_and(|item| item.has_table)
    }

    fn handle_timeline_action(&mut self, action: Action) {
        match action {
            Action::Left | Action::Right => {
                let direction = if action == Action::Left {
                    Direction::Prev
                } else {
                    Direction::Next
                };
                if self.timeline.navigate(direction) {
                    self.timeline_cursor = 0;
                }
            }
            Action::Up => self.timeline_cursor = self.timeline_cursor.saturating_sub(1),
            Action::Down => {
                let last = self.timeline.visible().len().saturating_sub(1);
                self.timeline_cursor = (self.timeline_cursor + 1).min(last);
            }
            Action::Select => {
                if let Some(id) = self.focused_step() {
                    self.timeline.toggle_step(id);
                }
            }
            Action::Edit(field) => {
                if let Some(id) = self.focused_step() {
                    if let Err(e) = self.timeline.start_edit(id, field) {
                        self.set_notification(e.to_string());
                    }
                }
            }
            Action::AddStep => {
                let id = self.timeline.add_step(Local::now().date_naive());
                self.timeline_cursor = self
                    .timeline
                    .visible()
                    .iter()
                    .position(|item| item.id == id)
                    .unwrap_or(0);
            }
            Action::FocusColumn(_) | Action::MoveColumn(_) | Action::Sort => {
                if self.table_visible() {
                    self.handle_table_action(action);
                }
            }
            _ => {}
        }
    }

    fn handle_table_action(&mut self, action: Action) {
        let columns = self.table.columns().to_vec();
        let Some(&focused) = columns.get(self.table_focus) else {
            return;
        };
        let neighbour = |direction: Direction| match direction {
            Direction::Prev => self.table_focus.checked_sub(1),
            Direction::Next => Some(self.table_focus + 1).filter(|i| *i < columns.len()),
        };
        match action {
            Action::FocusColumn(direction) => {
                if let Some(i) = neighbour(direction) {
                    self.table_focus = i;
                }
            }
            Action::MoveColumn(direction) => {
                if let Some(i) = neighbour(direction) {
                    self.table.move_column(focused, columns[i]);
                    self.table_focus = i;
                }
            }
            Action::Sort => self.table.toggle_sort(focused),
            _ => {}
        }
    }

    fn handle_compare_action(&mut self, action: Action) {
        if !self.slider.is_open() {
            if action == Action::Select {
                self.slider.open();
            }
            return;
        }
        match action {
            Action::Back => self.slider.close(),
            Action::Toggle | Action::Select => self.slider.toggle_lock(),
            Action::Left => self.slider.nudge(-SLIDER_STEP),
            Action::Right => self.slider.nudge(SLIDER_STEP),
            _ => {}
        }
    }

    /// Rows in the active customizer tab.
    pub fn customizer_rows(&self) -> usize {
        match self.customizer.tab() {
            CustomizerTab::Presets => self.catalog.presets.len(),
            CustomizerTab::Custom => CHANNELS.len(),
            CustomizerTab::Fonts => self.catalog.fonts.len(),
            CustomizerTab::Text => 2,
        }
    }

    fn handle_customize_action(&mut self, action: Action) {
        if action == Action::Toggle {
            self.customizer.toggle_open();
            return;
        }
        if !self.customizer.is_open() {
            return;
        }
        let rows = self.customizer_rows();
        match action {
            Action::Back => self.customizer.toggle_open(),
            Action::Left => {
                let tabs = CustomizerTab::ALL;
                let i = tabs.iter().position(|t| *t == self.customizer.tab()).unwrap_or(0);
                self.customizer.set_tab(tabs[(i + tabs.len() - 1) % tabs.len()]);
            }
            Action::Right => self.customizer.set_tab(self.customizer.tab().next()),
            Action::Up => self.customizer.move_cursor(-1, rows),
            Action::Down => self.customizer.move_cursor(1, rows),
            Action::Select | Action::EnterValue => self.customizer_select(),
            _ => {}
        }
    }

    fn customizer_select(&mut self) {
        let cursor = self.customizer.cursor();
        match self.customizer.tab() {
            CustomizerTab::Presets => {
                if let Some(template) = self.catalog.presets.get(cursor) {
                    self.customizer.apply_preset(template);
                }
            }
            CustomizerTab::Fonts => {
                if let Some(font) = self.catalog.fonts.get(cursor) {
                    self.customizer.apply_font(font);
                }
            }
            CustomizerTab::Custom => {
                if let Some(&channel) = CHANNELS.get(cursor) {
                    let buffer = self
                        .customizer
                        .colors()
                        .get(channel)
                        .map(|hsl| hsl.to_hex())
                        .unwrap_or_default();
                    self.input = Some(TextInput {
                        target: InputTarget::Channel(channel),
                        buffer,
                    });
                }
            }
            CustomizerTab::Text => {
                let text = self.customizer.text();
                self.input = Some(if cursor == 0 {
                    TextInput {
                        target: InputTarget::Heading,
                        buffer: text.heading.replace('\n', " "),
                    }
                } else {
                    TextInput {
                        target: InputTarget::Subheading,
                        buffer: text.subheading.clone(),
                    }
                });
            }
        }
    }

    /// Whether keys should go to a text field in the current section.
    pub fn is_typing(&self) -> bool {
        match self.section {
            Section::Timeline => self.reader.is_none() && self.timeline.session().is_editing(),
            Section::Customize => self.input.is_some(),
            _ => false,
        }
    }

    pub fn type_char(&mut self, c: char) {
        match self.section {
            Section::Timeline => self.timeline.session_mut().insert(c),
            Section::Customize => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn type_backspace(&mut self) {
        match self.section {
            Section::Timeline => self.timeline.session_mut().backspace(),
            Section::Customize => {
                if let Some(input) = self.input.as_mut() {
                    input.buffer.pop();
                }
            }
            _ => {}
        }
    }

    /// Write the text being typed to its target.
    pub fn commit_input(&mut self) {
        match self.section {
            Section::Timeline => {
                self.timeline.save_edit();
            }
            Section::Customize => {
                let Some(input) = self.input.take() else {
                    return;
                };
                match input.target {
                    InputTarget::Channel(channel) => {
                        if Rgb::from_hex(&input.buffer).is_err() {
                            self.set_notification(format!("Not a hex color: {}", input.buffer));
                        }
                        self.customizer.set_channel_hex(channel, &input.buffer);
                    }
                    InputTarget::Heading => self.customizer.set_heading(input.buffer),
                    InputTarget::Subheading => self.customizer.set_subheading(input.buffer),
                }
            }
            _ => {}
        }
    }

    /// Drop the text being typed.
    pub fn cancel_input(&mut self) {
        match self.section {
            Section::Timeline => self.timeline.cancel_edit(),
            Section::Customize => self.input = None,
            _ => {}
        }
    }

    /// Mouse wheel: positive scrolls down / forward.
    pub fn wheel(&mut self, delta: i32, now: Instant) {
        if self.show_help || delta == 0 {
            return;
        }
        let step: isize = if delta > 0 { 1 } else { -1 };
        let direction = if delta > 0 {
            Direction::Next
        } else {
            Direction::Prev
        };

        if let Some(reader) = self.reader.as_mut() {
            reader.scroll_by(step * WHEEL_LINES);
            return;
        }
        match self.section {
            Section::Projects if self.projects.selected().is_some() => {
                let scroll = if delta > 0 { Action::Down } else { Action::Up };
                self.handle_projects_action(scroll, now);
            }
            Section::Projects => wheel_carousel(&mut self.projects, delta, now),
            Section::Blog => wheel_carousel(&mut self.posts, delta, now),
            Section::Process => {
                self.process.navigate(direction);
            }
            Section::Timeline => {
                if self.timeline.navigate(direction) {
                    self.timeline_cursor = 0;
                }
            }
            _ => {}
        }
    }

    /// Pointer moved to terminal column `column`.
    pub fn pointer_moved(&mut self, column: u16) {
        if let Some((x, width)) = self.slider_pointer(column) {
            self.slider.hover(x, width);
        }
    }

    pub fn pointer_down(&mut self, column: u16) {
        if self.slider_pointer(column).is_some() {
            self.slider.press();
        }
    }

    /// Pointer released; a release over the view also counts as a click.
    pub fn pointer_up(&mut self, column: u16) {
        if !self.slider.is_open() {
            return;
        }
        self.slider.release();
        if self.slider_pointer(column).is_some() {
            self.slider.click();
        }
    }

    /// Pointer position relative to the comparison view, if over it.
    fn slider_pointer(&self, column: u16) -> Option<(f32, f32)> {
        if self.section != Section::Compare || !self.slider.is_open() || self.show_help {
            return None;
        }
        let (_, content, _) = main_layout(self.area);
        let view = compare::slider_view(content);
        if view.width == 0 || column < view.x || column >= view.x + view.width {
            return None;
        }
        Some((f32::from(column - view.x), f32::from(view.width)))
    }
}

/// Browse a carousel. Returns the catalog index to open, if any.
fn browse(carousel: &mut Carousel, action: Action, now: Instant) -> Option<usize> {
    match (carousel.mode(), action) {
        (_, Action::ToggleView) => carousel.toggle_mode(),
        (ViewMode::Stack, Action::Left | Action::Up) => {
            carousel.previous(now);
        }
        (ViewMode::Stack, Action::Right | Action::Down) => {
            carousel.next(now);
        }
        (ViewMode::Stack, Action::Select) => return Some(carousel.current()),
        (ViewMode::List, Action::Up | Action::Left) => carousel.move_list_cursor(-1),
        (ViewMode::List, Action::Down | Action::Right) => carousel.move_list_cursor(1),
        (ViewMode::List, Action::Select) => return Some(carousel.list_cursor()),
        _ => {}
    }
    None
}

fn wheel_carousel(carousel: &mut Carousel, delta: i32, now: Instant) {
    match carousel.mode() {
        ViewMode::Stack => {
            carousel.wheel(delta, now);
        }
        ViewMode::List => carousel.move_list_cursor(if delta > 0 { 1 } else { -1 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haestus_engine::{Column, Field};
    use std::time::Duration;

    fn app() -> App {
        App::new_for_test()
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.section, Section::Projects);
        assert_eq!(app.class, ViewportClass::Tablet);
        assert_eq!(app.timeline.window().len(), 2);
        assert_eq!(app.process.len(), 3);
        assert!(app.reader.is_none());
    }

    #[test]
    fn test_section_cycling() {
        let mut app = app();
        app.handle_action(Action::PrevTab);
        assert_eq!(app.section, Section::Blog);
        app.handle_action(Action::NextTab);
        assert_eq!(app.section, Section::Projects);
        app.handle_action(Action::Tab(3));
        assert_eq!(app.section, Section::Compare);
        app.handle_action(Action::Tab(9));
        assert_eq!(app.section, Section::Compare);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = app();
        app.handle_action(Action::Help);
        assert!(app.show_help);
        app.handle_action(Action::NextTab);
        assert!(!app.show_help);
        assert_eq!(app.section, Section::Projects);
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_carousel_respects_cooldown() {
        let mut app = app();
        let start = Instant::now();
        app.handle_action_at(Action::Right, start);
        app.handle_action_at(Action::Right, start + Duration::from_millis(100));
        assert_eq!(app.projects.current(), 1);

        let later = start + Duration::from_millis(500);
        app.tick(later);
        app.handle_action_at(Action::Right, later);
        assert_eq!(app.projects.current(), 2);
    }

    #[test]
    fn test_project_detail_opens_and_closes() {
        let mut app = app();
        app.handle_action(Action::ToggleView);
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        assert_eq!(app.projects.selected(), Some(1));
        app.handle_action(Action::Back);
        assert_eq!(app.projects.selected(), None);
    }

    #[test]
    fn test_reader_scroll_and_share() {
        let mut app = app();
        app.handle_action(Action::Tab(5));
        app.handle_action(Action::Select);
        assert!(app.reader.is_some());
        assert_eq!(app.posts.selected(), Some(0));

        app.handle_action(Action::Down);
        assert_eq!(app.reader.as_ref().map(ArticleReader::scroll), Some(1));
        app.handle_action(Action::Top);
        assert_eq!(app.reader.as_ref().map(ArticleReader::scroll), Some(0));

        let page = usize::from(blog::reader_body(app.area).height);
        app.handle_action(Action::PageDown);
        assert_eq!(app.reader.as_ref().map(ArticleReader::scroll), Some(page));
        app.handle_action(Action::PageUp);
        assert_eq!(app.reader.as_ref().map(ArticleReader::scroll), Some(0));

        app.handle_action(Action::Share);
        assert_eq!(app.notification.as_deref(), Some("Link copied to clipboard!"));

        // Section keys are for the reader while it is open
        app.handle_action(Action::NextTab);
        assert_eq!(app.section, Section::Blog);

        app.handle_action(Action::Back);
        assert!(app.reader.is_none());
        assert_eq!(app.posts.selected(), None);
    }

    #[test]
    fn test_reader_jumps_to_toc_entry() {
        let mut app = app();
        app.section = Section::Blog;
        app.open_post(1);
        let reader = app.reader.as_ref().expect("reader open");
        let toc_len = reader.toc().len();
        assert!(toc_len > 0);
        let target = reader.toc()[toc_len - 1].1.line;

        app.handle_action(Action::Tab(toc_len - 1));
        let reader = app.reader.as_ref().expect("reader open");
        assert!(reader.scroll() > 0);
        assert!(reader.scroll() <= target);
    }

    #[test]
    fn test_notification_expires() {
        let mut app = app();
        app.set_notification("hello");
        let now = Instant::now();
        for _ in 0..NOTIFICATION_TICKS - 1 {
            app.tick(now);
        }
        assert!(app.notification.is_some());
        app.tick(now);
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_timeline_edit_flow() {
        let mut app = app();
        app.section = Section::Timeline;
        app.handle_action(Action::Edit(Field::Title));
        assert!(app.is_typing());

        for _ in 0.."Project Kickoff".len() {
            app.type_backspace();
        }
        for c in "Launch".chars() {
            app.type_char(c);
        }
        app.commit_input();
        assert!(!app.is_typing());
        assert_eq!(app.timeline.get(1).map(|i| i.title.as_str()), Some("Launch"));
    }

    #[test]
    fn test_timeline_cancel_keeps_value() {
        let mut app = app();
        app.section = Section::Timeline;
        app.handle_action(Action::Edit(Field::Date));
        app.type_char('!');
        app.cancel_input();
        assert_eq!(
            app.timeline.get(1).map(|i| i.date.as_str()),
            Some("Mar 15, 2024")
        );
    }

    #[test]
    fn test_typing_is_scoped_to_section() {
        let mut app = app();
        app.section = Section::Timeline;
        app.handle_action(Action::Edit(Field::Title));
        app.section = Section::Process;
        assert!(!app.is_typing());
    }

    #[test]
    fn test_add_step_focuses_new_item() {
        let mut app = app();
        app.section = Section::Timeline;
        app.handle_action(Action::AddStep);
        let id = app.focused_step().expect("new step visible");
        assert_eq!(id, 5);
        assert_eq!(app.timeline.active(), Some(5));
        assert!(app.is_typing());
    }

    #[test]
    fn test_table_only_reacts_when_shown() {
        let mut app = app();
        app.section = Section::Timeline;
        app.handle_action(Action::Sort);
        assert!(app.table.sort().is_none());

        // Step 2 carries the table
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        assert!(app.table_visible());

        app.handle_action(Action::Sort);
        assert_eq!(app.table.sort().map(|s| s.column), Some(Column::Name));

        let before = app.table.columns().to_vec();
        app.handle_action(Action::MoveColumn(Direction::Next));
        assert_eq!(app.table.columns()[1], before[0]);
        assert_eq!(app.table_focus, 1);

        app.handle_action(Action::FocusColumn(Direction::Prev));
        assert_eq!(app.table_focus, 0);
        app.handle_action(Action::FocusColumn(Direction::Prev));
        assert_eq!(app.table_focus, 0);
    }

    #[test]
    fn test_resize_resets_pagers_on_class_change() {
        let mut app = app();
        app.section = Section::Timeline;
        app.handle_action(Action::Right);
        assert_eq!(app.timeline.window().start(), 1);

        app.resize(90, 30);
        assert_eq!(app.timeline.window().start(), 1);

        app.resize(120, 30);
        assert_eq!(app.class, ViewportClass::Desktop);
        assert_eq!(app.timeline.window().start(), 0);
        assert_eq!(app.timeline.window().len(), 4);
        assert_eq!(app.process.len(), 4);
    }

    #[test]
    fn test_compare_keys() {
        let mut app = app();
        app.section = Section::Compare;
        app.handle_action(Action::Right);
        assert!((app.slider.position() - 50.0).abs() < f32::EPSILON);

        app.handle_action(Action::Select);
        assert!(app.slider.is_open());
        app.handle_action(Action::Right);
        assert!((app.slider.position() - 55.0).abs() < f32::EPSILON);
        app.handle_action(Action::Toggle);
        assert!(app.slider.is_locked());
        app.handle_action(Action::Back);
        assert!(!app.slider.is_open());
    }

    #[test]
    fn test_pointer_drives_slider() {
        let mut app = app();
        app.section = Section::Compare;
        app.handle_action(Action::Select);
        let (_, content, _) = main_layout(app.area);
        let view = compare::slider_view(content);

        app.pointer_moved(view.x + view.width / 4);
        assert!((app.slider.position() - 25.0).abs() < 1.0);

        // Click locks; hovering no longer moves the divider
        app.pointer_down(view.x);
        app.pointer_up(view.x);
        assert!(app.slider.is_locked());
        app.pointer_moved(view.x + view.width / 2);
        assert!((app.slider.position() - 50.0).abs() > 5.0);

        // Drag while locked
        app.pointer_down(view.x);
        assert!(app.slider.is_dragging());
        app.pointer_moved(view.x + view.width / 2);
        assert!((app.slider.position() - 50.0).abs() < 1.0);
        app.pointer_up(view.x + view.width / 2);
        assert!(!app.slider.is_dragging());
    }

    #[test]
    fn test_customizer_preset_and_hex() {
        let mut app = app();
        app.section = Section::Customize;
        app.handle_action(Action::Down);
        assert_eq!(app.customizer.cursor(), 0);

        app.handle_action(Action::Toggle);
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        assert_eq!(app.customizer.active_preset(&app.catalog.presets), Some(1));

        app.handle_action(Action::Right);
        assert_eq!(app.customizer.tab(), CustomizerTab::Custom);
        app.handle_action(Action::EnterValue);
        assert!(app.is_typing());
        for _ in 0..7 {
            app.type_backspace();
        }
        for c in "#ff0000".chars() {
            app.type_char(c);
        }
        app.commit_input();
        assert_eq!(
            app.customizer.colors().color_back.to_string(),
            "hsl(0, 100%, 50%)"
        );
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_customizer_bad_hex_turns_black() {
        let mut app = app();
        app.section = Section::Customize;
        app.handle_action(Action::Toggle);
        app.handle_action(Action::Right);
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        if let Some(input) = app.input.as_mut() {
            input.buffer = "nope".into();
        }
        app.commit_input();
        assert_eq!(
            app.customizer.colors().colors[0].to_string(),
            "hsl(0, 0%, 0%)"
        );
        assert_eq!(app.notification.as_deref(), Some("Not a hex color: nope"));
    }

    #[test]
    fn test_customizer_text() {
        let mut app = app();
        app.section = Section::Customize;
        app.handle_action(Action::Toggle);
        app.handle_action(Action::Left);
        assert_eq!(app.customizer.tab(), CustomizerTab::Text);
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        app.input = Some(TextInput {
            target: InputTarget::Subheading,
            buffer: "Ship it".into(),
        });
        app.commit_input();
        assert_eq!(app.customizer.text().subheading, "Ship it");
    }

    #[test]
    fn test_wheel_routes_by_section() {
        let mut app = app();
        let now = Instant::now();
        app.wheel(1, now);
        assert_eq!(app.projects.current(), 1);

        app.section = Section::Process;
        app.wheel(1, now);
        assert_eq!(app.process.start(), 1);

        app.section = Section::Blog;
        app.open_post(0);
        app.wheel(1, now);
        assert_eq!(app.reader.as_ref().map(ArticleReader::scroll), Some(3));
    }

    #[test]
    fn test_wheel_scrolls_open_project_details() {
        let mut app = app();
        app.resize(80, 14);
        app.handle_action(Action::Select);
        let now = Instant::now();

        app.wheel(1, now);
        assert_eq!(app.detail_scroll, 1);
        assert_eq!(app.projects.current(), 0);
        app.wheel(-1, now);
        assert_eq!(app.detail_scroll, 0);
    }
}
