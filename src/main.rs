mod app;
mod config;
mod event;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing_subscriber::EnvFilter;

use ancients::alphabet::{Letter, Variant};
use ancients::session::quiz::Feedback;

use app::App;
use config::Config;
use event::{AppEvent, EventHandler};
use ui::components::answer_buttons::{AnswerButton, AnswerButtons};
use ui::components::glyph_prompt::GlyphPrompt;
use ui::components::group_tabs::GroupTabs;
use ui::components::legend::Legend;
use ui::glyphs::GlyphFace;
use ui::theme::Theme;

#[derive(Parser)]
#[command(name = "ancients", version, about = "Flashcard trainer for the Ancients alphabet")]
struct Cli {
    #[arg(short, long, help = "Quiz variant (simple, grouped)")]
    variant: Option<Variant>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Glyph face (runic, plain)")]
    face: Option<GlyphFace>,

    #[arg(long, help = "Success flash duration in milliseconds")]
    flash_ms: Option<u64>,

    #[arg(long, help = "Seed for reproducible groups and draws")]
    seed: Option<u64>,

    #[arg(short, long, help = "Start with the legend shown")]
    legend: bool,

    #[arg(long, help = "Write logs to this file (filter with RUST_LOG)")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "List bundled themes and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(ref path) = cli.log_file {
        init_logging(path)?;
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load config, using defaults");
        Config::default()
    });
    if let Some(variant) = cli.variant {
        config.variant = variant.as_str().to_string();
    }
    if let Some(flash_ms) = cli.flash_ms {
        config.flash_ms = flash_ms;
    }
    if let Some(ref theme) = cli.theme {
        config.theme = theme.clone();
    }
    if cli.legend {
        config.show_legend = true;
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "unknown theme, using default");
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));

    let mut app = App::new(config, theme, cli.seed)?;
    if let Some(face) = cli.face {
        app.face = face;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(50));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        tracing::error!(?err, "quiz loop failed");
    }

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
            }
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') => app.toggle_legend(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            if let Some(n) = ch.to_digit(10).filter(|&n| n > 0) {
                app.select_group(n as usize - 1);
            }
        }
        KeyCode::Char(ch) => {
            if let Ok(letter) = Letter::from_char(ch) {
                app.guess(letter);
            }
        }
        KeyCode::Tab => app.next_group(),
        KeyCode::BackTab => app.prev_group(),
        KeyCode::Left => app.focus_prev(),
        KeyCode::Right => app.focus_next(),
        KeyCode::Enter => app.guess_focused(),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click(area, mouse.column, mouse.row);
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let session = &app.session;
    let layout = app.layout(area);

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let tally = session.tally();
    let header_info = format!(
        " {}/{} correct, {} wrong | {:.0}% | streak {} (best {})",
        tally.correct,
        tally.attempts,
        tally.incorrect(),
        tally.accuracy(),
        tally.streak,
        tally.best_streak,
    );
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Ancients Alphabet Trainer ",
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                &*header_info,
                Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
            ),
        ]),
    ])
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    if let Some(tabs_area) = layout.tabs {
        let tabs = GroupTabs::new(app.group_labels(), session.active_group(), app.theme);
        frame.render_widget(tabs, tabs_area);
    }

    let prompt = GlyphPrompt::new(app.face.prompt_char(session), session.prompt_face(), app.theme);
    frame.render_widget(prompt, layout.prompt);

    let buttons = session
        .answer_order()
        .iter()
        .map(|&letter| AnswerButton {
            letter,
            highlight: session.highlight(letter),
        })
        .collect();
    frame.render_widget(
        AnswerButtons::new(buttons, app.focused, app.theme),
        layout.buttons,
    );

    let feedback_style = match session.feedback() {
        Feedback::Correct => Style::default().fg(colors.correct()).add_modifier(Modifier::BOLD),
        Feedback::TryAgain => Style::default().fg(colors.wrong()).add_modifier(Modifier::BOLD),
        Feedback::None => Style::default().fg(colors.fg()),
    };
    let feedback = Paragraph::new(Line::from(Span::styled(
        session.feedback().text(),
        feedback_style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(feedback, layout.feedback);

    if let Some(legend_area) = layout.legend {
        frame.render_widget(Legend::new(app.legend_entries(), app.theme), legend_area);
    }

    let mut hints = vec!["[a-z/click] Answer", "[←→ Enter] Pick"];
    if app.shows_group_tabs() {
        hints.push("[1-6/Tab] Group");
    }
    hints.push(if session.legend_visible() {
        "[Space] Hide legend"
    } else {
        "[Space] Show legend"
    });
    hints.push("[Esc] Quit");
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", hints.join("  ")),
        Style::default().fg(colors.text_dim()),
    )));
    frame.render_widget(footer, layout.footer);
}
