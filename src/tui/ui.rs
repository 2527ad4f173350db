//! UI rendering for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::appearance::{Background, Rgb};
use crate::clock::{format_clock_time, format_header_time, format_long_date};
use crate::controller::{Tab, QUICK_FOCUS_MINUTES};
use crate::timer::{render_progress_bar, SessionMode, SettingKey};
use crate::tui::app::App;

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 24;
const BIG_HEIGHT: usize = 5;
const MAX_BAR_WIDTH: usize = 40;

/// Colors for text drawn on the card or straight on the background.
#[derive(Debug, Clone, Copy)]
struct Palette {
    card: Color,
    text: Color,
    muted: Color,
    accent: Color,
    highlight: Color,
    start: Color,
    stop: Color,
}

impl Palette {
    const fn light() -> Self {
        Self {
            card: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x1F, 0x29, 0x37),
            muted: Color::Rgb(0x6B, 0x72, 0x80),
            accent: Color::Rgb(0x25, 0x63, 0xEB),
            highlight: Color::Rgb(0xDB, 0xEA, 0xFE),
            start: Color::Rgb(0x3B, 0x82, 0xF6),
            stop: Color::Rgb(0xEF, 0x44, 0x44),
        }
    }

    const fn dark() -> Self {
        Self {
            card: Color::Rgb(0x1F, 0x29, 0x37),
            text: Color::Rgb(0xF9, 0xFA, 0xFB),
            muted: Color::Rgb(0x9C, 0xA3, 0xAF),
            accent: Color::Rgb(0x60, 0xA5, 0xFA),
            highlight: Color::Rgb(0x1E, 0x3A, 0x8A),
            start: Color::Rgb(0x3B, 0x82, 0xF6),
            stop: Color::Rgb(0xEF, 0x44, 0x44),
        }
    }

    /// Card palette for windowed mode.
    const fn for_card(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Palette readable on top of `background`.
    fn over(background: &Background) -> Self {
        if background.color_at(0.5, 0.5).is_light() {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let appearance = app.controller.appearance();
    let background = appearance.background();
    paint_background(frame.buffer_mut(), area, background);

    let (palette, inner) = if appearance.fullscreen {
        (Palette::over(background), area)
    } else {
        let palette = Palette::for_card(appearance.dark_mode);
        let card = centered(area, CARD_WIDTH, CARD_HEIGHT);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.muted))
            .style(Style::default().bg(palette.card).fg(palette.text));
        let inner = block.inner(card);
        frame.render_widget(block, card);
        (palette, inner)
    };

    // Fullscreen while running shows only the counter
    if app.is_zen() {
        render_body(frame, app, &palette, inner, true);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(inner);

    render_header(frame, app, &palette, chunks[0]);
    render_tabs(frame, app, &palette, chunks[1]);
    render_body(frame, app, &palette, chunks[2], false);
    render_status_bar(frame, app, &palette, chunks[3]);

    if app.show_help {
        render_help(frame, &Palette::for_card(appearance.dark_mode), inner);
    }
}

/// Fill every cell of `area` with the background color at that cell.
fn paint_background(buf: &mut Buffer, area: Rect, background: &Background) {
    let span_x = f64::from(area.width.saturating_sub(1).max(1));
    let span_y = f64::from(area.height.saturating_sub(1).max(1));

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let color = background.color_at(
                f64::from(x - area.x) / span_x,
                f64::from(y - area.y) / span_y,
            );
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(to_color(color));
            }
        }
    }
}

/// Rect of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the header: title on the left, mode indicators and time on the right.
fn render_header(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let appearance = app.controller.appearance();
    let mut right = String::new();
    if appearance.dark_mode {
        right.push_str("dark · ");
    }
    if appearance.fullscreen {
        right.push_str("full · ");
    }
    right.push_str(&format_header_time(&app.now));
    right.push(' ');

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(u16::try_from(right.chars().count()).unwrap_or(u16::MAX)),
        ])
        .split(area);

    let title = Paragraph::new(" Focus Timer").style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, chunks[0]);

    let time = Paragraph::new(right)
        .alignment(Alignment::Right)
        .style(Style::default().fg(palette.muted));
    frame.render_widget(time, chunks[1]);
}

/// Render the tab bar.
fn render_tabs(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let tabs = Tabs::new(Tab::ALL.iter().map(Tab::title))
        .select(app.controller.tab().index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

fn render_body(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect, zen: bool) {
    match app.controller.tab() {
        Tab::Pomodoro => render_pomodoro(frame, app, palette, area, zen),
        Tab::Stopwatch => render_stopwatch(frame, app, palette, area, zen),
        Tab::Clock => render_clock(frame, app, palette, area),
    }
}

/// Render the Pomodoro tab.
fn render_pomodoro(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect, zen: bool) {
    let pomodoro = app.controller.pomodoro();

    let area = match (&app.settings, zen) {
        (Some(_), false) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(5)])
                .split(area);
            render_settings(frame, app, palette, chunks[1]);
            chunks[0]
        }
        _ => area,
    };

    let mut header = Vec::new();
    if !zen {
        let spans: Vec<Span<'_>> = SessionMode::ALL
            .iter()
            .enumerate()
            .map(|(i, mode)| {
                let label = format!(" {} {} ", i + 1, mode.display_name());
                if *mode == pomodoro.mode() {
                    Span::styled(
                        label,
                        Style::default()
                            .fg(palette.accent)
                            .bg(palette.highlight)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(label, Style::default().fg(palette.muted))
                }
            })
            .collect();
        header.push(Line::from(spans));
        header.push(Line::default());
    }

    let mut footer = vec![
        Line::default(),
        Line::from(Span::styled(
            format!(
                "Session {} • {}",
                pomodoro.session_number(),
                pomodoro.phase_label()
            ),
            Style::default().fg(palette.muted),
        )),
    ];
    if !zen {
        let bar_width = usize::from(area.width.saturating_sub(6)).min(MAX_BAR_WIDTH);
        footer.push(Line::from(Span::styled(
            render_progress_bar(pomodoro.progress(), bar_width),
            Style::default().fg(palette.accent),
        )));
        footer.push(controls_line(
            pomodoro.is_running(),
            "[r] Reset  [s] Settings",
            palette,
            palette.start,
        ));
    }

    let time_style = Style::default()
        .fg(if pomodoro.mode() == SessionMode::Work {
            palette.text
        } else {
            palette.accent
        })
        .add_modifier(Modifier::BOLD);
    let lines = compose(
        header,
        &pomodoro.format_remaining(),
        time_style,
        footer,
        area,
    );
    render_centered(frame, lines, area);
}

/// Render the stopwatch tab.
fn render_stopwatch(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect, zen: bool) {
    let stopwatch = app.controller.stopwatch();

    let mut footer = Vec::new();
    if !zen {
        footer.push(Line::default());
        footer.push(Line::from(Span::styled(
            if stopwatch.is_running() {
                "Running"
            } else {
                "Stopped"
            },
            Style::default().fg(palette.muted),
        )));
        footer.push(controls_line(
            stopwatch.is_running(),
            "[r] Stop & Reset",
            palette,
            Color::Rgb(0x22, 0xC5, 0x5E),
        ));
    }

    let lines = compose(
        Vec::new(),
        &stopwatch.format_elapsed(),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
        footer,
        area,
    );
    render_centered(frame, lines, area);
}

/// Render the clock tab with quick focus shortcuts.
fn render_clock(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let mut quick: Vec<Span<'_>> = Vec::new();
    for (i, minutes) in QUICK_FOCUS_MINUTES.iter().enumerate() {
        if i > 0 {
            quick.push(Span::raw("   "));
        }
        quick.push(Span::styled(
            format!("[{}]", i + 1),
            Style::default().fg(palette.muted),
        ));
        quick.push(Span::styled(
            format!(" {minutes}m"),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let footer = vec![
        Line::default(),
        Line::from(Span::styled(
            format_long_date(&app.now),
            Style::default().fg(palette.muted),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Quick Focus",
            Style::default().fg(palette.text),
        )),
        Line::from(quick),
    ];

    let lines = compose(
        Vec::new(),
        &format_clock_time(&app.now),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
        footer,
        area,
    );
    render_centered(frame, lines, area);
}

/// Render the segment length editor.
fn render_settings(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let Some(editor) = &app.settings else {
        return;
    };
    let settings = app.controller.pomodoro().settings();

    let lines: Vec<Line<'_>> = SettingKey::ALL
        .iter()
        .map(|key| {
            let selected = *key == editor.selected;
            let value = if selected {
                format!("{}_", editor.input)
            } else {
                String::new()
            };
            let style = if selected {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, style),
                Span::styled(format!("{:<12}", key.display_name()), style),
                Span::styled(
                    format!("{:>2} min  ", settings.get(*key)),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(value, style),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(" Timer Settings "),
    );
    frame.render_widget(panel, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Space:start | Tab:switch | ?:help | q:quit");

    let status = Paragraph::new(format!(" {status_text}")).style(Style::default().fg(palette.muted));

    frame.render_widget(status, area);
}

/// Render the key help popup.
fn render_help(frame: &mut Frame<'_>, palette: &Palette, area: Rect) {
    const KEYS: [(&str, &str); 13] = [
        ("Tab/S-Tab", "switch tab"),
        ("p w c", "pomodoro / stopwatch / clock"),
        ("Space", "start / pause"),
        ("r", "reset"),
        ("1 2 3", "pick mode, or quick focus on clock"),
        ("s", "timer settings"),
        ("d", "dark mode"),
        ("f", "fullscreen"),
        ("b / B", "next / previous background"),
        ("g", "custom: solid / gradient"),
        ("[ ] =", "custom: turn angle / snap angle"),
        ("a / x", "custom: add / remove color"),
        ("q / Esc", "quit"),
    ];

    let lines: Vec<Line<'_>> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<10}"),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, Style::default().fg(palette.text)),
            ])
        })
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let popup = centered(area, 50, KEYS.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.card))
            .title(" Keys "),
    );
    frame.render_widget(help, popup);
}

/// Start/pause hint followed by `rest`.
fn controls_line<'a>(running: bool, rest: &'a str, palette: &Palette, start: Color) -> Line<'a> {
    let (label, color) = if running {
        ("[Space] Pause", palette.stop)
    } else {
        ("[Space] Start", start)
    };
    Line::from(vec![
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(rest, Style::default().fg(palette.muted)),
    ])
}

/// Stack `header`, the time and `footer`, using the big font when it fits.
fn compose<'a>(
    header: Vec<Line<'a>>,
    time: &str,
    time_style: Style,
    footer: Vec<Line<'a>>,
    area: Rect,
) -> Vec<Line<'a>> {
    let big = big_text(time);
    let big_width = big.first().map_or(0, |row| row.chars().count());
    let fits = usize::from(area.height) >= header.len() + footer.len() + BIG_HEIGHT
        && usize::from(area.width) >= big_width;

    let mut lines = header;
    if fits {
        lines.extend(big.into_iter().map(|row| Line::styled(row, time_style)));
    } else {
        lines.push(Line::styled(time.to_string(), time_style));
    }
    lines.extend(footer);
    lines
}

/// Render lines centered both ways in `area`.
fn render_centered(frame: &mut Frame<'_>, mut lines: Vec<Line<'_>>, area: Rect) {
    let used = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let pad = area.height.saturating_sub(used) / 2;
    let mut padded = vec![Line::default(); usize::from(pad)];
    padded.append(&mut lines);

    frame.render_widget(Paragraph::new(padded).alignment(Alignment::Center), area);
}

/// Block digits, five rows tall.
const fn glyph(c: char) -> [&'static str; BIG_HEIGHT] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}

fn big_text(text: &str) -> Vec<String> {
    (0..BIG_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{Appearance, BackgroundKind};
    use crate::controller::Controller;
    use crate::notify::SilentNotifier;
    use crate::timer::PomodoroTimer;
    use crate::tui::app::SettingsEditor;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with(appearance: Appearance) -> App {
        App::new(Controller::new(
            PomodoroTimer::default(),
            appearance,
            Box::new(SilentNotifier),
        ))
    }

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_pomodoro() {
        let app = app_with(Appearance::default());
        let screen = text(&draw(&app, 80, 30));

        assert!(screen.contains("Focus Timer"));
        assert!(screen.contains("Pomodoro"));
        assert!(screen.contains("Stopwatch"));
        assert!(screen.contains("1 Work"));
        assert!(screen.contains("Session 1 • Focus Time"));
        assert!(screen.contains("[Space] Start"));
    }

    #[test]
    fn test_render_small_terminal_uses_plain_digits() {
        let app = app_with(Appearance::default());
        let screen = text(&draw(&app, 60, 14));
        assert!(screen.contains("25:00"));
    }

    #[test]
    fn test_render_fullscreen_running_hides_chrome() {
        let mut app = app_with(Appearance::default());
        app.controller.toggle_fullscreen();
        app.controller.toggle_running();

        let screen = text(&draw(&app, 80, 30));
        assert!(!screen.contains("Stopwatch"));
        assert!(!screen.contains("Focus Timer"));
        assert!(screen.contains("Focus Time"));
    }

    #[test]
    fn test_render_fullscreen_paused_keeps_chrome() {
        let mut app = app_with(Appearance::default());
        app.controller.toggle_fullscreen();

        let screen = text(&draw(&app, 80, 30));
        assert!(screen.contains("Stopwatch"));
    }

    #[test]
    fn test_render_clock_tab() {
        let mut app = app_with(Appearance::default());
        app.controller.select_tab(Tab::Clock);

        let screen = text(&draw(&app, 80, 30));
        assert!(screen.contains("Quick Focus"));
        assert!(screen.contains("[1] 5m"));
        assert!(screen.contains("[3] 25m"));
    }

    #[test]
    fn test_render_stopwatch_tab() {
        let mut app = app_with(Appearance::default());
        app.controller.select_tab(Tab::Stopwatch);

        let screen = text(&draw(&app, 60, 12));
        assert!(screen.contains("00:00"));
        assert!(screen.contains("Stop & Reset"));
    }

    #[test]
    fn test_render_settings_and_help() {
        let mut app = app_with(Appearance::default());
        app.settings = Some(SettingsEditor {
            selected: SettingKey::ShortBreak,
            input: "7".to_string(),
        });
        let screen = text(&draw(&app, 80, 30));
        assert!(screen.contains("Timer Settings"));
        assert!(screen.contains("> Short Break"));
        assert!(screen.contains("7_"));

        app.settings = None;
        app.show_help = true;
        let screen = text(&draw(&app, 80, 30));
        assert!(screen.contains("Keys"));
        assert!(screen.contains("next / previous background"));
        assert!(screen.contains("custom: add / remove color"));
    }

    #[test]
    fn test_background_is_painted() {
        let app = app_with(Appearance::new(false, false, 1));
        let buffer = draw(&app, 80, 30);
        assert_eq!(buffer[(0, 0)].bg, Color::Rgb(0, 0, 0));

        let app = app_with(Appearance::default());
        let buffer = draw(&app, 80, 30);
        assert_eq!(buffer[(0, 0)].bg, Color::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_custom_background_is_painted() {
        let custom = Background::custom(
            BackgroundKind::Gradient,
            vec![Rgb(0, 0, 0), Rgb(0xFF, 0xFF, 0xFF)],
            180,
        )
        .unwrap();
        let mut appearance = Appearance::default().with_custom(custom);
        appearance.select_custom();

        let buffer = draw(&app_with(appearance), 80, 30);
        assert_eq!(buffer[(0, 0)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buffer[(79, 29)].bg, Color::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn test_dark_card() {
        let app = app_with(Appearance::new(true, false, 0));
        let buffer = draw(&app, 80, 30);
        assert_eq!(buffer[(40, 15)].bg, Palette::dark().card);
        assert!(text(&buffer).contains("dark · "));
    }

    #[test]
    fn test_big_text() {
        let rows = big_text("10:05");
        assert_eq!(rows.len(), BIG_HEIGHT);
        assert_eq!(rows[0], " █  ███   ███ ███");
        assert!(rows.iter().all(|row| row.chars().count() == 17));
    }
}
