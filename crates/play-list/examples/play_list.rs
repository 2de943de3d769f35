use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use play_list::crossterm_input::input_event_from_crossterm;
use play_list::help::HelpBar;
use play_list::help::HelpBarOptions;
use play_list::keymap::Binding;
use play_list::keymap::key_char;
use play_list::play_list::PlayList;
use play_list::play_list::PlayListAction;
use play_list::slide::Slide;
use play_list::theme::Theme;
use play_list::variant::SlideVariant;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Span;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const LOREM: &str = "Slides hold a short kicker, a title, and a body that scrolls when it does not fit. \
Use the arrow keys or h/l to move between slides, g/G to jump to the ends, and j/k to scroll.\n\n\
Click a dot to jump to its slide, or click an arrow. With wrap enabled, moving past the last \
slide returns to the first.";

fn main() -> io::Result<()> {
    init_logging()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let mut list = PlayList::from_slides([
        Slide::new("week 1", "Welcome to the course").with_body(LOREM),
        Slide::new("week 2", "Terminal layouts")
            .with_body("Layouts split an area into rows and columns.")
            .with_variant(SlideVariant::Blue),
        Slide::new("week 3", "Handling input")
            .with_body(&LOREM.repeat(4))
            .with_variant(SlideVariant::Orange),
        Slide::new("week 4", "Wrapping up").with_variant(SlideVariant::Green),
    ]);

    let res = run(&mut terminal, &theme, &mut list);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

/// Logs go to the file named by `PLAY_LIST_LOG`, since the terminal is busy drawing.
fn init_logging() -> io::Result<()> {
    let Some(path) = std::env::var_os("PLAY_LIST_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("play_list=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    list: &mut PlayList,
) -> io::Result<()> {
    let mut help_bindings = list.help_bindings();
    help_bindings.push(Binding::new("w", "toggle wrap", vec![key_char('w')]));
    help_bindings.push(Binding::new("q", "quit", vec![key_char('q')]));
    let help = HelpBar::with_options(
        help_bindings,
        HelpBarOptions {
            style: Style::default().dark_gray(),
            key_style: Style::default().blue(),
            ..Default::default()
        },
    );

    loop {
        terminal.draw(|f| {
            let [main, status, help_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .areas(f.area());

            let buf = f.buffer_mut();
            list.render(main, buf, theme);

            let wrap = if list.wrap() { "wrap" } else { "clamp" };
            let status_line = format!("{}  ({wrap})", list.status_line());
            buf.set_span(status.x, status.y, &Span::raw(status_line), status.width);
            help.render_ref(help_area, buf);
        })?;

        if !crossterm::event::poll(Duration::from_millis(100))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('w') => {
                        list.set_wrap(!list.wrap());
                        continue;
                    }
                    _ => {}
                }
            }
        }

        if let Some(input) = input_event_from_crossterm(ev) {
            match list.handle_event(input) {
                PlayListAction::IndexChanged(index) => {
                    tracing::info!(index, "showing slide");
                }
                PlayListAction::Redraw | PlayListAction::None => {}
            }
        }
    }
}
