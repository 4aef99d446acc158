use clap::Parser;
use iced::widget::canvas::Canvas;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, stack, Space};
use iced::{keyboard, time, window};
use iced::{Color, ContentFit, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

mod cli;
mod clock;
mod config;
mod error;
mod logging;
mod photo;
mod ui;

use clock::{HiraganaClock, TimePoint};
use config::Config;
use error::AppError;
use photo::{PhotoRotator, Surface};
use ui::OutlinedText;

/// How often the current photo is written to the log
const STATUS_INTERVAL: Duration = Duration::from_secs(300);

/// Main application state
struct HiraganaWatch {
    config: Config,
    clock: HiraganaClock,
    /// None when the slideshow is disabled
    slideshow: Option<PhotoRotator>,
    /// Last composited photo frame, rebuilt only when the rotator changes it
    frame: Option<Handle>,
    /// Date and time sentences, or an error message if formatting failed
    phrases: Vec<String>,
    fullscreen: bool,
    last_status: Instant,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Render tick from the timer subscription
    Tick,
    /// Escape or Ctrl+C
    Quit,
    /// Alt+Enter
    ToggleFullscreen,
}

impl HiraganaWatch {
    fn new(config: Config) -> (Self, Task<Message>) {
        let surface = Surface::new(config.display.width, config.display.height);

        let slideshow = config
            .slideshow
            .enabled
            .then(|| PhotoRotator::new(&config.slideshow, surface));
        let frame = slideshow.as_ref().map(frame_handle);

        let fullscreen = config.display.fullscreen;
        let mut watch = HiraganaWatch {
            config,
            clock: HiraganaClock::new(),
            slideshow,
            frame,
            phrases: Vec::new(),
            fullscreen,
            last_status: Instant::now(),
        };
        watch.refresh_phrases();

        log::info!(
            "🕰️  Hiragana clock started ({}x{}, slideshow {})",
            surface.width,
            surface.height,
            if watch.slideshow.is_some() { "on" } else { "off" }
        );

        let task = if fullscreen {
            set_window_mode(window::Mode::Fullscreen)
        } else {
            Task::none()
        };
        (watch, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                let now = Instant::now();
                self.refresh_phrases();

                if let Some(rotator) = &mut self.slideshow {
                    if rotator.update(now) {
                        self.frame = Some(frame_handle(rotator));
                    }
                }

                if now.saturating_duration_since(self.last_status) >= STATUS_INTERVAL {
                    self.log_status();
                    self.last_status = now;
                }

                Task::none()
            }
            Message::Quit => {
                log::info!("👋 Quit requested");
                iced::exit()
            }
            Message::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                let mode = if self.fullscreen {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                set_window_mode(mode)
            }
        }
    }

    /// Re-read the wall clock and rebuild both sentences
    fn refresh_phrases(&mut self) {
        let at = TimePoint::from_datetime(&chrono::Local::now());
        match self.clock.phrases(&at) {
            Ok((date, time)) => {
                let phrases = [date, time];
                for (old, new) in self.phrases.iter().zip(&phrases) {
                    if old != new.as_str() {
                        log::debug!("{:?} phrase: {}", new.kind(), new);
                    }
                }
                self.phrases = phrases.iter().map(|p| p.as_str().to_owned()).collect();
            }
            Err(e) => {
                // Unreachable for a real clock reading
                log::error!("❌ Failed to format {:?}: {}", at, e);
                self.phrases = vec![e.to_string()];
            }
        }
    }

    fn log_status(&self) {
        let Some(rotator) = &self.slideshow else {
            return;
        };
        let catalogue = rotator.catalogue();
        if catalogue.is_empty() {
            log::warn!("⚠️  No photos in {}", catalogue.root().display());
            return;
        }
        match rotator.current_path() {
            Some(path) => log::info!(
                "Current photo: {} ({} in catalogue)",
                path.display(),
                catalogue.len()
            ),
            None => log::warn!("⚠️  No current photo"),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let background: Element<Message> = match &self.frame {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            None => Space::new(Length::Fill, Length::Fill).into(),
        };

        let program = OutlinedText::new(
            self.phrases.clone(),
            self.config.text.wrap,
            self.config.text.outline,
        );
        let text = Canvas::new(program).width(Length::Fill).height(Length::Fill);

        container(stack![background, text])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Color::BLACK.into()),
                ..container::Style::default()
            })
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            time::every(self.config.render.tick_interval()).map(|_| Message::Tick),
            keyboard::on_key_press(handle_key),
        ])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn handle_key(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;
    use keyboard::Key;

    match key.as_ref() {
        Key::Named(Named::Escape) => Some(Message::Quit),
        Key::Named(Named::Enter) if modifiers.alt() => Some(Message::ToggleFullscreen),
        Key::Character("c") if modifiers.control() => Some(Message::Quit),
        _ => None,
    }
}

fn set_window_mode(mode: window::Mode) -> Task<Message> {
    window::get_latest().and_then(move |id| window::change_mode(id, mode))
}

/// Composite the rotator's layers and hand the pixels to iced
fn frame_handle(rotator: &PhotoRotator) -> Handle {
    let frame = rotator.render_frame();
    Handle::from_rgba(frame.width(), frame.height(), frame.into_raw())
}

fn main() -> Result<(), AppError> {
    let cli = cli::Cli::parse();

    logging::init_logging(logging::LoggingConfig {
        env_filter: cli.log.clone(),
        ..logging::LoggingConfig::default()
    });

    let config = cli.load_config()?;
    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let size = iced::Size::new(config.display.width as f32, config.display.height as f32);

    iced::application("Japanese Watch", HiraganaWatch::update, HiraganaWatch::view)
        .subscription(HiraganaWatch::subscription)
        .theme(HiraganaWatch::theme)
        .window_size(size)
        .centered()
        .run_with(move || HiraganaWatch::new(config))?;

    Ok(())
}
