use clap::Parser;
use gpui::*;
use tracing::{error, info, warn};

mod app;
mod audio;
mod config;
mod notifications;
mod state;
mod theme;
mod timer;
mod ui;

use app::{CountdownApp, QuitApp, ResetTimer, ToggleTimer};
use audio::AudioService;
use config::{Cli, TimerConfig};
use timer::Timer;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("negative_timer={}", cli.log_level()))
        .init();

    let config = match TimerConfig::load(&cli.config) {
        Ok(cfg) => {
            info!(
                "Loaded {}: start={}s limit={}s",
                cli.config.display(),
                cfg.start_seconds,
                cfg.limit_seconds
            );
            cfg
        }
        Err(e) => {
            warn!("{:#}. Using defaults.", e);
            notifications::notify_config_fallback(&cli.config);
            TimerConfig::default()
        }
    };

    let (audio, cue_rx) = audio::channel();
    if let Err(e) = AudioService::new(cue_rx).spawn() {
        error!("{:#}", e);
    }

    Application::new().run(move |cx| {
        cx.bind_keys([
            KeyBinding::new("cmd-q", QuitApp, None),
            KeyBinding::new("space", ToggleTimer, None),
            KeyBinding::new("r", ResetTimer, None),
            KeyBinding::new("escape", ResetTimer, None),
        ]);

        let window_size = size(px(400.0), px(300.0));
        let centered_bounds = Bounds::centered(None, window_size, cx);

        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(centered_bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Negative Countdown Timer".into()),
                    ..Default::default()
                }),
                focus: true,
                show: true,
                app_id: Some("negative-timer".to_string()),
                ..Default::default()
            },
            |_window, cx| {
                let timer = Timer::new(config.clone(), audio.clone());
                cx.new(|cx| CountdownApp::new(timer, cx))
            },
        )
        .expect("Failed to open window");
    });
}
