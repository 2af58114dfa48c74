use gpui::*;
use std::time::Duration;
use tracing::debug;

use crate::notifications;
use crate::state::TimerEvent;
use crate::theme::{Theme, ThemeMode};
use crate::timer::Timer;
use crate::ui::CountdownView;

actions!(negative_timer, [ToggleTimer, ResetTimer, QuitApp]);

const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct CountdownApp {
    timer: Timer,
    // Dropping the task stops the ticks.
    tick_task: Option<Task<()>>,
    focus_handle: FocusHandle,
}

impl CountdownApp {
    pub fn new(timer: Timer, cx: &mut Context<'_, Self>) -> Self {
        Self {
            timer,
            tick_task: None,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn handle_toggle(&mut self, cx: &mut Context<'_, Self>) {
        let phase = self.timer.toggle();
        if phase.is_running() {
            // Restarted on every start so the first tick is a full interval away
            self.tick_task = Some(self.spawn_ticks(cx));
        } else {
            self.tick_task = None;
        }
        cx.notify();
    }

    pub fn handle_reset(&mut self, cx: &mut Context<'_, Self>) {
        self.tick_task = None;
        self.timer.reset();
        cx.notify();
    }

    /// Returns whether the timer is still running.
    fn handle_tick(&mut self, cx: &mut Context<'_, Self>) -> bool {
        let events = self.timer.tick();

        if events.contains(&TimerEvent::LimitReached) {
            let display = self.timer.state().format_time();
            cx.background_spawn(async move {
                notifications::notify_limit_reached(&display);
            })
            .detach();
        }

        cx.notify();
        self.timer.state().phase.is_running()
    }

    fn spawn_ticks(&self, cx: &mut Context<'_, Self>) -> Task<()> {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_spawn(async {
                    std::thread::sleep(TICK_INTERVAL);
                })
                .await;

                match this.update(cx, |app, cx| app.handle_tick(cx)) {
                    Ok(true) => {}
                    Ok(false) => {
                        debug!("Tick loop finished");
                        break;
                    }
                    Err(_) => break,
                }
            }
        })
    }
}

impl Render for CountdownApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        self.focus_handle.focus(window);

        let theme = Theme::from_mode(ThemeMode::from_appearance(window.appearance()));
        let view = CountdownView::new(self.timer.state(), theme, cx.entity().clone());

        div()
            .w_full()
            .h_full()
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(|app, _: &ToggleTimer, _window, cx| {
                app.handle_toggle(cx);
            }))
            .on_action(cx.listener(|app, _: &ResetTimer, _window, cx| {
                app.handle_reset(cx);
            }))
            .on_action(|_: &QuitApp, _window, cx| {
                cx.quit();
            })
            .child(view)
    }
}
