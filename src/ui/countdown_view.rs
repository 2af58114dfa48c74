use gpui::*;
use gpui::prelude::*;
use crate::app::CountdownApp;
use crate::state::TimerState;
use crate::theme::Theme;

pub struct CountdownView {
    display: String,
    is_negative: bool,
    start_label: String,
    show_start_button: bool,
    theme: Theme,
    view: Entity<CountdownApp>,
}

impl CountdownView {
    pub fn new(state: &TimerState, theme: Theme, view: Entity<CountdownApp>) -> Self {
        Self {
            display: state.format_time(),
            is_negative: state.is_negative(),
            start_label: state.phase.button_label().to_string(),
            show_start_button: state.shows_start_button(),
            theme,
            view,
        }
    }

    fn render_display(&self) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(60.0))
            .font_weight(FontWeight::BOLD)
            .text_color(self.theme.display_color(self.is_negative))
            .child(self.display.clone())
    }

    fn render_button(&self, label: &str) -> Div {
        div()
            .flex()
            .flex_1()
            .items_center()
            .justify_center()
            .min_h(px(40.0))
            .rounded(px(6.0))
            .bg(self.theme.button)
            .text_color(self.theme.button_foreground)
            .font_weight(FontWeight::MEDIUM)
            .cursor_pointer()
            .hover(|style| style.opacity(0.8))
            .child(label.to_string())
    }

    fn render_start_pause_button(&self) -> impl IntoElement {
        let view = self.view.clone();

        self.render_button(&self.start_label)
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                cx.update_entity(&view, |app, cx| {
                    app.handle_toggle(cx);
                });
            })
    }

    fn render_reset_button(&self) -> impl IntoElement {
        let view = self.view.clone();

        self.render_button("Reset")
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                cx.update_entity(&view, |app, cx| {
                    app.handle_reset(cx);
                });
            })
    }
}

impl IntoElement for CountdownView {
    type Element = Div;

    fn into_element(self) -> Self::Element {
        div()
            .w_full()
            .h_full()
            .flex()
            .flex_col()
            .justify_center()
            .gap_6()
            .p_4()
            .bg(self.theme.background)
            .child(self.render_display())
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    // Hidden once the limit is hit, until the next reset
                    .when(self.show_start_button, |div| {
                        div.child(self.render_start_pause_button())
                    })
                    .child(self.render_reset_button()),
            )
    }
}
