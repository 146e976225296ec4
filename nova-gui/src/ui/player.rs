use druid::{
    widget::{CrossAxisAlignment, Flex, Label},
    Color, RoundedRectRadii, Widget, WidgetExt, WindowState,
};
use nova_core::embed::EmbedRequest;

use crate::{
    cmd,
    data::AppState,
    ui::{theme, utils},
    widget::{icons, EmbedHost, MyWidgetExt, Thumbnail},
};

pub fn player_widget() -> impl Widget<AppState> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(header_widget())
        .with_flex_child(embed_widget(), 1.0)
        .background(theme::BLACK)
}

fn header_widget() -> impl Widget<AppState> {
    let back = Flex::row()
        .with_child(icons::BACK.scale((theme::grid(2.5), theme::grid(2.5))))
        .with_default_spacer()
        .with_child(Label::new("Back to Games").with_font(theme::UI_FONT_MEDIUM))
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(0.5)))
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::NAVIGATE_HOME);
        });

    let title = Label::dynamic(|state: &AppState, _| state.route.title())
        .with_font(theme::UI_FONT_MEDIUM)
        .center();

    let reload = icons::RELOAD
        .scale((theme::grid(2.5), theme::grid(2.5)))
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(0.5)))
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::RELOAD_APP);
        });

    let fullscreen = Flex::row()
        .with_child(icons::FULLSCREEN.scale((theme::grid(2.5), theme::grid(2.5))))
        .with_default_spacer()
        .with_child(Label::new("Fullscreen"))
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(0.5)))
        .on_click(|ctx, _, _| {
            ctx.window().clone().set_window_state(WindowState::Maximized);
        });

    Flex::row()
        .with_child(back)
        .with_default_spacer()
        .with_flex_child(title, 1.0)
        .with_default_spacer()
        .with_child(reload)
        .with_default_spacer()
        .with_child(fullscreen)
        .padding(theme::grid(1.0))
        .background(theme::SLATE_900)
}

fn embed_widget() -> impl Widget<AppState> {
    EmbedHost::new(surface_widget(), overlay_widget(), |state: &AppState, _| {
        state
            .playing()
            .map(|game| EmbedRequest::new(game.iframe_url.clone()))
    })
}

fn surface_widget() -> impl Widget<AppState> {
    Thumbnail::new(utils::placeholder_widget(), |state: &AppState, _| {
        state.playing().and_then(|game| {
            if game.thumbnail.is_empty() {
                None
            } else {
                Some(game.thumbnail.clone())
            }
        })
    })
    .expand()
}

fn overlay_widget() -> impl Widget<AppState> {
    Flex::column()
        .with_child(utils::spinner_widget())
        .with_default_spacer()
        .with_child(Label::dynamic(|state: &AppState, _| {
            match state.playing() {
                Some(game) => format!("Loading {}...", game.title),
                None => "Loading...".to_string(),
            }
        }))
        .center()
        .background(Color::rgba(0.0, 0.0, 0.0, 0.6))
}
