use druid::{
    widget::{CrossAxisAlignment, Flex, Label, ViewSwitcher},
    RoundedRectRadii, Widget, WidgetExt, WindowDesc,
};

use crate::{
    cmd,
    controller::{CatalogController, NavController},
    data::{AppState, Config, Nav},
    widget::MyWidgetExt,
};

pub mod browse;
pub mod card;
pub mod player;
pub mod theme;
pub mod utils;

pub fn main_window(config: &Config) -> WindowDesc<AppState> {
    WindowDesc::new(root_widget())
        .title("Nova Arcade")
        .window_size(config.window_size)
}

fn root_widget() -> impl Widget<AppState> {
    ViewSwitcher::new(
        |state: &AppState, _| state.route.clone(),
        |route, _, _| match route {
            Nav::Browse => Flex::column()
                .cross_axis_alignment(CrossAxisAlignment::Fill)
                .with_child(topbar_widget())
                .with_flex_child(browse::browse_widget(), 1.0)
                .boxed(),
            Nav::Playing(_) => player::player_widget().boxed(),
        },
    )
    .controller(NavController)
    .controller(CatalogController)
}

fn topbar_widget() -> impl Widget<AppState> {
    let logo = Label::new("N")
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_color(theme::WHITE)
        .center()
        .fix_size(theme::grid(4.0), theme::grid(4.0))
        .background(theme::INDIGO)
        .rounded(RoundedRectRadii::from(theme::grid(1.0)));

    let brand = Flex::row()
        .with_child(logo)
        .with_default_spacer()
        .with_child(Label::new("NOVA ARCADE").with_font(theme::UI_FONT_MEDIUM))
        .padding(theme::grid(0.5))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(0.5)))
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::NAVIGATE_HOME);
        });

    let games = Label::new("Games")
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(0.5)))
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::NAVIGATE_HOME);
        });

    Flex::row()
        .with_child(brand)
        .with_flex_spacer(1.0)
        .with_child(games)
        .padding(theme::grid(1.0))
        .background(theme::SLATE_900)
}
