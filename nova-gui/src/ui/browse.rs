use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, List, Painter, Scroll, TextBox},
    Insets, RenderContext, Widget, WidgetExt,
};
use nova_core::catalog::Category;

use crate::{
    cmd,
    controller::InputController,
    data::AppState,
    ui::{card, theme, utils},
    widget::icons,
};

pub fn browse_widget() -> impl Widget<AppState> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(search_widget().padding(Insets::new(
            theme::grid(2.0),
            theme::grid(2.0),
            theme::grid(2.0),
            theme::grid(1.0),
        )))
        .with_child(categories_widget().padding(Insets::new(
            theme::grid(2.0),
            0.0,
            theme::grid(2.0),
            theme::grid(1.0),
        )))
        .with_flex_child(catalog_widget(), 1.0)
}

fn search_widget() -> impl Widget<AppState> {
    let icon = icons::SEARCH.scale((theme::grid(2.0), theme::grid(2.0)));
    let input = TextBox::new()
        .with_placeholder("Search for a game...")
        .controller(InputController::new())
        .expand_width()
        .lens(AppState::query);
    Flex::row()
        .with_child(icon)
        .with_default_spacer()
        .with_flex_child(input, 1.0)
}

fn categories_widget() -> impl Widget<AppState> {
    let mut row = Flex::row().with_child(category_widget(None));
    for category in Category::all() {
        row = row
            .with_default_spacer()
            .with_child(category_widget(Some(category)));
    }
    row
}

fn category_widget(category: Option<Category>) -> impl Widget<AppState> {
    let name = category.map_or_else(|| "All".to_string(), |c| c.to_string());
    Label::new(name)
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .padding(Insets::uniform_xy(theme::grid(1.5), theme::grid(0.5)))
        .background(Painter::new(move |ctx, state: &AppState, env| {
            let bounds = ctx.size().to_rect().to_rounded_rect(theme::grid(2.0));
            if state.category == category {
                ctx.fill(bounds, &theme::INDIGO);
            } else if ctx.is_hot() {
                ctx.fill(bounds, &env.get(theme::LINK_HOT_COLOR));
            } else {
                ctx.fill(bounds, &env.get(theme::BACKGROUND_LIGHT));
            }
        }))
        .on_click(move |ctx, _, _| {
            ctx.submit_command(cmd::SET_CATEGORY.with(category));
        })
}

fn catalog_widget() -> impl Widget<AppState> {
    Either::new(
        |state: &AppState, _| !state.catalog.is_resolved(),
        utils::spinner_widget(),
        games_widget(),
    )
}

fn games_widget() -> impl Widget<AppState> {
    Either::new(
        |state: &AppState, _| state.visible_games().is_empty(),
        empty_widget(),
        Scroll::new(
            List::new(card::game_widget)
                .with_spacing(theme::grid(1.0))
                .padding(theme::grid(2.0))
                .lens(druid::lens::Map::new(
                    |state: &AppState| state.visible_games(),
                    |_, _| {},
                )),
        )
        .vertical(),
    )
}

fn empty_widget() -> impl Widget<AppState> {
    let icon = icons::SAD_FACE
        .scale((theme::grid(6.0), theme::grid(6.0)))
        .with_color(theme::PLACEHOLDER_COLOR);
    Flex::column()
        .with_child(icon)
        .with_default_spacer()
        .with_child(Label::new("No games found").with_font(theme::UI_FONT_MEDIUM))
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::new("Try a different search term or category.")
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::PLACEHOLDER_COLOR),
        )
        .padding((0.0, theme::grid(6.0)))
        .center()
}
