use std::sync::Arc;

use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, LineBreaking},
    RoundedRectRadii, Widget, WidgetExt,
};
use nova_core::catalog::Game;

use crate::{
    cmd,
    ui::{theme, utils},
    widget::{icons, Empty, MyWidgetExt, Thumbnail},
};

pub fn game_widget() -> impl Widget<Arc<Game>> {
    let thumbnail = Thumbnail::new(utils::placeholder_widget(), |game: &Arc<Game>, _| {
        if game.thumbnail.is_empty() {
            None
        } else {
            Some(game.thumbnail.clone())
        }
    })
    .fix_size(theme::grid(20.0), theme::grid(11.25));

    let title = Label::dynamic(|game: &Arc<Game>, _| game.title.to_string())
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::Clip);

    let featured = Either::new(
        |game: &Arc<Game>, _| game.is_featured,
        Label::new("FEATURED")
            .with_text_size(theme::TEXT_SIZE_SMALL)
            .with_text_color(theme::AMBER),
        Empty,
    );

    let category = Label::dynamic(|game: &Arc<Game>, _| game.category.to_string())
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR);

    let description = Label::dynamic(|game: &Arc<Game>, _| game.description.to_string())
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .with_line_break_mode(LineBreaking::WordWrap);

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(
            Flex::row()
                .with_child(title)
                .with_default_spacer()
                .with_child(featured),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(category)
        .with_spacer(theme::grid(0.5))
        .with_child(description);

    let play = icons::PLAY.scale((theme::grid(3.0), theme::grid(3.0)));

    Flex::row()
        .with_child(thumbnail)
        .with_default_spacer()
        .with_flex_child(info, 1.0)
        .with_default_spacer()
        .with_child(play)
        .padding(theme::grid(1.0))
        .link()
        .rounded(RoundedRectRadii::from(theme::grid(1.0)))
        .on_click(|ctx, game, _| {
            ctx.submit_command(cmd::PLAY_GAME.with(game.clone()));
        })
}
