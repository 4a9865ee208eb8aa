//! Root view: params panel on the left, article filling the rest

use crate::app::{ArticleApp, Message};
use article_ui::article_view;
use iced::{
    widget::{container, row},
    Element, Length,
};

pub fn main_view(app: &ArticleApp) -> Element<'_, Message> {
    let panel = app.form.view().map(Message::Form);
    let article: Element<Message> = article_view(&app.applied);

    container(row![panel, article])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
