use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::state::data::User;

/// Width of a single card in the grid
const CARD_WIDTH: f32 = 280.0;

/// Build the card for one user record.
///
/// Shows the same fields the directory has always shown: name, handle,
/// email, city, company, phone and website. The card emits no messages,
/// so it is generic over the application message type.
pub fn user_card<'a, Message: 'a>(user: &'a User) -> Element<'a, Message> {
    let header = column![
        text(&user.name).size(20),
        text(format!("@{}", user.username)).size(13),
    ]
    .spacing(2);

    let details = column![
        text(&user.email).size(14),
        text(&user.address.city).size(14),
        text(&user.company.name).size(14),
        text(&user.phone).size(14),
        text(&user.website).size(14),
    ]
    .spacing(4);

    container(column![header, details].spacing(12))
        .width(Length::Fixed(CARD_WIDTH))
        .padding(16)
        .style(container::rounded_box)
        .into()
}
