use std::sync::Arc;

use poem::{
    handler,
    web::{Data, Html},
};

use crate::domain::models::User;

pub mod render;

#[handler]
pub fn index(Data(owner): Data<&Arc<User>>) -> Html<String> {
    Html(render::index(owner))
}

#[handler]
pub fn hobbies(Data(owner): Data<&Arc<User>>) -> Html<String> {
    Html(render::hobbies(owner))
}

#[handler]
pub fn places(Data(owner): Data<&Arc<User>>) -> Html<String> {
    Html(render::places(owner))
}

#[handler]
pub fn timeline() -> Html<String> {
    Html(render::timeline())
}
