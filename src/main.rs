mod app;
mod bridge;
mod components;
mod format;
mod list_view;
mod models;
mod pages;
mod promo;
mod storage;
mod youtube;

use app::App;

fn main() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
