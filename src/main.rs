mod app;
mod components;
mod diagnosis;
mod pages;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
