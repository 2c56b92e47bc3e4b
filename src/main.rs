mod app_config;
mod boot;
mod dom;
mod stage;

fn main() {
    console_error_panic_hook::set_once();
    boot::run();
}
