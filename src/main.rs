mod contact_form;
mod dom;
mod exports;
mod guide;
mod guide_loader;
mod mobile_menu;
mod nav;
mod notify;
mod observer;
mod page;
mod reveal;
mod runtime;
mod settings;

fn main() {
    console_error_panic_hook::set_once();
    runtime::start_when_ready();
}
