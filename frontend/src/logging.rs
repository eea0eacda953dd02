use log::Level;

/// Route `log` output and panics to the browser console. Safe to call twice.
pub fn init_logging() {
    let _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
}
